//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::components::session_provider::SessionProvider;
use crate::components::toast::ToastHost;
use crate::pages::{
    account::AccountPage, admin::AdminPage, applications::ApplicationsPage,
    employer::EmployerDashboardPage, job_detail::JobDetailPage, jobs::JobsPage, login::LoginPage,
    register::RegisterPage, saved::SavedJobsPage,
};
use crate::state::{saved::SavedJobsState, ui::ToastState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the non-session shared state contexts and sets up client-side
/// routing. The session itself is provided by `SessionProvider`, which must
/// live inside the `Router` because its guard adapter reads the location.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let toasts = RwSignal::new(ToastState::default());
    let saved = RwSignal::new(SavedJobsState::default());

    provide_context(toasts);
    provide_context(saved);

    view! {
        <Stylesheet id="leptos" href="/pkg/jobdeck.css"/>
        <Title text="JobDeck"/>

        <Router>
            <SessionProvider>
                <NavBar/>
                <ToastHost/>
                <main class="app-main">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=JobsPage/>
                        <Route path=(StaticSegment("jobs"), ParamSegment("id")) view=JobDetailPage/>
                        <Route path=(StaticSegment("auth"), StaticSegment("login")) view=LoginPage/>
                        <Route path=(StaticSegment("auth"), StaticSegment("register")) view=RegisterPage/>
                        <Route path=(StaticSegment("app"), StaticSegment("applications")) view=ApplicationsPage/>
                        <Route path=(StaticSegment("app"), StaticSegment("saved")) view=SavedJobsPage/>
                        <Route path=StaticSegment("dashboard") view=AccountPage/>
                        <Route path=(StaticSegment("employer"), StaticSegment("dashboard")) view=EmployerDashboardPage/>
                        <Route path=StaticSegment("admin") view=AdminPage/>
                    </Routes>
                </main>
            </SessionProvider>
        </Router>
    }
}

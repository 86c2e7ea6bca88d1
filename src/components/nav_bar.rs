//! Top navigation bar with auth-aware links and sign-out.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::Role;
use crate::state::session::SessionHandle;

/// Navigation bar shown on every page once the session is initialized.
#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let navigate = use_navigate();

    let on_sign_out = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                // Best effort: the cookie may already be gone server-side.
                if let Err(e) = crate::net::api::logout().await {
                    leptos::logging::warn!("logout request failed: {e}");
                }
                session.clear();
                navigate("/", NavigateOptions::default());
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &navigate;
        }
    };

    let role_links = move || match session.get().role() {
        Some(Role::JobSeeker) => view! {
            <a class="nav-bar__link" href="/app/saved">"Saved"</a>
            <a class="nav-bar__link" href="/app/applications">"Applications"</a>
        }
        .into_any(),
        Some(Role::Employer) => view! {
            <a class="nav-bar__link" href="/employer/dashboard">"Dashboard"</a>
        }
        .into_any(),
        Some(Role::Admin) => view! {
            <a class="nav-bar__link" href="/admin">"Admin"</a>
        }
        .into_any(),
        Some(Role::Unknown) => view! {
            <a class="nav-bar__link" href="/dashboard">"Account"</a>
        }
        .into_any(),
        None => ().into_any(),
    };

    let account_area = move || {
        let state = session.get();
        if let Some(user) = state.user() {
            view! {
                <span class="nav-bar__user">{user.name.clone()}</span>
                <button class="btn nav-bar__sign-out" on:click=on_sign_out.clone()>
                    "Sign out"
                </button>
            }
            .into_any()
        } else {
            view! {
                <a class="nav-bar__link" href="/auth/login">"Sign in"</a>
                <a class="nav-bar__link" href="/auth/register">"Register"</a>
            }
            .into_any()
        }
    };

    view! {
        <nav class="nav-bar">
            <a class="nav-bar__brand" href="/">"JobDeck"</a>
            <a class="nav-bar__link" href="/">"Jobs"</a>
            {role_links}
            <span class="nav-bar__spacer"></span>
            {account_area}
        </nav>
    }
}

//! Generic account landing page (`/dashboard`).

use leptos::prelude::*;

use crate::net::types::Role;
use crate::state::session::SessionHandle;

/// Landing page for any signed-in user; also the fallback destination for
/// accounts whose role the client does not recognize.
#[component]
pub fn AccountPage() -> impl IntoView {
    let session = expect_context::<SessionHandle>();

    view! {
        <div class="account-page">
            {move || {
                session.get().user().map(|user| {
                    let area_link = match user.role {
                        Role::JobSeeker => Some(("/app/applications", "My applications")),
                        Role::Employer => Some(("/employer/dashboard", "Employer dashboard")),
                        Role::Admin => Some(("/admin", "Admin overview")),
                        Role::Unknown => None,
                    };
                    view! {
                        <h1>{format!("Hello, {}", user.name)}</h1>
                        <dl class="account-page__details">
                            <dt>"Email"</dt>
                            <dd>{user.email.clone()}</dd>
                            <dt>"Account type"</dt>
                            <dd>{user.role.label()}</dd>
                        </dl>
                        {area_link.map(|(href, label)| view! {
                            <a class="btn btn--primary" href=href>{label}</a>
                        })}
                    }
                })
            }}
        </div>
    }
}

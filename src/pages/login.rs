//! Sign-in page.
//!
//! On success the session is populated and the user is sent to the
//! validated `redirectTo` target when one is present, otherwise to their
//! role's landing page. The guard bounces already-authenticated visitors
//! away before this form is ever useful to them.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::session::SessionHandle;
use crate::state::ui::ToastState;

/// Login page with an email/password form.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let location = use_location();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let pending = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() || email.get_untracked().trim().is_empty() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            use crate::net::http::ApiError;
            use crate::net::types::Credentials;
            use crate::routes::guard;
            use crate::util::urlenc;

            pending.set(true);
            let navigate = navigate.clone();
            let search = location.search.get_untracked();
            leptos::task::spawn_local(async move {
                let credentials = Credentials {
                    email: email.get_untracked().trim().to_owned(),
                    password: password.get_untracked(),
                };
                match crate::net::api::login(&credentials).await {
                    Ok(user) => {
                        let role = user.role;
                        session.sign_in(user);
                        let target = urlenc::redirect_target(&search)
                            .unwrap_or_else(|| guard::landing(role).to_owned());
                        navigate(&target, leptos_router::NavigateOptions::default());
                    }
                    Err(ApiError::Status(401)) => {
                        pending.set(false);
                        toasts.update(|t| t.push_error("Invalid email or password."));
                    }
                    Err(e) => {
                        pending.set(false);
                        toasts.update(|t| t.push_error(format!("Sign-in failed: {e}")));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&session, &toasts, &location);
        }
    };

    view! {
        <div class="login-page">
            <h1>"Sign in"</h1>
            <form class="login-page__form" on:submit=on_submit>
                <label class="form__label">
                    "Email"
                    <input
                        class="form__input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__label">
                    "Password"
                    <input
                        class="form__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || pending.get()>
                    {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
            <p class="login-page__alt">
                "No account yet? " <a href="/auth/register">"Register"</a>
            </p>
        </div>
    }
}

//! Registration page for job seekers and employers.

use leptos::prelude::*;

use crate::net::types::Role;
use crate::state::session::SessionHandle;
use crate::state::ui::ToastState;

/// Registration form. Admin accounts are provisioned server-side and are
/// deliberately not offered here.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(Role::JobSeeker);
    let pending = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked()
            || name.get_untracked().trim().is_empty()
            || email.get_untracked().trim().is_empty()
        {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            use crate::net::types::RegisterRequest;
            use crate::routes::guard;

            pending.set(true);
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let request = RegisterRequest {
                    name: name.get_untracked().trim().to_owned(),
                    email: email.get_untracked().trim().to_owned(),
                    password: password.get_untracked(),
                    role: role.get_untracked(),
                };
                match crate::net::api::register(&request).await {
                    Ok(user) => {
                        let landing = guard::landing(user.role).to_owned();
                        session.sign_in(user);
                        navigate(&landing, leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        pending.set(false);
                        toasts.update(|t| t.push_error(format!("Registration failed: {e}")));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&session, &toasts);
        }
    };

    view! {
        <div class="register-page">
            <h1>"Create an account"</h1>
            <form class="register-page__form" on:submit=on_submit>
                <label class="form__label">
                    "Name"
                    <input
                        class="form__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
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
                <label class="form__label">
                    "I am here to"
                    <select
                        class="form__input"
                        on:change=move |ev| {
                            role.set(if event_target_value(&ev) == "employer" {
                                Role::Employer
                            } else {
                                Role::JobSeeker
                            });
                        }
                    >
                        <option value="job_seeker" selected=true>"Find a job"</option>
                        <option value="employer">"Hire"</option>
                    </select>
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || pending.get()>
                    {move || if pending.get() { "Creating..." } else { "Register" }}
                </button>
            </form>
        </div>
    }
}

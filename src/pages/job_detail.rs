//! Job detail page with apply and save actions.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::api;
use crate::net::types::Job;
use crate::routes::guard;
use crate::state::saved::SavedJobsState;
use crate::state::session::SessionHandle;
use crate::state::ui::ToastState;

/// Detail page for one posting. Publicly readable; applying and saving
/// require a session and send signed-out visitors through the login
/// redirect with this page as the return target.
#[component]
pub fn JobDetailPage() -> impl IntoView {
    let params = use_params_map();
    let job_id = move || params.get().get("id").unwrap_or_default();

    let job = LocalResource::new(move || {
        let id = job_id();
        async move { api::fetch_job(&id).await }
    });

    view! {
        <div class="job-detail-page">
            <Suspense fallback=move || view! { <p>"Loading job..."</p> }>
                {move || {
                    job.get().map(|result| match result {
                        Ok(job) => view! { <JobDetail job=job/> }.into_any(),
                        Err(e) => {
                            view! { <p class="job-detail-page__error">{format!("Could not load job: {e}")}</p> }
                                .into_any()
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}

/// Loaded job body with the action row.
#[component]
fn JobDetail(job: Job) -> impl IntoView {
    let session = expect_context::<SessionHandle>();

    let meta = [
        Some(job.location.clone()),
        job.employment_type.clone(),
        job.salary_range.clone(),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(" · ");

    let requirements = job.requirements.clone();
    let job_for_actions = job.clone();

    view! {
        <article class="job-detail">
            <h1>{job.title.clone()}</h1>
            <p class="job-detail__company">{job.company_name.clone()}</p>
            <p class="job-detail__meta">{meta}</p>
            <section class="job-detail__description">
                <p>{job.description.clone()}</p>
            </section>
            <Show when=move || !requirements.is_empty()>
                <section class="job-detail__requirements">
                    <h2>"Requirements"</h2>
                    <ul>
                        {job.requirements
                            .iter()
                            .map(|r| view! { <li>{r.clone()}</li> })
                            .collect::<Vec<_>>()}
                    </ul>
                </section>
            </Show>
            {move || {
                let job = job_for_actions.clone();
                if session.get().is_authenticated() {
                    view! { <JobActions job=job/> }.into_any()
                } else {
                    let login = guard::login_redirect(&format!("/jobs/{}", job.id));
                    view! {
                        <a class="btn btn--primary" href=login>"Sign in to apply"</a>
                    }
                    .into_any()
                }
            }}
        </article>
    }
}

/// Apply form and save toggle for an authenticated visitor.
#[component]
fn JobActions(job: Job) -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let saved = expect_context::<RwSignal<SavedJobsState>>();

    let cover_note = RwSignal::new(String::new());
    let applied = RwSignal::new(false);
    let pending = RwSignal::new(false);

    let job_id = job.id.clone();
    let is_saved = {
        let id = job.id.clone();
        move || saved.get().is_saved(&id)
    };

    let on_apply = {
        let job_id = job_id.clone();
        move |_| {
            if pending.get_untracked() {
                return;
            }
            #[cfg(feature = "hydrate")]
            {
                pending.set(true);
                let job_id = job_id.clone();
                leptos::task::spawn_local(async move {
                    let note = cover_note.get_untracked();
                    match api::apply_to_job(&job_id, note.trim()).await {
                        Ok(_) => {
                            applied.set(true);
                            toasts.update(|t| t.push_info("Application submitted."));
                        }
                        Err(e) => {
                            if !session.absorb_expiry(&e) {
                                toasts.update(|t| t.push_error(format!("Could not apply: {e}")));
                            }
                        }
                    }
                    pending.set(false);
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&job_id, &session, &toasts);
            }
        }
    };

    let on_toggle_save = {
        let job_id = job_id.clone();
        move |_| {
            #[cfg(feature = "hydrate")]
            {
                let job_id = job_id.clone();
                let currently_saved = saved.get_untracked().is_saved(&job_id);
                leptos::task::spawn_local(async move {
                    let result = if currently_saved {
                        api::unsave_job(&job_id).await
                    } else {
                        api::save_job(&job_id).await
                    };
                    match result {
                        Ok(()) => saved.update(|s| {
                            if currently_saved {
                                s.mark_unsaved(&job_id);
                            } else {
                                s.mark_saved(&job_id);
                            }
                        }),
                        Err(e) => {
                            if !session.absorb_expiry(&e) {
                                toasts.update(|t| t.push_error(format!("Could not update saved jobs: {e}")));
                            }
                        }
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&job_id, &session, &toasts, &saved);
            }
        }
    };

    view! {
        <section class="job-actions">
            <Show
                when=move || !applied.get()
                fallback=|| view! { <p class="job-actions__done">"Application submitted."</p> }
            >
                <label class="form__label">
                    "Cover note (optional)"
                    <textarea
                        class="form__input"
                        prop:value=move || cover_note.get()
                        on:input=move |ev| cover_note.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <button
                    class="btn btn--primary"
                    on:click=on_apply.clone()
                    disabled=move || pending.get()
                >
                    {move || if pending.get() { "Applying..." } else { "Apply" }}
                </button>
            </Show>
            <button class="btn" on:click=on_toggle_save>
                {move || if is_saved() { "Unsave" } else { "Save job" }}
            </button>
        </section>
    }
}

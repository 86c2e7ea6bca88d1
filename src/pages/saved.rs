//! The job seeker's saved jobs list.

use leptos::prelude::*;

use crate::components::job_card::JobCard;
use crate::net::api;
use crate::state::saved::SavedJobsState;
use crate::state::session::SessionHandle;
use crate::state::ui::ToastState;

/// Saved jobs page (`/app/saved`). Fetching also refreshes the shared
/// saved-ids set so save toggles elsewhere agree with this list.
#[component]
pub fn SavedJobsPage() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let saved = expect_context::<RwSignal<SavedJobsState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let jobs = LocalResource::new(move || async move {
        let result = api::fetch_saved_jobs().await;
        match &result {
            Ok(list) => saved.update(|s| s.set_all(list.iter().map(|j| j.id.clone()))),
            Err(e) => {
                session.absorb_expiry(e);
            }
        }
        result
    });

    let on_unsave = move |job_id: String| {
        #[cfg(feature = "hydrate")]
        {
            let jobs = jobs.clone();
            leptos::task::spawn_local(async move {
                match api::unsave_job(&job_id).await {
                    Ok(()) => {
                        saved.update(|s| s.mark_unsaved(&job_id));
                        jobs.refetch();
                    }
                    Err(e) => {
                        if !session.absorb_expiry(&e) {
                            toasts.update(|t| t.push_error(format!("Could not remove saved job: {e}")));
                        }
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&job_id, &session, &toasts);
        }
    };

    view! {
        <div class="saved-page">
            <h1>"Saved jobs"</h1>
            <Suspense fallback=move || view! { <p>"Loading saved jobs..."</p> }>
                {move || {
                    let on_unsave = on_unsave.clone();
                    jobs.get().map(|result| match result {
                        Ok(list) if list.is_empty() => {
                            view! { <p class="saved-page__empty">"No saved jobs yet."</p> }.into_any()
                        }
                        Ok(list) => view! {
                            <div class="saved-page__grid">
                                {list
                                    .into_iter()
                                    .map(|job| {
                                        let id = job.id.clone();
                                        let on_unsave = on_unsave.clone();
                                        view! {
                                            <div class="saved-page__item">
                                                <JobCard job=job/>
                                                <button class="btn" on:click=move |_| on_unsave(id.clone())>
                                                    "Remove"
                                                </button>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                        .into_any(),
                        Err(e) => {
                            view! { <p class="saved-page__error">{format!("Could not load saved jobs: {e}")}</p> }
                                .into_any()
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}

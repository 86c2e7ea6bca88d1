//! Public job listings page with free-text search.

use leptos::prelude::*;

use crate::components::job_card::JobCard;
use crate::net::api;

/// Home page — searchable list of open postings. Public: no session needed.
#[component]
pub fn JobsPage() -> impl IntoView {
    // `draft` follows the input; `submitted` only changes on search, so the
    // resource refetches on submit rather than on every keystroke.
    let draft = RwSignal::new(String::new());
    let submitted = RwSignal::new(String::new());

    let jobs = LocalResource::new(move || {
        let query = submitted.get();
        async move { api::fetch_jobs(&query).await }
    });

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submitted.set(draft.get_untracked());
    };

    view! {
        <div class="jobs-page">
            <header class="jobs-page__header">
                <h1>"Find your next role"</h1>
                <form class="jobs-page__search" on:submit=on_search>
                    <input
                        class="jobs-page__search-input"
                        type="search"
                        placeholder="Title, company, or keyword"
                        prop:value=move || draft.get()
                        on:input=move |ev| draft.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit">"Search"</button>
                </form>
            </header>

            <Suspense fallback=move || view! { <p>"Loading jobs..."</p> }>
                {move || {
                    jobs.get().map(|result| match result {
                        Ok(list) if list.is_empty() => {
                            view! { <p class="jobs-page__empty">"No jobs found."</p> }.into_any()
                        }
                        Ok(list) => view! {
                            <div class="jobs-page__grid">
                                {list
                                    .into_iter()
                                    .map(|job| view! { <JobCard job=job/> })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                        .into_any(),
                        Err(e) => {
                            view! { <p class="jobs-page__error">{format!("Could not load jobs: {e}")}</p> }
                                .into_any()
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}

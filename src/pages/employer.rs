//! Employer dashboard: own postings and applicant counts.

use leptos::prelude::*;

use crate::net::api;
use crate::state::session::SessionHandle;

/// Employer dashboard (`/employer/dashboard`). The guard pins this area to
/// the employer role.
#[component]
pub fn EmployerDashboardPage() -> impl IntoView {
    let session = expect_context::<SessionHandle>();

    let postings = LocalResource::new(move || async move {
        let result = api::fetch_employer_jobs().await;
        if let Err(e) = &result {
            session.absorb_expiry(e);
        }
        result
    });

    view! {
        <div class="employer-page">
            <h1>"Your postings"</h1>
            <Suspense fallback=move || view! { <p>"Loading postings..."</p> }>
                {move || {
                    postings.get().map(|result| match result {
                        Ok(list) if list.is_empty() => {
                            view! { <p class="employer-page__empty">"You have no postings yet."</p> }
                                .into_any()
                        }
                        Ok(list) => view! {
                            <table class="employer-page__table">
                                <thead>
                                    <tr>
                                        <th>"Role"</th>
                                        <th>"Location"</th>
                                        <th>"Applicants"</th>
                                        <th>"Status"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {list
                                        .into_iter()
                                        .map(|posting| {
                                            let href = format!("/jobs/{}", posting.job.id);
                                            view! {
                                                <tr>
                                                    <td><a href=href>{posting.job.title.clone()}</a></td>
                                                    <td>{posting.job.location.clone()}</td>
                                                    <td>{posting.applicant_count}</td>
                                                    <td>{if posting.is_open { "Open" } else { "Closed" }}</td>
                                                </tr>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </tbody>
                            </table>
                        }
                        .into_any(),
                        Err(e) => {
                            view! { <p class="employer-page__error">{format!("Could not load postings: {e}")}</p> }
                                .into_any()
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}

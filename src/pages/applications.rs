//! The job seeker's applications list.

use leptos::prelude::*;

use crate::net::api;
use crate::state::session::SessionHandle;

/// Applications page (`/app/applications`). The guard has already ensured
/// a session; a terminal 401 mid-fetch clears it and the guard takes over.
#[component]
pub fn ApplicationsPage() -> impl IntoView {
    let session = expect_context::<SessionHandle>();

    let applications = LocalResource::new(move || async move {
        let result = api::fetch_applications().await;
        if let Err(e) = &result {
            session.absorb_expiry(e);
        }
        result
    });

    view! {
        <div class="applications-page">
            <h1>"My applications"</h1>
            <Suspense fallback=move || view! { <p>"Loading applications..."</p> }>
                {move || {
                    applications.get().map(|result| match result {
                        Ok(list) if list.is_empty() => {
                            view! { <p class="applications-page__empty">"You have not applied to any jobs yet."</p> }
                                .into_any()
                        }
                        Ok(list) => view! {
                            <table class="applications-page__table">
                                <thead>
                                    <tr>
                                        <th>"Role"</th>
                                        <th>"Company"</th>
                                        <th>"Status"</th>
                                        <th>"Submitted"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {list
                                        .into_iter()
                                        .map(|app| {
                                            let href = format!("/jobs/{}", app.job_id);
                                            view! {
                                                <tr>
                                                    <td><a href=href>{app.job_title.clone()}</a></td>
                                                    <td>{app.company_name.clone()}</td>
                                                    <td>{app.status.label()}</td>
                                                    <td>{app.submitted_at.clone().unwrap_or_default()}</td>
                                                </tr>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </tbody>
                            </table>
                        }
                        .into_any(),
                        Err(e) => {
                            view! { <p class="applications-page__error">{format!("Could not load applications: {e}")}</p> }
                                .into_any()
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}

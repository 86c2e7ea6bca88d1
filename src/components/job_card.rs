//! Card for one job posting in list views.

use leptos::prelude::*;

use crate::net::types::JobSummary;

/// Job summary card linking to the detail page.
#[component]
pub fn JobCard(job: JobSummary) -> impl IntoView {
    let detail_href = format!("/jobs/{}", job.id);
    let meta = [
        Some(job.location.clone()),
        job.employment_type.clone(),
        job.salary_range.clone(),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(" · ");

    view! {
        <a class="job-card" href=detail_href>
            <h3 class="job-card__title">{job.title.clone()}</h3>
            <p class="job-card__company">{job.company_name.clone()}</p>
            <p class="job-card__meta">{meta}</p>
            {job.posted_at.clone().map(|posted| {
                view! { <p class="job-card__posted">{format!("Posted {posted}")}</p> }
            })}
        </a>
    }
}

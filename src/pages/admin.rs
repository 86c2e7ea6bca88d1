//! Admin overview page.

use leptos::prelude::*;

use crate::net::api;
use crate::state::session::SessionHandle;

/// Admin landing page (`/admin`) showing site-wide counters.
#[component]
pub fn AdminPage() -> impl IntoView {
    let session = expect_context::<SessionHandle>();

    let overview = LocalResource::new(move || async move {
        let result = api::fetch_admin_overview().await;
        if let Err(e) = &result {
            session.absorb_expiry(e);
        }
        result
    });

    view! {
        <div class="admin-page">
            <h1>"Site overview"</h1>
            <Suspense fallback=move || view! { <p>"Loading overview..."</p> }>
                {move || {
                    overview.get().map(|result| match result {
                        Ok(counts) => view! {
                            <div class="admin-page__stats">
                                <div class="admin-page__stat">
                                    <span class="admin-page__stat-value">{counts.users}</span>
                                    <span class="admin-page__stat-label">"Users"</span>
                                </div>
                                <div class="admin-page__stat">
                                    <span class="admin-page__stat-value">{counts.jobs}</span>
                                    <span class="admin-page__stat-label">"Jobs"</span>
                                </div>
                                <div class="admin-page__stat">
                                    <span class="admin-page__stat-value">{counts.applications}</span>
                                    <span class="admin-page__stat-label">"Applications"</span>
                                </div>
                            </div>
                        }
                        .into_any(),
                        Err(e) => {
                            view! { <p class="admin-page__error">{format!("Could not load overview: {e}")}</p> }
                                .into_any()
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}

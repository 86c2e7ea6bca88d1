//! Session bootstrap provider and the single guard adapter.
//!
//! Runs once per page load: creates the [`SessionHandle`], provides it via
//! context, kicks off the who-am-I bootstrap, and applies the navigation
//! guard's verdict on every path or session change. Until bootstrap
//! resolves, children are replaced by a neutral loading view so the page
//! never flashes content the user turns out not to have access to.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::routes::guard::{self, Access};
use crate::state::session::SessionHandle;

/// Provides the session context and gates rendering on bootstrap.
///
/// Must be rendered inside a `Router`, since the guard adapter reads the
/// current location and navigates.
#[component]
pub fn SessionProvider(children: ChildrenFn) -> impl IntoView {
    let session = SessionHandle::new();
    provide_context(session);

    // Effects only run in the browser: SSR ships the loading shell and the
    // client performs the real bootstrap after hydration. Re-runs are
    // no-ops thanks to the Unstarted -> Initializing guard.
    Effect::new(move || session.spawn_bootstrap());

    let location = use_location();
    let navigate = use_navigate();
    Effect::new(move || {
        let path = location.pathname.get();
        match guard::decide(&path, &session.get()) {
            Access::Redirect(target) => navigate(&target, NavigateOptions::default()),
            Access::Allow | Access::Wait => {}
        }
    });

    view! {
        <Show
            when=move || session.get().is_initialized()
            fallback=|| {
                view! {
                    <div class="app-loading">
                        <p>"Loading..."</p>
                    </div>
                }
            }
        >
            {children()}
        </Show>
    }
}

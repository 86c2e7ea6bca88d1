//! Toast notification host.

use leptos::prelude::*;

use crate::state::ui::{ToastKind, ToastState};

/// Renders the toast queue in a fixed overlay. Toasts stay until dismissed.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host">
            {move || {
                toasts
                    .get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let class = match toast.kind {
                            ToastKind::Info => "toast toast--info",
                            ToastKind::Error => "toast toast--error",
                        };
                        let id = toast.id.clone();
                        view! {
                            <div class=class>
                                <span class="toast__message">{toast.message.clone()}</span>
                                <button
                                    class="toast__dismiss"
                                    on:click=move |_| toasts.update(|t| t.dismiss(&id))
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

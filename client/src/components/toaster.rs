//! Global toast host.

use leptos::prelude::*;

use crate::state::toast::{Toast, use_toasts};

/// Renders the app-wide toast queue, oldest first. Mounted once by `App`.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = use_toasts();
    let state = toasts.state();

    view! {
        <div class="toaster" role="status" aria-live="polite">
            <For
                each=move || state.with(|s| s.iter().cloned().collect::<Vec<_>>())
                key=|toast: &Toast| (toast.id, toast.kind, toast.message.clone())
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div class=format!("toast toast--{}", toast.kind.css_modifier())>
                            <span class="toast__message">{toast.message}</span>
                            <button
                                class="toast__close"
                                aria-label="Dismiss"
                                on:click=move |_| toasts.dismiss(id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

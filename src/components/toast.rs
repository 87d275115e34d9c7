//! Toast overlay and dismissal scheduling.
//!
//! SYSTEM CONTEXT
//! ==============
//! The overlay is mounted once at the app root; pages and modals raise
//! toasts through [`show_toast`], which runs the store's accept/suppress
//! decision and schedules the auto-dismissal for accepted calls.

use leptos::prelude::*;

use crate::state::toast::{Severity, ToastState};

/// Show a toast message; suppressed duplicates are dropped silently.
pub fn show_toast(toast: RwSignal<ToastState>, message: &str, severity: Severity) {
    #[cfg(feature = "csr")]
    {
        let now = js_sys::Date::now();
        let mut accepted = None;
        toast.update(|t| accepted = t.show_at(message, severity, now));
        if let Some(seq) = accepted {
            let delay = std::time::Duration::from_millis(crate::state::toast::DISMISS_AFTER_MS);
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(delay).await;
                toast.update(|t| t.expire(seq));
            });
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (toast, message, severity);
    }
}

/// Centered toast overlay; clicking the toast dismisses it immediately.
#[component]
pub fn Toast() -> impl IntoView {
    let toast = expect_context::<RwSignal<ToastState>>();

    view! {
        <Show when=move || toast.get().message.is_some()>
            <div class="toast-overlay">
                <div
                    class=move || format!("toast {}", toast.get().severity.css_class())
                    on:click=move |_| toast.update(ToastState::hide)
                >
                    <span class="toast__message">
                        {move || toast.get().message.unwrap_or_default()}
                    </span>
                </div>
            </div>
        </Show>
    }
}

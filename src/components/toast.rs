//! Toast shelf and outcome reporting helpers.
//!
//! Every REST call outcome funnels through [`show`] or
//! [`report_api_error`]; toasts auto-dismiss after a fixed interval and
//! can be clicked away early.

use leptos::prelude::*;

use crate::net::api::ApiError;
use crate::state::session::SessionState;
use crate::state::toast::{ToastKind, ToastState};

#[cfg(feature = "csr")]
const TOAST_LIFETIME_MS: u64 = 5_000;

/// Stacked transient notifications, rendered once near the app root.
#[component]
pub fn ToastShelf() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-shelf" aria-live="polite">
            {move || {
                toasts
                    .get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id.clone();
                        view! {
                            <div
                                class=format!("toast {}", toast.kind.css_class())
                                on:click=move |_| toasts.update(|state| state.dismiss(&id))
                            >
                                {toast.message}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

/// Push a toast and schedule its auto-dismissal.
pub fn show(toasts: RwSignal<ToastState>, kind: ToastKind, message: impl Into<String>) {
    let message = message.into();
    let mut id = String::new();
    toasts.update(|state| id = state.push(kind, message));
    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(TOAST_LIFETIME_MS)).await;
            toasts.update(|state| state.dismiss(&id));
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
    }
}

/// Standard handling for a failed REST call: a rejected token expires the
/// session (the route guard then redirects to login); everything else is
/// surfaced as an error toast. Prior list state is left untouched.
pub fn report_api_error(session: RwSignal<SessionState>, toasts: RwSignal<ToastState>, error: &ApiError) {
    match error {
        ApiError::Unauthorized => {
            crate::state::session::expire(session);
            show(toasts, ToastKind::Warning, "Session expired. Please log in again.");
        }
        other => show(toasts, ToastKind::Error, other.to_string()),
    }
}

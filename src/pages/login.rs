//! Login page with password and one-time-code sub-flows.
//!
//! SYSTEM CONTEXT
//! ==============
//! Public route: an active session redirects away immediately, honoring
//! the `from` query parameter a protected-route redirect may have left
//! behind. Each submit transitions idle → submitting → success/failure;
//! the `busy` flag keeps one request outstanding at a time.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::toast::{report_api_error, show};
use crate::state::session::{self, SessionState};
use crate::state::toast::{ToastKind, ToastState};
use crate::util::guard;

/// Resolve where a successful login should land: the preserved `from`
/// path when it is a safe local one, otherwise home.
fn post_login_destination(from: Option<String>) -> String {
    match from {
        Some(path) if path.starts_with('/') && !path.starts_with("//") => path,
        _ => "/".to_owned(),
    }
}

/// Keep only digits, capped at the six the server issues.
fn normalize_otp_input(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).take(6).collect()
}

fn validate_password_login(identifier: &str, password: &str) -> Result<(String, String), &'static str> {
    let identifier = identifier.trim();
    if identifier.is_empty() || password.is_empty() {
        return Err("Please fill in both fields.");
    }
    Ok((identifier.to_owned(), password.to_owned()))
}

fn validate_otp_request(identifier: &str) -> Result<String, &'static str> {
    let identifier = identifier.trim();
    if identifier.is_empty() {
        return Err("Please enter your email or username");
    }
    Ok(identifier.to_owned())
}

fn validate_otp_login(identifier: &str, otp: &str) -> Result<(String, String), &'static str> {
    let identifier = identifier.trim();
    let otp = otp.trim();
    if identifier.is_empty() || otp.is_empty() {
        return Err("Please fill all fields");
    }
    if otp.len() != 6 || !otp.chars().all(|c| c.is_ascii_digit()) {
        return Err("Please enter a valid 6-digit OTP");
    }
    Ok((identifier.to_owned(), otp.to_owned()))
}

/// Sign-in page. OTP-first by default with a toggle to the password flow.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    let query = use_query_map();

    // Once a session exists (fresh login or already present), the public
    // guard forwards to the preserved destination.
    guard::install_public(session, navigate, move || {
        post_login_destination(query.read().get("from"))
    });

    let identifier = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let otp = RwSignal::new(String::new());
    let with_otp = RwSignal::new(true);
    let busy = RwSignal::new(false);

    let on_send_otp = move |_| {
        if busy.get() {
            return;
        }
        let id_value = match validate_otp_request(&identifier.get()) {
            Ok(value) => value,
            Err(warning) => {
                show(toasts, ToastKind::Warning, warning);
                return;
            }
        };
        busy.set(true);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::request_login_otp(&id_value).await {
                Ok(message) => show(
                    toasts,
                    ToastKind::Success,
                    message.unwrap_or_else(|| "OTP sent. Check your inbox.".to_owned()),
                ),
                Err(err) => report_api_error(session, toasts, &err),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = id_value;
        }
    };

    let on_login_password = move || {
        if busy.get() {
            return;
        }
        let (id_value, pass_value) = match validate_password_login(&identifier.get(), &password.get()) {
            Ok(values) => values,
            Err(warning) => {
                show(toasts, ToastKind::Warning, warning);
                return;
            }
        };
        busy.set(true);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::login_with_password(&id_value, &pass_value).await {
                Ok(auth) => {
                    show(toasts, ToastKind::Success, "Login successful!");
                    session::establish(session, auth.access_token, auth.user);
                }
                Err(err) => report_api_error(session, toasts, &err),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (id_value, pass_value);
        }
    };

    let on_login_otp = move || {
        if busy.get() {
            return;
        }
        let (id_value, otp_value) = match validate_otp_login(&identifier.get(), &otp.get()) {
            Ok(values) => values,
            Err(warning) => {
                show(toasts, ToastKind::Warning, warning);
                return;
            }
        };
        busy.set(true);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::verify_login_otp(&id_value, &otp_value).await {
                Ok(auth) => {
                    show(toasts, ToastKind::Success, "Login successful!");
                    session::establish(session, auth.access_token, auth.user);
                }
                Err(err) => report_api_error(session, toasts, &err),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (id_value, otp_value);
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if with_otp.get() {
            on_login_otp();
        } else {
            on_login_password();
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h3 class="auth-card__title">"Sign In"</h3>
                <p class="auth-card__subtitle">"Welcome back! Don't forget your daily task"</p>

                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label">
                        "Email or Username"
                        <input
                            class="auth-form__input"
                            type="text"
                            placeholder="you@example.com or username"
                            prop:value=move || identifier.get()
                            on:input=move |ev| identifier.set(event_target_value(&ev))
                        />
                    </label>

                    <Show
                        when=move || with_otp.get()
                        fallback=move || {
                            view! {
                                <label class="auth-form__label">
                                    "Password"
                                    <input
                                        class="auth-form__input"
                                        type="password"
                                        placeholder="••••••••"
                                        prop:value=move || password.get()
                                        on:input=move |ev| password.set(event_target_value(&ev))
                                    />
                                </label>
                            }
                        }
                    >
                        <label class="auth-form__label">
                            "Enter OTP"
                            <input
                                class="auth-form__input auth-form__input--code"
                                type="text"
                                maxlength="6"
                                placeholder="6-digit OTP"
                                prop:value=move || otp.get()
                                on:input=move |ev| otp.set(normalize_otp_input(&event_target_value(&ev)))
                            />
                        </label>
                    </Show>

                    <div class="auth-form__actions">
                        <Show
                            when=move || with_otp.get()
                            fallback=move || {
                                view! {
                                    <button
                                        class="auth-form__toggle"
                                        type="button"
                                        on:click=move |_| with_otp.set(true)
                                    >
                                        "Login With OTP"
                                    </button>
                                }
                            }
                        >
                            <button
                                class="auth-form__send-otp"
                                type="button"
                                on:click=on_send_otp
                                disabled=move || busy.get()
                            >
                                {move || if busy.get() { "Sending..." } else { "Send OTP" }}
                            </button>
                            <button
                                class="auth-form__toggle"
                                type="button"
                                on:click=move |_| with_otp.set(false)
                            >
                                "Login With Password"
                            </button>
                        </Show>
                    </div>

                    <button class="auth-form__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Logging in..." } else { "Login" }}
                    </button>
                </form>

                <p class="auth-card__footer">
                    "Don't have an account? " <a class="auth-card__link" href="/signup">"Sign up"</a>
                </p>
            </div>
        </div>
    }
}

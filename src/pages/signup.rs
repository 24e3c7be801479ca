//! Sign-up page: account form, then OTP verification.
//!
//! A successful signup flips the view to the verification panel and never
//! flips back on its own; the user can resend the code at any time before
//! verifying. A verified code creates the session directly, so the user
//! lands on their todo list without a second login.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::toast::{report_api_error, show};
use crate::net::types::SignupRequest;
use crate::state::session::{self, SessionState};
use crate::state::toast::{ToastKind, ToastState};
use crate::util::guard;

fn validate_signup_form(
    fullname: &str,
    email: &str,
    password: &str,
    username: &str,
) -> Result<SignupRequest, &'static str> {
    let fullname = fullname.trim();
    let email = email.trim();
    let username = username.trim();
    if fullname.is_empty() || email.is_empty() || password.is_empty() || username.is_empty() {
        return Err("Please fill in all fields.");
    }
    Ok(SignupRequest {
        fullname: fullname.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
        username: username.to_owned(),
    })
}

fn validate_signup_otp(otp: &str) -> Result<String, &'static str> {
    let otp = otp.trim();
    if otp.len() != 6 || !otp.chars().all(|c| c.is_ascii_digit()) {
        return Err("Please enter a valid 6-digit OTP");
    }
    Ok(otp.to_owned())
}

/// Account creation page with an OTP verification panel.
#[component]
pub fn SignUpPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    guard::install_public(session, navigate, || "/".to_owned());

    let fullname = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let otp = RwSignal::new(String::new());
    let show_otp = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let on_signup = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let payload = match validate_signup_form(&fullname.get(), &email.get(), &password.get(), &username.get()) {
            Ok(payload) => payload,
            Err(warning) => {
                show(toasts, ToastKind::Warning, warning);
                return;
            }
        };
        busy.set(true);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::signup(&payload).await {
                Ok(message) => {
                    show(
                        toasts,
                        ToastKind::Success,
                        message.unwrap_or_else(|| "Signup successful. OTP sent!".to_owned()),
                    );
                    show_otp.set(true);
                }
                Err(err) => report_api_error(session, toasts, &err),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = payload;
        }
    };

    let on_verify = move |_| {
        if busy.get() {
            return;
        }
        let otp_value = match validate_signup_otp(&otp.get()) {
            Ok(value) => value,
            Err(warning) => {
                show(toasts, ToastKind::Warning, warning);
                return;
            }
        };
        busy.set(true);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let email_value = email.get_untracked().trim().to_owned();
            match crate::net::api::verify_signup(&email_value, &otp_value).await {
                Ok(auth) => {
                    show(toasts, ToastKind::Success, "OTP Verified Successfully!");
                    // Public guard navigates home once the session lands.
                    session::establish(session, auth.access_token, auth.user);
                }
                Err(err) => report_api_error(session, toasts, &err),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = otp_value;
        }
    };

    let on_resend = move |_| {
        let email_value = email.get().trim().to_owned();
        if email_value.is_empty() {
            show(toasts, ToastKind::Warning, "Email is missing. Please fill email.");
            return;
        }
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::resend_signup_otp(&email_value).await {
                Ok(message) => show(
                    toasts,
                    ToastKind::Success,
                    message.unwrap_or_else(|| "OTP resent successfully!".to_owned()),
                ),
                Err(err) => report_api_error(session, toasts, &err),
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = email_value;
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <Show
                    when=move || show_otp.get()
                    fallback=move || {
                        view! {
                            <h2 class="auth-card__title">"Create Account"</h2>
                            <form class="auth-form" on:submit=on_signup>
                                <label class="auth-form__label">
                                    "Full Name"
                                    <input
                                        class="auth-form__input"
                                        type="text"
                                        prop:value=move || fullname.get()
                                        on:input=move |ev| fullname.set(event_target_value(&ev))
                                    />
                                </label>
                                <label class="auth-form__label">
                                    "Email"
                                    <input
                                        class="auth-form__input"
                                        type="text"
                                        prop:value=move || email.get()
                                        on:input=move |ev| email.set(event_target_value(&ev))
                                    />
                                </label>
                                <label class="auth-form__label">
                                    "Password"
                                    <input
                                        class="auth-form__input"
                                        type="password"
                                        prop:value=move || password.get()
                                        on:input=move |ev| password.set(event_target_value(&ev))
                                    />
                                </label>
                                <label class="auth-form__label">
                                    "Username"
                                    <input
                                        class="auth-form__input"
                                        type="text"
                                        prop:value=move || username.get()
                                        on:input=move |ev| username.set(event_target_value(&ev))
                                    />
                                </label>
                                <button class="auth-form__submit" type="submit" disabled=move || busy.get()>
                                    {move || if busy.get() { "Processing..." } else { "Sign Up" }}
                                </button>
                                <p class="auth-card__footer">
                                    "Already have an account? "
                                    <a class="auth-card__link" href="/login">"Log In"</a>
                                </p>
                            </form>
                        }
                    }
                >
                    <h3 class="auth-card__title">"Verify OTP"</h3>
                    <input
                        class="auth-form__input auth-form__input--code"
                        type="text"
                        maxlength="6"
                        placeholder="Enter 6-digit OTP"
                        prop:value=move || otp.get()
                        on:input=move |ev| otp.set(event_target_value(&ev))
                    />
                    <div class="auth-form__otp-row">
                        <p class="auth-form__hint">
                            "OTP sent to " <strong>{move || email.get()}</strong>
                        </p>
                        <button class="auth-form__toggle" type="button" on:click=on_resend>
                            "Resend OTP"
                        </button>
                    </div>
                    <button
                        class="auth-form__submit"
                        type="button"
                        on:click=on_verify
                        disabled=move || busy.get()
                    >
                        {move || if busy.get() { "Verifying..." } else { "Verify OTP" }}
                    </button>
                </Show>
            </div>
        </div>
    }
}

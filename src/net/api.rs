//! REST client for the external todo API.
//!
//! Browser builds (`csr`): real HTTP calls via `gloo-net`, each racing a
//! fixed timeout so a hung request can never pin a page in its loading
//! state. Native builds: stubs returning [`ApiError::Network`] so the
//! module tree compiles and unit tests run without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. A 401 on a token-bearing
//! request maps to [`ApiError::Unauthorized`] so callers can expire the
//! session and let the route guard force re-authentication. Login and
//! signup calls carry no token, so their 401s fall through to the
//! envelope and surface the server's own message (e.g. a rejected OTP).
//! No call retries automatically.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ApiEnvelope, AuthData, MainTodo, MainTodoPayload, SignupRequest, SubTodo, SubTodoPayload};

/// Upper bound on any single request before it is abandoned.
#[cfg(feature = "csr")]
const REQUEST_TIMEOUT_MS: u32 = 15_000;

/// Failure taxonomy for API calls.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server rejected the bearer token (HTTP 401).
    #[error("session expired, please log in again")]
    Unauthorized,
    /// The server answered but reported failure; carries its message.
    #[error("{0}")]
    Request(String),
    /// Transport or decoding failure; no server verdict available.
    #[error("network error: {0}")]
    Network(String),
    /// The request did not complete within the timeout window.
    #[error("request timed out")]
    Timeout,
}

#[cfg(any(test, feature = "csr"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "csr"))]
fn main_todo_endpoint(id: &str) -> String {
    format!("/main-todo/{id}")
}

#[cfg(any(test, feature = "csr"))]
fn sub_todos_endpoint(slug: &str) -> String {
    format!("/subtodos/{slug}")
}

#[cfg(any(test, feature = "csr"))]
fn status_failure_message(status: u16) -> String {
    format!("request failed: {status}")
}

/// Whether a status means the server rejected our session. Only requests
/// that actually sent a bearer token qualify; a 401 on an unauthenticated
/// call is a credential verdict, not a session one.
#[cfg(any(test, feature = "csr"))]
fn is_session_rejection(status: u16, sent_bearer: bool) -> bool {
    sent_bearer && status == 401
}

/// Pick the most specific failure text from a non-success envelope.
#[cfg(any(test, feature = "csr"))]
fn failure_message(error: Option<String>, message: Option<String>) -> String {
    error.or(message).unwrap_or_else(|| "Request failed".to_owned())
}

/// Unwrap a successful envelope's payload.
#[cfg(any(test, feature = "csr"))]
fn envelope_data<T>(envelope: ApiEnvelope<T>) -> Result<T, ApiError> {
    if !envelope.success {
        return Err(ApiError::Request(failure_message(envelope.error, envelope.message)));
    }
    envelope.data.ok_or_else(|| ApiError::Network("response missing data".to_owned()))
}

/// Accept a successful envelope that carries no payload; yields the server
/// message for user-facing confirmation toasts.
#[cfg(any(test, feature = "csr"))]
fn envelope_ack<T>(envelope: ApiEnvelope<T>) -> Result<Option<String>, ApiError> {
    if !envelope.success {
        return Err(ApiError::Request(failure_message(envelope.error, envelope.message)));
    }
    Ok(envelope.message)
}

#[cfg(feature = "csr")]
async fn race_timeout<F>(send: F) -> Result<gloo_net::http::Response, ApiError>
where
    F: std::future::Future<Output = Result<gloo_net::http::Response, gloo_net::Error>>,
{
    use futures::future::Either;

    let timeout = gloo_timers::future::TimeoutFuture::new(REQUEST_TIMEOUT_MS);
    futures::pin_mut!(send);
    futures::pin_mut!(timeout);
    match futures::future::select(send, timeout).await {
        Either::Left((result, _)) => result.map_err(|e| ApiError::Network(e.to_string())),
        Either::Right(((), _)) => Err(ApiError::Timeout),
    }
}

#[cfg(feature = "csr")]
async fn read_envelope<T: serde::de::DeserializeOwned>(
    response: gloo_net::http::Response,
    sent_bearer: bool,
) -> Result<ApiEnvelope<T>, ApiError> {
    let status = response.status();
    if is_session_rejection(status, sent_bearer) {
        return Err(ApiError::Unauthorized);
    }
    match response.json::<ApiEnvelope<T>>().await {
        Ok(envelope) => Ok(envelope),
        // Error pages without an envelope body still surface the status.
        Err(_) if status >= 400 => Err(ApiError::Request(status_failure_message(status))),
        Err(err) => Err(ApiError::Network(err.to_string())),
    }
}

#[cfg(feature = "csr")]
async fn post_json<T, B>(url: &str, token: Option<&str>, body: &B) -> Result<ApiEnvelope<T>, ApiError>
where
    T: serde::de::DeserializeOwned,
    B: serde::Serialize,
{
    let mut builder = gloo_net::http::Request::post(url);
    if let Some(token) = token {
        builder = builder.header("Authorization", &bearer(token));
    }
    let request = builder.json(body).map_err(|e| ApiError::Network(e.to_string()))?;
    let response = race_timeout(request.send()).await?;
    read_envelope(response, token.is_some()).await
}

#[cfg(feature = "csr")]
async fn put_json<T, B>(url: &str, token: &str, body: &B) -> Result<ApiEnvelope<T>, ApiError>
where
    T: serde::de::DeserializeOwned,
    B: serde::Serialize,
{
    let request = gloo_net::http::Request::put(url)
        .header("Authorization", &bearer(token))
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let response = race_timeout(request.send()).await?;
    read_envelope(response, true).await
}

// ---------------------------------------------------------------
// Authentication
// ---------------------------------------------------------------

/// Register a new account via `POST /user/signup`; the server mails an OTP.
///
/// # Errors
///
/// Returns an [`ApiError`] when transport fails or the server reports failure.
pub async fn signup(payload: &SignupRequest) -> Result<Option<String>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let envelope = post_json::<serde_json::Value, _>("/user/signup", None, payload).await?;
        envelope_ack(envelope)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = payload;
        Err(ApiError::Network("not available outside the browser".to_owned()))
    }
}

/// Confirm a signup OTP via `POST /user/signup/verify`; success creates a session.
///
/// # Errors
///
/// Returns an [`ApiError`] when transport fails or the code is rejected.
pub async fn verify_signup(email: &str, otp: &str) -> Result<AuthData, ApiError> {
    #[cfg(feature = "csr")]
    {
        let body = serde_json::json!({ "email": email, "otp": otp });
        let envelope = post_json::<AuthData, _>("/user/signup/verify", None, &body).await?;
        envelope_data(envelope)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (email, otp);
        Err(ApiError::Network("not available outside the browser".to_owned()))
    }
}

/// Ask the server to resend the signup OTP via `POST /user/signup/resend-otp`.
///
/// # Errors
///
/// Returns an [`ApiError`] when transport fails or the server reports failure.
pub async fn resend_signup_otp(email: &str) -> Result<Option<String>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let body = serde_json::json!({ "email": email });
        let envelope = post_json::<serde_json::Value, _>("/user/signup/resend-otp", None, &body).await?;
        envelope_ack(envelope)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = email;
        Err(ApiError::Network("not available outside the browser".to_owned()))
    }
}

/// Password login via `POST /user/pass/login`.
///
/// # Errors
///
/// Returns an [`ApiError`] when transport fails or credentials are rejected.
pub async fn login_with_password(identifier: &str, password: &str) -> Result<AuthData, ApiError> {
    #[cfg(feature = "csr")]
    {
        let body = serde_json::json!({ "identifier": identifier, "password": password });
        let envelope = post_json::<AuthData, _>("/user/pass/login", None, &body).await?;
        envelope_data(envelope)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (identifier, password);
        Err(ApiError::Network("not available outside the browser".to_owned()))
    }
}

/// Request a login OTP via `POST /user/otp/login`. The code itself is
/// delivered out-of-band; only the server message comes back.
///
/// # Errors
///
/// Returns an [`ApiError`] when transport fails or the server reports failure.
pub async fn request_login_otp(identifier: &str) -> Result<Option<String>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let body = serde_json::json!({ "identifier": identifier });
        let envelope = post_json::<serde_json::Value, _>("/user/otp/login", None, &body).await?;
        envelope_ack(envelope)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = identifier;
        Err(ApiError::Network("not available outside the browser".to_owned()))
    }
}

/// Submit a login OTP via `POST /user/otp/login/verify`.
///
/// # Errors
///
/// Returns an [`ApiError`] when transport fails or the code is rejected.
pub async fn verify_login_otp(identifier: &str, otp: &str) -> Result<AuthData, ApiError> {
    #[cfg(feature = "csr")]
    {
        let body = serde_json::json!({ "identifier": identifier, "otp": otp });
        let envelope = post_json::<AuthData, _>("/user/otp/login/verify", None, &body).await?;
        envelope_data(envelope)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (identifier, otp);
        Err(ApiError::Network("not available outside the browser".to_owned()))
    }
}

// ---------------------------------------------------------------
// Main todos
// ---------------------------------------------------------------

/// Fetch the full main-todo collection via `GET /main-todos`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, a rejected token, or a
/// non-success envelope.
pub async fn fetch_main_todos(token: &str) -> Result<Vec<MainTodo>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let request = gloo_net::http::Request::get("/main-todos").header("Authorization", &bearer(token));
        let response = race_timeout(request.send()).await?;
        let envelope = read_envelope::<Vec<MainTodo>>(response, true).await?;
        envelope_data(envelope)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = token;
        Err(ApiError::Network("not available outside the browser".to_owned()))
    }
}

/// Create a main todo via `POST /create/main-todo`.
///
/// # Errors
///
/// Returns an [`ApiError`] when transport fails or the server reports failure.
pub async fn create_main_todo(token: &str, payload: &MainTodoPayload) -> Result<Option<String>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let envelope = post_json::<serde_json::Value, _>("/create/main-todo", Some(token), payload).await?;
        envelope_ack(envelope)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, payload);
        Err(ApiError::Network("not available outside the browser".to_owned()))
    }
}

/// Update a main todo via `PUT /main-todo/:id`.
///
/// # Errors
///
/// Returns an [`ApiError`] when transport fails or the server reports failure.
pub async fn update_main_todo(token: &str, id: &str, payload: &MainTodoPayload) -> Result<Option<String>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let envelope = put_json::<serde_json::Value, _>(&main_todo_endpoint(id), token, payload).await?;
        envelope_ack(envelope)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, id, payload);
        Err(ApiError::Network("not available outside the browser".to_owned()))
    }
}

/// Delete a main todo via `DELETE /main-todo/:id`.
///
/// # Errors
///
/// Returns an [`ApiError`] when transport fails or the server reports failure.
pub async fn delete_main_todo(token: &str, id: &str) -> Result<Option<String>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let request = gloo_net::http::Request::delete(&main_todo_endpoint(id)).header("Authorization", &bearer(token));
        let response = race_timeout(request.send()).await?;
        let envelope = read_envelope::<serde_json::Value>(response, true).await?;
        envelope_ack(envelope)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, id);
        Err(ApiError::Network("not available outside the browser".to_owned()))
    }
}

// ---------------------------------------------------------------
// Sub-todos
// ---------------------------------------------------------------

/// Fetch the sub-todo collection for a list via `GET /subtodos/:slug`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, a rejected token, or a
/// non-success envelope.
pub async fn fetch_sub_todos(token: &str, slug: &str) -> Result<Vec<SubTodo>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let request = gloo_net::http::Request::get(&sub_todos_endpoint(slug)).header("Authorization", &bearer(token));
        let response = race_timeout(request.send()).await?;
        let envelope = read_envelope::<Vec<SubTodo>>(response, true).await?;
        envelope_data(envelope)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, slug);
        Err(ApiError::Network("not available outside the browser".to_owned()))
    }
}

/// Create a sub-todo via `POST /create/sub-todo`.
///
/// # Errors
///
/// Returns an [`ApiError`] when transport fails or the server reports failure.
pub async fn create_sub_todo(token: &str, payload: &SubTodoPayload) -> Result<Option<String>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let envelope = post_json::<serde_json::Value, _>("/create/sub-todo", Some(token), payload).await?;
        envelope_ack(envelope)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, payload);
        Err(ApiError::Network("not available outside the browser".to_owned()))
    }
}

/// Update a sub-todo (edit or toggle) via `PUT /subtodos/:id`.
///
/// # Errors
///
/// Returns an [`ApiError`] when transport fails or the server reports failure.
pub async fn update_sub_todo(token: &str, id: &str, payload: &SubTodoPayload) -> Result<Option<String>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let envelope = put_json::<serde_json::Value, _>(&sub_todos_endpoint(id), token, payload).await?;
        envelope_ack(envelope)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, id, payload);
        Err(ApiError::Network("not available outside the browser".to_owned()))
    }
}

/// Delete a sub-todo via `DELETE /subtodos/:id`.
///
/// # Errors
///
/// Returns an [`ApiError`] when transport fails or the server reports failure.
pub async fn delete_sub_todo(token: &str, id: &str) -> Result<Option<String>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let request = gloo_net::http::Request::delete(&sub_todos_endpoint(id)).header("Authorization", &bearer(token));
        let response = race_timeout(request.send()).await?;
        let envelope = read_envelope::<serde_json::Value>(response, true).await?;
        envelope_ack(envelope)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, id);
        Err(ApiError::Network("not available outside the browser".to_owned()))
    }
}

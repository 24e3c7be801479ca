//! Wire-schema DTOs for the todo REST API.
//!
//! DESIGN
//! ======
//! These types mirror the server's MongoDB-flavored JSON (`_id`,
//! camelCase fields) so serde round-trips stay lossless and every call
//! site can stay schema-driven. Every response body is wrapped in
//! [`ApiEnvelope`].

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The authenticated account record carried inside the session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    /// Display name.
    pub fullname: String,
    /// Unique handle, usable as a login identifier.
    pub username: String,
    /// Email address, usable as a login identifier.
    pub email: String,
}

/// A top-level todo list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MainTodo {
    /// Unique list identifier.
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    /// List title.
    pub title: String,
    /// Server-assigned slug derived from the title; keys sub-todo lookups.
    pub slug: String,
    /// Card background color (hex).
    pub color: String,
    /// Card text color (hex).
    #[serde(rename = "textColor")]
    pub text_color: String,
    /// ISO 8601 creation timestamp.
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

/// A task belonging to exactly one [`MainTodo`], addressed by slug.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubTodo {
    /// Unique task identifier.
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    /// Task name.
    #[serde(rename = "taskName")]
    pub task_name: String,
    /// Free-form note attached to the task.
    #[serde(default)]
    pub comment: String,
    /// Row background color (hex).
    pub color: String,
    /// Row text color (hex).
    #[serde(rename = "textColor")]
    pub text_color: String,
    /// Completion flag; toggled by resubmitting the full entity.
    pub complete: bool,
    /// ISO 8601 creation timestamp.
    #[serde(rename = "createdAt")]
    pub created_at: String,
    /// Slug of the owning main todo.
    #[serde(default)]
    pub slug: String,
}

/// Uniform response wrapper: `{ success, data | error, message }`.
///
/// The sub-todo list endpoint historically used a `tasks` key for its
/// payload; the alias keeps that response parseable.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default = "none", alias = "tasks")]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

// `#[serde(default)]` alone requires `T: Default`; this does not.
fn none<T>() -> Option<T> {
    None
}

/// Payload of every successful authentication response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AuthData {
    /// Opaque bearer token; authority rests entirely with the server.
    #[serde(rename = "accessToken")]
    pub access_token: String,
    /// The account the token belongs to.
    pub user: User,
}

/// Request body for `POST /user/signup`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    pub fullname: String,
    pub email: String,
    pub password: String,
    pub username: String,
}

/// Request body for creating or editing a main todo.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MainTodoPayload {
    pub title: String,
    pub color: String,
    #[serde(rename = "textColor")]
    pub text_color: String,
}

/// Request body for creating or editing a sub-todo; carries the owning slug.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SubTodoPayload {
    #[serde(rename = "taskName")]
    pub task_name: String,
    pub comment: String,
    pub color: String,
    #[serde(rename = "textColor")]
    pub text_color: String,
    pub complete: bool,
    pub slug: String,
}

//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (guard install, fetch-on-mount,
//! mutation handlers) and delegates shared rendering to `components`.

pub mod add_todo;
pub mod home;
pub mod login;
pub mod signup;
pub mod sub_todos;

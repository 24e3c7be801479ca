//! Shared application state provided through Leptos contexts.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` and `toast` are crate-wide contexts; the todo list states are
//! route-scoped signals owned by their pages.

pub mod session;
pub mod toast;
pub mod todos;

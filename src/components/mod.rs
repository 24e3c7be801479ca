//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and list items while reading/writing the
//! shared session and toast contexts.

pub mod navbar;
pub mod spinner;
pub mod toast;
pub mod todo_card;

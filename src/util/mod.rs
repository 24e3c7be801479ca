//! Utility helpers shared across pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! These modules isolate browser/environment concerns (persisted session,
//! navigation gating, timestamp display) from page and component logic.

pub mod format;
pub mod guard;
pub mod session;

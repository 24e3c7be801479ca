//! Networking modules for the external todo REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns request construction, the timeout race, and the error
//! taxonomy; `types` defines the wire schema shared by every call.

pub mod api;
pub mod types;

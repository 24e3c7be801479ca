//! Persisted session store over browser `localStorage`.
//!
//! The record expires a fixed 24 hours after it is written; `load` drops
//! and clears a stale record so the rest of the app only ever sees a live
//! session or none. No token validation happens client-side — authority
//! rests entirely with the API. SSR-less native builds no-op.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

use crate::net::types::User;

#[cfg(feature = "csr")]
const STORAGE_KEY: &str = "polytechub_session";

/// Fixed session lifetime.
pub const SESSION_TTL_MS: i64 = 24 * 60 * 60 * 1000;

/// The exact record persisted to `localStorage`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSession {
    pub token: String,
    pub user: User,
    pub expires_at_ms: i64,
}

/// Expiry timestamp for a session written at `now_ms`.
pub fn expiry_after(now_ms: i64) -> i64 {
    now_ms + SESSION_TTL_MS
}

/// Whether a stored session is still within its lifetime at `now_ms`.
pub fn is_live(stored: &StoredSession, now_ms: i64) -> bool {
    stored.expires_at_ms > now_ms
}

fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Read the persisted session, clearing it if absent, unparseable, or expired.
pub fn load() -> Option<StoredSession> {
    #[cfg(feature = "csr")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(STORAGE_KEY).ok().flatten()?;
        let Ok(stored) = serde_json::from_str::<StoredSession>(&raw) else {
            let _ = storage.remove_item(STORAGE_KEY);
            return None;
        };
        if !is_live(&stored, now_ms()) {
            let _ = storage.remove_item(STORAGE_KEY);
            return None;
        }
        Some(stored)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = now_ms();
        None
    }
}

/// Persist a freshly issued session with a full TTL.
pub fn save(token: &str, user: &User) {
    #[cfg(feature = "csr")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let stored = StoredSession {
            token: token.to_owned(),
            user: user.clone(),
            expires_at_ms: expiry_after(now_ms()),
        };
        let Ok(raw) = serde_json::to_string(&stored) else {
            return;
        };
        let _ = storage.set_item(STORAGE_KEY, &raw);
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, user);
    }
}

/// Remove the persisted session, if any.
pub fn clear() {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
}

//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as an `RwSignal<SessionState>` context so route guards, pages,
//! and the navbar share one typed accessor instead of ambient storage
//! lookups. The persisted copy lives in `util::session`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::types::User;
use crate::util;

/// An authenticated identity: opaque bearer token plus the account record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// Presence/absence of a session; the route guard's only input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub session: Option<Session>,
}

impl SessionState {
    /// Rebuild from the persisted store; empty when absent or expired.
    pub fn from_storage() -> Self {
        let session = util::session::load().map(|stored| Session {
            token: stored.token,
            user: stored.user,
        });
        Self { session }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Bearer token for authenticated calls, if present.
    pub fn token(&self) -> Option<String> {
        self.session.as_ref().map(|s| s.token.clone())
    }
}

/// Persist and publish a freshly authenticated session.
pub fn establish(state: RwSignal<SessionState>, token: String, user: User) {
    util::session::save(&token, &user);
    state.set(SessionState {
        session: Some(Session { token, user }),
    });
}

/// Drop the session everywhere; the route guard then redirects to login.
pub fn expire(state: RwSignal<SessionState>) {
    util::session::clear();
    state.set(SessionState::default());
}

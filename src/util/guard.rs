//! Route gating shared by every page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Two variants, re-evaluated on every navigation with no cached decision:
//! protected pages render only with a session (else redirect to login,
//! preserving the intended destination), public pages render only without
//! one (else redirect home).

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_location;

use crate::state::session::SessionState;

/// Outcome of evaluating a route gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    ToLogin,
    ToHome,
}

/// Gate for session-required routes.
pub fn protected_decision(authenticated: bool) -> GuardDecision {
    if authenticated {
        GuardDecision::Allow
    } else {
        GuardDecision::ToLogin
    }
}

/// Gate for login/signup routes.
pub fn public_decision(authenticated: bool) -> GuardDecision {
    if authenticated {
        GuardDecision::ToHome
    } else {
        GuardDecision::Allow
    }
}

/// Login path carrying the originating route so a successful login can
/// return there. Root and empty origins collapse to a plain `/login`.
pub fn login_path_from(origin: &str) -> String {
    if origin.is_empty() || origin == "/" {
        "/login".to_owned()
    } else {
        format!("/login?from={origin}")
    }
}

/// Redirect to login whenever no session is present, keeping the current
/// path as the post-login destination.
pub fn install_protected<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let location = use_location();
    Effect::new(move || {
        if protected_decision(session.get().is_authenticated()) == GuardDecision::ToLogin {
            let origin = location.pathname.get_untracked();
            navigate(&login_path_from(&origin), NavigateOptions::default());
        }
    });
}

/// Redirect away whenever a session is already present. The destination is
/// re-evaluated per navigation so login can honor a preserved `from` path;
/// pages without one pass `|| "/".to_owned()`.
pub fn install_public<F, D>(session: RwSignal<SessionState>, navigate: F, destination: D)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
    D: Fn() -> String + 'static,
{
    Effect::new(move || {
        if public_decision(session.get().is_authenticated()) == GuardDecision::ToHome {
            navigate(&destination(), NavigateOptions::default());
        }
    });
}

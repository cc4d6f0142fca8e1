//! Shared auth routing helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes apply identical unauthenticated redirect behavior through
//! `guard_decision`, which `RequireAuth` evaluates once on mount.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::state::session::SessionState;

/// Route of the login screen.
pub const LOGIN_ROUTE: &str = "/login";
/// Route of the register screen.
pub const REGISTER_ROUTE: &str = "/register";
/// Protected home route; auth forms land here on success.
pub const HOME_ROUTE: &str = "/";

/// Outcome of the route-guard check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Authorized,
    RedirectToLogin,
}

/// Authorize only when a non-empty token is stored and the session has a user.
#[must_use]
pub fn guard_decision(token: Option<&str>, session: &SessionState) -> GuardDecision {
    let has_token = token.is_some_and(|t| !t.is_empty());
    if has_token && session.is_authenticated() {
        GuardDecision::Authorized
    } else {
        GuardDecision::RedirectToLogin
    }
}

/// Whether guarded children may render; `None` means the check has not run.
#[must_use]
pub fn renders_children(decision: Option<GuardDecision>) -> bool {
    decision == Some(GuardDecision::Authorized)
}

//! Access decisions for protected views.

use tracing::debug;

use crate::SessionStore;

/// Outcome of an access check for a protected view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Render the requested view.
    Allow,
    /// Send the visitor to the login view instead.
    RedirectToLogin,
}

/// Decide whether the current session may enter a protected view.
///
/// Evaluated fresh on every protected navigation, never cached. A token in
/// durable storage is trusted even when the in-memory session has none:
/// the persisted login keeps working until an API call rejects it, at
/// which point the normal error path lands the user on login.
pub fn evaluate_access(store: &SessionStore) -> GateDecision {
    if store.token().is_some() {
        return GateDecision::Allow;
    }

    if store.has_persisted_token() {
        debug!("Admitting via persisted token; in-memory session has none");
        return GateDecision::Allow;
    }

    GateDecision::RedirectToLogin
}

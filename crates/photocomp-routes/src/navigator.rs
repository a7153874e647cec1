//! History-aware navigation guarded by the session gate.

use std::sync::Arc;

use photocomp_session::{evaluate_access, GateDecision, SessionStore};
use tracing::{debug, info};

use crate::route::Route;

/// What a navigation attempt did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The requested route was entered.
    Rendered,
    /// The gate denied a protected route and `Login` was entered instead.
    RedirectedToLogin {
        /// The route that was denied.
        from: Route,
    },
}

/// Client-side navigator: a history stack with the gate at its door.
///
/// A denied protected route never enters the history; `Login` is pushed
/// in its place. Going back from that login view lands on wherever the
/// user was before, never on the protected view itself.
pub struct Navigator {
    store: Arc<SessionStore>,
    history: Vec<Route>,
}

impl Navigator {
    /// New navigator showing `Home`.
    pub fn new(store: Arc<SessionStore>) -> Self {
        Self {
            store,
            history: vec![Route::Home],
        }
    }

    /// Enter a route, consulting the gate for protected ones.
    ///
    /// The decision is computed on every call, never cached, so a session
    /// change between navigations takes effect immediately.
    pub fn navigate(&mut self, route: Route) -> Outcome {
        if route.is_protected() {
            if let GateDecision::RedirectToLogin = evaluate_access(&self.store) {
                info!(denied = %route, "Protected route denied, redirecting to login");
                self.history.push(Route::Login);
                return Outcome::RedirectedToLogin { from: route };
            }
        }

        debug!(route = %route, "Navigating");
        self.history.push(route);
        Outcome::Rendered
    }

    /// Go back one entry. `None` (and no movement) at the history root.
    pub fn back(&mut self) -> Option<&Route> {
        if self.history.len() <= 1 {
            return None;
        }
        self.history.pop();
        self.history.last()
    }

    /// The route currently shown.
    pub fn current(&self) -> &Route {
        self.history.last().expect("history begins at Home")
    }

    /// Routes entered so far, oldest first.
    pub fn history(&self) -> &[Route] {
        &self.history
    }

    /// The session store this navigator consults.
    pub fn store(&self) -> &Arc<SessionStore> {
        &self.store
    }
}

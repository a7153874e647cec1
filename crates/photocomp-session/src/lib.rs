//! # PhotoComp Session
//!
//! The client's authoritative session state and the access gate for
//! protected views.
//!
//! [`SessionStore`] keeps one in-memory copy of the signed-in user and
//! bearer token, writes every change through to durable storage, and
//! rehydrates from storage exactly once per process. [`evaluate_access`]
//! is the route-guard decision consumed by navigation.

mod gate;
mod store;

pub use gate::{evaluate_access, GateDecision};
pub use store::{SessionCallback, SessionSnapshot, SessionStore};

use photocomp_storage::StorageError;
use thiserror::Error;

/// Error type for session operations.
#[derive(Error, Debug)]
pub enum SessionError {
    /// Durable storage failed underneath the session
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

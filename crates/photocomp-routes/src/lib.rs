//! # PhotoComp Routes
//!
//! The client's route table and a history-aware navigator.
//!
//! [`Route`] names every view the client can show and maps each one to
//! and from its URL path. [`Navigator`] walks those routes with a
//! browser-style history stack, asking the session gate before entering
//! a protected view; a denied view is replaced by `Login` so the back
//! button can never land on it.

mod navigator;
mod route;

pub use navigator::{Navigator, Outcome};
pub use route::Route;

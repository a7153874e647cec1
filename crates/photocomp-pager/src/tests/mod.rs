//! Tests for the pagination engine.
//!
//! Organized by behavior:
//!
//! - `harness.rs`           - Scripted sources with call recording, entity fixtures
//! - `accumulation.rs`      - Page application, de-duplication, ordering
//! - `filtering.rs`         - Client-side search over accumulated items
//! - `loading_guard.rs`     - In-flight serialisation and load-more gating
//! - `failures.rs`          - Error absorption and recovery
//! - `dependent_loading.rs` - Parent/child passes, drain order, partial failure

mod dependent_loading;
mod failures;

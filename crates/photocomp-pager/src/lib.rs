//! # PhotoComp Pager
//!
//! Cursor-pagination engine behind the client's list views.
//!
//! ## Design principles
//!
//! - **Pure state, async edges**: [`PagedCollection`] is synchronous and
//!   I/O-free, so every transition is testable without a runtime.
//!   [`Loader`] and [`DependentLoader`] own the fetches and drive the
//!   transitions.
//! - **Failures land in state**: a fetch error becomes `last_error` on the
//!   collection instead of unwinding, so a view keeps showing the items it
//!   already has and the load-more control stays usable.
//! - **De-duplication by entity id**: first occurrence wins, arrival order
//!   is preserved, and overlapping server pages are harmless.
//!
//! ## Example
//!
//! ```ignore
//! let mut loader = Loader::new(source);
//! loader.initial_load().await;
//! loader.set_search_term("summit");
//! for event in loader.state().filtered_items() {
//!     println!("{}", event.title);
//! }
//! ```
//!
//! ## Crate structure
//!
//! - `state` - [`PagedCollection`], [`Page`], [`ApplyMode`]
//! - `loader` - [`PageSource`] and the single-collection [`Loader`]
//! - `dependent` - [`ChildSource`], [`ChildCursor`], and the two-level
//!   [`DependentLoader`] (parents with their children)

mod dependent;
mod loader;
mod state;

pub use dependent::{ChildCursor, ChildSource, DependentLoader};
pub use loader::{Loader, PageSource};
pub use state::{ApplyMode, Page, PagedCollection};

#[cfg(test)]
mod tests;

//! Async orchestration over a single paged source.

use std::fmt::Display;

use async_trait::async_trait;
use photocomp_types::{CollectionItem, ContinuationToken};
use tracing::debug;

use crate::{ApplyMode, Page, PagedCollection};

/// A cursor-paginated endpoint a loader can fetch from.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Entity the source pages over.
    type Item: CollectionItem + Send;
    /// Source failure; only its message survives into collection state.
    type Error: Display + Send;

    /// Fetch one page. A `None` cursor asks for the first page.
    async fn fetch_page(
        &self,
        cursor: Option<&ContinuationToken>,
    ) -> Result<Page<Self::Item>, Self::Error>;
}

/// Drives a [`PagedCollection`] against a [`PageSource`].
///
/// Fetch failures never propagate out of the loader: they land in the
/// collection's `last_error` and callers read them from there. The loader
/// is owned by the view task that created it; abandoning the view drops
/// the loader and any fetch still in flight with it.
pub struct Loader<S: PageSource> {
    source: S,
    state: PagedCollection<S::Item>,
}

impl<S: PageSource> Loader<S> {
    /// New loader over an empty collection.
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: PagedCollection::new(),
        }
    }

    /// The one first-page fetch a view performs when it mounts.
    pub async fn initial_load(&mut self) {
        self.load_first_page().await;
    }

    /// Re-fetch the first page in place.
    ///
    /// Accumulation restarts from the fresh page; the search term
    /// survives, so a timer-driven refresh never discards what the user
    /// typed.
    pub async fn refresh(&mut self) {
        self.load_first_page().await;
    }

    /// Fetch the next page when one exists and nothing is in flight.
    /// Otherwise returns without performing any I/O.
    pub async fn load_more(&mut self) {
        let Some(token) = self.state.begin_load_more() else {
            debug!("load_more skipped: in flight or exhausted");
            return;
        };

        match self.source.fetch_page(Some(&token)).await {
            Ok(page) => self.state.apply_page(ApplyMode::Append, page),
            Err(e) => self.state.apply_failure(e.to_string()),
        }
    }

    /// Update the client-side filter term.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.state.set_search_term(term);
    }

    /// Drop accumulated state for a new identifying parameter.
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Read access to the collection state.
    pub fn state(&self) -> &PagedCollection<S::Item> {
        &self.state
    }

    /// The source this loader fetches from.
    pub fn source(&self) -> &S {
        &self.source
    }

    async fn load_first_page(&mut self) {
        if !self.state.begin_load() {
            debug!("first-page load skipped: in flight");
            return;
        }

        match self.source.fetch_page(None).await {
            Ok(page) => self.state.apply_page(ApplyMode::Replace, page),
            Err(e) => self.state.apply_failure(e.to_string()),
        }
    }
}

//! Two-level pagination: a parent collection with children per parent.

use std::collections::{HashMap, HashSet};
use std::fmt::Display;

use async_trait::async_trait;
use futures_util::future::join_all;
use photocomp_types::{CollectionItem, ContinuationToken};
use tracing::{debug, warn};

use crate::{ApplyMode, Page, PageSource, PagedCollection};

/// A child endpoint fetched once per parent page position.
#[async_trait]
pub trait ChildSource: Send + Sync {
    /// Entity the child pages carry.
    type Child: CollectionItem + Send;
    /// Source failure; only its message survives into loader state.
    type Error: Display + Send;

    /// Fetch one page of children for the given parent. A `None` cursor
    /// asks for the parent's first child page.
    async fn fetch_children(
        &self,
        parent_id: &str,
        cursor: Option<&ContinuationToken>,
    ) -> Result<Page<Self::Child>, Self::Error>;

    /// Parent id a child belongs to.
    fn parent_id_of(child: &Self::Child) -> &str;
}

/// Paging position within one parent's children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChildCursor {
    /// No child page has landed yet: a fresh parent, or one whose fetch
    /// failed and will be retried.
    NotFetched,
    /// More child pages follow this token.
    More(ContinuationToken),
    /// The server reported no further children.
    Exhausted,
}

impl ChildCursor {
    /// Whether this parent still owes children.
    pub fn pending(&self) -> bool {
        !matches!(self, ChildCursor::Exhausted)
    }
}

/// Drives a parent collection and the children hanging off each parent.
///
/// A load-more pass drains pending child pages before asking for more
/// parents: only when every tracked parent is exhausted does the next
/// parent page get fetched, followed by first child pages for the parents
/// it introduced. Child fetches within a pass run concurrently and each
/// parent's outcome is applied on its own, so one failing parent never
/// blocks the others.
pub struct DependentLoader<P, C>
where
    P: PageSource,
    C: ChildSource,
{
    parent_source: P,
    child_source: C,
    parents: PagedCollection<P::Item>,
    /// Per-parent paging position, keyed by parent id.
    child_cursors: HashMap<String, ChildCursor>,
    /// Aggregated children across all parents, unique by id, in arrival
    /// order.
    children: Vec<C::Child>,
    /// Serialises whole passes; a pass spans parent and child fetches.
    in_flight: bool,
    /// Per-parent failures from the most recent pass.
    child_errors: Vec<String>,
}

impl<P, C> DependentLoader<P, C>
where
    P: PageSource,
    C: ChildSource,
{
    /// New loader with nothing accumulated.
    pub fn new(parent_source: P, child_source: C) -> Self {
        Self {
            parent_source,
            child_source,
            parents: PagedCollection::new(),
            child_cursors: HashMap::new(),
            children: Vec::new(),
            in_flight: false,
            child_errors: Vec::new(),
        }
    }

    /// First parent page, then first child pages for every parent.
    ///
    /// A parent-page failure abandons the pass with the error recorded on
    /// the parent collection. Child failures are tolerated per parent.
    pub async fn initial_load(&mut self) {
        if self.in_flight {
            debug!("initial_load skipped: pass in flight");
            return;
        }
        if !self.parents.begin_load() {
            return;
        }
        self.in_flight = true;
        self.child_errors.clear();

        match self.parent_source.fetch_page(None).await {
            Ok(page) => {
                self.parents.apply_page(ApplyMode::Replace, page);
                self.child_cursors.clear();
                self.children.clear();
                for parent in self.parents.items() {
                    self.child_cursors
                        .insert(parent.item_id().to_string(), ChildCursor::NotFetched);
                }

                let jobs = self.pending_child_fetches();
                self.fetch_child_pages(jobs).await;
            }
            Err(e) => {
                self.parents.apply_failure(e.to_string());
            }
        }

        self.in_flight = false;
    }

    /// One load-more pass.
    ///
    /// Step 1: fetch the next child page for every parent still owing
    /// children. Step 2, only when step 1 had nothing to do: fetch the
    /// next parent page and first child pages for its new parents. A
    /// second call while a pass runs returns without any I/O.
    pub async fn load_more(&mut self) {
        if self.in_flight {
            debug!("load_more skipped: pass in flight");
            return;
        }
        self.in_flight = true;
        self.child_errors.clear();

        let jobs = self.pending_child_fetches();
        if !jobs.is_empty() {
            self.fetch_child_pages(jobs).await;
            self.in_flight = false;
            return;
        }

        // Children drained; bring in more parents if the server has them.
        let Some(token) = self.parents.begin_load_more() else {
            debug!("load_more pass had nothing to fetch");
            self.in_flight = false;
            return;
        };

        match self.parent_source.fetch_page(Some(&token)).await {
            Ok(page) => {
                self.parents.apply_page(ApplyMode::Append, page);

                // Track only parents not seen before, so a duplicated
                // parent never gets its first child page fetched twice.
                let mut fresh = Vec::new();
                for parent in self.parents.items() {
                    if !self.child_cursors.contains_key(parent.item_id()) {
                        self.child_cursors
                            .insert(parent.item_id().to_string(), ChildCursor::NotFetched);
                        fresh.push((parent.item_id().to_string(), None));
                    }
                }
                self.fetch_child_pages(fresh).await;
            }
            Err(e) => {
                self.parents.apply_failure(e.to_string());
            }
        }

        self.in_flight = false;
    }

    /// Whether anything remains to load: another parent page, or any
    /// parent still owing children.
    pub fn has_more(&self) -> bool {
        self.parents.has_more() || self.child_cursors.values().any(|cursor| cursor.pending())
    }

    /// The parent collection.
    pub fn parents(&self) -> &PagedCollection<P::Item> {
        &self.parents
    }

    /// All aggregated children, unique by id, in arrival order.
    pub fn children(&self) -> &[C::Child] {
        &self.children
    }

    /// Children belonging to one parent, in arrival order.
    pub fn children_of(&self, parent_id: &str) -> Vec<&C::Child> {
        self.children
            .iter()
            .filter(|child| C::parent_id_of(child) == parent_id)
            .collect()
    }

    /// Paging position for one parent, if it is tracked.
    pub fn child_cursor(&self, parent_id: &str) -> Option<&ChildCursor> {
        self.child_cursors.get(parent_id)
    }

    /// Whether a pass is currently running.
    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    /// Per-parent failure messages from the most recent pass.
    pub fn child_errors(&self) -> &[String] {
        &self.child_errors
    }

    /// The source parent pages come from.
    pub fn parent_source(&self) -> &P {
        &self.parent_source
    }

    /// The source child pages come from.
    pub fn child_source(&self) -> &C {
        &self.child_source
    }

    /// Parents still owing children, with the cursor to fetch each at.
    /// Ordered by parent arrival order so application stays deterministic.
    fn pending_child_fetches(&self) -> Vec<(String, Option<ContinuationToken>)> {
        let mut jobs = Vec::new();
        for parent in self.parents.items() {
            match self.child_cursors.get(parent.item_id()) {
                Some(ChildCursor::NotFetched) => {
                    jobs.push((parent.item_id().to_string(), None));
                }
                Some(ChildCursor::More(token)) => {
                    jobs.push((parent.item_id().to_string(), Some(token.clone())));
                }
                Some(ChildCursor::Exhausted) | None => {}
            }
        }
        jobs
    }

    /// Fetch the given child pages concurrently, then fold each parent's
    /// outcome into the aggregate one parent at a time.
    async fn fetch_child_pages(&mut self, jobs: Vec<(String, Option<ContinuationToken>)>) {
        if jobs.is_empty() {
            return;
        }

        let source = &self.child_source;
        let fetches = jobs.iter().map(|(parent_id, cursor)| async move {
            source.fetch_children(parent_id, cursor.as_ref()).await
        });
        let results = join_all(fetches).await;

        for ((parent_id, _), result) in jobs.iter().zip(results) {
            match result {
                Ok(page) => self.apply_child_page(parent_id, page),
                Err(e) => {
                    // Cursor stays as it was; the next pass retries it.
                    warn!(parent_id = %parent_id, "Child page fetch failed: {}", e);
                    self.child_errors.push(format!("{}: {}", parent_id, e));
                }
            }
        }
    }

    fn apply_child_page(&mut self, parent_id: &str, page: Page<C::Child>) {
        let mut seen: HashSet<String> = self
            .children
            .iter()
            .map(|child| child.item_id().to_string())
            .collect();
        for child in page.entities {
            if seen.insert(child.item_id().to_string()) {
                self.children.push(child);
            }
        }

        let cursor = match page.next {
            Some(token) => ChildCursor::More(token),
            None => ChildCursor::Exhausted,
        };
        self.child_cursors.insert(parent_id.to_string(), cursor);
    }
}

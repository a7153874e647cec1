//! Pure pagination state.

use std::collections::HashSet;

use photocomp_types::{CollectionItem, ContinuationToken};

/// One page of entities as returned by a paged endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub entities: Vec<T>,
    pub next: Option<ContinuationToken>,
}

impl<T> Page<T> {
    /// A page carrying entities and the cursor for the page after it.
    pub fn new(entities: Vec<T>, next: Option<ContinuationToken>) -> Self {
        Self { entities, next }
    }

    /// A page with no continuation: the collection ends here.
    pub fn last(entities: Vec<T>) -> Self {
        Self {
            entities,
            next: None,
        }
    }
}

/// How an arriving page combines with what is already accumulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyMode {
    /// First page or refresh: the page becomes the whole collection.
    Replace,
    /// Later pages: entities join the end, duplicates dropped.
    Append,
}

/// Accumulated state of one cursor-paginated collection.
///
/// Purely synchronous; all I/O lives in the loaders. The `is_loading`
/// flag serialises loads: a transition method refuses to start a second
/// load while one is marked in flight.
#[derive(Debug)]
pub struct PagedCollection<T: CollectionItem> {
    items: Vec<T>,
    continuation: Option<ContinuationToken>,
    is_loading: bool,
    last_error: Option<String>,
    search_term: String,
}

impl<T: CollectionItem> PagedCollection<T> {
    /// Empty collection: no items, no cursor, not loading.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            continuation: None,
            is_loading: false,
            last_error: None,
            search_term: String::new(),
        }
    }

    // ==========================================
    // Transitions
    // ==========================================

    /// Mark a first-page or refresh load as started.
    ///
    /// Returns `false` while another load is in flight; the caller must
    /// then skip its fetch entirely.
    pub fn begin_load(&mut self) -> bool {
        if self.is_loading {
            return false;
        }
        self.is_loading = true;
        self.last_error = None;
        true
    }

    /// Mark a load-more as started, yielding the cursor to fetch with.
    ///
    /// Yields `None` without any state change while a load is in flight
    /// or the collection is exhausted.
    pub fn begin_load_more(&mut self) -> Option<ContinuationToken> {
        if self.is_loading {
            return None;
        }
        let token = self.continuation.clone()?;
        self.is_loading = true;
        self.last_error = None;
        Some(token)
    }

    /// Fold a fetched page into the collection.
    ///
    /// Entities whose id is already present are dropped; first occurrence
    /// wins, including within the incoming page itself. The page's
    /// continuation token is stored verbatim (`None` marks exhaustion)
    /// and the in-flight flag clears.
    pub fn apply_page(&mut self, mode: ApplyMode, page: Page<T>) {
        if mode == ApplyMode::Replace {
            self.items.clear();
        }

        let mut seen: HashSet<String> = self
            .items
            .iter()
            .map(|item| item.item_id().to_string())
            .collect();
        for entity in page.entities {
            if seen.insert(entity.item_id().to_string()) {
                self.items.push(entity);
            }
        }

        self.continuation = page.next;
        self.is_loading = false;
    }

    /// Record a failed load.
    ///
    /// Items and cursor stay untouched, so whatever was on screen stays
    /// there and the load-more control remains available.
    pub fn apply_failure(&mut self, message: impl Into<String>) {
        self.last_error = Some(message.into());
        self.is_loading = false;
    }

    /// Update the search term. Never fetches; never mutates items.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Back to empty. For when the view's identifying parameter changes
    /// (a different parent entity, say), not for refreshes.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    // ==========================================
    // Reads
    // ==========================================

    /// All accumulated items, unique by id, in first-seen order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Items whose search fields contain the current term.
    ///
    /// Case-insensitive substring match against each field; a blank term
    /// selects everything. Derived purely from `(items, search_term)`.
    pub fn filtered_items(&self) -> Vec<&T> {
        let needle = self.search_term.trim().to_lowercase();
        if needle.is_empty() {
            return self.items.iter().collect();
        }

        self.items
            .iter()
            .filter(|item| {
                item.search_fields()
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
            })
            .collect()
    }

    /// Cursor for the next page, when the server reported one.
    pub fn continuation(&self) -> Option<&ContinuationToken> {
        self.continuation.as_ref()
    }

    /// Whether the server reported more pages.
    pub fn has_more(&self) -> bool {
        self.continuation.is_some()
    }

    /// Whether a load is marked in flight.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Message of the most recent failed load, cleared when a load starts.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Current search term.
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Number of accumulated items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing has accumulated.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: CollectionItem> Default for PagedCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

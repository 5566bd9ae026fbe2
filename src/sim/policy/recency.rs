//! Recency-timestamp table shared by the LRU and MRU policies.
//!
//! Maps each resident page to the logical time of its most recent reference.
//! The logical clock is the count of references processed so far (1-based),
//! so timestamps are unique and strictly increasing.

use std::collections::HashMap;

use crate::common::PageId;

/// Page -> last-use timestamp for the current resident set.
///
/// Invariant: the table's domain always equals the resident set. Every hit
/// and every admission stamps the page; every eviction removes its entry.
#[derive(Debug, Default)]
pub(crate) struct RecencyTable {
    last_use: HashMap<PageId, u64>,
}

impl RecencyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            last_use: HashMap::new(),
        }
    }

    /// Stamp a page with the current logical time.
    pub fn touch(&mut self, page: PageId, now: u64) {
        self.last_use.insert(page, now);
    }

    /// Last-use timestamp of a resident page.
    ///
    /// # Panics
    /// Panics if the page has no entry; the table must cover the whole
    /// resident set.
    pub fn stamp_of(&self, page: PageId) -> u64 {
        *self
            .last_use
            .get(&page)
            .unwrap_or_else(|| panic!("no recency entry for resident page {page}"))
    }

    /// Drop an evicted page's entry.
    pub fn forget(&mut self, page: PageId) {
        let removed = self.last_use.remove(&page);
        debug_assert!(removed.is_some(), "forgot page {page} with no entry");
    }

    /// Number of tracked pages.
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.last_use.len()
    }

    /// Empty the table for a fresh run.
    pub fn clear(&mut self) {
        self.last_use.clear();
    }
}

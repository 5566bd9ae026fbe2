//! FrameSet - the fixed-capacity set of resident pages.
//!
//! A [`FrameSet`] tracks which pages currently occupy frames, in insertion
//! order. It enforces two invariants:
//! - at most `capacity` pages are resident at any time
//! - each page appears at most once

use crate::common::PageId;

/// Fixed-capacity ordered container of resident pages.
///
/// Order is arrival order: a newly admitted page goes to the end, and
/// evicting a page preserves the relative order of the rest. The position of
/// a page within the ordering is its frame index for reporting purposes.
///
/// Callers are responsible for evicting before inserting into a full set;
/// violating that is a bug in the caller, not a recoverable error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSet {
    /// Number of frames (immutable after construction).
    capacity: usize,

    /// Resident pages in insertion order.
    resident: Vec<PageId>,
}

impl FrameSet {
    /// Create an empty frame set with the given number of frames.
    ///
    /// # Panics
    /// Panics if `capacity` is 0. Public construction goes through
    /// [`Simulator::new`](crate::sim::Simulator::new), which rejects zero
    /// capacity as an error before reaching this point.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be > 0");

        Self {
            capacity,
            resident: Vec::with_capacity(capacity),
        }
    }

    /// Number of frames.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of resident pages.
    #[inline]
    pub fn len(&self) -> usize {
        self.resident.len()
    }

    /// Check if no pages are resident.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.resident.is_empty()
    }

    /// Check if every frame is occupied.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.resident.len() == self.capacity
    }

    /// Check whether a page is resident.
    #[inline]
    pub fn contains(&self, page: PageId) -> bool {
        self.resident.contains(&page)
    }

    /// Frame index of a resident page, if present.
    ///
    /// Used for reporting only, never for victim selection.
    pub fn index_of(&self, page: PageId) -> Option<usize> {
        self.resident.iter().position(|&p| p == page)
    }

    /// Admit a page into a free frame, at the end of the ordering.
    ///
    /// # Panics
    /// Panics if the set is full or the page is already resident.
    pub fn insert(&mut self, page: PageId) {
        assert!(!self.is_full(), "insert into full frame set");
        assert!(!self.contains(page), "page {page} already resident");

        self.resident.push(page);
    }

    /// Remove a resident page, preserving the order of the rest.
    ///
    /// # Panics
    /// Panics if the page is not resident.
    pub fn evict(&mut self, page: PageId) {
        let pos = self
            .index_of(page)
            .unwrap_or_else(|| panic!("evicted page {page} not resident"));

        self.resident.remove(pos);
    }

    /// Iterate over resident pages in frame order.
    pub fn iter(&self) -> impl Iterator<Item = PageId> + '_ {
        self.resident.iter().copied()
    }

    /// Resident pages as a slice, in frame order.
    #[inline]
    pub fn as_slice(&self) -> &[PageId] {
        &self.resident
    }

    /// Copy of the current resident set, for trace snapshots.
    pub fn snapshot(&self) -> Vec<PageId> {
        self.resident.clone()
    }

    /// Empty the set for a fresh run. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.resident.clear();
    }
}

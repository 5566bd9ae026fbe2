//! FIFO (First-In-First-Out) admission queue.
//!
//! Bookkeeping for the FIFO policy: pages are queued in arrival order and
//! the oldest arrival is always the victim. Hits do not touch the queue, so
//! re-referencing a page never saves it from eviction.

use std::collections::VecDeque;

use crate::common::PageId;

/// Queue of resident pages in arrival order (front = oldest).
///
/// Invariant: the queue contents always equal the resident set of the
/// frame set it serves.
#[derive(Debug, Default)]
pub(crate) struct AdmissionQueue {
    queue: VecDeque<PageId>,
}

impl AdmissionQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    /// Record a newly admitted page at the back of the queue.
    pub fn admit(&mut self, page: PageId) {
        debug_assert!(!self.queue.contains(&page), "page {page} already queued");
        self.queue.push_back(page);
    }

    /// The oldest resident page - the FIFO victim.
    ///
    /// # Panics
    /// Panics if the queue is empty; victim selection only happens when the
    /// frame set is full.
    pub fn oldest(&self) -> PageId {
        *self
            .queue
            .front()
            .expect("victim selection on empty admission queue")
    }

    /// Drop an evicted page from the queue.
    ///
    /// FIFO only ever evicts the front, so this pops it.
    pub fn release(&mut self, page: PageId) {
        let front = self.queue.pop_front();
        assert_eq!(front, Some(page), "FIFO eviction out of arrival order");
    }

    /// Number of queued pages.
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Empty the queue for a fresh run.
    pub fn clear(&mut self) {
        self.queue.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pid(id: u32) -> PageId {
        PageId::new(id)
    }

    #[test]
    fn test_victims_follow_arrival_order() {
        let mut queue = AdmissionQueue::new();
        queue.admit(pid(3));
        queue.admit(pid(1));
        queue.admit(pid(2));

        assert_eq!(queue.oldest(), pid(3));
        queue.release(pid(3));

        assert_eq!(queue.oldest(), pid(1));
        queue.release(pid(1));

        assert_eq!(queue.oldest(), pid(2));
    }

    #[test]
    fn test_release_shrinks_queue() {
        let mut queue = AdmissionQueue::new();
        queue.admit(pid(1));
        queue.admit(pid(2));
        assert_eq!(queue.len(), 2);

        queue.release(pid(1));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    #[should_panic(expected = "empty admission queue")]
    fn test_oldest_on_empty_panics() {
        let queue = AdmissionQueue::new();
        queue.oldest();
    }

    #[test]
    fn test_clear() {
        let mut queue = AdmissionQueue::new();
        queue.admit(pid(1));
        queue.clear();
        assert_eq!(queue.len(), 0);
    }
}

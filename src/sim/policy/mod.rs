//! Eviction policies and their bookkeeping state.
//!
//! Implements:
//! - [`Policy::Fifo`] - evict by arrival order (admission queue)
//! - [`Policy::Lru`] - evict the least recently used page (recency table)
//! - [`Policy::Mru`] - evict the most recently used page (recency table)
//!
//! The stepping loop lives in [`Simulator`](crate::sim::Simulator) and is
//! shared by all three; only the bookkeeping and victim selection vary, so
//! the policy-specific state is a tagged enum rather than three loops.

mod fifo;
mod lru;
mod mru;
mod recency;

use std::fmt;

use fifo::AdmissionQueue;
use recency::RecencyTable;

use crate::common::PageId;
use crate::sim::frame_set::FrameSet;

/// The eviction policy of a simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    /// First-In-First-Out: evict the oldest arrival.
    Fifo,
    /// Least-Recently-Used: evict the page idle the longest.
    Lru,
    /// Most-Recently-Used: evict the page touched most recently.
    Mru,
}

impl Policy {
    /// All policies, in the fixed evaluation order used for comparisons.
    pub const ALL: [Policy; 3] = [Policy::Fifo, Policy::Lru, Policy::Mru];

    /// Canonical upper-case name.
    pub fn name(&self) -> &'static str {
        match self {
            Policy::Fifo => "FIFO",
            Policy::Lru => "LRU",
            Policy::Mru => "MRU",
        }
    }

    /// Fresh bookkeeping state for this policy.
    pub(crate) fn new_state(&self) -> PolicyState {
        match self {
            Policy::Fifo => PolicyState::Fifo(AdmissionQueue::new()),
            Policy::Lru => PolicyState::Lru(RecencyTable::new()),
            Policy::Mru => PolicyState::Mru(RecencyTable::new()),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Policy-specific auxiliary state, kept in lockstep with the frame set.
#[derive(Debug)]
pub(crate) enum PolicyState {
    Fifo(AdmissionQueue),
    Lru(RecencyTable),
    Mru(RecencyTable),
}

impl PolicyState {
    /// A resident page was referenced again.
    ///
    /// FIFO ignores hits entirely; LRU/MRU refresh the page's timestamp.
    pub fn on_hit(&mut self, page: PageId, now: u64) {
        match self {
            PolicyState::Fifo(_) => {}
            PolicyState::Lru(table) | PolicyState::Mru(table) => table.touch(page, now),
        }
    }

    /// A page was admitted into a frame.
    pub fn on_admit(&mut self, page: PageId, now: u64) {
        match self {
            PolicyState::Fifo(queue) => queue.admit(page),
            PolicyState::Lru(table) | PolicyState::Mru(table) => table.touch(page, now),
        }
    }

    /// A page was evicted from a frame.
    pub fn on_evict(&mut self, page: PageId) {
        match self {
            PolicyState::Fifo(queue) => queue.release(page),
            PolicyState::Lru(table) | PolicyState::Mru(table) => table.forget(page),
        }
    }

    /// Choose the page to evict from a full frame set.
    pub fn select_victim(&self, frames: &FrameSet) -> PageId {
        match self {
            PolicyState::Fifo(queue) => queue.oldest(),
            PolicyState::Lru(table) => lru::select_victim(frames, table),
            PolicyState::Mru(table) => mru::select_victim(frames, table),
        }
    }

    /// Empty the bookkeeping for a fresh run.
    pub fn reset(&mut self) {
        match self {
            PolicyState::Fifo(queue) => queue.clear(),
            PolicyState::Lru(table) | PolicyState::Mru(table) => table.clear(),
        }
    }
}

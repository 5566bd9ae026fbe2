//! Simulator - the shared stepping loop over a reference stream.

use crate::common::{Error, PageId, Result};
use crate::sim::frame_set::FrameSet;
use crate::sim::policy::{Policy, PolicyState};
use crate::sim::run_report::RunReport;

/// Replays reference streams against a [`FrameSet`] under one policy.
///
/// One linear pass per run: each reference either hits (resident, only
/// recency bookkeeping changes) or faults (victim evicted if the set is
/// full, page admitted, snapshot pushed to the trace). The loop is identical
/// for all policies; only the bookkeeping behind [`PolicyState`] differs.
///
/// The simulator is single-threaded and synchronous. Each instance owns its
/// frame set and bookkeeping outright, so runs under different policies use
/// separate instances and are directly comparable.
///
/// # Example
/// ```
/// use framesim::{PageId, Policy, Simulator};
///
/// let refs: Vec<PageId> = [1u32, 2, 3, 1, 4].iter().map(|&p| PageId::new(p)).collect();
/// let mut sim = Simulator::new(Policy::Lru, 3).unwrap();
/// let report = sim.run(&refs);
///
/// assert_eq!(report.fault_count, 4);
/// assert!(report.is_resident(PageId::new(4)));
/// ```
#[derive(Debug)]
pub struct Simulator {
    /// Eviction policy (immutable after construction).
    policy: Policy,

    /// Resident pages.
    frames: FrameSet,

    /// Policy-specific bookkeeping (admission queue or recency table).
    state: PolicyState,

    /// Logical clock: references processed so far, 1-based after the first.
    clock: u64,

    /// Page faults so far.
    fault_count: u64,

    /// Hits so far.
    hit_count: u64,

    /// One resident-set snapshot per fault.
    trace: Vec<Vec<PageId>>,
}

impl Simulator {
    /// Create a simulator with the given policy and frame count.
    ///
    /// # Errors
    /// Returns [`Error::InvalidCapacity`] if `capacity` is 0.
    pub fn new(policy: Policy, capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity(capacity));
        }

        Ok(Self {
            policy,
            frames: FrameSet::new(capacity),
            state: policy.new_state(),
            clock: 0,
            fault_count: 0,
            hit_count: 0,
            trace: Vec::new(),
        })
    }

    /// The policy this simulator evicts under.
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Number of frames.
    pub fn capacity(&self) -> usize {
        self.frames.capacity()
    }

    /// Clear all run state: frames, bookkeeping, clock, counters, trace.
    ///
    /// After a reset, running the same reference stream reproduces the
    /// previous run exactly.
    pub fn reset(&mut self) {
        self.frames.clear();
        self.state.reset();
        self.clock = 0;
        self.fault_count = 0;
        self.hit_count = 0;
        self.trace.clear();
    }

    /// Simulate one full pass over a reference stream.
    ///
    /// Resets first, so each call is an independent run. Terminates after
    /// the last reference; there are no other exit paths.
    pub fn run(&mut self, references: &[PageId]) -> RunReport {
        self.reset();

        for &page in references {
            self.step(page);
        }

        RunReport {
            policy: self.policy,
            capacity: self.frames.capacity(),
            references: references.len(),
            fault_count: self.fault_count,
            hit_count: self.hit_count,
            final_resident: self.frames.snapshot(),
            trace: self.trace.clone(),
        }
    }

    /// Process one reference.
    fn step(&mut self, page: PageId) {
        self.clock += 1;

        if self.frames.contains(page) {
            self.hit_count += 1;
            self.state.on_hit(page, self.clock);
            return;
        }

        self.fault_count += 1;

        if self.frames.is_full() {
            let victim = self.state.select_victim(&self.frames);
            self.state.on_evict(victim);
            self.frames.evict(victim);
        }

        self.frames.insert(page);
        self.state.on_admit(page, self.clock);
        self.trace.push(self.frames.snapshot());
    }

    // ========================================================================
    // Queries against the current (post-run) state
    // ========================================================================

    /// Check whether a page is currently resident.
    pub fn is_resident(&self, page: PageId) -> bool {
        self.frames.contains(page)
    }

    /// Frame index of a resident page, if present.
    pub fn frame_of(&self, page: PageId) -> Option<usize> {
        self.frames.index_of(page)
    }

    /// Page faults in the current run.
    pub fn fault_count(&self) -> u64 {
        self.fault_count
    }

    /// Resident-set snapshots taken at each fault of the current run.
    pub fn trace(&self) -> &[Vec<PageId>] {
        &self.trace
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pids(ids: &[u32]) -> Vec<PageId> {
        ids.iter().map(|&p| PageId::new(p)).collect()
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let err = Simulator::new(Policy::Fifo, 0).unwrap_err();
        assert_eq!(err, Error::InvalidCapacity(0));
    }

    #[test]
    fn test_cold_misses_fill_frames() {
        let mut sim = Simulator::new(Policy::Fifo, 3).unwrap();
        let report = sim.run(&pids(&[1, 2, 3]));

        assert_eq!(report.fault_count, 3);
        assert_eq!(report.hit_count, 0);
        assert_eq!(report.final_resident, pids(&[1, 2, 3]));
    }

    #[test]
    fn test_hit_changes_nothing_but_bookkeeping() {
        let mut sim = Simulator::new(Policy::Lru, 3).unwrap();
        let report = sim.run(&pids(&[1, 2, 1, 1, 2]));

        assert_eq!(report.fault_count, 2);
        assert_eq!(report.hit_count, 3);
        // Hits never reorder the resident set or add snapshots.
        assert_eq!(report.final_resident, pids(&[1, 2]));
        assert_eq!(report.trace.len(), 2);
    }

    #[test]
    fn test_trace_matches_faults() {
        let mut sim = Simulator::new(Policy::Fifo, 2).unwrap();
        let report = sim.run(&pids(&[1, 2, 3]));

        assert_eq!(report.trace.len(), report.fault_count as usize);
        assert_eq!(report.trace[0], pids(&[1]));
        assert_eq!(report.trace[1], pids(&[1, 2]));
        assert_eq!(report.trace[2], pids(&[2, 3]));
    }

    #[test]
    fn test_fifo_evicts_by_arrival() {
        // Page 1 is hit right before the eviction but still goes first.
        let mut sim = Simulator::new(Policy::Fifo, 2).unwrap();
        let report = sim.run(&pids(&[1, 2, 1, 3]));

        assert_eq!(report.fault_count, 3);
        assert_eq!(report.final_resident, pids(&[2, 3]));
    }

    #[test]
    fn test_lru_evicts_stalest() {
        let mut sim = Simulator::new(Policy::Lru, 2).unwrap();
        let report = sim.run(&pids(&[1, 2, 1, 3]));

        // Page 2 is least recently used when 3 arrives.
        assert_eq!(report.final_resident, pids(&[1, 3]));
    }

    #[test]
    fn test_mru_evicts_freshest() {
        let mut sim = Simulator::new(Policy::Mru, 2).unwrap();
        let report = sim.run(&pids(&[1, 2, 1, 3]));

        // Page 1 is most recently used when 3 arrives.
        assert_eq!(report.final_resident, pids(&[2, 3]));
    }

    #[test]
    fn test_queries_after_run() {
        let mut sim = Simulator::new(Policy::Fifo, 2).unwrap();
        sim.run(&pids(&[1, 2, 3]));

        assert!(sim.is_resident(PageId::new(3)));
        assert_eq!(sim.frame_of(PageId::new(3)), Some(1));
        assert!(!sim.is_resident(PageId::new(1)));
        assert_eq!(sim.fault_count(), 3);
        assert_eq!(sim.trace().len(), 3);
    }

    #[test]
    fn test_rerun_is_idempotent() {
        let refs = pids(&[5, 1, 5, 2, 3, 1, 5]);
        let mut sim = Simulator::new(Policy::Mru, 2).unwrap();

        let first = sim.run(&refs);
        sim.reset();
        let second = sim.run(&refs);

        assert_eq!(first, second);
    }

    #[test]
    fn test_single_frame_thrashes() {
        let mut sim = Simulator::new(Policy::Lru, 1).unwrap();
        let report = sim.run(&pids(&[1, 2, 1, 2]));

        assert_eq!(report.fault_count, 4);
        assert_eq!(report.final_resident, pids(&[2]));
    }

    #[test]
    fn test_empty_stream() {
        let mut sim = Simulator::new(Policy::Fifo, 4).unwrap();
        let report = sim.run(&[]);

        assert_eq!(report.fault_count, 0);
        assert!(report.final_resident.is_empty());
        assert!(report.trace.is_empty());
    }
}

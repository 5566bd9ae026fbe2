//! Per-run simulation results.

use std::fmt;

use crate::common::PageId;
use crate::sim::policy::Policy;

/// Everything a single simulation run produced.
///
/// Unlike the [`Simulator`](crate::sim::Simulator), this is a plain value:
/// it can be cloned, compared, stored, and rendered after the simulator has
/// moved on to another run.
///
/// # Example
/// ```
/// use framesim::{PageId, Policy, Simulator};
///
/// let mut sim = Simulator::new(Policy::Fifo, 2).unwrap();
/// let report = sim.run(&[PageId::new(1), PageId::new(2), PageId::new(1)]);
/// assert_eq!(report.fault_count, 2);
/// assert_eq!(report.hit_count, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Policy the run was simulated under.
    pub policy: Policy,

    /// Number of frames.
    pub capacity: usize,

    /// Number of references processed.
    pub references: usize,

    /// Number of page faults (misses).
    pub fault_count: u64,

    /// Number of hits.
    pub hit_count: u64,

    /// Resident pages after the last reference, in frame order.
    pub final_resident: Vec<PageId>,

    /// One resident-set snapshot per fault, in processing order.
    pub trace: Vec<Vec<PageId>>,
}

impl RunReport {
    /// Check whether a page ended the run resident.
    pub fn is_resident(&self, page: PageId) -> bool {
        self.final_resident.contains(&page)
    }

    /// Final frame index of a page, if it ended the run resident.
    pub fn frame_of(&self, page: PageId) -> Option<usize> {
        self.final_resident.iter().position(|&p| p == page)
    }

    /// Fraction of references that faulted (0.0 to 1.0).
    pub fn fault_rate(&self) -> f64 {
        if self.references == 0 {
            0.0
        } else {
            self.fault_count as f64 / self.references as f64
        }
    }

    /// Fraction of references that hit (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        if self.references == 0 {
            0.0
        } else {
            self.hit_count as f64 / self.references as f64
        }
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} faults / {} references ({:.2}% fault rate)",
            self.policy,
            self.fault_count,
            self.references,
            self.fault_rate() * 100.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RunReport {
        RunReport {
            policy: Policy::Lru,
            capacity: 2,
            references: 10,
            fault_count: 4,
            hit_count: 6,
            final_resident: vec![PageId::new(3), PageId::new(7)],
            trace: vec![vec![PageId::new(3)], vec![PageId::new(3), PageId::new(7)]],
        }
    }

    #[test]
    fn test_residency_queries() {
        let report = sample();
        assert!(report.is_resident(PageId::new(7)));
        assert_eq!(report.frame_of(PageId::new(7)), Some(1));
        assert!(!report.is_resident(PageId::new(9)));
        assert_eq!(report.frame_of(PageId::new(9)), None);
    }

    #[test]
    fn test_rates() {
        let report = sample();
        assert_eq!(report.fault_rate(), 0.4);
        assert_eq!(report.hit_rate(), 0.6);
    }

    #[test]
    fn test_rates_empty_run() {
        let report = RunReport {
            references: 0,
            fault_count: 0,
            hit_count: 0,
            final_resident: vec![],
            trace: vec![],
            ..sample()
        };
        assert_eq!(report.fault_rate(), 0.0);
        assert_eq!(report.hit_rate(), 0.0);
    }

    #[test]
    fn test_display() {
        let display = format!("{}", sample());
        assert!(display.contains("LRU"));
        assert!(display.contains("4 faults"));
        assert!(display.contains("40.00%"));
    }
}

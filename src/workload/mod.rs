//! Named reference streams and cross-policy comparison.
//!
//! A [`Workload`] bundles a reference stream with a probe page whose final
//! residency is of interest. [`compare_policies`] runs every policy over the
//! same stream on fresh state so the fault counts are directly comparable.

use crate::common::{PageId, Result};
use crate::sim::{Policy, RunReport, Simulator};

/// Default frame count used by the builtin workloads.
pub const DEFAULT_FRAMES: usize = 8;

/// A named reference stream plus a page to probe after the run.
#[derive(Debug, Clone)]
pub struct Workload {
    /// Human-readable name ("Sequence A").
    pub name: &'static str,

    /// The reference stream, in processing order.
    pub references: Vec<PageId>,

    /// The page whose final residency the report highlights.
    pub probe: PageId,
}

impl Workload {
    /// Build a workload from raw page numbers.
    pub fn new(name: &'static str, references: &[u32], probe: u32) -> Self {
        Self {
            name,
            references: references.iter().map(|&p| PageId::new(p)).collect(),
            probe: PageId::new(probe),
        }
    }

    /// The three demonstration sequences.
    pub fn builtin() -> Vec<Workload> {
        vec![
            Workload::new(
                "Sequence A",
                &[4, 3, 25, 8, 19, 6, 25, 8, 16, 35, 45, 22, 8, 3, 16, 25, 7],
                7,
            ),
            Workload::new(
                "Sequence B",
                &[4, 5, 7, 9, 46, 45, 14, 4, 64, 7, 65, 2, 1, 6, 8, 45, 14, 11],
                11,
            ),
            Workload::new(
                "Sequence C",
                &[4, 6, 7, 8, 1, 6, 10, 15, 16, 4, 2, 1, 4, 6, 12, 15, 16, 11],
                11,
            ),
        ]
    }
}

/// Reports for one reference stream under every policy.
///
/// Reports are stored in [`Policy::ALL`] order.
#[derive(Debug, Clone)]
pub struct PolicyComparison {
    /// Frame count shared by all runs.
    pub capacity: usize,

    /// One report per policy, in evaluation order.
    pub reports: Vec<RunReport>,
}

impl PolicyComparison {
    /// The report with the fewest faults.
    ///
    /// Ties go to the policy encountered first in the evaluation order
    /// (FIFO, then LRU, then MRU).
    pub fn best(&self) -> &RunReport {
        self.reports
            .iter()
            .min_by_key(|r| r.fault_count)
            .expect("comparison covers at least one policy")
    }

    /// The report for one policy.
    pub fn report_for(&self, policy: Policy) -> &RunReport {
        self.reports
            .iter()
            .find(|r| r.policy == policy)
            .expect("comparison covers every policy")
    }
}

/// Run every policy over the same reference stream with fresh state.
///
/// # Errors
/// Returns [`Error::InvalidCapacity`](crate::Error::InvalidCapacity) if
/// `capacity` is 0.
pub fn compare_policies(capacity: usize, references: &[PageId]) -> Result<PolicyComparison> {
    let mut reports = Vec::with_capacity(Policy::ALL.len());

    for policy in Policy::ALL {
        let mut sim = Simulator::new(policy, capacity)?;
        reports.push(sim.run(references));
    }

    Ok(PolicyComparison { capacity, reports })
}

//! Human-readable rendering of simulation results.
//!
//! The engine itself produces no text; everything here reads the typed
//! outputs ([`RunReport`], [`PolicyComparison`]) and renders to a `String`.
//! Verbosity is an explicit [`DisplayMode`] argument, never ambient state.

use std::fmt::Write;

use crate::common::PageId;
use crate::sim::RunReport;
use crate::workload::PolicyComparison;

/// How much of a run to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Final results only.
    Summary,
    /// Final results plus the numbered per-fault trace.
    Detailed,
}

/// Render one run: fault count, probe residency, and optionally the trace.
pub fn render_run(report: &RunReport, probe: PageId, mode: DisplayMode) -> String {
    let mut out = String::new();

    writeln!(out, "--- {} ---", report.policy).unwrap();
    writeln!(out, "Frames: {}", report.capacity).unwrap();
    writeln!(out, "References: {}", report.references).unwrap();
    writeln!(out, "Page faults: {}", report.fault_count).unwrap();

    match report.frame_of(probe) {
        Some(frame) => writeln!(out, "Page {probe} is resident in frame {frame}").unwrap(),
        None => writeln!(out, "Page {probe} is not resident at the end of the run").unwrap(),
    }

    if mode == DisplayMode::Detailed {
        writeln!(out, "Trace (one step per fault):").unwrap();
        for (step, resident) in report.trace.iter().enumerate() {
            let pages: Vec<String> = resident.iter().map(|p| p.to_string()).collect();
            writeln!(out, "  step {}: [{}]", step + 1, pages.join(", ")).unwrap();
        }
    }

    out
}

/// Render the side-by-side fault counts and the winning policy.
pub fn render_comparison(name: &str, comparison: &PolicyComparison) -> String {
    let mut out = String::new();

    writeln!(out, "{name} ({} frames):", comparison.capacity).unwrap();
    for report in &comparison.reports {
        writeln!(out, "  {}: {} page faults", report.policy, report.fault_count).unwrap();
    }

    let best = comparison.best();
    writeln!(out, "  Best: {} with {} page faults", best.policy, best.fault_count).unwrap();

    out
}

//! framesim - A page-replacement simulator with swappable eviction policies.
//!
//! # Architecture
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                        framesim                          │
//! ├──────────────────────────────────────────────────────────┤
//! │  ┌────────────────────────────────────────────────────┐  │
//! │  │              Presentation (console/)               │  │
//! │  │        summary / detailed trace rendering          │  │
//! │  └────────────────────────────────────────────────────┘  │
//! │                            ↓                             │
//! │  ┌────────────────────────────────────────────────────┐  │
//! │  │               Run driver (workload/)               │  │
//! │  │    named sequences + cross-policy comparison       │  │
//! │  └────────────────────────────────────────────────────┘  │
//! │                            ↓                             │
//! │  ┌────────────────────────────────────────────────────┐  │
//! │  │            Simulation engine (sim/)                │  │
//! │  │  ┌──────────────────────────────────────────────┐  │  │
//! │  │  │     Eviction policies: FIFO | LRU | MRU      │  │  │
//! │  │  └──────────────────────────────────────────────┘  │  │
//! │  │        Simulator + FrameSet + RunReport            │  │
//! │  └────────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, Error)
//! - [`sim`] - Frame set, eviction policies, and the stepping loop
//! - [`workload`] - Named reference streams and policy comparison
//! - [`console`] - Human-readable rendering of results
//!
//! # Quick Start
//! ```
//! use framesim::{PageId, Policy, Simulator};
//!
//! let refs: Vec<PageId> = [1u32, 2, 3, 1, 4].iter().map(|&p| PageId::new(p)).collect();
//!
//! let mut sim = Simulator::new(Policy::Lru, 3)?;
//! let report = sim.run(&refs);
//!
//! assert_eq!(report.fault_count, 4);
//! assert!(report.is_resident(PageId::new(1)));
//! # Ok::<(), framesim::Error>(())
//! ```

pub mod common;
pub mod console;
pub mod sim;
pub mod workload;

// Re-export commonly used items at crate root for convenience
pub use common::{Error, PageId, Result};

pub use console::DisplayMode;
pub use sim::{FrameSet, Policy, RunReport, Simulator};
pub use workload::{compare_policies, PolicyComparison, Workload};

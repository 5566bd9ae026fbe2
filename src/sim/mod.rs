//! The simulation engine: frame set, eviction policies, stepping loop.

mod frame_set;
pub mod policy;
mod run_report;
mod simulator;

pub use frame_set::FrameSet;
pub use policy::Policy;
pub use run_report::RunReport;
pub use simulator::Simulator;

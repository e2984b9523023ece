//! Command implementations

pub mod auto;
pub mod bench;
pub mod play;

pub use auto::{PlayReport, Turn, play_hand};
pub use bench::{BenchResult, run_bench};
pub use play::run_session;

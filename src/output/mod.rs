//! Terminal output formatting

mod display;

pub use display::{print_bench_result, print_hand, print_play_report};

//! Word lists
//!
//! Bundled default word list compiled into the binary, plus a file loader
//! for custom lists.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

//! Word lists for word ladders
//!
//! Provides the default dictionary compiled into the binary.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};

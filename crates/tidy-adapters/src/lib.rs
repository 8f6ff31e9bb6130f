//! Infrastructure adapters for tidy.
//!
//! This crate implements the ports defined in `tidy-core::application::ports`.
//! It contains all terminal I/O.

pub mod sink;

// Re-export commonly used adapters
pub use sink::{ConsoleSink, MemorySink};

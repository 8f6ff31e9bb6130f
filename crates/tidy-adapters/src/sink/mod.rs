//! Report sink adapters.

mod console;
mod memory;

pub use console::ConsoleSink;
pub use memory::MemorySink;

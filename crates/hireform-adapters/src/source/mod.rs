//! Event source adapters.

mod memory;
mod script;

pub use memory::MemorySource;
pub use script::ScriptSource;

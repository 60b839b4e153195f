//! Storage adapters implementing the StateStorage port.

mod in_memory;
mod local_file;

pub use in_memory::InMemoryStateStorage;
pub use local_file::FileStateStorage;

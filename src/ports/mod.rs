//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.

mod state_storage;

pub use state_storage::{keys, StateStorage, StorageError};

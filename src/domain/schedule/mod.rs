//! Schedule module - Pure prompt derivation.

mod scheduler;

pub use scheduler::{cycle_position, schedule, CyclePosition, PromptSpec};

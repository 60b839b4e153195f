//! Domain layer - The reflection-journal model.
//!
//! Pure types and derivations: no I/O, no clock reads outside the
//! explicitly-passed effective "today".

pub mod catalog;
pub mod foundation;
pub mod journal;
pub mod schedule;

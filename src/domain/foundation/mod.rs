//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types that form the
//! vocabulary of the reflection-journal domain.

mod day_date;
mod errors;
mod ids;

pub use day_date::DayDate;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{PromptId, TopicId};

//! Catalog module - Static prompt data.
//!
//! The topic catalog and the fixed 7-day cycle table. Both are data the
//! scheduler consumes, not behavior.

mod day_cycle;
mod topic;

pub use day_cycle::{DayCycle, DayStage, DAYS_PER_CYCLE, TOPIC_PLACEHOLDER};
pub use topic::{Topic, TopicCatalog, CORE_PROMPT_COUNT};

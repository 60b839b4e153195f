//! Journal module - Persisted reflection records and the active selection.

mod daily_prompt;
mod selection;

pub use daily_prompt::DailyPrompt;
pub use selection::ActiveSelection;

//! Reminder settings for the external notification collaborator.
//!
//! The engine only stores these; scheduling and delivery of the actual
//! notification happen outside the core, fire-and-forget.

use chrono::NaiveTime;

/// Whether and when the daily reminder fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReminderSettings {
    pub enabled: bool,
    pub time: NaiveTime,
}

impl ReminderSettings {
    /// The out-of-the-box reminder time, 09:00.
    pub fn default_time() -> NaiveTime {
        NaiveTime::from_hms_opt(9, 0, 0).expect("09:00 is a valid time")
    }

    /// Encodes the time as `HH:MM` for storage.
    pub fn encode_time(&self) -> String {
        self.time.format("%H:%M").to_string()
    }

    /// Decodes a stored `HH:MM` value, if well-formed.
    pub fn parse_time(raw: &str) -> Option<NaiveTime> {
        NaiveTime::parse_from_str(raw, "%H:%M").ok()
    }
}

impl Default for ReminderSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            time: Self::default_time(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_disabled_at_nine() {
        let settings = ReminderSettings::default();
        assert!(!settings.enabled);
        assert_eq!(settings.encode_time(), "09:00");
    }

    #[test]
    fn time_roundtrips_through_encoding() {
        let settings = ReminderSettings {
            enabled: true,
            time: NaiveTime::from_hms_opt(20, 30, 0).unwrap(),
        };
        let decoded = ReminderSettings::parse_time(&settings.encode_time()).unwrap();
        assert_eq!(decoded, settings.time);
    }

    #[test]
    fn malformed_time_decodes_to_none() {
        assert!(ReminderSettings::parse_time("not a time").is_none());
    }
}

//! The fixed 7-day prompt cycle table.
//!
//! Every topic runs through the same seven stages:
//!
//! 1. Open → 2. Deepen → 3. Distill → 4. Imagine → 5. Begin → 6. Notice → 7. Carry
//!
//! Day 1 is special: it never uses the variants below and instead pulls its
//! question from the active topic's core prompts. Days 2-7 rotate through
//! their variant list by week number, substituting the topic name for the
//! `{topic}` placeholder. The rotation is deterministic: the same week
//! modulo the variant count always shows the same text.

use once_cell::sync::Lazy;

/// Number of days in one cycle.
pub const DAYS_PER_CYCLE: u32 = 7;

/// Placeholder replaced by the lowercased topic name in day 2-7 variants.
pub const TOPIC_PLACEHOLDER: &str = "{topic}";

/// One stage of the 7-day cycle.
#[derive(Debug, Clone)]
pub struct DayStage {
    day_number: u32,
    label: &'static str,
    intent: &'static str,
    variants: &'static [&'static str],
}

impl DayStage {
    /// Returns the 1-based day number of this stage.
    pub fn day_number(&self) -> u32 {
        self.day_number
    }

    /// Returns the short stage name, e.g. "Deepen".
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Returns the descriptive intent of the stage.
    pub fn intent(&self) -> &'static str {
        self.intent
    }

    /// Returns the prompt-variant templates for this stage.
    pub fn variants(&self) -> &'static [&'static str] {
        self.variants
    }

    /// Resolves the variant for a topic and week number.
    ///
    /// Rotation is by `(week_number - 1)` modulo the actual variant count,
    /// so replaying a topic cycles through bounded variety without
    /// randomness. Every `{topic}` occurrence becomes the lowercased
    /// topic name.
    pub fn prompt_for(&self, topic_name: &str, week_number: u32) -> String {
        let index = (week_number.saturating_sub(1) as usize) % self.variants.len();
        self.variants[index].replace(TOPIC_PLACEHOLDER, &topic_name.to_lowercase())
    }
}

/// The immutable 7-entry cycle table.
pub struct DayCycle;

impl DayCycle {
    /// Returns the full table in day order.
    pub fn all() -> &'static [DayStage; 7] {
        &CYCLE
    }

    /// Returns the stage for a 1-based day number.
    pub fn stage(day_number: u32) -> Option<&'static DayStage> {
        if (1..=DAYS_PER_CYCLE).contains(&day_number) {
            Some(&CYCLE[(day_number - 1) as usize])
        } else {
            None
        }
    }

    /// Returns the first stage ("Open").
    pub fn first() -> &'static DayStage {
        &CYCLE[0]
    }
}

static CYCLE: Lazy<[DayStage; 7]> = Lazy::new(|| {
    [
        DayStage {
            day_number: 1,
            label: "Open",
            intent: "Invite the topic in without forcing structure",
            // Unused: day 1 sources its question from the topic's core prompts.
            variants: &["{corePrompt}"],
        },
        DayStage {
            day_number: 2,
            label: "Deepen",
            intent: "Explore resonance and emotion",
            variants: &[
                "Reading what you wrote yesterday—what part surprises you, touches you, or feels most alive?",
                "What emotion shows up as you reread your words about {topic}? Where do you feel it in your body?",
                "If you could respond to yesterday's you with compassion, what would you say?",
                "What question do you now have about {topic} that you did not have before?",
            ],
        },
        DayStage {
            day_number: 3,
            label: "Distill",
            intent: "Pull out insight in a way that feels personal",
            variants: &[
                "What advice would you give a close friend experiencing the same thing with {topic}?",
                "If this week had a headline so far, what would it be?",
                "What is one belief or assumption about {topic} that is starting to shift—even slightly?",
                "Write a short letter from future-you who has fully embodied this {topic} insight.",
            ],
        },
        DayStage {
            day_number: 4,
            label: "Imagine",
            intent: "Bridge to action through vision",
            variants: &[
                "Picture a moment this week where {topic} feels strong in you—what is happening? Who is there? How do you feel?",
                "Where in your real life this week do you most want {topic} to show up?",
                "What would it look like if {topic} got just 10% more space in your day-to-day?",
            ],
        },
        DayStage {
            day_number: 5,
            label: "Begin",
            intent: "Lower the bar to action",
            variants: &[
                "What is the tiniest experiment you could run today that would make {topic} feel real?",
                "If you were going to act on this in the next 24 hours, what would feel almost too easy?",
                "What is one small way you could remind yourself of {topic} today—a note, alarm, or object?",
            ],
        },
        DayStage {
            day_number: 6,
            label: "Notice",
            intent: "Track subtle shifts",
            variants: &[
                "What has happened (or not happened) since you set that tiny intention?",
                "What is one small sign—internal or external—that something is moving with {topic}?",
                "How are you relating to {topic} differently this week, even if nothing big has changed?",
            ],
        },
        DayStage {
            day_number: 7,
            label: "Carry",
            intent: "Integrate and release",
            variants: &[
                "What is staying with you from this whole week of {topic}?",
                "How has your inner voice about {topic} changed since Day 1?",
                "Write one sentence you want to keep about {topic}—something you could return to anytime.",
                "If this cycle were a gift to future-you, what did it give?",
            ],
        },
    ]
});

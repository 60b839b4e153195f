//! Weekly topic definitions and the topic catalog.
//!
//! A topic is a named focus area carrying exactly five "core" seed prompts;
//! the scheduler uses one of them for day 1 of every cycle. The catalog is
//! plain data: the built-in set ships with the crate, but any validated
//! `Vec<Topic>` can back a catalog, so future additions stay out of code.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::foundation::{DomainError, TopicId, ValidationError};

/// Number of core seed prompts every topic must carry.
pub const CORE_PROMPT_COUNT: usize = 5;

/// A named focus area with five seed reflection prompts.
///
/// # Invariants
///
/// - `name` is non-empty
/// - `core_prompts` has exactly [`CORE_PROMPT_COUNT`] non-empty entries
///
/// Immutable once defined. Historical records keep a denormalized copy of
/// `name`, so catalog edits never rewrite history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTopic")]
pub struct Topic {
    id: TopicId,
    name: String,
    description: String,
    icon: String,
    core_prompts: Vec<String>,
}

impl Topic {
    /// Create a validated topic.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if name or any core prompt is empty
    /// - `WrongCount` if there are not exactly five core prompts
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        icon: impl Into<String>,
        core_prompts: Vec<String>,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        validate(&name, &core_prompts)?;

        Ok(Self {
            id: TopicId::new(),
            name,
            description: description.into(),
            icon: icon.into(),
            core_prompts,
        })
    }

    /// Returns the topic id.
    pub fn id(&self) -> &TopicId {
        &self.id
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the one-line description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the icon reference.
    pub fn icon(&self) -> &str {
        &self.icon
    }

    /// Returns the ordered core seed prompts.
    pub fn core_prompts(&self) -> &[String] {
        &self.core_prompts
    }

    /// Returns the core prompt for a selection index.
    ///
    /// The index wraps by the actual prompt count, never a hardcoded five,
    /// so a short list can never index out of bounds.
    pub fn core_prompt(&self, index: usize) -> &str {
        &self.core_prompts[index % self.core_prompts.len()]
    }
}

fn validate(name: &str, core_prompts: &[String]) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(ValidationError::empty_field("name").into());
    }
    if core_prompts.len() != CORE_PROMPT_COUNT {
        return Err(
            ValidationError::wrong_count("core_prompts", CORE_PROMPT_COUNT, core_prompts.len())
                .into(),
        );
    }
    if core_prompts.iter().any(|p| p.trim().is_empty()) {
        return Err(ValidationError::empty_field("core_prompts").into());
    }
    Ok(())
}

/// Decode-side mirror of [`Topic`].
///
/// Persisted topics re-enter through the same validation as [`Topic::new`],
/// so a truncated or hand-edited stored value is rejected as undecodable
/// instead of smuggling in an invariant-breaking topic.
#[derive(Deserialize)]
struct RawTopic {
    id: TopicId,
    name: String,
    description: String,
    icon: String,
    core_prompts: Vec<String>,
}

impl TryFrom<RawTopic> for Topic {
    type Error = DomainError;

    fn try_from(raw: RawTopic) -> Result<Self, Self::Error> {
        validate(&raw.name, &raw.core_prompts)?;
        Ok(Self {
            id: raw.id,
            name: raw.name,
            description: raw.description,
            icon: raw.icon,
            core_prompts: raw.core_prompts,
        })
    }
}

/// Keyed collection of topics.
///
/// Lookups go through the stable [`TopicId`]; the by-name lookup exists only
/// to join denormalized historical records back to their catalog entry.
#[derive(Debug, Clone)]
pub struct TopicCatalog {
    topics: Vec<Topic>,
    index: HashMap<TopicId, usize>,
}

impl TopicCatalog {
    /// Builds a catalog from an ordered list of topics.
    pub fn from_topics(topics: Vec<Topic>) -> Self {
        let index = topics
            .iter()
            .enumerate()
            .map(|(i, t)| (*t.id(), i))
            .collect();
        Self { topics, index }
    }

    /// Returns the built-in ten-topic catalog.
    pub fn built_in() -> &'static TopicCatalog {
        &BUILT_IN
    }

    /// Looks up a topic by id.
    pub fn get(&self, id: &TopicId) -> Option<&Topic> {
        self.index.get(id).map(|&i| &self.topics[i])
    }

    /// Looks up a topic by display name.
    pub fn by_name(&self, name: &str) -> Option<&Topic> {
        self.topics.iter().find(|t| t.name() == name)
    }

    /// Returns the topics in catalog order.
    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    /// Returns the number of topics.
    pub fn len(&self) -> usize {
        self.topics.len()
    }

    /// Returns true if the catalog has no topics.
    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}

fn topic(name: &str, description: &str, icon: &str, prompts: [&str; CORE_PROMPT_COUNT]) -> Topic {
    Topic::new(
        name,
        description,
        icon,
        prompts.iter().map(|p| p.to_string()).collect(),
    )
    .expect("built-in topic data must be valid")
}

static BUILT_IN: Lazy<TopicCatalog> = Lazy::new(|| {
    TopicCatalog::from_topics(vec![
        topic(
            "Autonomy",
            "Owning your choices and direction",
            "arrow.triangle.branch",
            [
                "What is one task or decision recently where you felt you had real choice in how to approach it? How did that sense of ownership fuel your energy or results?",
                "Think about a moment this week when you got to do something your way. What did you choose, and how did it feel to have that freedom?",
                "Where in your life right now do you feel most in the driver seat? What makes that area feel like yours to shape?",
                "What is something you recently said yes or no to that felt aligned with what you actually wanted? What made that choice feel right?",
                "When did you last push back on how something should be done and try your own approach instead? What happened?",
            ],
        ),
        topic(
            "Competence",
            "Growing your skills and mastery",
            "chart.line.uptrend.xyaxis",
            [
                "What is one skill you are working on right now that is still in the getting there phase? What tiny improvement have you noticed lately, even if small?",
                "Think of an area where you are stretching yourself that has not fully clicked yet. What is a recent moment where you felt a little more capable than before?",
                "Which part of your role are you actively building mastery in that feels like a work in progress? What subtle signs of growth have shown up recently?",
                "What is something new you are learning that is taking time to land fully? What encouraging hint of momentum have you spotted?",
                "Is there a capability you are developing that is still unfolding? What small win or shift suggests it is starting to take root?",
            ],
        ),
        topic(
            "Relatedness",
            "Connection and belonging",
            "person.2.fill",
            [
                "Who has felt like a true collaborator lately? What specific interaction made you feel supported or valued?",
                "Think about a conversation recently that left you feeling genuinely understood. What made it land that way?",
                "Who is someone you have connected with lately in a way that felt real, not just transactional? What made it different?",
                "When did you last feel like you truly belonged somewhere? What was happening in that moment?",
                "What is one relationship in your life that has been energizing you lately? What makes it work?",
            ],
        ),
        topic(
            "Growth Mindset",
            "Embracing challenges as opportunities",
            "leaf.fill",
            [
                "What is one aspect of your work you have chosen to level up that has not completely clicked yet? What small indicators suggest your efforts are paying off?",
                "Think about something that used to feel hard but is getting easier. What changed in how you approach it?",
                "Where have you been putting in effort lately without seeing big results yet? What keeps you going?",
                "What is a mistake or setback recently that taught you something you would not have learned otherwise?",
                "What is something you are not good at yet but feel curious about getting better at? What draws you to it?",
            ],
        ),
        topic(
            "Strengths",
            "Building on what makes you strong",
            "star.fill",
            [
                "What is one strength you brought to a recent challenge that felt energizing to use? How did others respond to it?",
                "When have you been in your element lately, doing something that comes naturally to you? What was that like?",
                "What do people tend to come to you for? How does it feel when you get to use that ability?",
                "Think about a time recently when you were firing on all cylinders. What strengths were you leaning into?",
                "What is something you do well that you might be undervaluing? How might you use it more intentionally?",
            ],
        ),
        topic(
            "Resilience",
            "Finding your inner strength",
            "arrow.counterclockwise",
            [
                "Think about a moment when you found that inner strength and peace in the face of a challenge. How did you show it? What did it feel like?",
                "When did you last surprise yourself with how well you handled something difficult? What did you tap into?",
                "What is a time recently when you stayed calm or centered when you easily could have lost it? What helped you hold steady?",
                "Think about a challenge you navigated with grace. What inner resources did you draw on that you are proud of?",
                "When have you bounced back from something faster or stronger than you expected? What made that possible?",
            ],
        ),
        topic(
            "Purpose",
            "Connecting to what matters most",
            "compass.drawing",
            [
                "When did you last feel that your work or actions were connected to something larger than yourself? What made that moment meaningful?",
                "What is something you do that feels like it actually matters, beyond just getting it done?",
                "Think about a recent moment when you felt aligned with your values. What were you doing?",
                "What is one thing you contribute that you believe makes a real difference, even if it is not always visible?",
                "When do you feel most like you are living on purpose, not just going through the motions?",
            ],
        ),
        topic(
            "Gratitude",
            "Recognizing the good around you",
            "heart.fill",
            [
                "What is something in your life right now that you might be taking for granted? How would you feel if it were suddenly gone?",
                "Who is someone you have not thanked lately but probably should? What have they done for you?",
                "What is a small thing that happened recently that made your day a little better?",
                "Think about something that is going well right now. What had to go right for that to happen?",
                "What is one thing about today that you would want to remember if you looked back a year from now?",
            ],
        ),
        topic(
            "Focus",
            "Directing your attention with intention",
            "scope",
            [
                "When do you feel most focused and present? What conditions or choices help you get into that state?",
                "What is something that tends to pull your attention away from what matters? How have you been managing it?",
                "Think about a time recently when you were fully absorbed in what you were doing. What made that possible?",
                "What is one thing you could let go of or say no to that would free up mental space for what matters more?",
                "When you are at your sharpest, what does your environment look like? What rituals or habits support that?",
            ],
        ),
        topic(
            "Creativity",
            "Unlocking new possibilities",
            "lightbulb.fill",
            [
                "When did you last approach a problem in an unexpected way? What sparked that creative thinking?",
                "What is something you have been doing the same way for a while that might benefit from a fresh take?",
                "Think about an idea you had recently that surprised you. Where did it come from?",
                "When do you feel most creative? What conditions or mindsets tend to unlock that for you?",
                "What is a constraint or limitation you are working within that has actually pushed you to think differently?",
            ],
        ),
    ])
});

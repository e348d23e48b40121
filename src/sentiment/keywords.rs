//! Strong-keyword tables for the sentiment override.
//!
//! The lists are plain data so they can be swapped or localized without
//! touching the matching code in [`super::classify_with`].

/// Words that force a `VeryNegative` label when they appear anywhere in the text.
pub const STRONG_NEGATIVE: &[&str] = &[
    "depressed",
    "suicidal",
    "hopeless",
    "devastated",
    "miserable",
    "despair",
    "broken",
    "crushed",
    "grief",
    "sorrow",
    "anguish",
    "dread",
    "heartbroken",
    "downhearted",
    "distraught",
    "agonizing",
    "shattered",
    "desperate",
    "overwhelmed",
    "anxious",
    "stressed",
    "terrible",
    "awful",
    "horrible",
    "sad",
    "unhappy",
    "lonely",
    "exhausted",
    "tired",
    "worn out",
    "burnt out",
    "frustrated",
    "angry",
    "furious",
    "irritated",
    "annoyed",
    "bitter",
    "resentful",
    "lost",
    "confused",
    "empty",
    "worthless",
    "guilty",
    "ashamed",
    "scared",
    "fearful",
    "terrified",
    "panicked",
    "nervous",
];

/// Words that force a `VeryPositive` label when no strong-negative word is present.
pub const STRONG_POSITIVE: &[&str] = &[
    "ecstatic",
    "euphoric",
    "elated",
    "overjoyed",
    "thrilled",
    "jubilant",
    "blissful",
    "fantastic",
    "amazing",
    "wonderful",
    "great",
    "excellent",
    "superb",
    "brilliant",
    "happy",
    "joyful",
    "excited",
    "optimistic",
    "hopeful",
    "grateful",
    "blessed",
    "proud",
    "confident",
    "energetic",
    "refreshed",
    "peaceful",
    "calm",
    "serene",
    "loved",
    "appreciated",
    "inspired",
    "motivated",
    "content",
    "satisfied",
];

/// A pair of keyword sets driving the strong-keyword override.
#[derive(Debug, Clone, Copy)]
pub struct KeywordSets {
    /// Checked first; any hit yields `VeryNegative`.
    pub negative: &'static [&'static str],
    /// Checked second; any hit yields `VeryPositive`.
    pub positive: &'static [&'static str],
}

impl KeywordSets {
    /// Returns the first strong-negative keyword contained in `lowered`.
    pub fn negative_hit(&self, lowered: &str) -> Option<&'static str> {
        self.negative.iter().copied().find(|k| lowered.contains(k))
    }

    /// Returns the first strong-positive keyword contained in `lowered`.
    pub fn positive_hit(&self, lowered: &str) -> Option<&'static str> {
        self.positive.iter().copied().find(|k| lowered.contains(k))
    }
}

impl Default for KeywordSets {
    fn default() -> Self {
        KeywordSets {
            negative: STRONG_NEGATIVE,
            positive: STRONG_POSITIVE,
        }
    }
}

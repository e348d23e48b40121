//! Mood sentiment classification.
//!
//! [`classify`] combines a lexical polarity score with a strong-keyword
//! override. Keyword checks run before the polarity thresholds and win
//! unconditionally: a strong-negative word yields `VeryNegative`, otherwise a
//! strong-positive word yields `VeryPositive`. Matching is substring based on
//! the lowercased text, so "sad" also matches inside "saddle".
//!
//! # Example
//!
//! ```
//! use moodbuddy::sentiment::{classify, SentimentLabel};
//!
//! let result = classify("I feel hopeless today");
//! assert_eq!(result.label, SentimentLabel::VeryNegative);
//! ```

pub mod keywords;
pub mod polarity;

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

pub use keywords::KeywordSets;

/// Discrete sentiment of a mood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    VeryNegative,
    Negative,
    Neutral,
    Positive,
    VeryPositive,
}

impl SentimentLabel {
    /// Maps a polarity score to a label using the fixed thresholds.
    ///
    /// ```
    /// use moodbuddy::sentiment::SentimentLabel;
    ///
    /// assert_eq!(SentimentLabel::from_polarity(0.0), SentimentLabel::Neutral);
    /// assert_eq!(SentimentLabel::from_polarity(0.6), SentimentLabel::VeryPositive);
    /// assert_eq!(SentimentLabel::from_polarity(-0.3), SentimentLabel::Negative);
    /// ```
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity <= -0.5 {
            SentimentLabel::VeryNegative
        } else if polarity <= -0.1 {
            SentimentLabel::Negative
        } else if polarity >= 0.5 {
            SentimentLabel::VeryPositive
        } else if polarity >= 0.1 {
            SentimentLabel::Positive
        } else {
            SentimentLabel::Neutral
        }
    }

    /// Human readable name, e.g. "Very Negative".
    pub fn name(&self) -> &'static str {
        match self {
            SentimentLabel::VeryNegative => "Very Negative",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
            SentimentLabel::Positive => "Positive",
            SentimentLabel::VeryPositive => "Very Positive",
        }
    }

    /// Emoji shown next to the name; a keyword-forced very negative mood uses 😥.
    pub fn emoji(&self) -> &'static str {
        match self {
            SentimentLabel::VeryNegative => "😥",
            SentimentLabel::Negative => "😞",
            SentimentLabel::Neutral => "😐",
            SentimentLabel::Positive => "🙂",
            SentimentLabel::VeryPositive => "😄",
        }
    }

}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name(), self.emoji())
    }
}

/// Emoji for a very negative mood reached through the polarity threshold alone.
const THRESHOLD_VERY_NEGATIVE_EMOJI: &str = "😔";

/// Polarity score together with the resolved label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    /// Lexical polarity in `[-1.0, 1.0]`, reported even when a keyword decided the label.
    pub polarity: f64,
    pub label: SentimentLabel,
    /// Whether a strong keyword decided the label instead of the thresholds.
    pub keyword_override: bool,
}

impl SentimentResult {
    /// Emoji for this result. The label's emoji, except that a threshold
    /// `VeryNegative` is shown as 😔.
    pub fn emoji(&self) -> &'static str {
        if self.label == SentimentLabel::VeryNegative && !self.keyword_override {
            THRESHOLD_VERY_NEGATIVE_EMOJI
        } else {
            self.label.emoji()
        }
    }
}

impl fmt::Display for SentimentResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.label.name(), self.emoji())
    }
}

/// Classifies `text` with the default keyword sets.
pub fn classify(text: &str) -> SentimentResult {
    classify_with(text, &KeywordSets::default())
}

/// Classifies `text` with caller-supplied keyword sets.
pub fn classify_with(text: &str, keywords: &KeywordSets) -> SentimentResult {
    let polarity = polarity::score(text);
    let lowered = text.to_lowercase();

    let (label, keyword_override) = if let Some(hit) = keywords.negative_hit(&lowered) {
        debug!("Strong negative keyword '{}' overrides polarity {:.2}", hit, polarity);
        (SentimentLabel::VeryNegative, true)
    } else if let Some(hit) = keywords.positive_hit(&lowered) {
        debug!("Strong positive keyword '{}' overrides polarity {:.2}", hit, polarity);
        (SentimentLabel::VeryPositive, true)
    } else {
        (SentimentLabel::from_polarity(polarity), false)
    };

    SentimentResult {
        polarity,
        label,
        keyword_override,
    }
}

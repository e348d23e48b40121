//! Prompt construction and the canned "human friend" response.
//!
//! Both paths produce text in the labeled-section format understood by
//! [`crate::response::parse`].

use super::chat::Message;
use crate::response::Section;
use crate::sentiment::{SentimentLabel, SentimentResult};

/// Words that make the prompt ask for an anti-stress activity.
pub const STRESS_KEYWORDS: &[&str] = &["stressed", "anxious", "overwhelmed", "tense", "nervous"];

/// Sections of the canned human friend response, in order.
const HUMAN_FRIEND_SECTIONS: [(Section, &str); 4] = [
    (
        Section::Comfort,
        "I'm here for you. It sounds like you're going through a lot. Let's talk, cry, laugh — whatever you need, I'm with you. ❤️",
    ),
    (
        Section::Recipe,
        "Warm, homemade Chicken Noodle Soup — perfect for when you need a gentle hug in a bowl.",
    ),
    (Section::Vibe, "☔️🌧️✨ — Blue, Grey, Warm Yellow"),
    (Section::Song, "'Fix You' — Coldplay"),
];

/// Returns whether the mood mentions stress (case-insensitive substring match).
pub fn is_stressed(mood: &str) -> bool {
    let lowered = mood.to_lowercase();
    STRESS_KEYWORDS.iter().any(|k| lowered.contains(k))
}

/// Describes what a person with this sentiment needs, for the prompt.
pub fn sentiment_adjective(label: SentimentLabel) -> &'static str {
    match label {
        SentimentLabel::VeryNegative => {
            "feeling very low and needs extremely gentle, empathetic, and uplifting support"
        }
        SentimentLabel::Negative => {
            "feeling negative and needs understanding and uplifting support"
        }
        SentimentLabel::VeryPositive => {
            "feeling very positive and wants enthusiastic, joyful suggestions"
        }
        SentimentLabel::Positive => "feeling positive and needs supportive, encouraging messages",
        SentimentLabel::Neutral => {
            "feeling neutral and needs a general supportive and positive message"
        }
    }
}

/// The fixed response used when a human friend comforts the user.
pub fn human_friend_response() -> String {
    HUMAN_FRIEND_SECTIONS
        .iter()
        .map(|(section, text)| format!("{} {}", section.marker(), text))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Builds the messages asking the model for a comfort response.
///
/// The anti-stress activity is requested only when the mood mentions stress.
pub fn comfort_prompt(mood: &str, sentiment: &SentimentResult) -> Vec<Message> {
    let stressed = is_stressed(mood);

    let mut prompt = format!(
        r#"I am an emotionally intelligent assistant. A person just said: '{}'.
Based on my analysis, their mood suggests they are {}.

Please respond with the following in a friendly, soulful tone, specifically tailored to provide comfort and upliftment for their current emotional state:
1. Comfort: A short, kind, comforting message, explicitly acknowledging the depth of their feelings if negative.
2. Recipe: A recipe suggestion that gently matches their mood, focusing on comfort food if negative, or celebratory food if positive. Include dish name + short description, separated by an em-dash (—).
3. Vibe: A few emojis and 3 colors that represent a calming or uplifting mood for them, written as: emojis — Color, Color, Color.
4. Song: A song title + artist that is genuinely soothing and uplifting for their specific mood.
"#,
        mood,
        sentiment_adjective(sentiment.label)
    );

    if stressed {
        prompt.push_str(
            r#"5. Anti-Stress Activity: A short, interactive prompt or simple activity to help alleviate stress (e.g., a 2-minute mindful breathing guide, or "Describe your ideal calm place in three words.").
"#,
        );
    }

    prompt.push_str("\nFormat:\n");
    for section in Section::ALL {
        if section == Section::AntiStressActivity && !stressed {
            continue;
        }
        prompt.push_str(section.marker());
        prompt.push_str(" ...\n");
    }

    vec![Message::user(prompt)]
}

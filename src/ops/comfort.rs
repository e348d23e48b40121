//! Comfort a mood: classify, respond, parse, illustrate and journal it.

use crate::ai::prompts::{comfort_prompt, human_friend_response};
use crate::ai::ChatClient;
use crate::config::Config;
use crate::errors::{AIError, AppError, AppResult};
use crate::images::ImageClient;
use crate::journal::{Journal, JournalEntry, Who};
use crate::response::{parse, ComfortCard, ParsedFields};
use crate::sentiment::{classify, SentimentResult};
use tracing::{debug, info, warn};

/// Everything produced for one mood.
#[derive(Debug, Clone)]
pub struct ComfortOutcome {
    /// The journal entry that was recorded.
    pub entry: JournalEntry,
    pub fields: ParsedFields,
    pub card: ComfortCard,
    /// Photo of the suggested dish, if one was found.
    pub image_url: Option<String>,
}

/// The collaborators that answer a mood.
pub struct Comforter {
    chat: Option<ChatClient>,
    model: String,
    images: ImageClient,
}

impl Comforter {
    /// Builds the HTTP clients described by `config`.
    ///
    /// Without an API key the AI comforter is unavailable; without an image key
    /// image lookups are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if an HTTP client cannot be built.
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let chat = match &config.api_key {
            Some(key) => Some(ChatClient::new(
                config.completion_url.as_str(),
                key.as_str(),
                config.completion_timeout,
            )?),
            None => None,
        };
        let images = ImageClient::new(
            config.image_url.as_str(),
            config.image_key.clone(),
            config.image_timeout,
        )?;
        if !images.is_enabled() {
            info!("No image access key configured, dish pictures are disabled");
        }

        Ok(Self {
            chat,
            model: config.model.clone(),
            images,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Produces the raw labeled response for a classified mood.
    ///
    /// # Errors
    ///
    /// Returns `AIError::MissingApiKey` for the AI path without credentials,
    /// or any error of the completion call.
    pub fn respond(&self, mood: &str, who: Who, sentiment: &SentimentResult) -> AppResult<String> {
        match who {
            Who::Human => Ok(human_friend_response()),
            Who::Ai => {
                let chat = self.chat.as_ref().ok_or(AIError::MissingApiKey)?;
                chat.chat(&self.model, &comfort_prompt(mood, sentiment))
            }
        }
    }

    /// Looks up a picture of the dish, degrading to `None` on failure.
    fn illustrate(&self, card: &ComfortCard) -> Option<String> {
        let dish = card.dish_name();
        match self.images.search(dish) {
            Ok(url) => url,
            Err(e) => {
                warn!("Image lookup for '{}' failed: {}", dish, e);
                None
            }
        }
    }

    /// Comforts one mood and appends the result to `journal`.
    ///
    /// # Flow
    ///
    /// 1. Reject empty input
    /// 2. Classify the sentiment
    /// 3. Get the response from the chosen comforter
    /// 4. Parse it into a card with placeholders for missing sections
    /// 5. Look up an image of the dish (failures only log a warning)
    /// 6. Append a journal entry
    ///
    /// # Errors
    ///
    /// Returns `AppError::EmptyMood` for blank input, or the error of the
    /// completion call. The journal is untouched on error.
    pub fn comfort(&self, journal: &mut Journal, mood: &str, who: Who) -> AppResult<ComfortOutcome> {
        let mood = mood.trim();
        if mood.is_empty() {
            return Err(AppError::EmptyMood);
        }

        let sentiment = classify(mood);
        info!(
            "Mood classified as {} (polarity {:.2})",
            sentiment.label.name(),
            sentiment.polarity
        );

        let raw_response = self.respond(mood, who, &sentiment)?;
        let fields = parse(&raw_response);
        debug!(
            "Parsed response sections: {:?}",
            fields.iter().map(|(section, _)| section.name()).collect::<Vec<_>>()
        );

        let card = ComfortCard::from_fields(&fields);
        let image_url = self.illustrate(&card);

        let entry = JournalEntry::new(mood, who, sentiment, raw_response);
        journal.append(entry.clone());
        info!("Journaled mood {} ({} entries)", entry.id, journal.len());

        Ok(ComfortOutcome {
            entry,
            fields,
            card,
            image_url,
        })
    }
}

#[cfg(test)]
mod tests {
    // HTTP-backed paths are covered in tests/ops_integration_tests.rs
    use super::*;
    use crate::response::card::NO_COMFORT;
    use crate::sentiment::SentimentLabel;

    fn offline_config() -> Config {
        Config::default()
    }

    #[test]
    fn test_human_comfort_without_credentials() {
        let comforter = Comforter::from_config(&offline_config()).unwrap();
        let mut journal = Journal::new();

        let outcome = comforter
            .comfort(&mut journal, "  I feel hopeless today  ", Who::Human)
            .unwrap();

        assert_eq!(outcome.entry.mood, "I feel hopeless today");
        assert_eq!(outcome.entry.sentiment.label, SentimentLabel::VeryNegative);
        assert_eq!(outcome.card.song, "'Fix You' — Coldplay");
        assert_ne!(outcome.card.comfort, NO_COMFORT);
        assert_eq!(outcome.card.dish_name(), "Warm, homemade Chicken Noodle Soup");
        assert_eq!(outcome.image_url, None);
        assert_eq!(journal.len(), 1);
        assert_eq!(journal.entries()[0].id, outcome.entry.id);
    }

    #[test]
    fn test_empty_mood_is_rejected() {
        let comforter = Comforter::from_config(&offline_config()).unwrap();
        let mut journal = Journal::new();

        let result = comforter.comfort(&mut journal, "   ", Who::Human);
        assert!(matches!(result, Err(AppError::EmptyMood)));
        assert!(journal.is_empty());
    }

    #[test]
    fn test_ai_comfort_without_key_fails() {
        let comforter = Comforter::from_config(&offline_config()).unwrap();
        let mut journal = Journal::new();

        let result = comforter.comfort(&mut journal, "I had a nice day", Who::Ai);
        assert!(matches!(
            result,
            Err(AppError::AI(AIError::MissingApiKey))
        ));
        assert!(journal.is_empty());
    }
}

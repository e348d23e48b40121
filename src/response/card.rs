//! Display-ready view of a parsed response.

use super::{palette, ParsedFields, Section};
use serde::Serialize;

pub const NO_COMFORT: &str = "No comfort provided.";
pub const NO_RECIPE: &str = "No recipe provided.";
pub const NO_VIBE: &str = "No vibe provided.";
pub const NO_SONG: &str = "No song provided.";

/// Every section of a comfort response, with placeholders for the missing ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComfortCard {
    pub comfort: String,
    pub recipe: String,
    pub vibe: String,
    pub song: String,
    /// Empty when the response had no activity; rendered only when present.
    pub anti_stress_activity: String,
}

impl ComfortCard {
    pub fn from_fields(fields: &ParsedFields) -> Self {
        let text = |section: Section, default: &str| {
            fields.get(section).unwrap_or(default).to_string()
        };

        ComfortCard {
            comfort: text(Section::Comfort, NO_COMFORT),
            recipe: text(Section::Recipe, NO_RECIPE),
            vibe: text(Section::Vibe, NO_VIBE),
            song: text(Section::Song, NO_SONG),
            anti_stress_activity: text(Section::AntiStressActivity, ""),
        }
    }

    /// Name of the dish, used as the image search query.
    pub fn dish_name(&self) -> &str {
        dish_name(&self.recipe)
    }

    /// Colours named in the vibe.
    pub fn palette(&self) -> Vec<palette::Swatch> {
        palette::from_vibe(&self.vibe)
    }

    pub fn has_activity(&self) -> bool {
        !self.anti_stress_activity.is_empty()
    }
}

/// Text before the first em-dash of a recipe, or the whole recipe when it has none.
///
/// ```
/// use moodbuddy::response::card::dish_name;
///
/// assert_eq!(dish_name("Chicken Noodle Soup — a hug in a bowl"), "Chicken Noodle Soup");
/// assert_eq!(dish_name("Pancakes"), "Pancakes");
/// ```
pub fn dish_name(recipe: &str) -> &str {
    match recipe.split_once('—') {
        Some((name, _)) => name.trim(),
        None => recipe,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::parse;

    #[test]
    fn test_card_fills_placeholders() {
        let card = ComfortCard::from_fields(&parse("**Comfort:** You matter."));
        assert_eq!(card.comfort, "You matter.");
        assert_eq!(card.recipe, NO_RECIPE);
        assert_eq!(card.vibe, NO_VIBE);
        assert_eq!(card.song, NO_SONG);
        assert!(!card.has_activity());
    }

    #[test]
    fn test_card_from_empty_response() {
        let card = ComfortCard::from_fields(&parse(""));
        assert_eq!(card.comfort, NO_COMFORT);
        assert_eq!(card.dish_name(), NO_RECIPE);
        assert!(card.palette().is_empty());
    }

    #[test]
    fn test_card_with_activity() {
        let card = ComfortCard::from_fields(&parse(
            "**Recipe:** Miso soup — light and warm\n**Anti-Stress Activity:** Name three blue things.",
        ));
        assert!(card.has_activity());
        assert_eq!(card.dish_name(), "Miso soup");
    }

    #[test]
    fn test_dish_name_uses_first_dash() {
        assert_eq!(dish_name("Tacos — spicy — fun"), "Tacos");
        // Plain hyphens are not separators
        assert_eq!(dish_name("Stir-fry noodles"), "Stir-fry noodles");
    }
}

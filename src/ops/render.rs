//! Plain-text rendering of comfort cards and the journal.

use super::comfort::ComfortOutcome;
use crate::journal::{Journal, Who};
use std::fmt::Write;

const NO_IMAGE: &str = "📷 No image available for this dish.";

/// Why this kind of comfort, shown under the card.
pub fn explanation(who: Who, model: &str, label_name: &str) -> String {
    match who {
        Who::Human => "When you choose a Human Friend for comfort, you're tapping into the empathy, \
shared experiences and intuitive understanding that only another human can offer."
            .to_string(),
        Who::Ai => format!(
            "This comfort was generated by the {} model. It lacks personal experience, \
but it tailored its suggestions to a mood perceived as {}.",
            model.replace('-', " ").to_uppercase(),
            label_name.to_lowercase()
        ),
    }
}

/// Renders the outcome of one mood for the terminal.
pub fn render_outcome(outcome: &ComfortOutcome, model: &str) -> String {
    let card = &outcome.card;
    let sentiment = &outcome.entry.sentiment;
    let mut out = String::new();

    let _ = writeln!(out, "🌸 Here's what I have for you:");
    let _ = writeln!(
        out,
        "Sentiment: {} (polarity {:.2}, from -1 negative to +1 positive)",
        sentiment, sentiment.polarity
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "🌸 Comfort\n{}\n", card.comfort);
    let _ = writeln!(out, "🍲 Recipe\n{}", card.recipe);
    match &outcome.image_url {
        Some(url) => {
            let _ = writeln!(out, "🖼️  {}\n", url);
        }
        None => {
            let _ = writeln!(out, "{}\n", NO_IMAGE);
        }
    }

    let _ = writeln!(out, "🎨 Mood Vibes\n{}", card.vibe);
    let swatches = card.palette();
    if !swatches.is_empty() {
        let palette: Vec<String> = swatches
            .iter()
            .map(|s| format!("{} {}", s.name, s.hex))
            .collect();
        let _ = writeln!(out, "Palette: {}", palette.join(", "));
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "🎵 Song\n{}", card.song);
    if card.has_activity() {
        let _ = writeln!(out, "\n🧘 Anti-Stress Activity\n{}", card.anti_stress_activity);
    }

    let _ = writeln!(
        out,
        "\n🤔 {}",
        explanation(outcome.entry.who, model, sentiment.label.name())
    );

    out
}

/// Renders the journal, most recent entry first.
pub fn render_journal(journal: &Journal) -> String {
    let mut out = String::from("📔 Mood Journal\n");
    for entry in journal.recent_first() {
        let _ = writeln!(out, "- {}", entry.summary());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::ops::Comforter;

    #[test]
    fn test_render_human_outcome() {
        let comforter = Comforter::from_config(&Config::default()).unwrap();
        let mut journal = Journal::new();
        let outcome = comforter
            .comfort(&mut journal, "Work was boring", Who::Human)
            .unwrap();

        let text = render_outcome(&outcome, comforter.model());
        assert!(text.contains("Sentiment: Negative 😞 (polarity -0.30"));
        assert!(text.contains("Fix You"));
        assert!(text.contains(NO_IMAGE));
        assert!(text.contains("Palette: blue #0000FF, grey #808080, warm yellow #CCCCCC"));
        assert!(text.contains("Human Friend"));
        assert!(!text.contains("Anti-Stress Activity"));
    }

    #[test]
    fn test_explanation_for_ai() {
        let text = explanation(Who::Ai, "llama3-8b-8192", "Very Negative");
        assert!(text.contains("LLAMA3 8B 8192"));
        assert!(text.contains("very negative"));
    }

    #[test]
    fn test_render_journal_most_recent_first() {
        let comforter = Comforter::from_config(&Config::default()).unwrap();
        let mut journal = Journal::new();
        comforter.comfort(&mut journal, "first mood", Who::Human).unwrap();
        comforter.comfort(&mut journal, "second mood", Who::Human).unwrap();

        let text = render_journal(&journal);
        let first = text.find("first mood").unwrap();
        let second = text.find("second mood").unwrap();
        assert!(second < first);
    }
}

//! Lexical polarity scoring.
//!
//! Each recognized sentiment word contributes its lexicon polarity, scaled by
//! an immediately preceding intensifier and flipped (times `-0.5`) by a recent
//! negator. The score is the mean of all contributions, clamped to
//! `[-1.0, 1.0]`. Text without sentiment words scores `0.0`.

/// Polarity of sentiment-bearing words.
const LEXICON: &[(&str, f64)] = &[
    // positive
    ("good", 0.7),
    ("great", 0.8),
    ("nice", 0.6),
    ("happy", 0.8),
    ("glad", 0.5),
    ("love", 0.5),
    ("loved", 0.7),
    ("lovely", 0.5),
    ("wonderful", 1.0),
    ("amazing", 0.6),
    ("awesome", 1.0),
    ("fantastic", 0.4),
    ("excellent", 1.0),
    ("best", 1.0),
    ("better", 0.5),
    ("fine", 0.4),
    ("okay", 0.5),
    ("ok", 0.5),
    ("fun", 0.3),
    ("funny", 0.25),
    ("beautiful", 0.85),
    ("pleasant", 0.73),
    ("cheerful", 0.6),
    ("joyful", 0.8),
    ("excited", 0.4),
    ("exciting", 0.3),
    ("calm", 0.3),
    ("relaxed", 0.4),
    ("peaceful", 0.5),
    ("grateful", 0.6),
    ("thankful", 0.6),
    ("hopeful", 0.5),
    ("proud", 0.8),
    ("confident", 0.5),
    ("cool", 0.35),
    ("sweet", 0.35),
    ("perfect", 1.0),
    ("brilliant", 0.9),
    ("superb", 1.0),
    ("delighted", 0.7),
    ("pleased", 0.5),
    ("satisfied", 0.5),
    ("energetic", 0.4),
    ("inspired", 0.5),
    ("motivated", 0.4),
    ("optimistic", 0.5),
    ("blessed", 0.5),
    ("thrilled", 0.6),
    ("ecstatic", 0.8),
    ("cozy", 0.4),
    ("warm", 0.3),
    ("productive", 0.5),
    ("successful", 0.75),
    ("win", 0.8),
    ("smile", 0.3),
    ("laugh", 0.3),
    ("enjoy", 0.4),
    ("enjoyed", 0.4),
    // negative
    ("bad", -0.7),
    ("worse", -0.4),
    ("worst", -1.0),
    ("sad", -0.5),
    ("unhappy", -0.6),
    ("terrible", -1.0),
    ("awful", -1.0),
    ("horrible", -1.0),
    ("boring", -0.3),
    ("dull", -0.3),
    ("meh", -0.2),
    ("poor", -0.4),
    ("wrong", -0.5),
    ("hard", -0.3),
    ("difficult", -0.5),
    ("upset", -0.5),
    ("angry", -0.5),
    ("mad", -0.6),
    ("annoying", -0.8),
    ("annoyed", -0.6),
    ("hate", -0.8),
    ("hated", -0.9),
    ("sick", -0.7),
    ("ill", -0.5),
    ("hurt", -0.5),
    ("pain", -0.5),
    ("painful", -0.7),
    ("lonely", -0.5),
    ("tired", -0.4),
    ("exhausted", -0.4),
    ("stressed", -0.5),
    ("anxious", -0.3),
    ("worried", -0.4),
    ("nervous", -0.3),
    ("scared", -0.5),
    ("afraid", -0.6),
    ("depressed", -0.8),
    ("hopeless", -0.8),
    ("miserable", -1.0),
    ("broken", -0.4),
    ("disappointed", -0.75),
    ("disappointing", -0.6),
    ("frustrated", -0.6),
    ("frustrating", -0.6),
    ("crying", -0.4),
    ("gloomy", -0.6),
    ("grim", -0.5),
    ("rough", -0.3),
    ("stupid", -0.8),
    ("useless", -0.5),
    ("worthless", -0.8),
    ("ugly", -0.7),
    ("low", -0.3),
];

/// Words that scale the next sentiment word.
const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.3),
    ("so", 1.3),
    ("super", 1.3),
    ("extremely", 1.5),
    ("incredibly", 1.5),
    ("quite", 1.1),
    ("somewhat", 0.8),
    ("slightly", 0.5),
];

const NEGATORS: &[&str] = &["not", "no", "never", "neither", "nor", "hardly", "without"];

/// Number of following tokens a negator reaches ("not feeling very good").
const NEGATION_WINDOW: usize = 3;

/// Factor applied to a negated sentiment word.
const NEGATION_FACTOR: f64 = -0.5;

/// Looks up the lexicon polarity of a single lowercase word.
pub fn word_polarity(word: &str) -> Option<f64> {
    LEXICON
        .iter()
        .find(|(w, _)| *w == word)
        .map(|(_, polarity)| *polarity)
}

fn intensity(word: &str) -> Option<f64> {
    INTENSIFIERS
        .iter()
        .find(|(w, _)| *w == word)
        .map(|(_, factor)| *factor)
}

fn is_negator(word: &str) -> bool {
    NEGATORS.contains(&word) || word.ends_with("n't")
}

fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .replace('\u{2019}', "'")
        .split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .map(|t| t.trim_matches('\''))
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Scores the polarity of `text` in `[-1.0, 1.0]`.
///
/// # Examples
///
/// ```
/// use moodbuddy::sentiment::polarity::score;
///
/// assert_eq!(score(""), 0.0);
/// assert_eq!(score("I walked to the store"), 0.0);
/// assert!(score("what a nice afternoon") > 0.5);
/// assert!(score("this is not good") < 0.0);
/// ```
pub fn score(text: &str) -> f64 {
    let mut total = 0.0;
    let mut count = 0usize;
    let mut pending_intensity = 1.0;
    // Tokens left in which a negator still applies
    let mut negation_left = 0usize;

    for token in tokenize(text) {
        if is_negator(&token) {
            negation_left = NEGATION_WINDOW;
            pending_intensity = 1.0;
            continue;
        }

        if let Some(factor) = intensity(&token) {
            pending_intensity *= factor;
            negation_left = negation_left.saturating_sub(1);
            continue;
        }

        if let Some(polarity) = word_polarity(&token) {
            let mut value = polarity * pending_intensity;
            if negation_left > 0 {
                value *= NEGATION_FACTOR;
            }
            total += value;
            count += 1;
            negation_left = 0;
        } else {
            negation_left = negation_left.saturating_sub(1);
        }
        pending_intensity = 1.0;
    }

    if count == 0 {
        return 0.0;
    }

    (total / count as f64).clamp(-1.0, 1.0)
}

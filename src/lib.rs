/*!
# moodbuddy

moodbuddy is a small mood journaling companion. The user says how they feel;
moodbuddy classifies the sentiment, asks either an AI model or a canned
"human friend" for comfort, a recipe, a vibe and a song, looks up a picture
of the dish and records the exchange in a session journal.

## Core Features

- Sentiment classification: a lexical polarity score plus a strong-keyword override
- Lenient parsing of `**Section:**` labeled responses
- OpenAI-compatible chat completion and image search clients with bounded timeouts
- Append-only session journal with CSV export

## Architecture

- `sentiment`: Polarity scoring and label classification
- `response`: Section parsing, display cards and colour palettes
- `ai`: Chat completion client and prompts
- `images`: Dish image search
- `journal`: Journal entries, the append-only log and CSV export
- `ops`: The comfort flow, terminal rendering and interactive sessions
- `cli`, `config`, `logging`, `errors`, `constants`: Application plumbing

## Usage Example

```rust
use moodbuddy::response::{parse, Section};
use moodbuddy::sentiment::{classify, SentimentLabel};

let sentiment = classify("I am so grateful and joyful");
assert_eq!(sentiment.label, SentimentLabel::VeryPositive);

let fields = parse("**Comfort:** Hi there\n**Recipe:** Soup — warm");
assert_eq!(fields.get(Section::Recipe), Some("Soup — warm"));
```
*/

/// AI chat completion client and prompts
pub mod ai;
/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Application-wide constants
pub mod constants;
/// Error types and utilities for error handling
pub mod errors;
/// Dish image search
pub mod images;
/// Session journal and CSV export
pub mod journal;
/// Tracing subscriber setup
pub mod logging;
/// High-level comfort operations
pub mod ops;
/// Labeled response parsing
pub mod response;
/// Mood sentiment classification
pub mod sentiment;

// Re-export important types for convenience
pub use cli::CliArgs;
pub use config::Config;
pub use errors::{AppError, AppResult};
pub use journal::{Journal, JournalEntry, Who};
pub use response::{parse, ParsedFields, Section};
pub use sentiment::{classify, SentimentLabel, SentimentResult};

//! The session's mood journal.
//!
//! A `Journal` is an append-only list of `JournalEntry` values owned by the
//! caller. The classifier and parser never touch it; the orchestrator in
//! [`crate::ops`] appends one entry per comforted mood. Entries can be
//! exported as CSV through the [`export`] module.

pub mod export;


use crate::constants::JOURNAL_TIME_FORMAT;
use crate::sentiment::SentimentResult;
use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Who comforted the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum Who {
    /// A chat completion model.
    Ai,
    /// The canned human friend message.
    Human,
}

impl fmt::Display for Who {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Who::Ai => f.write_str("AI"),
            Who::Human => f.write_str("Human Friend"),
        }
    }
}

/// One comforted mood.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: Uuid,
    pub time: NaiveDateTime,
    pub mood: String,
    pub who: Who,
    pub sentiment: SentimentResult,
    /// The unparsed response text, as returned by the comforter.
    pub raw_response: String,
}

impl JournalEntry {
    /// Creates an entry stamped with the current local time.
    pub fn new(
        mood: impl Into<String>,
        who: Who,
        sentiment: SentimentResult,
        raw_response: impl Into<String>,
    ) -> Self {
        Self::at(Local::now().naive_local(), mood, who, sentiment, raw_response)
    }

    /// Creates an entry with an explicit timestamp.
    pub fn at(
        time: NaiveDateTime,
        mood: impl Into<String>,
        who: Who,
        sentiment: SentimentResult,
        raw_response: impl Into<String>,
    ) -> Self {
        JournalEntry {
            id: Uuid::new_v4(),
            time,
            mood: mood.into(),
            who,
            sentiment,
            raw_response: raw_response.into(),
        }
    }

    /// Timestamp as shown in the journal, e.g. "2024-01-15 09:30".
    pub fn formatted_time(&self) -> String {
        self.time.format(JOURNAL_TIME_FORMAT).to_string()
    }

    /// One-line summary used when listing the journal.
    pub fn summary(&self) -> String {
        format!(
            "{} — {} (Sentiment: {} / {:.2}) ({})",
            self.formatted_time(),
            self.mood,
            self.sentiment,
            self.sentiment.polarity,
            self.who
        )
    }
}

/// Append-only log of journal entries.
#[derive(Debug, Clone, Default)]
pub struct Journal {
    entries: Vec<JournalEntry>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, entry: JournalEntry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in the order they were written.
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    /// Entries with the most recent first.
    pub fn recent_first(&self) -> impl Iterator<Item = &JournalEntry> {
        self.entries.iter().rev()
    }
}

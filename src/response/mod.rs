//! Parsing of labeled comfort responses.
//!
//! A response is free text in which sections are introduced by bold markers
//! such as `**Comfort:**`. [`parse`] is a small, lenient state machine: it
//! never fails, drops text before the first marker, and only recognizes a
//! marker at the start of a trimmed line. Missing sections are simply absent
//! from the result; [`card::ComfortCard`] fills in placeholders for display.

pub mod card;
pub mod palette;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub use card::ComfortCard;

/// A recognized response section, in marker priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Section {
    Comfort,
    Recipe,
    Vibe,
    Song,
    AntiStressActivity,
}

impl Section {
    /// All sections in the order markers are checked.
    pub const ALL: [Section; 5] = [
        Section::Comfort,
        Section::Recipe,
        Section::Vibe,
        Section::Song,
        Section::AntiStressActivity,
    ];

    /// Name as written in the response, e.g. "Anti-Stress Activity".
    pub fn name(&self) -> &'static str {
        match self {
            Section::Comfort => "Comfort",
            Section::Recipe => "Recipe",
            Section::Vibe => "Vibe",
            Section::Song => "Song",
            Section::AntiStressActivity => "Anti-Stress Activity",
        }
    }

    /// The literal marker introducing this section, e.g. `**Comfort:**`.
    pub fn marker(&self) -> &'static str {
        match self {
            Section::Comfort => "**Comfort:**",
            Section::Recipe => "**Recipe:**",
            Section::Vibe => "**Vibe:**",
            Section::Song => "**Song:**",
            Section::AntiStressActivity => "**Anti-Stress Activity:**",
        }
    }

    /// If `line` starts with a marker, returns the section and the rest of the line.
    fn strip_marker(line: &str) -> Option<(Section, &str)> {
        Section::ALL
            .into_iter()
            .find_map(|s| line.strip_prefix(s.marker()).map(|rest| (s, rest)))
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Sections found in a response, keyed by section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedFields(BTreeMap<Section, String>);

impl ParsedFields {
    pub fn get(&self, section: Section) -> Option<&str> {
        self.0.get(&section).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over present sections in priority order.
    pub fn iter(&self) -> impl Iterator<Item = (Section, &str)> {
        self.0.iter().map(|(s, v)| (*s, v.as_str()))
    }

    fn close(&mut self, section: Section, lines: &[&str]) {
        self.0.insert(section, lines.join("\n").trim().to_string());
    }
}

/// Extracts the labeled sections of a response.
///
/// # Examples
///
/// ```
/// use moodbuddy::response::{parse, Section};
///
/// let fields = parse("random preamble\n**Song:** Line one\nLine two");
/// assert_eq!(fields.get(Section::Song), Some("Line one\nLine two"));
/// assert_eq!(fields.len(), 1);
///
/// assert!(parse("").is_empty());
/// ```
pub fn parse(text: &str) -> ParsedFields {
    let mut fields = ParsedFields::default();
    let mut current: Option<Section> = None;
    let mut lines: Vec<&str> = Vec::new();

    for raw in text.trim().lines() {
        let line = raw.trim();

        if let Some((section, rest)) = Section::strip_marker(line) {
            if let Some(open) = current {
                fields.close(open, &lines);
            }
            current = Some(section);
            lines.clear();
            lines.push(rest.trim());
        } else if current.is_some() {
            lines.push(line);
        }
    }

    if let Some(open) = current {
        fields.close(open, &lines);
    }

    fields
}

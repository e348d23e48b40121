//! CSV export of the mood journal.

use super::{Journal, JournalEntry};
use crate::constants::JOURNAL_CSV_HEADERS;
use crate::errors::{AppResult, JournalError};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

fn record(entry: &JournalEntry) -> [String; 7] {
    [
        entry.id.to_string(),
        entry.formatted_time(),
        entry.mood.clone(),
        entry.who.to_string(),
        entry.sentiment.to_string(),
        format!("{:.2}", entry.sentiment.polarity),
        entry.raw_response.clone(),
    ]
}

/// Writes the journal as CSV, oldest entry first, with a header row.
///
/// # Errors
///
/// Returns an error if writing to `writer` fails.
pub fn write_csv<W: Write>(journal: &Journal, writer: W) -> AppResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(JOURNAL_CSV_HEADERS)
        .map_err(JournalError::Csv)?;
    for entry in journal.entries() {
        csv_writer
            .write_record(record(entry))
            .map_err(JournalError::Csv)?;
    }
    csv_writer.flush()?;

    Ok(())
}

/// Expands `~` and environment variables in a user supplied export path.
///
/// # Errors
///
/// Returns `JournalError::InvalidPath` if expansion fails.
pub fn expand_path(raw: &str) -> AppResult<PathBuf> {
    let expanded = shellexpand::full(raw).map_err(|e| JournalError::InvalidPath {
        path: PathBuf::from(raw),
        reason: format!("failed to expand path: {}", e),
    })?;
    Ok(PathBuf::from(expanded.into_owned()))
}

/// Exports the journal to a CSV file at `path`, replacing any existing file.
///
/// # Errors
///
/// Returns an error if:
/// - The journal is empty
/// - The parent directory does not exist
/// - The file cannot be created or written
pub fn export_to_path(journal: &Journal, path: &Path) -> AppResult<()> {
    if journal.is_empty() {
        return Err(JournalError::EmptyJournal.into());
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.is_dir() {
            return Err(JournalError::InvalidPath {
                path: path.to_path_buf(),
                reason: "parent directory does not exist".to_string(),
            }
            .into());
        }
    }

    let file = File::create(path)?;
    write_csv(journal, file)?;

    info!("Exported {} journal entries to {:?}", journal.len(), path);
    Ok(())
}

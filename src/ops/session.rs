//! Interactive session: one mood per input line until end of input.

use super::comfort::Comforter;
use super::render::{render_journal, render_outcome};
use crate::errors::{AppError, AppResult};
use crate::journal::{Journal, Who};
use std::io::{BufRead, Write};
use tracing::{info, warn};

const PROMPT: &str = "💬 How are you feeling today?";

/// Comforts every line of `input`, writing cards to `output`.
///
/// Blank lines get a gentle reminder. A failed mood is reported and the
/// session continues. Bytes that are not valid UTF-8 are replaced with
/// U+FFFD. When input ends, the journal is printed if it has any entries.
///
/// # Errors
///
/// Returns an error only if reading `input` or writing `output` fails.
pub fn run_session<R: BufRead, W: Write>(
    comforter: &Comforter,
    journal: &mut Journal,
    who: Who,
    mut input: R,
    mut output: W,
) -> AppResult<()> {
    info!("Starting interactive session");
    writeln!(output, "{}", PROMPT)?;

    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);

        match comforter.comfort(journal, &line, who) {
            Ok(outcome) => {
                writeln!(output, "{}", render_outcome(&outcome, comforter.model()))?;
            }
            Err(AppError::EmptyMood) => {
                writeln!(output, "⚠️  {}", AppError::EmptyMood)?;
            }
            Err(e) => {
                warn!("Could not comfort mood: {}", e);
                writeln!(output, "❌ {}", e)?;
            }
        }
        writeln!(output, "{}", PROMPT)?;
    }

    if !journal.is_empty() {
        writeln!(output, "\n{}", render_journal(journal))?;
    }

    info!("Session ended with {} journal entries", journal.len());
    Ok(())
}

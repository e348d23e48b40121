/*!
# moodbuddy - A Mood Journaling Companion

Tell moodbuddy how you feel and it answers with comfort, a recipe, a vibe and
a song, from either an AI model or a friendly human-style message. Each mood
is classified, journaled for the session and can be exported as CSV.

## Usage

```text
moodbuddy [OPTIONS] [MOOD]

Arguments:
  [MOOD]  How you are feeling. Omit to start a session that reads one mood per line from stdin

Options:
  -w, --who <WHO>                Who should comfort you [default: ai] [possible values: ai, human]
  -e, --export <PATH>            Write the session's mood journal as CSV to this path on exit
      --log-format <LOG_FORMAT>  Log output format [default: text] [possible values: text, json]
  -v, --verbose                  Print verbose output
  -h, --help                     Print help
  -V, --version                  Print version
```

## Configuration

See [`moodbuddy::config`] for the environment variables. `GROQ_API_KEY` is
required for `--who ai`; `UNSPLASH_ACCESS_KEY` enables dish pictures.
*/

use clap::Parser;
use moodbuddy::cli::CliArgs;
use moodbuddy::config::Config;
use moodbuddy::constants::{TRACING_ROOT_SPAN_NAME, TRACING_SERVICE_NAME};
use moodbuddy::errors::AppResult;
use moodbuddy::journal::{export, Journal};
use moodbuddy::logging;
use moodbuddy::ops::{render_outcome, session, Comforter};
use std::io;
use tracing::{debug, info, info_span};
use uuid::Uuid;

/// The main entry point for the moodbuddy application.
///
/// 1. Parses command-line arguments and initializes logging
/// 2. Loads and validates configuration
/// 3. Comforts the given mood, or runs a session over stdin
/// 4. Exports the journal if requested
fn main() -> AppResult<()> {
    let args = CliArgs::parse();
    logging::init(&args.log_format, args.verbose)?;

    let correlation_id = Uuid::new_v4();
    let root_span = info_span!(
        TRACING_ROOT_SPAN_NAME,
        service = TRACING_SERVICE_NAME,
        correlation_id = %correlation_id
    );
    let _guard = root_span.enter();

    info!("Starting moodbuddy");
    debug!("CLI arguments: {:?}", args);

    let config = Config::load()?;
    config.validate()?;
    debug!("Configuration: {:?}", config);

    let comforter = Comforter::from_config(&config)?;
    let mut journal = Journal::new();

    match args.mood.as_deref() {
        Some(mood) => {
            let outcome = comforter.comfort(&mut journal, mood, args.who)?;
            println!("{}", render_outcome(&outcome, comforter.model()));
        }
        None => {
            let stdin = io::stdin();
            session::run_session(&comforter, &mut journal, args.who, stdin.lock(), io::stdout())?;
        }
    }

    if let Some(raw_path) = args.export.as_deref() {
        let path = export::expand_path(raw_path)?;
        export::export_to_path(&journal, &path)?;
        println!("📥 Mood journal saved to {}", path.display());
    }

    info!("moodbuddy finished");
    Ok(())
}

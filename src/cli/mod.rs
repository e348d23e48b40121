use crate::constants::{APP_DESCRIPTION, APP_NAME, LOG_FORMAT_JSON, LOG_FORMAT_TEXT};
use crate::journal::Who;
use clap::Parser;

/// Tell me how you feel: comfort, a recipe, a vibe and a song for your mood
#[derive(Parser, Debug)]
#[clap(name = APP_NAME, about = APP_DESCRIPTION)]
#[clap(author, version, long_about = None)]
pub struct CliArgs {
    /// How you are feeling. Omit to start a session that reads one mood per line from stdin
    pub mood: Option<String>,

    /// Who should comfort you
    #[clap(short = 'w', long, value_enum, default_value_t = Who::Ai)]
    pub who: Who,

    /// Write the session's mood journal as CSV to this path on exit
    #[clap(short = 'e', long, value_name = "PATH")]
    pub export: Option<String>,

    /// Log output format
    #[clap(long, default_value = LOG_FORMAT_TEXT, value_parser = [LOG_FORMAT_TEXT, LOG_FORMAT_JSON])]
    pub log_format: String,

    /// Print verbose output
    #[clap(short = 'v', long)]
    pub verbose: bool,
}

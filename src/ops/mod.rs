//! High-level operations for comforting moods.
//!
//! This module provides the user-facing flow that orchestrates the core
//! functionality: classifying a mood, getting a response from the chosen
//! comforter, parsing it, illustrating it and journaling it.

pub mod comfort;
pub mod render;
pub mod session;

// Re-export commonly used items
pub use comfort::{ComfortOutcome, Comforter};
pub use render::{render_journal, render_outcome};
pub use session::run_session;

//! engine
//!
//! Runs the interactive session: menu, selection, dispatch, repeat.
//!
//! # Architecture
//!
//! ```text
//! Menu -> Read selection -> Dispatch -> [Continue | Exit]
//! ```
//!
//! The [`runner::Session`] owns the registry and the console for the
//! lifetime of one run. Commands receive the registry by reference; no
//! state lives outside the session.
//!
//! # Invariants
//!
//! - The loop ends only on the exit selection or end of input
//! - A failed command never ends the session

pub mod runner;

pub use runner::Session;

use crate::core::config::Config;
use crate::ui::output::Verbosity;

/// Execution context for commands.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Debug logging enabled.
    pub debug: bool,
    /// Quiet mode (no menu or section headers).
    pub quiet: bool,
    /// Loaded settings.
    pub config: Config,
}

impl Context {
    /// Verbosity derived from the flags.
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.debug)
    }
}

//! engine::runner
//!
//! The read-eval loop for one session.
//!
//! # Lifecycle
//!
//! ```text
//! Show menu -> Read selection -> Dispatch -> Continue | Exit
//! ```
//!
//! An unknown selection prints a message and shows the menu again. The loop
//! ends when the exit command returns [`Flow::Exit`] or when input is
//! closed; it never calls `process::exit`.
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use registrar::engine::{Context, Session};
//! use registrar::ui::output::Verbosity;
//! use registrar::ui::prompts::Console;
//!
//! let input = Cursor::new("5\n7\n");
//! let console = Console::new(input, Vec::new(), Verbosity::Quiet);
//! let mut session = Session::new(Context::default(), console);
//! session.run().unwrap();
//!
//! let output = String::from_utf8(session.into_console().into_output()).unwrap();
//! assert!(output.contains("No students registered."));
//! assert!(output.ends_with("Goodbye!\n"));
//! ```

use std::io::{BufRead, Write};

use super::Context;
use crate::cli::commands::{self, Flow};
use crate::cli::menu::{self, MenuChoice};
use crate::core::registry::Registry;
use crate::ui::output::{self, Verbosity};
use crate::ui::prompts::{Console, PromptError};

/// One interactive run owning its registry and console.
#[derive(Debug)]
pub struct Session<R, W> {
    ctx: Context,
    registry: Registry,
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Start a session with an empty registry.
    pub fn new(ctx: Context, console: Console<R, W>) -> Self {
        Self {
            ctx,
            registry: Registry::new(),
            console,
        }
    }

    /// The registry as it stands.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Consume the session, returning its console.
    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Run until the exit selection or end of input.
    ///
    /// # Errors
    ///
    /// Only I/O failures on the console are returned.
    pub fn run(&mut self) -> Result<(), PromptError> {
        loop {
            match self.step() {
                Ok(Flow::Continue) => continue,
                Ok(Flow::Exit) => return Ok(()),
                Err(PromptError::Closed) => {
                    output::debug("input closed, ending session", self.ctx.verbosity());
                    return Ok(());
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Show the menu, read one selection, and run it.
    pub fn step(&mut self) -> Result<Flow, PromptError> {
        let quiet = self.console.verbosity() == Verbosity::Quiet;
        self.console.banner(menu::render())?;
        let selection = self.console.ask(if quiet { "" } else { menu::PROMPT })?;

        match MenuChoice::from_selection(&selection) {
            Some(choice) => {
                commands::dispatch(choice, &self.ctx, &mut self.registry, &mut self.console)
            }
            None => {
                output::debug(
                    format!("unknown selection {:?}", selection),
                    self.ctx.verbosity(),
                );
                self.console.say(menu::INVALID_OPTION)?;
                Ok(Flow::Continue)
            }
        }
    }
}

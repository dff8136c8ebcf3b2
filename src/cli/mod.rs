//! cli
//!
//! Command-line interface layer for Registrar.
//!
//! # Responsibilities
//!
//! - Parse command-line flags and load settings
//! - Render the menu and dispatch selections to command handlers
//! - Does NOT hold registry state; the session owns it
//!
//! # Architecture
//!
//! [`run`] builds a [`crate::engine::Context`] and hands a stdio console to
//! a [`crate::engine::Session`], which loops over [`menu`] selections and
//! calls into [`commands`].

pub mod args;
pub mod commands;
pub mod menu;

pub use args::Cli;

use crate::core::config::Config;
use crate::engine::{self, Session};
use crate::ui::output::{self, Verbosity};
use crate::ui::prompts::Console;
use anyhow::{Context as _, Result};

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();
    let verbosity = Verbosity::from_flags(cli.quiet, cli.debug);
    if cli.quiet && cli.debug {
        output::warn("--debug has no effect with --quiet", Verbosity::Normal);
    }

    let config = Config::load(cli.config.as_deref()).context("Failed to load config")?;
    match config.loaded_from() {
        Some(path) => output::debug(format!("settings from {}", path.display()), verbosity),
        None => output::debug("no settings file, using defaults", verbosity),
    }

    let ctx = engine::Context {
        debug: cli.debug,
        quiet: cli.quiet,
        config,
    };

    let mut session = Session::new(ctx, Console::stdio(verbosity));
    session.run().context("Console I/O failed")?;
    Ok(())
}

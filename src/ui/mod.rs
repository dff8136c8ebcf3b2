//! ui
//!
//! User interaction utilities.
//!
//! # Modules
//!
//! - [`prompts`] - Console prompts with re-prompt on invalid input
//! - [`output`] - Row formatting, verbosity, and stderr diagnostics
//!
//! # Design
//!
//! All session output and prompts go through this module so that menus,
//! listings, and messages are formatted consistently and quiet mode is
//! honored in one place.

pub mod output;
pub mod prompts;

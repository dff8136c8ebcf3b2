//! ui::output
//!
//! Output formatting and diagnostics.
//!
//! # Design
//!
//! Listings are formatted here so every report renders rows the same way.
//! Diagnostics go to stderr and respect the verbosity level; regular
//! session output goes through [`crate::ui::prompts::Console`].

use std::fmt::Display;

use crate::core::records::{Course, Student};

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Quiet mode - no menus or section headers
    Quiet,
    /// Normal mode - standard output
    Normal,
    /// Debug mode - verbose output
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }
}

/// Print a debug message (only in debug mode).
pub fn debug(message: impl Display, verbosity: Verbosity) {
    if verbosity == Verbosity::Debug {
        eprintln!("[debug] {}", message);
    }
}

/// Print an error message (always shown).
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}

/// Print a warning message (respects quiet mode).
pub fn warn(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        eprintln!("warning: {}", message);
    }
}

/// Format a student for listings.
pub fn format_student(student: &Student) -> String {
    format!(
        "{} - {} | Major: {} | Email: {}",
        student.id,
        student.name,
        student.major,
        student.email_or_na()
    )
}

/// Format a course with its enrollment count.
pub fn format_course(course: &Course, enrolled: usize) -> String {
    format!(
        "{} - {} | Credits: {} | Enrolled: {}",
        course.id, course.name, course.credits, enrolled
    )
}

/// Format a course as `name (id)`.
pub fn format_course_title(course: &Course) -> String {
    format!("{} ({})", course.name, course.id)
}

/// Format items as a 1-based numbered list.
pub fn format_numbered<T: Display>(items: &[T]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(idx, item)| format!("{}. {}", idx + 1, item))
        .collect::<Vec<_>>()
        .join("\n")
}

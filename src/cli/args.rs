//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Flags
//!
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--config <path>`: Read settings from this file
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Hide the menu and section headers

use clap::Parser;
use std::path::PathBuf;

/// Registrar - an interactive registry of students, courses, and enrollments
#[derive(Parser, Debug)]
#[command(name = "registrar")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "\
MENU:
    1. Register new student        5. View all students
    2. Create new course           6. View all courses
    3. Enroll student in course    7. Exit
    4. View students in a course

SCRIPTING:
    # Feed selections and answers on stdin, one per line
    printf '2\\nCS101\\nIntro\\n3\\n6\\n7\\n' | registrar --quiet")]
pub struct Cli {
    /// Read settings from this file instead of the default locations
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Hide the menu and section headers
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

//! Architecture enforcement tests.
//!
//! Registry state lives in the session and all session output goes through
//! the console, so scripted sessions see everything a user would. These
//! tests catch code that bypasses either rule.
//!
//! # Test Categories
//!
//! 1. **Console Bypass Detection** - Handlers must not print directly,
//!    and take their log level from the context
//! 2. **Layering** - The core must not depend on the CLI, engine, or UI
//! 3. **No Globals** - No process-wide mutable registry state

use std::fs;
use std::path::{Path, PathBuf};

/// Macros that write to the process streams directly.
const DIRECT_OUTPUT: &[&str] = &["println!", "print!(", "eprintln!", "eprint!("];

/// Collect all `.rs` files under a directory.
fn rust_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).unwrap_or_else(|_| panic!("Failed to read {}", dir.display())) {
        let path = entry.expect("Failed to read entry").path();
        if path.is_dir() {
            files.extend(rust_files(&path));
        } else if path.extension().map(|e| e == "rs").unwrap_or(false) {
            files.push(path);
        }
    }
    files
}

/// Strip the `#[cfg(test)]` tail of a file so test helpers are not linted.
fn non_test_source(path: &Path) -> String {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|_| panic!("Failed to read {}", path.display()));
    match content.find("#[cfg(test)]") {
        Some(idx) => content[..idx].to_string(),
        None => content,
    }
}

// =============================================================================
// Console Bypass Detection
// =============================================================================

/// Command handlers and the runner write through `Console`, never stdout.
#[test]
fn handlers_do_not_print_directly() {
    let mut violations = Vec::new();

    let mut files = rust_files(Path::new("src/cli/commands"));
    files.extend(rust_files(Path::new("src/engine")));

    for path in files {
        let source = non_test_source(&path);
        for needle in DIRECT_OUTPUT {
            if source.contains(needle) {
                violations.push(format!(
                    "{}: uses {} - write through Console instead",
                    path.display(),
                    needle
                ));
            }
        }
    }

    assert!(
        violations.is_empty(),
        "Console bypass violations:\n{}",
        violations.join("\n")
    );
}

/// Handlers log at the level the context carries, never the console's.
#[test]
fn handlers_log_through_context_verbosity() {
    let mut violations = Vec::new();

    for path in rust_files(Path::new("src/cli/commands")) {
        let source = non_test_source(&path);
        if source.contains("console.verbosity()") {
            violations.push(format!(
                "{}: uses console.verbosity() - use ctx.verbosity() instead",
                path.display()
            ));
        }
    }

    assert!(
        violations.is_empty(),
        "Verbosity source violations:\n{}",
        violations.join("\n")
    );
}

// =============================================================================
// Layering
// =============================================================================

/// The core layer has no knowledge of the layers above it.
#[test]
fn core_does_not_depend_on_outer_layers() {
    let mut violations = Vec::new();

    for path in rust_files(Path::new("src/core")) {
        let source = non_test_source(&path);
        for layer in ["crate::cli", "crate::engine", "crate::ui"] {
            if source.contains(layer) {
                violations.push(format!("{}: references {}", path.display(), layer));
            }
        }
        for needle in DIRECT_OUTPUT {
            if source.contains(needle) {
                violations.push(format!("{}: uses {}", path.display(), needle));
            }
        }
    }

    assert!(
        violations.is_empty(),
        "Layering violations:\n{}",
        violations.join("\n")
    );
}

// =============================================================================
// No Globals
// =============================================================================

/// Registry state is owned by the session, not by statics.
#[test]
fn no_mutable_statics() {
    let mut violations = Vec::new();

    for path in rust_files(Path::new("src")) {
        let source = non_test_source(&path);
        for needle in ["static mut", "thread_local!", "OnceLock", "lazy_static!"] {
            if source.contains(needle) {
                violations.push(format!("{}: uses {}", path.display(), needle));
            }
        }
    }

    assert!(
        violations.is_empty(),
        "Global state violations:\n{}",
        violations.join("\n")
    );
}

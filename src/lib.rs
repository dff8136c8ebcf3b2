//! Registrar - an interactive console registry for students and courses
//!
//! Registrar keeps students, courses, and enrollments in memory for the
//! lifetime of one process and offers a numbered menu to register students,
//! create courses, enroll students, and list what has been recorded.
//!
//! # Architecture
//!
//! The codebase follows a layered architecture:
//!
//! - [`cli`] - Flag parsing, menu, and command handlers
//! - [`engine`] - The session read-eval loop and command context
//! - [`core`] - Domain types, records, registry, and settings
//! - [`ui`] - Console prompts and output formatting
//!
//! # Correctness Invariants
//!
//! Registrar maintains the following invariants:
//!
//! 1. Student ids and course ids are unique
//! 2. A student is enrolled in a course at most once
//! 3. Enrollments only reference existing students and courses
//! 4. A rejected operation leaves the registry unchanged

pub mod cli;
pub mod core;
pub mod engine;
pub mod ui;

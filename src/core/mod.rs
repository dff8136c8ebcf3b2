//! core
//!
//! Domain types, records, and the registry for Registrar.
//!
//! # Modules
//!
//! - [`types`] - Strong types: StudentId, CourseId, Credits
//! - [`records`] - Student, Course, and Enrollment records
//! - [`naming`] - Generated student id format
//! - [`registry`] - In-memory store and its operations
//! - [`config`] - Settings schema and loading
//!
//! # Design Principles
//!
//! - Strong typing prevents blank keys and non-positive credits
//! - The core performs no I/O apart from reading the settings file
//! - Every failed operation leaves the registry unchanged

pub mod config;
pub mod naming;
pub mod records;
pub mod registry;
pub mod types;

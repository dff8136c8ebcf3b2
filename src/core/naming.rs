//! core::naming
//!
//! Student id generation.
//!
//! # Format
//!
//! Generated ids are a fixed prefix followed by a sequence number padded
//! with leading zeros to a minimum width. The sequence number is one more
//! than the number of students already registered, so ids are monotonic
//! for a registry that never removes students. Numbers wider than the pad
//! width are written in full (`ST1000`).

use super::types::{StudentId, TypeError};

/// Default prefix for generated student ids.
pub const DEFAULT_PREFIX: &str = "ST";

/// Default minimum digit count for generated student ids.
pub const DEFAULT_WIDTH: usize = 3;

/// How generated student ids are spelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdFormat {
    pub prefix: String,
    pub width: usize,
}

impl Default for IdFormat {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            width: DEFAULT_WIDTH,
        }
    }
}

impl IdFormat {
    /// Build the id for the given 1-based sequence number.
    ///
    /// # Example
    ///
    /// ```
    /// use registrar::core::naming::IdFormat;
    ///
    /// let format = IdFormat::default();
    /// assert_eq!(format.student_id(1).unwrap().as_str(), "ST001");
    /// assert_eq!(format.student_id(42).unwrap().as_str(), "ST042");
    /// assert_eq!(format.student_id(1000).unwrap().as_str(), "ST1000");
    /// ```
    pub fn student_id(&self, sequence: usize) -> Result<StudentId, TypeError> {
        StudentId::new(format!(
            "{}{:0width$}",
            self.prefix,
            sequence,
            width = self.width
        ))
    }
}

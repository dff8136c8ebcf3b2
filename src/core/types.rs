//! core::types
//!
//! Strong types for registry keys and validated field values.
//!
//! # Types
//!
//! - [`StudentId`] - Student identifier (generated or user supplied)
//! - [`CourseId`] - User supplied course identifier
//! - [`Credits`] - Positive credit count
//!
//! # Validation
//!
//! Input is trimmed and checked at construction time. A blank key or a
//! non-positive credit count cannot be represented.
//!
//! # Examples
//!
//! ```
//! use registrar::core::types::{CourseId, Credits, StudentId};
//!
//! let student = StudentId::new("ST001").unwrap();
//! let course = CourseId::new("  CS101 ").unwrap();
//! assert_eq!(course.as_str(), "CS101");
//!
//! assert_eq!(Credits::parse("3").unwrap().get(), 3);
//! assert!(Credits::parse("abc").is_err());
//! assert!(StudentId::new("   ").is_err());
//! # let _ = student;
//! ```

use std::fmt;

use thiserror::Error;

/// Errors from input validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("{0} cannot be empty")]
    Blank(&'static str),

    #[error("not a valid integer: '{0}'")]
    InvalidNumber(String),

    #[error("credits must be positive, got {0}")]
    NonPositiveCredits(i64),
}

/// Trim `input` and reject it if nothing remains.
///
/// `field` names the value in the resulting [`TypeError::Blank`].
pub fn required_text(field: &'static str, input: &str) -> Result<String, TypeError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(TypeError::Blank(field));
    }
    Ok(trimmed.to_string())
}

/// Trim `input`, mapping blank input to `None`.
pub fn optional_text(input: &str) -> Option<String> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// A student identifier such as `ST001`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StudentId(String);

impl StudentId {
    /// Create a student id from user input.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::Blank` if the input is empty after trimming.
    pub fn new(id: impl AsRef<str>) -> Result<Self, TypeError> {
        required_text("student ID", id.as_ref()).map(Self)
    }

    /// Get the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for StudentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A course identifier such as `CS101`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CourseId(String);

impl CourseId {
    /// Create a course id from user input.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::Blank` if the input is empty after trimming.
    pub fn new(id: impl AsRef<str>) -> Result<Self, TypeError> {
        required_text("course ID", id.as_ref()).map(Self)
    }

    /// Get the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for CourseId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Credit count for a course. Always greater than zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Credits(u32);

impl Credits {
    /// Create a credit count.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::NonPositiveCredits` for zero.
    pub fn new(credits: u32) -> Result<Self, TypeError> {
        if credits == 0 {
            return Err(TypeError::NonPositiveCredits(0));
        }
        Ok(Self(credits))
    }

    /// Parse a credit count typed at the console.
    ///
    /// The value must fit a 32-bit signed integer. Anything else, including
    /// blank input, is `InvalidNumber`; zero and negatives are
    /// `NonPositiveCredits`.
    pub fn parse(input: &str) -> Result<Self, TypeError> {
        let trimmed = input.trim();
        let value: i32 = trimmed
            .parse()
            .map_err(|_| TypeError::InvalidNumber(trimmed.to_string()))?;
        if value <= 0 {
            return Err(TypeError::NonPositiveCredits(i64::from(value)));
        }
        Ok(Self(value.unsigned_abs()))
    }

    /// Get the raw credit count.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Credits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod text {
        use super::*;

        #[test]
        fn required_trims() {
            assert_eq!(required_text("name", "  Ada  ").unwrap(), "Ada");
        }

        #[test]
        fn required_rejects_blank() {
            assert_eq!(required_text("name", ""), Err(TypeError::Blank("name")));
            assert_eq!(required_text("name", " \t "), Err(TypeError::Blank("name")));
        }

        #[test]
        fn optional_maps_blank_to_none() {
            assert_eq!(optional_text("   "), None);
            assert_eq!(optional_text(" a@x.com "), Some("a@x.com".to_string()));
        }
    }

    mod ids {
        use super::*;

        #[test]
        fn student_id_trimmed() {
            let id = StudentId::new(" ST001 ").unwrap();
            assert_eq!(id.as_str(), "ST001");
            assert_eq!(id.to_string(), "ST001");
        }

        #[test]
        fn blank_ids_rejected() {
            assert_eq!(StudentId::new(""), Err(TypeError::Blank("student ID")));
            assert_eq!(CourseId::new("  "), Err(TypeError::Blank("course ID")));
        }

        #[test]
        fn ids_are_case_sensitive() {
            assert_ne!(CourseId::new("cs101").unwrap(), CourseId::new("CS101").unwrap());
        }
    }

    mod credits {
        use super::*;

        #[test]
        fn parses_positive() {
            assert_eq!(Credits::parse("3").unwrap().get(), 3);
            assert_eq!(Credits::parse(" 12 ").unwrap().get(), 12);
        }

        #[test]
        fn rejects_non_numeric() {
            assert_eq!(
                Credits::parse("abc"),
                Err(TypeError::InvalidNumber("abc".into()))
            );
            assert!(matches!(
                Credits::parse("3.5"),
                Err(TypeError::InvalidNumber(_))
            ));
            assert!(matches!(Credits::parse(""), Err(TypeError::InvalidNumber(_))));
        }

        #[test]
        fn rejects_out_of_range() {
            assert!(matches!(
                Credits::parse("99999999999"),
                Err(TypeError::InvalidNumber(_))
            ));
        }

        #[test]
        fn rejects_zero_and_negative() {
            assert_eq!(Credits::parse("0"), Err(TypeError::NonPositiveCredits(0)));
            assert_eq!(Credits::parse("-4"), Err(TypeError::NonPositiveCredits(-4)));
            assert!(Credits::new(0).is_err());
        }
    }
}

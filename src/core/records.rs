//! core::records
//!
//! Immutable value records held by the registry.
//!
//! Records are created once by a registry operation and never mutated or
//! removed afterwards. An [`Enrollment`] refers to its student and course by
//! id only.

use super::types::{CourseId, Credits, StudentId};

/// A registered student.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    /// Absent when registered without an email.
    pub email: Option<String>,
    pub major: String,
}

impl Student {
    /// Email for display, `N/A` when absent.
    pub fn email_or_na(&self) -> &str {
        self.email.as_deref().unwrap_or("N/A")
    }
}

/// A course students can enroll in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub id: CourseId,
    pub name: String,
    pub credits: Credits,
}

/// Link between one student and one course.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Enrollment {
    pub student_id: StudentId,
    pub course_id: CourseId,
}

impl Enrollment {
    pub fn new(student_id: StudentId, course_id: CourseId) -> Self {
        Self {
            student_id,
            course_id,
        }
    }
}

/// Field values for a student that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub name: String,
    pub email: Option<String>,
    pub major: String,
}

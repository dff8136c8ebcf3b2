//! core::registry
//!
//! The in-memory registry of students, courses, and enrollments.
//!
//! # Invariants
//!
//! - Student ids are unique across all students
//! - Course ids are unique across all courses
//! - No `(student, course)` pair is enrolled twice
//! - An enrollment is only recorded when both ids resolve
//!
//! Every mutating operation checks its invariant before touching state, so
//! a failed operation leaves the registry exactly as it was. Collections
//! keep insertion order, which is the order every listing uses.
//!
//! # Example
//!
//! ```
//! use registrar::core::naming::IdFormat;
//! use registrar::core::records::{Course, NewStudent};
//! use registrar::core::registry::Registry;
//! use registrar::core::types::{CourseId, Credits};
//!
//! let mut registry = Registry::new();
//! let id = registry
//!     .register_generated(
//!         &IdFormat::default(),
//!         NewStudent {
//!             name: "Ada".into(),
//!             email: None,
//!             major: "CS".into(),
//!         },
//!     )
//!     .unwrap()
//!     .id
//!     .clone();
//! assert_eq!(id.as_str(), "ST001");
//!
//! registry
//!     .add_course(Course {
//!         id: CourseId::new("CS101").unwrap(),
//!         name: "Intro".into(),
//!         credits: Credits::new(3).unwrap(),
//!     })
//!     .unwrap();
//! registry.enroll("ST001", "CS101").unwrap();
//! assert_eq!(registry.count_enrollments_for_course("CS101"), 1);
//! ```

use thiserror::Error;

use super::naming::IdFormat;
use super::records::{Course, Enrollment, NewStudent, Student};
use super::types::{required_text, CourseId, StudentId, TypeError};

/// Errors from registry operations.
///
/// All of these are recoverable: the operation is rejected and the
/// registry is unchanged.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("student ID '{0}' already exists")]
    DuplicateStudent(StudentId),

    #[error("course ID '{0}' already exists")]
    DuplicateCourse(CourseId),

    #[error("no students registered")]
    NoStudents,

    #[error("no courses created")]
    NoCourses,

    #[error("student with ID '{0}' not found")]
    StudentNotFound(String),

    #[error("course with ID '{0}' not found")]
    CourseNotFound(String),

    #[error("student {student} is already enrolled in {course}")]
    AlreadyEnrolled { student: StudentId, course: CourseId },

    #[error(transparent)]
    Invalid(#[from] TypeError),
}

/// One row of a course roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterEntry<'a> {
    /// The enrolled student resolved.
    Student(&'a Student),
    /// The enrollment references an id with no matching student.
    Unknown(&'a StudentId),
}

/// Students enrolled in one course, in enrollment order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster<'a> {
    pub course: &'a Course,
    pub entries: Vec<RosterEntry<'a>>,
}

/// A course with the number of enrollments referencing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CourseSummary<'a> {
    pub course: &'a Course,
    pub enrolled: usize,
}

/// Student and course an enrollment was recorded for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Enrolled<'a> {
    pub student: &'a Student,
    pub course: &'a Course,
}

/// Students, courses, and enrollments for one session.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    students: Vec<Student>,
    courses: Vec<Course>,
    enrollments: Vec<Enrollment>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Lookups
    // =========================================================================

    /// All students in registration order.
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// All courses in creation order.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// All enrollments in enrollment order.
    pub fn enrollments(&self) -> &[Enrollment] {
        &self.enrollments
    }

    /// Find a student by exact id.
    pub fn find_student(&self, id: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.id.as_str() == id)
    }

    /// Find a course by exact id.
    pub fn find_course(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id.as_str() == id)
    }

    /// Enrollments for a course, in enrollment order.
    pub fn enrollments_for_course<'a>(
        &'a self,
        course_id: &'a str,
    ) -> impl Iterator<Item = &'a Enrollment> + 'a {
        self.enrollments
            .iter()
            .filter(move |e| e.course_id.as_str() == course_id)
    }

    /// Number of enrollments referencing a course.
    pub fn count_enrollments_for_course(&self, course_id: &str) -> usize {
        self.enrollments_for_course(course_id).count()
    }

    /// Check whether a student is enrolled in a course.
    pub fn is_enrolled(&self, student_id: &str, course_id: &str) -> bool {
        self.enrollments
            .iter()
            .any(|e| e.student_id.as_str() == student_id && e.course_id.as_str() == course_id)
    }

    // =========================================================================
    // Students
    // =========================================================================

    /// The id the next generated registration would receive.
    pub fn next_student_id(&self, format: &IdFormat) -> Result<StudentId, RegistryError> {
        Ok(format.student_id(self.students.len() + 1)?)
    }

    /// Register a student under an explicit id.
    ///
    /// # Errors
    ///
    /// - `DuplicateStudent` if the id is taken
    /// - `Invalid` if the name or major is blank
    pub fn register_student(
        &mut self,
        id: StudentId,
        fields: NewStudent,
    ) -> Result<&Student, RegistryError> {
        if self.find_student(id.as_str()).is_some() {
            return Err(RegistryError::DuplicateStudent(id));
        }
        let student = Student {
            id,
            name: required_text("name", &fields.name)?,
            email: fields.email,
            major: required_text("major", &fields.major)?,
        };
        self.students.push(student);
        Ok(&self.students[self.students.len() - 1])
    }

    /// Register a student under the next generated id.
    pub fn register_generated(
        &mut self,
        format: &IdFormat,
        fields: NewStudent,
    ) -> Result<&Student, RegistryError> {
        let id = self.next_student_id(format)?;
        self.register_student(id, fields)
    }

    // =========================================================================
    // Courses
    // =========================================================================

    /// Add a course.
    ///
    /// # Errors
    ///
    /// - `DuplicateCourse` if the course id is taken
    /// - `Invalid` if the course name is blank
    pub fn add_course(&mut self, course: Course) -> Result<&Course, RegistryError> {
        if self.find_course(course.id.as_str()).is_some() {
            return Err(RegistryError::DuplicateCourse(course.id));
        }
        let course = Course {
            name: required_text("course name", &course.name)?,
            ..course
        };
        self.courses.push(course);
        Ok(&self.courses[self.courses.len() - 1])
    }

    // =========================================================================
    // Enrollments
    // =========================================================================

    /// Check that there is at least one student and one course.
    pub fn ensure_enrollable(&self) -> Result<(), RegistryError> {
        if self.students.is_empty() {
            return Err(RegistryError::NoStudents);
        }
        if self.courses.is_empty() {
            return Err(RegistryError::NoCourses);
        }
        Ok(())
    }

    /// Enroll a student in a course.
    ///
    /// Checks run in order and stop at the first failure: registry
    /// non-empty, student exists, course exists, pair not yet enrolled.
    /// On success the resolved student and course are returned.
    pub fn enroll(
        &mut self,
        student_id: &str,
        course_id: &str,
    ) -> Result<Enrolled<'_>, RegistryError> {
        self.ensure_enrollable()?;
        let student_idx = self
            .students
            .iter()
            .position(|s| s.id.as_str() == student_id)
            .ok_or_else(|| RegistryError::StudentNotFound(student_id.to_string()))?;
        let course_idx = self
            .courses
            .iter()
            .position(|c| c.id.as_str() == course_id)
            .ok_or_else(|| RegistryError::CourseNotFound(course_id.to_string()))?;

        let enrollment = Enrollment::new(
            self.students[student_idx].id.clone(),
            self.courses[course_idx].id.clone(),
        );
        if self.is_enrolled(student_id, course_id) {
            return Err(RegistryError::AlreadyEnrolled {
                student: enrollment.student_id,
                course: enrollment.course_id,
            });
        }

        self.enrollments.push(enrollment);
        Ok(Enrolled {
            student: &self.students[student_idx],
            course: &self.courses[course_idx],
        })
    }

    // =========================================================================
    // Reports
    // =========================================================================

    /// Students enrolled in a course.
    ///
    /// Enrollments whose student cannot be resolved appear as
    /// [`RosterEntry::Unknown`] instead of failing the listing.
    pub fn course_roster(&self, course_id: &str) -> Result<Roster<'_>, RegistryError> {
        let course = self
            .find_course(course_id)
            .ok_or_else(|| RegistryError::CourseNotFound(course_id.to_string()))?;

        let entries = self
            .enrollments
            .iter()
            .filter(|e| e.course_id.as_str() == course_id)
            .map(|e| match self.find_student(e.student_id.as_str()) {
                Some(student) => RosterEntry::Student(student),
                None => RosterEntry::Unknown(&e.student_id),
            })
            .collect();

        Ok(Roster { course, entries })
    }

    /// Every course with its enrollment count, in creation order.
    pub fn course_summaries(&self) -> Vec<CourseSummary<'_>> {
        self.courses
            .iter()
            .map(|course| CourseSummary {
                course,
                enrolled: self.count_enrollments_for_course(course.id.as_str()),
            })
            .collect()
    }
}

#[cfg(test)]
impl Registry {
    /// Record an enrollment without any checks.
    pub(crate) fn push_unchecked(&mut self, enrollment: Enrollment) {
        self.enrollments.push(enrollment);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Credits;

    fn fields(name: &str) -> NewStudent {
        NewStudent {
            name: name.to_string(),
            email: None,
            major: "CS".to_string(),
        }
    }

    fn course(id: &str, name: &str) -> Course {
        Course {
            id: CourseId::new(id).unwrap(),
            name: name.to_string(),
            credits: Credits::new(3).unwrap(),
        }
    }

    /// Registry with students ST001 (Ada), ST002 (Grace) and course CS101.
    fn seeded() -> Registry {
        let mut registry = Registry::new();
        let format = IdFormat::default();
        registry.register_generated(&format, fields("Ada")).unwrap();
        registry.register_generated(&format, fields("Grace")).unwrap();
        registry.add_course(course("CS101", "Intro")).unwrap();
        registry
    }

    mod students {
        use super::*;

        #[test]
        fn generated_ids_are_sequential() {
            let registry = seeded();
            let ids: Vec<_> = registry.students().iter().map(|s| s.id.as_str()).collect();
            assert_eq!(ids, ["ST001", "ST002"]);
        }

        #[test]
        fn duplicate_manual_id_rejected() {
            let mut registry = seeded();
            let err = registry
                .register_student(StudentId::new("ST001").unwrap(), fields("Linus"))
                .unwrap_err();
            assert_eq!(
                err,
                RegistryError::DuplicateStudent(StudentId::new("ST001").unwrap())
            );
            assert_eq!(registry.students().len(), 2);
        }

        #[test]
        fn blank_name_rejected() {
            let mut registry = Registry::new();
            let err = registry
                .register_generated(&IdFormat::default(), fields("  "))
                .unwrap_err();
            assert_eq!(err, RegistryError::Invalid(TypeError::Blank("name")));
            assert!(registry.students().is_empty());
        }

        #[test]
        fn find_student_is_exact() {
            let registry = seeded();
            assert_eq!(registry.find_student("ST002").unwrap().name, "Grace");
            assert!(registry.find_student("st002").is_none());
            assert!(registry.find_student("").is_none());
        }
    }

    mod courses {
        use super::*;

        #[test]
        fn duplicate_course_rejected() {
            let mut registry = seeded();
            let err = registry.add_course(course("CS101", "Other")).unwrap_err();
            assert_eq!(
                err,
                RegistryError::DuplicateCourse(CourseId::new("CS101").unwrap())
            );
            assert_eq!(registry.courses().len(), 1);
            assert_eq!(registry.courses()[0].name, "Intro");
        }

        #[test]
        fn name_is_trimmed() {
            let mut registry = Registry::new();
            let added = registry.add_course(course("MA201", "  Linear Algebra ")).unwrap();
            assert_eq!(added.name, "Linear Algebra");
        }
    }

    mod enroll {
        use super::*;

        #[test]
        fn requires_students_then_courses() {
            let mut registry = Registry::new();
            assert_eq!(registry.enroll("ST001", "CS101"), Err(RegistryError::NoStudents));

            registry
                .register_generated(&IdFormat::default(), fields("Ada"))
                .unwrap();
            assert_eq!(registry.enroll("ST001", "CS101"), Err(RegistryError::NoCourses));
        }

        #[test]
        fn unknown_ids_do_not_mutate() {
            let mut registry = seeded();
            assert_eq!(
                registry.enroll("ST999", "CS101"),
                Err(RegistryError::StudentNotFound("ST999".into()))
            );
            assert_eq!(
                registry.enroll("ST001", "XX000"),
                Err(RegistryError::CourseNotFound("XX000".into()))
            );
            assert!(registry.enrollments().is_empty());
        }

        #[test]
        fn student_checked_before_course() {
            let mut registry = seeded();
            assert_eq!(
                registry.enroll("nobody", "nothing"),
                Err(RegistryError::StudentNotFound("nobody".into()))
            );
        }

        #[test]
        fn returns_resolved_records() {
            let mut registry = seeded();
            let enrolled = registry.enroll("ST002", "CS101").unwrap();
            assert_eq!(enrolled.student.name, "Grace");
            assert_eq!(enrolled.course.name, "Intro");
            assert_eq!(registry.enrollments().len(), 1);
        }

        #[test]
        fn duplicate_pair_rejected() {
            let mut registry = seeded();
            registry.enroll("ST001", "CS101").unwrap();
            let err = registry.enroll("ST001", "CS101").unwrap_err();
            assert_eq!(
                err,
                RegistryError::AlreadyEnrolled {
                    student: StudentId::new("ST001").unwrap(),
                    course: CourseId::new("CS101").unwrap(),
                }
            );
            assert_eq!(registry.enrollments().len(), 1);
            assert!(registry.is_enrolled("ST001", "CS101"));
            assert!(!registry.is_enrolled("ST002", "CS101"));
        }
    }

    mod reports {
        use super::*;

        #[test]
        fn roster_in_enrollment_order() {
            let mut registry = seeded();
            registry.enroll("ST002", "CS101").unwrap();
            registry.enroll("ST001", "CS101").unwrap();

            let roster = registry.course_roster("CS101").unwrap();
            assert_eq!(roster.course.name, "Intro");
            let names: Vec<_> = roster
                .entries
                .iter()
                .map(|entry| match entry {
                    RosterEntry::Student(s) => s.name.as_str(),
                    RosterEntry::Unknown(_) => "?",
                })
                .collect();
            assert_eq!(names, ["Grace", "Ada"]);
        }

        #[test]
        fn roster_outlives_lookup_key() {
            let mut registry = seeded();
            registry.enroll("ST001", "CS101").unwrap();

            let key = String::from("CS101");
            let roster = registry.course_roster(&key).unwrap();
            drop(key);

            assert_eq!(roster.course.id.as_str(), "CS101");
            assert!(matches!(
                roster.entries[..],
                [RosterEntry::Student(s)] if s.name == "Ada"
            ));
        }

        #[test]
        fn roster_unknown_course() {
            let registry = seeded();
            assert_eq!(
                registry.course_roster("CS999"),
                Err(RegistryError::CourseNotFound("CS999".into()))
            );
        }

        #[test]
        fn roster_keeps_dangling_enrollments() {
            let mut registry = seeded();
            registry.push_unchecked(Enrollment::new(
                StudentId::new("ST404").unwrap(),
                CourseId::new("CS101").unwrap(),
            ));

            let roster = registry.course_roster("CS101").unwrap();
            assert_eq!(roster.entries.len(), 1);
            assert!(matches!(
                roster.entries[0],
                RosterEntry::Unknown(id) if id.as_str() == "ST404"
            ));
        }

        #[test]
        fn summaries_count_per_course() {
            let mut registry = seeded();
            registry.add_course(course("MA201", "Algebra")).unwrap();
            registry.enroll("ST001", "CS101").unwrap();
            registry.enroll("ST002", "CS101").unwrap();
            registry.enroll("ST002", "MA201").unwrap();

            let counts: Vec<_> = registry
                .course_summaries()
                .iter()
                .map(|s| (s.course.id.as_str(), s.enrolled))
                .collect();
            assert_eq!(counts, [("CS101", 2), ("MA201", 1)]);
            assert_eq!(registry.count_enrollments_for_course("MA201"), 1);
            assert_eq!(registry.enrollments_for_course("CS101").count(), 2);
        }
    }
}

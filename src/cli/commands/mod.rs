//! cli::commands
//!
//! Menu command handlers.
//!
//! # Architecture
//!
//! Each handler:
//! 1. Prompts for its input, re-prompting on recoverable input errors
//! 2. Calls the registry to apply or query
//! 3. Prints the outcome
//!
//! Handlers never end the session on a domain error; they print a
//! message and return. Only console failures propagate.

mod course;
mod enroll;
mod register;
mod view;

pub use course::create_course;
pub use enroll::enroll_student;
pub use register::register_student;
pub use view::{view_all_courses, view_all_students, view_course_students};

use std::io::{BufRead, Write};

use crate::cli::menu::MenuChoice;
use crate::core::registry::{Registry, RegistryError};
use crate::engine::Context;
use crate::ui::output;
use crate::ui::prompts::{Console, PromptError};

/// Result of a command handler.
pub type CommandResult = Result<(), PromptError>;

/// What the session does after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Farewell printed on exit.
pub const FAREWELL: &str = "Goodbye!";

/// Dispatch a menu choice to its handler.
pub fn dispatch<R: BufRead, W: Write>(
    choice: MenuChoice,
    ctx: &Context,
    registry: &mut Registry,
    console: &mut Console<R, W>,
) -> Result<Flow, PromptError> {
    output::debug(format!("dispatching '{}'", choice.label()), ctx.verbosity());

    match choice {
        MenuChoice::RegisterStudent => register::register_student(ctx, registry, console)?,
        MenuChoice::CreateCourse => course::create_course(ctx, registry, console)?,
        MenuChoice::EnrollStudent => enroll::enroll_student(ctx, registry, console)?,
        MenuChoice::ViewCourseStudents => view::view_course_students(registry, console)?,
        MenuChoice::ViewAllStudents => view::view_all_students(registry, console)?,
        MenuChoice::ViewAllCourses => view::view_all_courses(registry, console)?,
        MenuChoice::Exit => {
            console.say(FAREWELL)?;
            return Ok(Flow::Exit);
        }
    }

    Ok(Flow::Continue)
}

/// User-facing message for a rejected registry operation.
pub fn notice(err: &RegistryError) -> String {
    match err {
        RegistryError::DuplicateStudent(_) => {
            "ID already exists. Please enter a different ID.".to_string()
        }
        RegistryError::DuplicateCourse(_) => {
            "Course ID already exists. Please enter a different ID.".to_string()
        }
        RegistryError::NoStudents => "No students registered yet.".to_string(),
        RegistryError::NoCourses => "No courses created yet.".to_string(),
        RegistryError::StudentNotFound(id) => format!("Student with ID '{}' not found.", id),
        RegistryError::CourseNotFound(id) => format!("Course with ID '{}' not found.", id),
        RegistryError::AlreadyEnrolled { student, course } => {
            format!("Student {} is already enrolled in {}.", student, course)
        }
        RegistryError::Invalid(e) => format!("Invalid input: {}.", e),
    }
}

//! enroll command - Enroll a student in a course

use std::io::{BufRead, Write};

use super::{notice, CommandResult};
use crate::core::registry::{Registry, RegistryError};
use crate::engine::Context;
use crate::ui::output;
use crate::ui::prompts::Console;

/// Enroll a student in a course.
///
/// Stops with a message at the first failed check: no students, no
/// courses, unknown student (before the course id is asked for), unknown
/// course, already enrolled. A stopped enrollment changes nothing.
pub fn enroll_student<R: BufRead, W: Write>(
    ctx: &Context,
    registry: &mut Registry,
    console: &mut Console<R, W>,
) -> CommandResult {
    console.banner("\n--- Enroll Student in Course ---")?;

    if let Err(err) = registry.ensure_enrollable() {
        return console.say(notice(&err));
    }

    let student_id = console.ask("Enter student ID: ")?;
    if registry.find_student(&student_id).is_none() {
        return console.say(notice(&RegistryError::StudentNotFound(student_id)));
    }

    let course_id = console.ask("Enter course ID: ")?;
    match registry.enroll(&student_id, &course_id) {
        Ok(enrolled) => {
            output::debug(
                format!("enrolled {} in {}", enrolled.student.id, enrolled.course.id),
                ctx.verbosity(),
            );
            console.say(format!(
                "Successfully enrolled {} ({}) in {} ({}).",
                enrolled.student.name,
                enrolled.student.id,
                enrolled.course.name,
                enrolled.course.id
            ))?;
        }
        Err(err) => console.say(notice(&err))?,
    }

    Ok(())
}

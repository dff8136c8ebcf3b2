//! course command - Create a new course

use std::io::{BufRead, Write};

use super::{notice, CommandResult};
use crate::core::records::Course;
use crate::core::registry::{Registry, RegistryError};
use crate::core::types::{CourseId, Credits, TypeError};
use crate::engine::Context;
use crate::ui::output;
use crate::ui::prompts::{Console, EMPTY_INPUT};

/// Create a course.
///
/// The course id is re-prompted while blank or already taken, and the
/// credit count while it is not a positive integer. Nothing is added
/// until every field is valid.
pub fn create_course<R: BufRead, W: Write>(
    ctx: &Context,
    registry: &mut Registry,
    console: &mut Console<R, W>,
) -> CommandResult {
    console.banner("\n--- Create New Course ---")?;

    let id = {
        let registry = &*registry;
        console.ask_until("Course ID (e.g., CS101): ", |answer| {
            let id = CourseId::new(answer).map_err(|_| EMPTY_INPUT.to_string())?;
            match registry.find_course(id.as_str()) {
                Some(_) => Err(notice(&RegistryError::DuplicateCourse(id))),
                None => Ok(id),
            }
        })?
    };
    let name = console.ask_non_empty("Course name: ")?;
    let credits = console.ask_until("Credits (integer): ", |answer| {
        Credits::parse(answer).map_err(|err| match err {
            TypeError::NonPositiveCredits(_) => "Credits must be positive.".to_string(),
            _ => "Please enter a valid integer for credits.".to_string(),
        })
    })?;

    match registry.add_course(Course { id, name, credits }) {
        Ok(course) => {
            output::debug(format!("created course {}", course.id), ctx.verbosity());
            console.say(format!(
                "Course created: {} - {} ({} credits)",
                course.id, course.name, course.credits
            ))?;
        }
        Err(err) => console.say(notice(&err))?,
    }

    Ok(())
}

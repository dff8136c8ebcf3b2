//! register command - Register a new student

use std::io::{BufRead, Write};

use super::{notice, CommandResult};
use crate::core::config::{EmailPolicy, StudentIdMode};
use crate::core::records::NewStudent;
use crate::core::registry::{Registry, RegistryError};
use crate::core::types::{optional_text, StudentId};
use crate::engine::Context;
use crate::ui::output;
use crate::ui::prompts::{Console, EMPTY_INPUT};

const EMAIL_REQUIRED: &str = "Email cannot be empty. Please enter a valid email.";

/// Register a student.
///
/// Prompts for name, email, and major. The id is generated unless the
/// settings select manual ids, in which case it is prompted for first and
/// re-prompted while it collides with an existing student.
pub fn register_student<R: BufRead, W: Write>(
    ctx: &Context,
    registry: &mut Registry,
    console: &mut Console<R, W>,
) -> CommandResult {
    console.banner("\n--- Register New Student ---")?;

    let manual_id = match ctx.config.student_id_mode() {
        StudentIdMode::Generated => None,
        StudentIdMode::Manual => {
            let registry = &*registry;
            Some(
                console.ask_until("Enter student ID (e.g., ST001): ", |answer| {
                    let id = StudentId::new(answer).map_err(|_| EMPTY_INPUT.to_string())?;
                    match registry.find_student(id.as_str()) {
                        Some(_) => Err(notice(&RegistryError::DuplicateStudent(id))),
                        None => Ok(id),
                    }
                })?,
            )
        }
    };

    let name = console.ask_non_empty("Student name: ")?;
    let email = match ctx.config.email_policy() {
        EmailPolicy::Optional => optional_text(&console.ask("Student email (optional): ")?),
        EmailPolicy::Required => Some(console.ask_until("Student email: ", |answer| {
            optional_text(answer).ok_or_else(|| EMAIL_REQUIRED.to_string())
        })?),
    };
    let major = console.ask_non_empty("Major: ")?;

    let fields = NewStudent { name, email, major };
    let registered = match manual_id {
        Some(id) => registry.register_student(id, fields),
        None => registry.register_generated(&ctx.config.id_format(), fields),
    };

    match registered {
        Ok(student) => {
            output::debug(
                format!("registered student {}", student.id),
                ctx.verbosity(),
            );
            console.say("Student registered successfully!")?;
            console.say(format!("ID: {}", student.id))?;
            console.say(format!("Name: {}", student.name))?;
            console.say(format!("Email: {}", student.email_or_na()))?;
            console.say(format!("Major: {}", student.major))?;
        }
        Err(err) => console.say(notice(&err))?,
    }

    Ok(())
}

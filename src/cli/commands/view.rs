//! view commands - Read-only listings

use std::io::{BufRead, Write};

use super::{notice, CommandResult};
use crate::core::registry::{Registry, RosterEntry};
use crate::ui::output::{format_course, format_course_title, format_numbered, format_student};
use crate::ui::prompts::Console;

/// List the students enrolled in one course.
///
/// Enrollments pointing at a missing student render a placeholder row.
pub fn view_course_students<R: BufRead, W: Write>(
    registry: &Registry,
    console: &mut Console<R, W>,
) -> CommandResult {
    console.banner("\n--- View Students in a Course ---")?;

    if registry.courses().is_empty() {
        return console.say("No courses available.");
    }

    let course_id = console.ask("Enter course ID to view: ")?;
    let roster = match registry.course_roster(&course_id) {
        Ok(roster) => roster,
        Err(err) => return console.say(notice(&err)),
    };

    let title = format_course_title(roster.course);
    if roster.entries.is_empty() {
        return console.say(format!("No students enrolled in {}.", title));
    }

    let rows: Vec<String> = roster
        .entries
        .iter()
        .map(|entry| match entry {
            RosterEntry::Student(student) => format_student(student),
            RosterEntry::Unknown(id) => format!("[Unknown student ID: {}]", id),
        })
        .collect();

    console.say(format!("Students enrolled in {}:", title))?;
    console.say(format_numbered(&rows))
}

/// List every student.
pub fn view_all_students<R: BufRead, W: Write>(
    registry: &Registry,
    console: &mut Console<R, W>,
) -> CommandResult {
    console.banner("\n--- All Registered Students ---")?;

    if registry.students().is_empty() {
        return console.say("No students registered.");
    }

    let rows: Vec<String> = registry.students().iter().map(format_student).collect();
    console.say(format_numbered(&rows))
}

/// List every course with its enrollment count.
pub fn view_all_courses<R: BufRead, W: Write>(
    registry: &Registry,
    console: &mut Console<R, W>,
) -> CommandResult {
    console.banner("\n--- All Courses ---")?;

    let summaries = registry.course_summaries();
    if summaries.is_empty() {
        return console.say("No courses created.");
    }

    let rows: Vec<String> = summaries
        .iter()
        .map(|summary| format_course(summary.course, summary.enrolled))
        .collect();
    console.say(format_numbered(&rows))
}

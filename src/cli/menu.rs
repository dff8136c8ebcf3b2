//! cli::menu
//!
//! The numbered main menu.
//!
//! Each [`MenuChoice`] owns its selection key and label, so the menu text
//! and the selection lookup cannot drift apart.

/// Heading printed above the menu.
pub const TITLE: &str = "=== Student Course Registration System ===";

/// Prompt for a menu selection.
pub const PROMPT: &str = "Choose an option (1-7): ";

/// Message for a selection that matches no entry.
pub const INVALID_OPTION: &str = "Invalid option. Please choose a number between 1 and 7.";

/// An entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    RegisterStudent,
    CreateCourse,
    EnrollStudent,
    ViewCourseStudents,
    ViewAllStudents,
    ViewAllCourses,
    Exit,
}

impl MenuChoice {
    /// All entries in menu order.
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::RegisterStudent,
        MenuChoice::CreateCourse,
        MenuChoice::EnrollStudent,
        MenuChoice::ViewCourseStudents,
        MenuChoice::ViewAllStudents,
        MenuChoice::ViewAllCourses,
        MenuChoice::Exit,
    ];

    /// Selection typed to pick this entry.
    pub fn key(self) -> &'static str {
        match self {
            MenuChoice::RegisterStudent => "1",
            MenuChoice::CreateCourse => "2",
            MenuChoice::EnrollStudent => "3",
            MenuChoice::ViewCourseStudents => "4",
            MenuChoice::ViewAllStudents => "5",
            MenuChoice::ViewAllCourses => "6",
            MenuChoice::Exit => "7",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::RegisterStudent => "Register new student",
            MenuChoice::CreateCourse => "Create new course",
            MenuChoice::EnrollStudent => "Enroll student in course",
            MenuChoice::ViewCourseStudents => "View students in a course",
            MenuChoice::ViewAllStudents => "View all students",
            MenuChoice::ViewAllCourses => "View all courses",
            MenuChoice::Exit => "Exit",
        }
    }

    /// Look up the entry for a typed selection.
    ///
    /// Surrounding whitespace is ignored; anything else must match a key
    /// exactly.
    pub fn from_selection(selection: &str) -> Option<Self> {
        let selection = selection.trim();
        Self::ALL.into_iter().find(|choice| choice.key() == selection)
    }
}

/// Render the menu body, one entry per line.
pub fn render() -> String {
    let mut lines = vec![format!("\n{}", TITLE)];
    lines.extend(
        MenuChoice::ALL
            .iter()
            .map(|choice| format!("{}. {}", choice.key(), choice.label())),
    );
    lines.join("\n")
}

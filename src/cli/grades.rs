use crate::cli::io::{CliMode, Console};
use crate::cli::output;
use crate::cli::{parse_choice, CommandResult, LoopControl};
use crate::errors::CommandError;
use crate::grades::{Roster, Student};

/// Menu-driven student grade manager. The roster exists only for the
/// process lifetime; nothing is persisted.
pub struct GradeManager {
    roster: Roster,
    console: Console,
}

impl GradeManager {
    pub fn from_env() -> Self {
        Self::new(Console::new(CliMode::from_env()))
    }

    pub fn new(console: Console) -> Self {
        Self {
            roster: Roster::new(),
            console,
        }
    }

    /// Runs the menu loop until the user picks exit or input closes.
    pub fn run(&mut self) -> CommandResult {
        loop {
            output::section(Self::menu_text());
            let choice = match self.console.prompt_choice("Enter your choice") {
                Ok(choice) => choice,
                Err(CommandError::InputClosed) => {
                    self.farewell();
                    return Ok(());
                }
                Err(err) => return Err(err),
            };
            match self.dispatch(&choice) {
                Ok(LoopControl::Continue) => {}
                Ok(LoopControl::Exit) => return Ok(()),
                Err(CommandError::InputClosed) => {
                    self.farewell();
                    return Ok(());
                }
                Err(err) => return Err(err),
            }
        }
    }

    fn dispatch(&mut self, choice: &str) -> Result<LoopControl, CommandError> {
        match parse_choice(choice) {
            Some(1) => self.add_student()?,
            Some(2) => self.display_all(),
            Some(3) => {
                self.farewell();
                return Ok(LoopControl::Exit);
            }
            _ => output::warning("Invalid choice. Try again."),
        }
        Ok(LoopControl::Continue)
    }

    fn add_student(&mut self) -> CommandResult {
        let name = self.console.prompt_text("Enter student name")?;
        let marks = self.console.prompt_i32("Enter student marks")?;
        self.roster.add(Student::new(name, marks));
        output::success("Student added successfully.");
        Ok(())
    }

    /// Prints the list header and one row per student; an empty roster
    /// shows the header alone.
    fn display_all(&self) {
        output::section("Student List:");
        for student in self.roster.iter() {
            output::info(student);
        }
    }

    fn farewell(&self) {
        output::info("Exiting the program.");
    }

    fn menu_text() -> String {
        [
            "--- Student Grade Management System ---",
            "1. Add Student",
            "2. Display All Students",
            "3. Exit",
        ]
        .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_lists_every_option() {
        insta::assert_snapshot!(GradeManager::menu_text(), @r"
--- Student Grade Management System ---
1. Add Student
2. Display All Students
3. Exit
");
    }
}

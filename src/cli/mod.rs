//! Menu-driven terminal front end shared by the two binaries.

pub mod expense;
pub mod grades;
pub mod io;
pub mod output;

use crate::errors::CommandError;

pub type CommandResult = Result<(), CommandError>;

/// Signals whether the menu loop keeps running after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

/// Parses a menu selection; `None` covers anything that is not a number.
pub(crate) fn parse_choice(input: &str) -> Option<u32> {
    input.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::parse_choice;

    #[test]
    fn parse_choice_accepts_padded_digits() {
        assert_eq!(parse_choice("2"), Some(2));
        assert_eq!(parse_choice(" 5 "), Some(5));
    }

    #[test]
    fn parse_choice_rejects_non_numeric_input() {
        assert_eq!(parse_choice("abc"), None);
        assert_eq!(parse_choice(""), None);
        assert_eq!(parse_choice("-1"), None);
        assert_eq!(parse_choice("2.5"), None);
    }
}

use colored::Colorize;
use std::fmt;

/// Message categories used by the CLI output helpers. Styling degrades to
/// plain text automatically when stdout is not a terminal.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Section,
}

fn apply_style(kind: MessageKind, message: impl fmt::Display) -> String {
    let text = message.to_string();
    match kind {
        MessageKind::Success => text.bright_green().to_string(),
        MessageKind::Warning => text.bright_yellow().to_string(),
        MessageKind::Error => text.bright_red().to_string(),
        MessageKind::Section => text.bold().to_string(),
        MessageKind::Info => text,
    }
}

pub fn print(kind: MessageKind, message: impl fmt::Display) {
    let formatted = apply_style(kind, message);
    match kind {
        // Sections open with a blank line, matching the menu and list
        // headers of both record keepers.
        MessageKind::Section => println!("\n{formatted}"),
        _ => println!("{formatted}"),
    }
}

pub fn info(message: impl fmt::Display) {
    print(MessageKind::Info, message);
}

pub fn success(message: impl fmt::Display) {
    print(MessageKind::Success, message);
}

pub fn warning(message: impl fmt::Display) {
    print(MessageKind::Warning, message);
}

pub fn error(message: impl fmt::Display) {
    print(MessageKind::Error, message);
}

pub fn section(title: impl fmt::Display) {
    print(MessageKind::Section, title);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_messages_are_never_styled() {
        assert_eq!(apply_style(MessageKind::Info, "plain text"), "plain text");
    }
}

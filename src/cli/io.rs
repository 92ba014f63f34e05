use std::io::{self, BufRead, Write};

use dialoguer::{theme::ColorfulTheme, Input};

use crate::cli::output;
use crate::errors::CommandError;

/// Input mode for the menu loops. Script mode reads plain lines from stdin
/// and is selected by setting `RECORD_KEEPER_CLI_SCRIPT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

impl CliMode {
    pub fn from_env() -> Self {
        if std::env::var_os("RECORD_KEEPER_CLI_SCRIPT").is_some() {
            CliMode::Script
        } else {
            CliMode::Interactive
        }
    }
}

/// Blocking line-oriented console shared by both record keepers. Field
/// prompts go through `dialoguer` in interactive mode and through plain
/// stdout/stdin in script mode; menu selections are plain in both.
pub struct Console {
    mode: CliMode,
    theme: ColorfulTheme,
}

impl Console {
    pub fn new(mode: CliMode) -> Self {
        Self {
            mode,
            theme: ColorfulTheme::default(),
        }
    }

    /// Shows the menu prompt and reads the selection line.
    pub fn prompt_choice(&mut self, label: &str) -> Result<String, CommandError> {
        self.show_prompt(label)?;
        self.read_line()
    }

    /// Shows `label` and reads one line of free-form text.
    pub fn prompt_text(&mut self, label: &str) -> Result<String, CommandError> {
        match self.mode {
            CliMode::Interactive => Input::<String>::with_theme(&self.theme)
                .with_prompt(label)
                .allow_empty(true)
                .interact_text()
                .map_err(prompt_error),
            CliMode::Script => {
                self.show_prompt(label)?;
                self.read_line()
            }
        }
    }

    /// Shows `label` and reads a floating-point amount, re-asking until the
    /// input parses.
    pub fn prompt_f64(&mut self, label: &str) -> Result<f64, CommandError> {
        match self.mode {
            CliMode::Interactive => Input::<f64>::with_theme(&self.theme)
                .with_prompt(label)
                .interact()
                .map_err(prompt_error),
            CliMode::Script => loop {
                self.show_prompt(label)?;
                let raw = self.read_line()?;
                match raw.trim().parse() {
                    Ok(value) => break Ok(value),
                    Err(_) => output::warning("Please enter a valid number."),
                }
            },
        }
    }

    /// Shows `label` and reads an integer, re-asking until the input parses.
    pub fn prompt_i32(&mut self, label: &str) -> Result<i32, CommandError> {
        match self.mode {
            CliMode::Interactive => Input::<i32>::with_theme(&self.theme)
                .with_prompt(label)
                .interact()
                .map_err(prompt_error),
            CliMode::Script => loop {
                self.show_prompt(label)?;
                let raw = self.read_line()?;
                match raw.trim().parse() {
                    Ok(value) => break Ok(value),
                    Err(_) => output::warning("Please enter a valid number."),
                }
            },
        }
    }

    /// Reads one raw line, failing with `InputClosed` once stdin is
    /// exhausted.
    fn read_line(&mut self) -> Result<String, CommandError> {
        let mut buffer = String::new();
        let read = io::stdin().lock().read_line(&mut buffer)?;
        if read == 0 {
            return Err(CommandError::InputClosed);
        }
        Ok(buffer.trim_end_matches(['\r', '\n']).to_string())
    }

    fn show_prompt(&mut self, label: &str) -> Result<(), CommandError> {
        let mut stdout = io::stdout();
        write!(stdout, "{label}: ")?;
        stdout.flush()?;
        Ok(())
    }
}

/// Dialoguer surfaces a closed input stream as an `UnexpectedEof` IO error;
/// map it to the same closed-input signal the line reader raises.
fn prompt_error(err: dialoguer::Error) -> CommandError {
    match err {
        dialoguer::Error::IO(io_err) if io_err.kind() == io::ErrorKind::UnexpectedEof => {
            CommandError::InputClosed
        }
        other => CommandError::Prompt(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eof_from_a_field_prompt_maps_to_input_closed() {
        let eof = dialoguer::Error::from(io::Error::new(io::ErrorKind::UnexpectedEof, "eof"));
        assert!(matches!(prompt_error(eof), CommandError::InputClosed));
    }

    #[test]
    fn other_prompt_failures_stay_prompt_errors() {
        let broken = dialoguer::Error::from(io::Error::new(io::ErrorKind::BrokenPipe, "pipe"));
        assert!(matches!(prompt_error(broken), CommandError::Prompt(_)));
    }
}

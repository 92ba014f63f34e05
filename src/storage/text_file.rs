use std::{
    fs::{File, OpenOptions},
    io::{self, BufRead, BufReader, Write},
    path::{Path, PathBuf},
};

use tracing::{debug, warn};

use crate::errors::RecordError;
use crate::expense::Expense;

/// Outcome of reading the backing file: the records that loaded, plus a
/// human-readable note for every line or failure that kept one out.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub expenses: Vec<Expense>,
    pub warnings: Vec<String>,
}

/// Line-per-record text file persistence for expenses. The file is opened
/// and closed per operation; no handle outlives a call.
#[derive(Debug, Clone)]
pub struct TextFileStore {
    path: PathBuf,
}

impl TextFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every stored expense. A missing file yields an empty report,
    /// a malformed line is skipped with a warning, and any other read
    /// failure stops the load while keeping the lines read so far.
    pub fn load(&self) -> LoadReport {
        let mut report = LoadReport::default();
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return report,
            Err(err) => {
                report.note(format!("Error reading file: {err}"));
                return report;
            }
        };

        for line in BufReader::new(file).lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    report.note(format!("Error reading file: {err}"));
                    break;
                }
            };
            match Expense::from_line(&line) {
                Ok(expense) => report.expenses.push(expense),
                Err(err) => report.note(err.to_string()),
            }
        }
        report
    }

    /// Appends one expense to the backing file, creating it on first use.
    pub fn append(&self, expense: &Expense) -> Result<(), RecordError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", expense.to_line())?;
        debug!("Appended expense record to {}.", self.path.display());
        Ok(())
    }
}

impl LoadReport {
    fn note(&mut self, warning: String) {
        warn!("{}", warning);
        self.warnings.push(warning);
    }
}

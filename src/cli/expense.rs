use chrono::Local;
use tracing::info;

use crate::cli::io::{CliMode, Console};
use crate::cli::output;
use crate::cli::{parse_choice, CommandResult, LoopControl};
use crate::config::Config;
use crate::errors::CommandError;
use crate::expense::{Expense, ExpenseStore};
use crate::storage::TextFileStore;

/// Menu-driven expense tracker over a flat text file. Owns the in-memory
/// store, the persistence handle, and the console for its whole run.
pub struct ExpenseTracker {
    store: ExpenseStore,
    file: TextFileStore,
    console: Console,
}

impl ExpenseTracker {
    /// Builds the tracker from the environment: console mode, configured
    /// backing file, and whatever records that file already holds.
    pub fn from_env() -> Self {
        let config = Config::load_or_default();
        Self::new(
            Console::new(CliMode::from_env()),
            TextFileStore::new(config.expenses_path()),
        )
    }

    pub fn new(console: Console, file: TextFileStore) -> Self {
        let report = file.load();
        for warning in &report.warnings {
            output::warning(warning);
        }
        info!(
            "Loaded {} expense record(s) from {}.",
            report.expenses.len(),
            file.path().display()
        );
        Self {
            store: ExpenseStore::from_records(report.expenses),
            file,
            console,
        }
    }

    /// Runs the menu loop until the user picks exit or input closes.
    pub fn run(&mut self) -> CommandResult {
        loop {
            output::section(Self::menu_text());
            let choice = match self.console.prompt_choice("Choose an option") {
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
            Some(1) => self.add_expense()?,
            Some(2) => self.view_all(),
            Some(3) => self.view_total(),
            Some(4) => self.filter_by_category()?,
            Some(5) => {
                self.farewell();
                return Ok(LoopControl::Exit);
            }
            _ => output::warning("Invalid choice. Try again."),
        }
        Ok(LoopControl::Continue)
    }

    fn add_expense(&mut self) -> CommandResult {
        let date_label = format!("Enter date (e.g. {})", Local::now().format("%Y-%m-%d"));
        let date = self.console.prompt_text(&date_label)?;
        let category = self.console.prompt_text("Enter category (e.g. Food, Travel)")?;
        let description = self.console.prompt_text("Enter description")?;
        let amount = self.console.prompt_f64("Enter amount")?;

        let expense = Expense::new(date, category, description, amount);
        match self.file.append(&expense) {
            Ok(()) => output::success("Expense added and saved!"),
            Err(err) => {
                output::error(format!("Error writing to file: {err}"));
                output::warning("Expense kept in memory but not saved to file.");
            }
        }
        self.store.add(expense);
        Ok(())
    }

    fn view_all(&self) {
        if self.store.is_empty() {
            output::info("No expenses recorded.");
            return;
        }
        output::section("--- All Expenses ---");
        for expense in self.store.iter() {
            output::info(expense);
        }
    }

    fn view_total(&self) {
        output::info(format!("Total Expenses: {:.2}", self.store.total()));
    }

    fn filter_by_category(&mut self) -> CommandResult {
        let query = self.console.prompt_text("Enter category to filter by")?;

        output::section(format!("--- Expenses in Category: {query} ---"));
        let mut found = false;
        for expense in self.store.in_category(&query) {
            output::info(expense);
            found = true;
        }
        if !found {
            output::info("No expenses found in this category.");
        }
        Ok(())
    }

    fn farewell(&self) {
        output::info("Exiting... Goodbye!");
    }

    fn menu_text() -> String {
        [
            "====== Expense Tracker ======",
            "1. Add Expense",
            "2. View All Expenses",
            "3. View Total Expenses",
            "4. Filter by Category",
            "5. Exit",
        ]
        .join("\n")
    }
}

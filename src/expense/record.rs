use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::RecordError;

/// A single spending entry. Date and category are free text; only the
/// amount carries a numeric constraint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub date: String,
    pub category: String,
    pub description: String,
    pub amount: f64,
}

impl Expense {
    pub fn new(
        date: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            date: date.into(),
            category: category.into(),
            description: description.into(),
            amount,
        }
    }

    /// Serializes the expense as one comma-delimited file line.
    pub fn to_line(&self) -> String {
        format!(
            "{},{},{},{}",
            self.date, self.category, self.description, self.amount
        )
    }

    /// Parses one file line. Only the first three delimiters split fields;
    /// the last chunk is taken verbatim and must parse as the amount, so a
    /// comma inside any field makes the line unreadable.
    pub fn from_line(line: &str) -> Result<Self, RecordError> {
        let mut parts = line.splitn(4, ',');
        let (Some(date), Some(category), Some(description), Some(amount_raw)) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(RecordError::MalformedLine(line.to_string()));
        };
        let amount: f64 = amount_raw
            .trim()
            .parse()
            .map_err(|_| RecordError::MalformedLine(line.to_string()))?;
        Ok(Self {
            date: date.to_string(),
            category: category.to_string(),
            description: description.to_string(),
            amount,
        })
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Date: {} | Category: {} | Description: {} | Amount: {:.2}",
            self.date, self.category, self.description, self.amount
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_line_joins_fields_with_commas() {
        let expense = Expense::new("2025-05-28", "Food", "Lunch at cafe", 12.5);
        assert_eq!(expense.to_line(), "2025-05-28,Food,Lunch at cafe,12.5");
    }

    #[test]
    fn to_line_keeps_default_float_rendering() {
        let expense = Expense::new("2025-05-28", "Food", "Coffee", 4.0);
        assert_eq!(expense.to_line(), "2025-05-28,Food,Coffee,4");
    }

    #[test]
    fn from_line_round_trips() {
        let original = Expense::new("2025-05-28", "Food", "Lunch at cafe", 12.5);
        let parsed = Expense::from_line(&original.to_line()).expect("parse line");
        assert_eq!(parsed, original);
    }

    #[test]
    fn from_line_trims_whitespace_around_amount() {
        let parsed = Expense::from_line("2025-05-28,Food,Lunch, 12.5 ").expect("parse line");
        assert_eq!(parsed.amount, 12.5);
    }

    #[test]
    fn from_line_rejects_short_lines() {
        assert!(Expense::from_line("2025-05-28,Food").is_err());
        assert!(Expense::from_line("").is_err());
    }

    #[test]
    fn from_line_rejects_non_numeric_amount() {
        assert!(Expense::from_line("2025-05-28,Food,Lunch,abc").is_err());
    }

    #[test]
    fn comma_in_description_corrupts_the_amount_chunk() {
        let expense = Expense::new("2025-05-28", "Food", "Lunch, with drink", 12.5);
        assert!(Expense::from_line(&expense.to_line()).is_err());
    }

    #[test]
    fn display_uses_two_decimal_amount() {
        let expense = Expense::new("2025-05-28", "Food", "Lunch at cafe", 12.5);
        insta::assert_snapshot!(
            expense.to_string(),
            @"Date: 2025-05-28 | Category: Food | Description: Lunch at cafe | Amount: 12.50"
        );
    }
}

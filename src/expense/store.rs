use super::record::Expense;

/// Ordered, append-only collection of expense records.
#[derive(Debug, Default)]
pub struct ExpenseStore {
    expenses: Vec<Expense>,
}

impl ExpenseStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(expenses: Vec<Expense>) -> Self {
        Self { expenses }
    }

    pub fn add(&mut self, expense: Expense) {
        self.expenses.push(expense);
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Expense> {
        self.expenses.iter()
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Sum of every recorded amount.
    pub fn total(&self) -> f64 {
        self.expenses.iter().map(|expense| expense.amount).sum()
    }

    /// Records whose category matches `query`, ignoring ASCII case.
    pub fn in_category<'a>(&'a self, query: &'a str) -> impl Iterator<Item = &'a Expense> {
        self.expenses
            .iter()
            .filter(move |expense| expense.category.eq_ignore_ascii_case(query))
    }
}

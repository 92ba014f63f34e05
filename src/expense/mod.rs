pub mod record;
pub mod store;

pub use record::Expense;
pub use store::ExpenseStore;

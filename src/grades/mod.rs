pub mod roster;
pub mod student;

pub use roster::Roster;
pub use student::{Grade, Student};

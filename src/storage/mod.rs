pub mod text_file;

pub use text_file::{LoadReport, TextFileStore};

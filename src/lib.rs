pub mod config;
pub mod format;
pub mod parser;
pub mod scanner;

pub use format::{reformat, FormatError};

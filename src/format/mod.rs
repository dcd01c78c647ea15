mod context;
mod merge;
mod nodes;

pub use context::{FormatContext, INDENT_WIDTH};

use thiserror::Error;

use crate::parser::{self, ParseError};
use crate::scanner;

/// Reformat Python source text by rebuilding it from the AST.
///
/// Comments and blank lines, which the parser discards, are scanned
/// separately and merged back in at top-level statement boundaries by
/// source line. Invalid input is rejected; no syntax repair is attempted.
pub fn reformat(source: &str) -> Result<String, FormatError> {
    let module = parser::parse(source)?;
    let tokens = scanner::scan(source);

    let mut ctx = FormatContext::new(tokens);
    Ok(nodes::render(&module, &mut ctx))
}

/// Safety check: the formatted output must parse back to the same tree
/// (line numbers aside, since blank lines move).
pub fn ast_equivalent(original: &str, formatted: &str) -> Result<bool, ParseError> {
    let before = parser::parse(original)?;
    let after = parser::parse(formatted)?;
    Ok(before.equivalent(&after))
}

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

mod ast;
mod lower;

pub use ast::{AugOp, CmpOp, Node};

use thiserror::Error;
use tree_sitter::{Language, Node as TsNode, Parser};

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to load python grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),
    #[error("parser produced no tree")]
    NoTree,
    #[error("invalid syntax at line {line}, column {column}")]
    Syntax { line: usize, column: usize },
}

pub fn language() -> Language {
    tree_sitter_python::LANGUAGE.into()
}

/// Parse Python source into the typed AST.
///
/// Input with syntax errors is rejected outright; the formatter performs no
/// syntax repair.
pub fn parse(source: &str) -> Result<Node, ParseError> {
    let mut parser = Parser::new();
    parser.set_language(&language())?;
    let tree = parser.parse(source, None).ok_or(ParseError::NoTree)?;

    let root = tree.root_node();
    if root.has_error() {
        let (line, column) = first_error(root)
            .map(|node| {
                let pos = node.start_position();
                (pos.row + 1, pos.column + 1)
            })
            .unwrap_or((1, 1));
        return Err(ParseError::Syntax { line, column });
    }

    Ok(lower::lower_module(root, source))
}

/// Locate the first ERROR or MISSING node in a tree that has one.
fn first_error<'tree>(node: TsNode<'tree>) -> Option<TsNode<'tree>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(found) = first_error(child) {
            return Some(found);
        }
    }
    None
}

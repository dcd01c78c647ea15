use crate::scanner::{TokenKind, TokenQueue};

/// Emit queued comments and blank lines that lexically precede a statement.
///
/// A single left-to-right pass: tokens are popped while their line is
/// strictly before `stmt_line` and emitted verbatim, one per output line.
/// Tokens at or past the last statement's line are never drained; trailing
/// comments after the final statement are dropped, as in the original tool.
pub fn drain_preceding(tokens: &mut TokenQueue, stmt_line: usize) -> String {
    let mut out = String::new();

    while let Some(token) = tokens.pop_if_before(stmt_line) {
        match token.kind {
            TokenKind::Comment => {
                out.push_str(&token.text);
                out.push('\n');
            }
            TokenKind::Blank => out.push('\n'),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner;

    #[test]
    fn test_drains_in_order() {
        let mut tokens = scanner::scan("# one\n\n# two\nx = 1\n");
        assert_eq!(drain_preceding(&mut tokens, 4), "# one\n\n# two\n");
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_stops_at_statement_line() {
        let mut tokens = scanner::scan("# before\nx = 1\n# after\n");
        assert_eq!(drain_preceding(&mut tokens, 2), "# before\n");
        assert_eq!(tokens.len(), 1);
        // A second drain for the same boundary takes nothing.
        assert_eq!(drain_preceding(&mut tokens, 2), "");
    }

    #[test]
    fn test_blank_tokens_become_bare_newlines() {
        let mut tokens = scanner::scan("\n\nx = 1\n");
        assert_eq!(drain_preceding(&mut tokens, 3), "\n\n");
    }
}

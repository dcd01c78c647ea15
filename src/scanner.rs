use std::collections::VecDeque;

/// Lexical artifacts the parser discards but the formatter re-attaches.
///
/// Only two kinds reach the formatter: full-line comments and blank lines.
/// Inline comments (code followed by `#`) are not captured; emitting them at
/// a statement boundary would detach them from the code they annotate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Comment,
    Blank,
}

/// A comment or blank line with its 1-indexed source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexToken {
    pub kind: TokenKind,
    /// Comment text without leading indentation; empty for blank lines.
    pub text: String,
    pub line: usize,
}

/// Ordered, front-removable sequence of lexical tokens.
///
/// Tokens are consumed strictly in source order and never re-queued, so the
/// queue only ever shrinks over the lifetime of a formatting pass.
#[derive(Debug, Default)]
pub struct TokenQueue {
    tokens: VecDeque<LexToken>,
}

impl TokenQueue {
    /// Pop the front token if its line is strictly before `line`.
    pub fn pop_if_before(&mut self, line: usize) -> Option<LexToken> {
        match self.tokens.front() {
            Some(token) if token.line < line => self.tokens.pop_front(),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Scan source for comments and blank lines, in source order.
///
/// The scan is line-based: a line is a comment token when its first
/// non-whitespace character is `#`, and a blank token when it contains only
/// whitespace. Lines inside an open `'''`/`"""` string literal belong to that
/// literal and emit no tokens; the value already carries them. Line numbers
/// agree with the parser's (both are 1-indexed over the same source string),
/// which the merge engine relies on.
pub fn scan(source: &str) -> TokenQueue {
    let mut tokens = VecDeque::new();
    let mut open_string: Option<&'static str> = None;

    for (idx, line) in source.lines().enumerate() {
        let line_num = idx + 1;

        if open_string.is_some() {
            track_triple_quotes(line, &mut open_string);
            continue;
        }

        let trimmed = line.trim();

        if trimmed.is_empty() {
            tokens.push_back(LexToken {
                kind: TokenKind::Blank,
                text: String::new(),
                line: line_num,
            });
        } else if trimmed.starts_with('#') {
            tokens.push_back(LexToken {
                kind: TokenKind::Comment,
                text: trimmed.to_string(),
                line: line_num,
            });
        } else {
            track_triple_quotes(line, &mut open_string);
        }
    }

    TokenQueue { tokens }
}

/// Advance the open-string state across one line: an unmatched `'''` or
/// `"""` opens a literal, and the matching delimiter closes it. A delimiter
/// of the other flavor inside an open literal is plain content.
fn track_triple_quotes(line: &str, open_string: &mut Option<&'static str>) {
    let mut rest = line;

    loop {
        match *open_string {
            Some(delim) => {
                let Some(pos) = rest.find(delim) else { return };
                rest = &rest[pos + delim.len()..];
                *open_string = None;
            }
            None => {
                let single = rest.find("'''");
                let double = rest.find("\"\"\"");
                let (pos, delim) = match (single, double) {
                    (Some(s), Some(d)) if s < d => (s, "'''"),
                    (Some(s), None) => (s, "'''"),
                    (_, Some(d)) => (d, "\"\"\""),
                    (None, None) => return,
                };
                rest = &rest[pos + delim.len()..];
                *open_string = Some(delim);
            }
        }
    }
}

use crate::scanner::TokenQueue;

/// Spaces per indentation level.
pub const INDENT_WIDTH: usize = 4;

/// Mutable context threaded through every rendering call.
///
/// Created fresh per `reformat` invocation so no state leaks between calls;
/// the counters live here instead of on a formatter instance.
pub struct FormatContext {
    /// Current nesting depth.
    pub indent_level: usize,
    /// Trailing blank lines reserved by container entries, emitted at exit.
    pub pending_blank_lines: usize,
    /// Comments and blank lines awaiting merge, in source order.
    pub tokens: TokenQueue,
}

impl FormatContext {
    pub fn new(tokens: TokenQueue) -> Self {
        Self {
            indent_level: 0,
            pending_blank_lines: 0,
            tokens,
        }
    }

    /// Leading whitespace for the current level.
    pub fn offset(&self) -> String {
        " ".repeat(INDENT_WIDTH * self.indent_level)
    }

    /// Container entry: one level deeper, and reserve a single trailing
    /// blank line unless one is already pending from a sibling.
    pub fn enter_container(&mut self) {
        self.indent_level += 1;
        if self.pending_blank_lines == 0 {
            self.pending_blank_lines = 1;
        }
    }

    /// Container exit: restore the level and hand back the reserved trailing
    /// newlines, clearing the pending count.
    pub fn exit_container(&mut self) -> String {
        self.indent_level = self.indent_level.saturating_sub(1);
        let trailing = "\n".repeat(self.pending_blank_lines);
        self.pending_blank_lines = 0;
        trailing
    }
}

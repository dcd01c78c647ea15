use super::render;
use crate::format::context::FormatContext;
use crate::parser::{CmpOp, Node};

/// String literal: single-quoted, or triple-quoted when the value spans
/// lines. The original quoting style is not recovered, and embedded quote
/// runs are not escaped.
pub fn render_str(value: &str) -> String {
    if value.contains('\n') {
        format!("'''{}'''", value)
    } else {
        format!("'{}'", value)
    }
}

/// Call: `callee(a, b, kw=c)`, arguments in source order, never wrapped.
pub fn render_call(func: &Node, args: &[Node], ctx: &mut FormatContext) -> String {
    let callee = render(func, ctx);
    let rendered: Vec<String> = args.iter().map(|arg| render(arg, ctx)).collect();
    format!("{}({})", callee, rendered.join(", "))
}

pub fn render_keyword(name: &str, value: &Node, ctx: &mut FormatContext) -> String {
    format!("{}={}", name, render(value, ctx))
}

/// Comparison chain: `left op1 r1 op2 r2 ...`, left-associated.
pub fn render_compare(left: &Node, rest: &[(CmpOp, Node)], ctx: &mut FormatContext) -> String {
    let mut out = render(left, ctx);
    for (op, right) in rest {
        out.push(' ');
        out.push_str(op.token());
        out.push(' ');
        out.push_str(&render(right, ctx));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line_string() {
        assert_eq!(render_str("hello"), "'hello'");
    }

    #[test]
    fn test_multiline_string_uses_triple_quotes() {
        assert_eq!(render_str("\n----\n"), "'''\n----\n'''");
    }
}

mod control_flow;
mod expressions;
mod statements;

use crate::format::context::FormatContext;
use crate::format::merge;
use crate::parser::Node;

/// Render a node to text.
///
/// Dispatch is exhaustive over the closed kind set; everything else arrives
/// as `Unknown` and goes through the structural fallback.
pub fn render(node: &Node, ctx: &mut FormatContext) -> String {
    match node {
        // Root
        Node::Module { body } => render_module(body, ctx),

        // Expressions
        Node::Num { repr } => repr.clone(),
        Node::Str { value } => expressions::render_str(value),
        Node::Name { id } => id.clone(),
        Node::Call { func, args } => expressions::render_call(func, args, ctx),
        Node::Keyword { name, value } => expressions::render_keyword(name, value, ctx),
        Node::Compare { left, rest } => expressions::render_compare(left, rest, ctx),

        // Simple statements
        Node::Expr { value, .. } => statements::render_expr(value, ctx),
        Node::Assign { targets, value, .. } => statements::render_assign(targets, value, ctx),
        Node::AugAssign { target, op, value, .. } => {
            statements::render_aug_assign(target, *op, value, ctx)
        }

        // Container constructs
        Node::For { target, iter, body, .. } => control_flow::render_for(target, iter, body, ctx),
        Node::While { test, body, .. } => control_flow::render_while(test, body, ctx),

        // Unsupported kinds
        Node::Unknown { kind, children, .. } => render_generic(kind, children, ctx),
    }
}

/// Top-level module rule: reset indentation, then for each statement drain
/// the preceding lexical tokens, render it, and append exactly one newline.
fn render_module(body: &[Node], ctx: &mut FormatContext) -> String {
    ctx.indent_level = 0;
    let mut out = String::new();

    for stmt in body {
        if let Some(line) = stmt.start_line() {
            out.push_str(&merge::drain_preceding(&mut ctx.tokens, line));
        }
        out.push_str(&render(stmt, ctx));
        out.push('\n');
    }

    out
}

/// Structural fallback for unsupported kinds: an opaque marker naming the
/// kind, then every lowered child in declaration order.
///
/// This keeps the traversal total on any well-formed tree at the cost of
/// non-idiomatic output for the unsupported subtree. It never touches
/// indentation or token state; child rules handle their own.
fn render_generic(kind: &str, children: &[Node], ctx: &mut FormatContext) -> String {
    let mut out = format!("<{}>", kind);
    for child in children {
        out.push_str(&render(child, ctx));
    }
    out
}

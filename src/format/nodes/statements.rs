use super::render;
use crate::format::context::FormatContext;
use crate::parser::{AugOp, Node};

/// Expression statement: the rendered value at the current offset.
pub fn render_expr(value: &Node, ctx: &mut FormatContext) -> String {
    let text = render(value, ctx);
    format!("{}{}", ctx.offset(), text)
}

/// Assignment: `t1 = t2 = ... = value`.
pub fn render_assign(targets: &[Node], value: &Node, ctx: &mut FormatContext) -> String {
    let mut parts: Vec<String> = targets.iter().map(|target| render(target, ctx)).collect();
    parts.push(render(value, ctx));
    format!("{}{}", ctx.offset(), parts.join(" = "))
}

/// Augmented assignment: `target op= value`.
pub fn render_aug_assign(target: &Node, op: AugOp, value: &Node, ctx: &mut FormatContext) -> String {
    let target = render(target, ctx);
    let value = render(value, ctx);
    format!("{}{} {}= {}", ctx.offset(), target, op.token(), value)
}

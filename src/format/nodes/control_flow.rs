use super::render;
use crate::format::context::FormatContext;
use crate::parser::Node;

pub fn render_for(target: &Node, iter: &Node, body: &[Node], ctx: &mut FormatContext) -> String {
    let target = render(target, ctx);
    let iter = render(iter, ctx);
    render_container(format!("for {} in {}", target, iter), body, ctx)
}

pub fn render_while(test: &Node, body: &[Node], ctx: &mut FormatContext) -> String {
    let test = render(test, ctx);
    render_container(format!("while {}", test), body, ctx)
}

/// Shared container algorithm: header line, indented body statements joined
/// by single newlines, then the trailing blank lines reserved at entry.
///
/// The offset is applied exactly once, at the header, after the exit has
/// restored the level. An empty body renders the bare header. Vertical
/// spacing is accounted entirely at exit so it fires once per container
/// regardless of body length.
fn render_container(header: String, body: &[Node], ctx: &mut FormatContext) -> String {
    ctx.enter_container();
    let lines: Vec<String> = body.iter().map(|stmt| render(stmt, ctx)).collect();
    let trailing = ctx.exit_container();
    format!("{}{}:\n{}{}", ctx.offset(), header, lines.join("\n"), trailing)
}

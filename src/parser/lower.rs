use tree_sitter::Node as TsNode;

use super::ast::{AugOp, CmpOp, Node};

/// Lower the tree-sitter root into the typed AST.
pub fn lower_module(root: TsNode<'_>, source: &str) -> Node {
    Node::Module {
        body: lower_body(root, source),
    }
}

/// Lower the statements of a module or block, skipping comment nodes
/// (comments travel through the scanner, not the tree).
fn lower_body(node: TsNode<'_>, source: &str) -> Vec<Node> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|child| child.kind() != "comment")
        .map(|child| lower(child, source))
        .collect()
}

/// Lower a single CST node. Kinds outside the supported set become
/// `Unknown`, which the formatter renders through its structural fallback.
fn lower(node: TsNode<'_>, source: &str) -> Node {
    match node.kind() {
        "expression_statement" => lower_expression_statement(node, source),
        "for_statement" => lower_for(node, source),
        "while_statement" => lower_while(node, source),
        "integer" | "float" => Node::Num {
            repr: normalize_number(node_text(node, source)),
        },
        "string" => lower_string(node, source),
        "identifier" => Node::Name {
            id: node_text(node, source).to_string(),
        },
        "call" => lower_call(node, source),
        "comparison_operator" => lower_compare(node, source),
        "keyword_argument" => lower_keyword(node, source),
        _ => lower_unknown(node, source),
    }
}

fn lower_expression_statement(node: TsNode<'_>, source: &str) -> Node {
    let line = start_line(node);

    let mut cursor = node.walk();
    let children: Vec<_> = node
        .named_children(&mut cursor)
        .filter(|child| child.kind() != "comment")
        .collect();

    // `a; b` packs several expressions into one statement; no rule for that.
    let [inner] = children.as_slice() else {
        return lower_unknown(node, source);
    };
    let inner = *inner;

    match inner.kind() {
        "assignment" => lower_assignment(line, node, inner, source),
        "augmented_assignment" => lower_aug_assignment(line, node, inner, source),
        _ => Node::Expr {
            line,
            value: Box::new(lower(inner, source)),
        },
    }
}

/// Lower `a = b = value`, flattening the chain of nested assignments that
/// the grammar builds on the right-hand side.
fn lower_assignment(line: usize, stmt: TsNode<'_>, node: TsNode<'_>, source: &str) -> Node {
    let mut targets = Vec::new();
    let mut current = node;

    loop {
        // `x: int = 1` is an annotated assignment; not in the supported set.
        if current.child_by_field_name("type").is_some() {
            return lower_unknown(stmt, source);
        }

        let (Some(left), Some(right)) = (
            current.child_by_field_name("left"),
            current.child_by_field_name("right"),
        ) else {
            return lower_unknown(stmt, source);
        };

        targets.push(lower(left, source));

        if right.kind() == "assignment" {
            current = right;
        } else {
            return Node::Assign {
                line,
                targets,
                value: Box::new(lower(right, source)),
            };
        }
    }
}

fn lower_aug_assignment(line: usize, stmt: TsNode<'_>, node: TsNode<'_>, source: &str) -> Node {
    let (Some(left), Some(operator), Some(right)) = (
        node.child_by_field_name("left"),
        node.child_by_field_name("operator"),
        node.child_by_field_name("right"),
    ) else {
        return lower_unknown(stmt, source);
    };

    let Some(op) = AugOp::from_token(operator.kind()) else {
        return lower_unknown(stmt, source);
    };

    Node::AugAssign {
        line,
        target: Box::new(lower(left, source)),
        op,
        value: Box::new(lower(right, source)),
    }
}

fn lower_for(node: TsNode<'_>, source: &str) -> Node {
    // `for ... else` has no rendering rule; demote rather than drop the
    // else branch.
    if node.child_by_field_name("alternative").is_some() {
        return lower_unknown(node, source);
    }

    let (Some(left), Some(right), Some(body)) = (
        node.child_by_field_name("left"),
        node.child_by_field_name("right"),
        node.child_by_field_name("body"),
    ) else {
        return lower_unknown(node, source);
    };

    Node::For {
        line: start_line(node),
        target: Box::new(lower(left, source)),
        iter: Box::new(lower(right, source)),
        body: lower_body(body, source),
    }
}

fn lower_while(node: TsNode<'_>, source: &str) -> Node {
    if node.child_by_field_name("alternative").is_some() {
        return lower_unknown(node, source);
    }

    let (Some(condition), Some(body)) = (
        node.child_by_field_name("condition"),
        node.child_by_field_name("body"),
    ) else {
        return lower_unknown(node, source);
    };

    Node::While {
        line: start_line(node),
        test: Box::new(lower(condition, source)),
        body: lower_body(body, source),
    }
}

fn lower_call(node: TsNode<'_>, source: &str) -> Node {
    let (Some(function), Some(arguments)) = (
        node.child_by_field_name("function"),
        node.child_by_field_name("arguments"),
    ) else {
        return lower_unknown(node, source);
    };

    let mut cursor = arguments.walk();
    let args = arguments
        .named_children(&mut cursor)
        .filter(|child| child.kind() != "comment")
        .map(|child| lower(child, source))
        .collect();

    Node::Call {
        func: Box::new(lower(function, source)),
        args,
    }
}

fn lower_keyword(node: TsNode<'_>, source: &str) -> Node {
    let (Some(name), Some(value)) = (
        node.child_by_field_name("name"),
        node.child_by_field_name("value"),
    ) else {
        return lower_unknown(node, source);
    };

    Node::Keyword {
        name: node_text(name, source).to_string(),
        value: Box::new(lower(value, source)),
    }
}

/// Lower a comparison chain `a < b < c`. Operands are the named children;
/// operators are the anonymous tokens between them. Any operator outside
/// the closed tag set (`in`, `is`, ...) demotes the whole chain.
fn lower_compare(node: TsNode<'_>, source: &str) -> Node {
    let mut cursor = node.walk();
    let mut operands = Vec::new();
    let mut ops = Vec::new();

    for child in node.children(&mut cursor) {
        if child.is_named() {
            operands.push(lower(child, source));
        } else if let Some(op) = CmpOp::from_token(child.kind()) {
            ops.push(op);
        } else {
            return lower_unknown(node, source);
        }
    }

    if operands.len() != ops.len() + 1 {
        return lower_unknown(node, source);
    }

    let mut operands = operands.into_iter();
    let left = match operands.next() {
        Some(left) => left,
        None => return lower_unknown(node, source),
    };

    Node::Compare {
        left: Box::new(left),
        rest: ops.into_iter().zip(operands).collect(),
    }
}

/// Lower a plain string literal to its inner text. Prefixed strings
/// (f-strings, raw, bytes) carry semantics the quote heuristic would lose,
/// so they demote to `Unknown`.
fn lower_string(node: TsNode<'_>, source: &str) -> Node {
    let mut cursor = node.walk();
    let children: Vec<_> = node.children(&mut cursor).collect();

    let start = children.iter().find(|c| c.kind() == "string_start");
    let end = children.iter().find(|c| c.kind() == "string_end");

    let (Some(start), Some(end)) = (start, end) else {
        return lower_unknown(node, source);
    };

    let opener = node_text(*start, source);
    if !matches!(opener, "'" | "\"" | "'''" | "\"\"\"") {
        return lower_unknown(node, source);
    }

    Node::Str {
        value: source[start.end_byte()..end.start_byte()].to_string(),
    }
}

/// Catch-all: keep the kind name and the lowered named children, in
/// declaration order, for the formatter's structural fallback.
fn lower_unknown(node: TsNode<'_>, source: &str) -> Node {
    let mut cursor = node.walk();
    let children = node
        .named_children(&mut cursor)
        .filter(|child| child.kind() != "comment")
        .map(|child| lower(child, source))
        .collect();

    Node::Unknown {
        line: start_line(node),
        kind: node.kind().to_string(),
        children,
    }
}

/// Normalize an integer literal to decimal text; leave anything that does
/// not parse (floats, imaginary literals) as written.
fn normalize_number(text: &str) -> String {
    let cleaned = text.to_ascii_lowercase().replace('_', "");

    let parsed = if let Some(digits) = cleaned.strip_prefix("0x") {
        i64::from_str_radix(digits, 16).ok()
    } else if let Some(digits) = cleaned.strip_prefix("0o") {
        i64::from_str_radix(digits, 8).ok()
    } else if let Some(digits) = cleaned.strip_prefix("0b") {
        i64::from_str_radix(digits, 2).ok()
    } else {
        cleaned.parse::<i64>().ok()
    };

    match parsed {
        Some(value) => value.to_string(),
        None => text.to_string(),
    }
}

fn start_line(node: TsNode<'_>) -> usize {
    node.start_position().row + 1
}

fn node_text<'a>(node: TsNode<'_>, source: &'a str) -> &'a str {
    &source[node.byte_range()]
}

/// Typed syntax tree lowered from the tree-sitter parse.
///
/// One variant per supported kind, plus `Unknown` for everything else.
/// `Unknown` keeps the grammar kind name and the lowered named children so
/// the formatter's structural fallback can still traverse it. Statement
/// variants carry their 1-indexed start line for the comment merge pass.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Module {
        body: Vec<Node>,
    },
    Num {
        repr: String,
    },
    Str {
        value: String,
    },
    Name {
        id: String,
    },
    Call {
        func: Box<Node>,
        /// Positional and keyword arguments, in source order.
        args: Vec<Node>,
    },
    Keyword {
        name: String,
        value: Box<Node>,
    },
    Compare {
        left: Box<Node>,
        /// Left-associated chain: `left op1 r1 op2 r2 ...`.
        rest: Vec<(CmpOp, Node)>,
    },
    Expr {
        line: usize,
        value: Box<Node>,
    },
    Assign {
        line: usize,
        /// Chained targets, flattened: `a = b = value`.
        targets: Vec<Node>,
        value: Box<Node>,
    },
    AugAssign {
        line: usize,
        target: Box<Node>,
        op: AugOp,
        value: Box<Node>,
    },
    For {
        line: usize,
        target: Box<Node>,
        iter: Box<Node>,
        body: Vec<Node>,
    },
    While {
        line: usize,
        test: Box<Node>,
        body: Vec<Node>,
    },
    Unknown {
        line: usize,
        kind: String,
        children: Vec<Node>,
    },
}

impl Node {
    /// Start line of a statement-position node (1-indexed).
    ///
    /// Expression kinds return `None`; they never stand at a statement
    /// boundary on their own.
    pub fn start_line(&self) -> Option<usize> {
        match self {
            Node::Expr { line, .. }
            | Node::Assign { line, .. }
            | Node::AugAssign { line, .. }
            | Node::For { line, .. }
            | Node::While { line, .. }
            | Node::Unknown { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Structural equality, ignoring source line numbers.
    ///
    /// Line numbers shift whenever the formatter inserts or removes blank
    /// lines, so the AST safety check compares everything but them.
    pub fn equivalent(&self, other: &Node) -> bool {
        match (self, other) {
            (Node::Module { body: a }, Node::Module { body: b }) => vec_equivalent(a, b),
            (Node::Num { repr: a }, Node::Num { repr: b }) => a == b,
            (Node::Str { value: a }, Node::Str { value: b }) => a == b,
            (Node::Name { id: a }, Node::Name { id: b }) => a == b,
            (
                Node::Call { func: fa, args: aa },
                Node::Call { func: fb, args: ab },
            ) => fa.equivalent(fb) && vec_equivalent(aa, ab),
            (
                Node::Keyword { name: na, value: va },
                Node::Keyword { name: nb, value: vb },
            ) => na == nb && va.equivalent(vb),
            (
                Node::Compare { left: la, rest: ra },
                Node::Compare { left: lb, rest: rb },
            ) => {
                la.equivalent(lb)
                    && ra.len() == rb.len()
                    && ra
                        .iter()
                        .zip(rb)
                        .all(|((oa, na), (ob, nb))| oa == ob && na.equivalent(nb))
            }
            (Node::Expr { value: a, .. }, Node::Expr { value: b, .. }) => a.equivalent(b),
            (
                Node::Assign { targets: ta, value: va, .. },
                Node::Assign { targets: tb, value: vb, .. },
            ) => vec_equivalent(ta, tb) && va.equivalent(vb),
            (
                Node::AugAssign { target: ta, op: oa, value: va, .. },
                Node::AugAssign { target: tb, op: ob, value: vb, .. },
            ) => ta.equivalent(tb) && oa == ob && va.equivalent(vb),
            (
                Node::For { target: ta, iter: ia, body: ba, .. },
                Node::For { target: tb, iter: ib, body: bb, .. },
            ) => ta.equivalent(tb) && ia.equivalent(ib) && vec_equivalent(ba, bb),
            (
                Node::While { test: ta, body: ba, .. },
                Node::While { test: tb, body: bb, .. },
            ) => ta.equivalent(tb) && vec_equivalent(ba, bb),
            (
                Node::Unknown { kind: ka, children: ca, .. },
                Node::Unknown { kind: kb, children: cb, .. },
            ) => ka == kb && vec_equivalent(ca, cb),
            _ => false,
        }
    }
}

fn vec_equivalent(a: &[Node], b: &[Node]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.equivalent(y))
}

/// Comparison operator tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmpOp {
    Lt,
    LtE,
    Gt,
    GtE,
    Eq,
    NotEq,
}

impl CmpOp {
    pub fn token(self) -> &'static str {
        match self {
            CmpOp::Lt => "<",
            CmpOp::LtE => "<=",
            CmpOp::Gt => ">",
            CmpOp::GtE => ">=",
            CmpOp::Eq => "==",
            CmpOp::NotEq => "!=",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "<" => Some(CmpOp::Lt),
            "<=" => Some(CmpOp::LtE),
            ">" => Some(CmpOp::Gt),
            ">=" => Some(CmpOp::GtE),
            "==" => Some(CmpOp::Eq),
            "!=" => Some(CmpOp::NotEq),
            _ => None,
        }
    }
}

/// Arithmetic operator tags for augmented assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AugOp {
    Add,
    Sub,
    Mult,
    Div,
    FloorDiv,
    Mod,
    Pow,
}

impl AugOp {
    pub fn token(self) -> &'static str {
        match self {
            AugOp::Add => "+",
            AugOp::Sub => "-",
            AugOp::Mult => "*",
            AugOp::Div => "/",
            AugOp::FloorDiv => "//",
            AugOp::Mod => "%",
            AugOp::Pow => "**",
        }
    }

    /// Map an augmented-assignment token such as `+=` to its tag.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "+=" => Some(AugOp::Add),
            "-=" => Some(AugOp::Sub),
            "*=" => Some(AugOp::Mult),
            "/=" => Some(AugOp::Div),
            "//=" => Some(AugOp::FloorDiv),
            "%=" => Some(AugOp::Mod),
            "**=" => Some(AugOp::Pow),
            _ => None,
        }
    }
}

//! Syntax node kinds.
//!
//! One variant per construct the formatter reads. Leaf text is stored inline;
//! children are [`NodeId`]s and child lists are [`NodeRange`]s.

use std::fmt;

use crate::{NodeId, NodeRange, Span};

/// A node in the syntax tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    pub span: Span,
}

impl Node {
    #[inline]
    pub fn new(kind: NodeKind, span: Span) -> Self {
        Node { kind, span }
    }
}

/// Binary operators that may appear in guards and case constants.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    And,
    Or,
}

impl BinaryOp {
    /// Source spelling of the operator.
    pub fn as_str(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Eq => "==",
            BinaryOp::NotEq => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::LtEq => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::GtEq => ">=",
            BinaryOp::And => "&&",
            BinaryOp::Or => "||",
        }
    }
}

/// Node payloads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    // === Expressions ===
    /// Identifier or type name.
    Ident(Box<str>),
    /// Literal, stored with its source spelling.
    Literal(Box<str>),
    Binary {
        left: NodeId,
        op: BinaryOp,
        right: NodeId,
    },
    /// `callee(args...)`
    Call { callee: NodeId, args: NodeRange },
    /// `(expr)` in expression position.
    Parenthesized { expr: NodeId },

    // === Statements ===
    /// `expr;`
    ExprStmt { expr: NodeId },
    /// `throw expr;`
    Throw { expr: NodeId },
    /// `yield expr;`
    Yield { expr: NodeId },
    /// `{ statements... }`
    Block { statements: NodeRange },
    /// `switch (selector) { cases... }`
    Switch { selector: NodeId, cases: NodeRange },
    /// One switch arm.
    Case(CaseNode),

    // === Case labels ===
    /// Explicit `default` label node.
    DefaultLabel,
    /// Constant expression label.
    ConstantLabel { expr: NodeId },
    /// Pattern label. Hosts that attach the guard to the label (rather than to
    /// the case) report it here.
    PatternLabel {
        pattern: NodeId,
        guard: Option<NodeId>,
    },

    // === Patterns ===
    /// `Type name`
    BindingPattern { ty: NodeId, name: NodeId },
    /// `Deconstructor(nested...) variable?`
    DeconstructionPattern {
        deconstructor: NodeId,
        nested: NodeRange,
        variable: Option<NodeId>,
    },
    /// `(pattern)` in pattern position.
    ParenthesizedPattern { pattern: NodeId },
}

impl NodeKind {
    /// Fieldless discriminant, used as a dispatch key.
    pub fn tag(&self) -> NodeTag {
        match self {
            NodeKind::Ident(_) => NodeTag::Ident,
            NodeKind::Literal(_) => NodeTag::Literal,
            NodeKind::Binary { .. } => NodeTag::Binary,
            NodeKind::Call { .. } => NodeTag::Call,
            NodeKind::Parenthesized { .. } => NodeTag::Parenthesized,
            NodeKind::ExprStmt { .. } => NodeTag::ExprStmt,
            NodeKind::Throw { .. } => NodeTag::Throw,
            NodeKind::Yield { .. } => NodeTag::Yield,
            NodeKind::Block { .. } => NodeTag::Block,
            NodeKind::Switch { .. } => NodeTag::Switch,
            NodeKind::Case(_) => NodeTag::Case,
            NodeKind::DefaultLabel => NodeTag::DefaultLabel,
            NodeKind::ConstantLabel { .. } => NodeTag::ConstantLabel,
            NodeKind::PatternLabel { .. } => NodeTag::PatternLabel,
            NodeKind::BindingPattern { .. } => NodeTag::BindingPattern,
            NodeKind::DeconstructionPattern { .. } => NodeTag::DeconstructionPattern,
            NodeKind::ParenthesizedPattern { .. } => NodeTag::ParenthesizedPattern,
        }
    }
}

/// Discriminant of [`NodeKind`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeTag {
    Ident,
    Literal,
    Binary,
    Call,
    Parenthesized,
    ExprStmt,
    Throw,
    Yield,
    Block,
    Switch,
    Case,
    DefaultLabel,
    ConstantLabel,
    PatternLabel,
    BindingPattern,
    DeconstructionPattern,
    ParenthesizedPattern,
}

impl NodeTag {
    /// Upper-case kind name, as hosts report it.
    pub fn name(self) -> &'static str {
        match self {
            NodeTag::Ident => "IDENTIFIER",
            NodeTag::Literal => "LITERAL",
            NodeTag::Binary => "BINARY",
            NodeTag::Call => "METHOD_INVOCATION",
            NodeTag::Parenthesized => "PARENTHESIZED",
            NodeTag::ExprStmt => "EXPRESSION_STATEMENT",
            NodeTag::Throw => "THROW",
            NodeTag::Yield => "YIELD",
            NodeTag::Block => "BLOCK",
            NodeTag::Switch => "SWITCH",
            NodeTag::Case => "CASE",
            NodeTag::DefaultLabel => "DEFAULT_CASE_LABEL",
            NodeTag::ConstantLabel => "CONSTANT_CASE_LABEL",
            NodeTag::PatternLabel => "PATTERN_CASE_LABEL",
            NodeTag::BindingPattern => "BINDING_PATTERN",
            NodeTag::DeconstructionPattern => "DECONSTRUCTION_PATTERN",
            NodeTag::ParenthesizedPattern => "PARENTHESIZED_PATTERN",
        }
    }
}

impl fmt::Display for NodeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One switch arm.
///
/// `labels` holds the structured label nodes (`DefaultLabel`, `ConstantLabel`,
/// `PatternLabel`) and `expressions` the flat constant expressions a legacy
/// host reports for the same arm. Which of the two a caller may read is decided
/// by the tree's [`HostCapabilities`](crate::HostCapabilities).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaseNode {
    pub labels: NodeRange,
    pub expressions: NodeRange,
    pub form: CaseForm,
}

impl CaseNode {
    /// Arm kind as reported by the host.
    pub fn kind(&self) -> CaseKind<'_> {
        match &self.form {
            CaseForm::Statement { .. } => CaseKind::Statement,
            CaseForm::Rule { .. } => CaseKind::Rule,
            CaseForm::Unrecognized { kind } => CaseKind::Unrecognized(kind),
        }
    }
}

/// Body shape of a switch arm.
///
/// Only the arrow form carries a guard; a colon-form arm has no guard slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CaseForm {
    /// `case L: statements...`
    Statement { statements: NodeRange },
    /// `case L when guard -> body`
    Rule { guard: Option<NodeId>, body: NodeId },
    /// An arm kind introduced by a grammar revision this tree model does not
    /// describe. Carries the raw kind name.
    Unrecognized { kind: Box<str> },
}

/// Arm kind discriminator.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CaseKind<'a> {
    Statement,
    Rule,
    Unrecognized(&'a str),
}

impl CaseKind<'_> {
    /// Raw kind name.
    pub fn name(&self) -> &str {
        match self {
            CaseKind::Statement => "STATEMENT",
            CaseKind::Rule => "RULE",
            CaseKind::Unrecognized(name) => name,
        }
    }
}

impl fmt::Display for CaseKind<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

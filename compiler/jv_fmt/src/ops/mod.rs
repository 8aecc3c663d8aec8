//! Formatting Instructions
//!
//! The formatter does not lay out text. It describes where breaks are allowed
//! or forced and which runs must stay grouped, and a downstream layout solver
//! turns that description into lines.
//!
//! [`OpsSink`] is the instruction protocol. [`OpsBuilder`] is the recording
//! implementation: it keeps the [`Op`] stream in order for the solver (or a
//! test) to consume.

use std::fmt;

use jv_ir::{NodeId, Span};

/// Extra indentation applied when a group breaks.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Indent(u32);

impl Indent {
    pub const ZERO: Indent = Indent(0);

    #[inline]
    pub const fn spaces(n: u32) -> Self {
        Indent(n)
    }

    /// Indentation in columns.
    #[inline]
    pub const fn amount(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Indent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "+{}", self.0)
    }
}

/// Blank-line request at a break.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BlankLine {
    No,
    /// Keep whatever the input had.
    Preserve,
}

/// One formatting instruction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Op {
    /// Literal token, optionally tagged with the indentation a break before
    /// it should use.
    Token { text: Box<str>, hint: Option<Indent> },
    /// Mandatory single space.
    Space,
    /// Unconditional line break.
    ForcedBreak,
    /// Optional break, taken for every such break of the enclosing group or
    /// for none of them. Renders as `fallback` when not taken.
    Break { fallback: &'static str },
    /// Optional break decided independently per occurrence.
    FillBreak { fallback: &'static str },
    /// Start of an indentation group.
    Open(Indent),
    /// End of the innermost group.
    Close,
    /// Token the layout may omit when the input does not need it.
    GuessToken(&'static str),
    /// Partial-format position marker for a node.
    Sync { node: NodeId, span: Span },
    BlankLine(BlankLine),
}

impl Op {
    /// Unhinted token.
    pub fn token(text: &str) -> Self {
        Op::Token {
            text: text.into(),
            hint: None,
        }
    }

    /// Token carrying an indentation hint.
    pub fn hinted(text: &str, hint: Indent) -> Self {
        Op::Token {
            text: text.into(),
            hint: Some(hint),
        }
    }

    /// Text of a token or guess token.
    pub fn token_text(&self) -> Option<&str> {
        match self {
            Op::Token { text, .. } => Some(text.as_ref()),
            Op::GuessToken(text) => Some(*text),
            _ => None,
        }
    }
}

/// Renders the instruction with every optional break untaken.
impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Token { text, .. } => f.write_str(text),
            Op::GuessToken(text) => f.write_str(text),
            Op::Space => f.write_str(" "),
            Op::ForcedBreak => writeln!(f),
            Op::Break { fallback } | Op::FillBreak { fallback } => f.write_str(fallback),
            Op::Open(_) | Op::Close | Op::Sync { .. } | Op::BlankLine(_) => Ok(()),
        }
    }
}

/// Receiver of formatting instructions.
///
/// Implementations decide layout; the formatter only describes it.
pub trait OpsSink {
    fn token(&mut self, text: &str, hint: Option<Indent>);

    fn space(&mut self);

    fn forced_break(&mut self);

    /// All-or-nothing optional break for the enclosing group.
    fn break_op(&mut self, fallback: &'static str);

    /// Per-occurrence optional break.
    fn break_to_fill(&mut self, fallback: &'static str);

    fn open(&mut self, indent: Indent);

    fn close(&mut self);

    /// A token the sink may drop when it is redundant.
    fn guess_token(&mut self, text: &'static str);

    /// Partial-format marker for `node`.
    fn sync(&mut self, node: NodeId, span: Span);

    fn blank_line(&mut self, wanted: BlankLine);
}

/// Recording sink.
///
/// Keeps every instruction in emission order. A guess token whose text equals
/// the token just emitted is dropped, so `throw e;` followed by a guessed `;`
/// records a single terminator.
#[derive(Debug, Default)]
pub struct OpsBuilder {
    ops: Vec<Op>,
    depth: usize,
}

impl OpsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        OpsBuilder {
            ops: Vec::with_capacity(capacity),
            depth: 0,
        }
    }

    /// Instructions recorded so far.
    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    /// Number of currently open groups.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Consume the builder and return the instruction stream.
    pub fn into_ops(self) -> Vec<Op> {
        debug_assert_eq!(self.depth, 0, "unbalanced open/close in instruction stream");
        self.ops
    }

    /// Single-line rendering: optional breaks untaken, forced breaks as
    /// newlines, no indentation. For diagnostics and tests.
    pub fn flat_text(&self) -> String {
        render_flat(&self.ops)
    }

    fn last_token_text(&self) -> Option<&str> {
        self.ops.iter().rev().find_map(Op::token_text)
    }
}

/// Render an instruction stream flat (see [`OpsBuilder::flat_text`]).
pub fn render_flat(ops: &[Op]) -> String {
    ops.iter().map(ToString::to_string).collect()
}

impl OpsSink for OpsBuilder {
    fn token(&mut self, text: &str, hint: Option<Indent>) {
        self.ops.push(Op::Token {
            text: text.into(),
            hint,
        });
    }

    fn space(&mut self) {
        self.ops.push(Op::Space);
    }

    fn forced_break(&mut self) {
        self.ops.push(Op::ForcedBreak);
    }

    fn break_op(&mut self, fallback: &'static str) {
        self.ops.push(Op::Break { fallback });
    }

    fn break_to_fill(&mut self, fallback: &'static str) {
        self.ops.push(Op::FillBreak { fallback });
    }

    fn open(&mut self, indent: Indent) {
        self.depth += 1;
        self.ops.push(Op::Open(indent));
    }

    fn close(&mut self) {
        debug_assert!(self.depth > 0, "close without matching open");
        self.depth = self.depth.saturating_sub(1);
        self.ops.push(Op::Close);
    }

    fn guess_token(&mut self, text: &'static str) {
        if self.last_token_text() == Some(text) {
            return;
        }
        self.ops.push(Op::GuessToken(text));
    }

    fn sync(&mut self, node: NodeId, span: Span) {
        self.ops.push(Op::Sync { node, span });
    }

    fn blank_line(&mut self, wanted: BlankLine) {
        self.ops.push(Op::BlankLine(wanted));
    }
}

//! Traversal
//!
//! [`FormatVisitor`] walks the host tree and hands every node to the handler
//! registered for its kind in the active [`DispatchTable`]. Nodes without a
//! handler get the default walk: their children are scanned in source order
//! and the node itself emits nothing.
//!
//! Handlers return [`FormatResult`]; results combine left to right and the
//! first error stops the traversal.
//!
//! # Modules
//!
//! - [`dispatch`]: handler tables per language level
//! - `base`: handlers shared by every level

mod base;
pub mod dispatch;

use jv_ir::{CaseForm, NodeId, NodeKind, SyntaxTree};
use jv_stack::ensure_sufficient_stack;

use crate::compat::HostApiShape;
use crate::config::{FormatConfig, Indents};
use crate::error::FormatResult;
use crate::ops::{BlankLine, Indent, OpsSink};

pub use base::BlockOptions;
pub use dispatch::{DispatchTable, Handler};

/// Traversal context for one format invocation.
///
/// Owns nothing shared: the tree is borrowed read-only, the sink exclusively.
pub struct FormatVisitor<'a> {
    tree: &'a SyntaxTree,
    sink: &'a mut dyn OpsSink,
    table: &'static DispatchTable,
    shape: HostApiShape,
    indents: Indents,
}

impl<'a> FormatVisitor<'a> {
    pub fn new(
        tree: &'a SyntaxTree,
        sink: &'a mut dyn OpsSink,
        shape: HostApiShape,
        config: FormatConfig,
    ) -> Self {
        FormatVisitor {
            tree,
            sink,
            table: DispatchTable::for_level(config.level),
            shape,
            indents: config.indents(),
        }
    }

    #[inline]
    pub fn tree(&self) -> &'a SyntaxTree {
        self.tree
    }

    /// Label shape resolved for this invocation.
    #[inline]
    pub fn shape(&self) -> HostApiShape {
        self.shape
    }

    #[inline]
    pub fn indents(&self) -> Indents {
        self.indents
    }

    // ===== Dispatch =====

    /// Visit one node through the dispatch table.
    pub fn scan(&mut self, id: NodeId) -> FormatResult {
        ensure_sufficient_stack(|| match self.table.handler(self.tree.tag(id)) {
            Some(handler) => handler(self, id),
            None => self.walk_children(id),
        })
    }

    /// Visit nodes in order, stopping at the first error.
    pub fn scan_all(&mut self, ids: &[NodeId]) -> FormatResult {
        ids.iter().try_for_each(|&id| self.scan(id))
    }

    /// Visit an optional node.
    pub fn scan_opt(&mut self, id: Option<NodeId>) -> FormatResult {
        id.map_or(Ok(()), |id| self.scan(id))
    }

    /// Default walk: children in source order, nothing for the node itself.
    pub fn walk_children(&mut self, id: NodeId) -> FormatResult {
        let tree = self.tree;
        match tree.kind(id) {
            NodeKind::Ident(_) | NodeKind::Literal(_) | NodeKind::DefaultLabel => Ok(()),
            NodeKind::Binary { left, right, .. } => {
                self.scan(*left)?;
                self.scan(*right)
            }
            NodeKind::Call { callee, args } => {
                self.scan(*callee)?;
                self.scan_all(tree.list(*args))
            }
            NodeKind::Parenthesized { expr }
            | NodeKind::ExprStmt { expr }
            | NodeKind::Throw { expr }
            | NodeKind::Yield { expr }
            | NodeKind::ConstantLabel { expr } => self.scan(*expr),
            NodeKind::Block { statements } => self.scan_all(tree.list(*statements)),
            NodeKind::Switch { selector, cases } => {
                self.scan(*selector)?;
                self.scan_all(tree.list(*cases))
            }
            NodeKind::Case(case) => {
                self.scan_all(tree.list(case.labels))?;
                match &case.form {
                    CaseForm::Statement { statements } => {
                        self.scan_all(tree.list(*statements))
                    }
                    CaseForm::Rule { guard, body } => {
                        self.scan_opt(*guard)?;
                        self.scan(*body)
                    }
                    CaseForm::Unrecognized { .. } => Ok(()),
                }
            }
            NodeKind::PatternLabel { pattern, guard } => {
                self.scan(*pattern)?;
                self.scan_opt(*guard)
            }
            NodeKind::BindingPattern { ty, name } => {
                self.scan(*ty)?;
                self.scan(*name)
            }
            NodeKind::DeconstructionPattern {
                deconstructor,
                nested,
                variable,
            } => {
                self.scan(*deconstructor)?;
                self.scan_all(tree.list(*nested))?;
                self.scan_opt(*variable)
            }
            NodeKind::ParenthesizedPattern { pattern } => self.scan(*pattern),
        }
    }

    // ===== Emission =====

    #[inline]
    pub fn token(&mut self, text: &str) {
        self.sink.token(text, None);
    }

    #[inline]
    pub fn token_hinted(&mut self, text: &str, hint: Indent) {
        self.sink.token(text, Some(hint));
    }

    #[inline]
    pub fn space(&mut self) {
        self.sink.space();
    }

    #[inline]
    pub fn forced_break(&mut self) {
        self.sink.forced_break();
    }

    #[inline]
    pub fn break_op(&mut self, fallback: &'static str) {
        self.sink.break_op(fallback);
    }

    #[inline]
    pub fn break_to_fill(&mut self, fallback: &'static str) {
        self.sink.break_to_fill(fallback);
    }

    #[inline]
    pub fn open(&mut self, indent: Indent) {
        self.sink.open(indent);
    }

    #[inline]
    pub fn close(&mut self) {
        self.sink.close();
    }

    #[inline]
    pub fn guess_token(&mut self, text: &'static str) {
        self.sink.guess_token(text);
    }

    #[inline]
    pub fn blank_line(&mut self, wanted: BlankLine) {
        self.sink.blank_line(wanted);
    }

    /// Partial-format marker for `id`.
    pub fn sync(&mut self, id: NodeId) {
        self.sink.sync(id, self.tree.span(id));
    }

    /// `text` with a space on each side: ` when `, ` == `.
    pub fn spaced_token(&mut self, text: &str) {
        self.space();
        self.token(text);
        self.space();
    }
}

//! Pattern Emission
//!
//! Deconstruction and parenthesized patterns. Element lists inside a
//! deconstruction use fill-breaks, so a long record pattern wraps element by
//! element instead of putting every component on its own line. Parenthesized
//! patterns never break.
//!
//! Pattern kinds this module does not specialize (binding patterns, and
//! anything a newer grammar adds) are handed back to the traversal.

use jv_ir::{NodeId, NodeKind, SyntaxTree};
use jv_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::error::FormatResult;
use crate::visitor::FormatVisitor;

/// A pattern node, classified for emission.
///
/// Nested patterns stay as node ids and are classified when reached.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Pattern<'t> {
    /// `Deconstructor(nested, ...) binding?`
    Deconstruction {
        deconstructor: NodeId,
        nested: &'t [NodeId],
        binding: Option<NodeId>,
    },
    /// `(inner)`
    Parenthesized { inner: NodeId },
    /// Emitted by the traversal's handler for its kind.
    Opaque(NodeId),
}

impl<'t> Pattern<'t> {
    pub fn classify(tree: &'t SyntaxTree, id: NodeId) -> Self {
        match tree.kind(id) {
            NodeKind::DeconstructionPattern {
                deconstructor,
                nested,
                variable,
            } => Pattern::Deconstruction {
                deconstructor: *deconstructor,
                nested: tree.list(*nested),
                binding: *variable,
            },
            NodeKind::ParenthesizedPattern { pattern } => Pattern::Parenthesized { inner: *pattern },
            _ => Pattern::Opaque(id),
        }
    }
}

impl FormatVisitor<'_> {
    /// Emit a classified pattern.
    pub fn emit_pattern(&mut self, pattern: Pattern<'_>) -> FormatResult {
        ensure_sufficient_stack(|| match pattern {
            Pattern::Deconstruction {
                deconstructor,
                nested,
                binding,
            } => {
                trace!(nested = nested.len(), binding = binding.is_some(), "deconstruction pattern");
                self.scan(deconstructor)?;
                self.token("(");
                for (i, &element) in nested.iter().enumerate() {
                    if i > 0 {
                        self.fill_separator();
                    }
                    let element = Pattern::classify(self.tree(), element);
                    self.emit_pattern(element)?;
                }
                if let Some(binding) = binding {
                    if !nested.is_empty() {
                        self.fill_separator();
                    }
                    self.scan(binding)?;
                }
                self.token(")");
                Ok(())
            }
            Pattern::Parenthesized { inner } => {
                self.token("(");
                let inner = Pattern::classify(self.tree(), inner);
                self.emit_pattern(inner)?;
                self.token(")");
                Ok(())
            }
            Pattern::Opaque(id) => self.scan(id),
        })
    }

    /// `,` followed by a per-element optional break.
    fn fill_separator(&mut self) {
        self.token(",");
        self.break_to_fill(" ");
    }
}

/// Handler for deconstruction and parenthesized pattern nodes.
pub(crate) fn visit_pattern(v: &mut FormatVisitor<'_>, id: NodeId) -> FormatResult {
    match Pattern::classify(v.tree(), id) {
        Pattern::Opaque(id) => v.walk_children(id),
        pattern => v.emit_pattern(pattern),
    }
}

/// Parenthesized expression kept on one line: `(expr)` with no inner break.
pub(crate) fn visit_atomic_parenthesized(v: &mut FormatVisitor<'_>, id: NodeId) -> FormatResult {
    let NodeKind::Parenthesized { expr } = v.tree().kind(id) else {
        return v.walk_children(id);
    };
    v.token("(");
    v.scan(*expr)?;
    v.token(")");
    Ok(())
}

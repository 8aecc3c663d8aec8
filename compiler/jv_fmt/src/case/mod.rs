//! Case Clause Emission
//!
//! One case arm of a switch: the label line, then the body in either
//! statement-colon form (`case A:`) or arrow-rule form (`case A ->`).
//!
//! A [`CaseClause`] is built from the node first, so emission is a single
//! match over closed shapes. Arms whose form this crate does not know are
//! reported as [`FormatError::UnsupportedCaseKind`] after their labels have
//! been emitted.

use jv_ir::{CaseForm, CaseNode, NodeId, NodeKind, SyntaxTree};
use tracing::{debug, trace};

use crate::compat::HostApiShape;
use crate::error::{FormatError, FormatResult};
use crate::labels::{self, LabelSet};
use crate::patterns::Pattern;
use crate::visitor::{BlockOptions, FormatVisitor};

/// Body of a case arm.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CaseBody<'t> {
    /// Statements after `case X:`.
    StatementList(&'t [NodeId]),
    /// A block: the whole statement list of a colon arm, or a rule body.
    SingleBlock(NodeId),
    /// Rule body that is an expression or expression statement.
    Expression(NodeId),
    /// Rule body that is a `throw` statement.
    Throw(NodeId),
}

impl<'t> CaseBody<'t> {
    fn statements(tree: &'t SyntaxTree, statements: &'t [NodeId]) -> Self {
        match statements {
            [only] if matches!(tree.kind(*only), NodeKind::Block { .. }) => {
                CaseBody::SingleBlock(*only)
            }
            _ => CaseBody::StatementList(statements),
        }
    }

    fn rule(tree: &SyntaxTree, body: NodeId) -> Self {
        match tree.kind(body) {
            NodeKind::Block { .. } => CaseBody::SingleBlock(body),
            NodeKind::Throw { .. } => CaseBody::Throw(body),
            _ => CaseBody::Expression(body),
        }
    }
}

/// Form of a case arm, with what each form carries.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CaseArm<'t> {
    Statement(CaseBody<'t>),
    Rule {
        guard: Option<NodeId>,
        body: CaseBody<'t>,
    },
    /// A form this crate does not format, by its raw kind name.
    Unsupported(&'t str),
}

/// A classified case arm.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CaseClause<'t> {
    pub node: NodeId,
    pub labels: LabelSet<'t>,
    pub arm: CaseArm<'t>,
}

impl<'t> CaseClause<'t> {
    /// Classify the case node `id`.
    ///
    /// Fails only when the host does not expose the label accessor `shape`
    /// names; an unknown arm form is carried as [`CaseArm::Unsupported`].
    pub fn from_node(
        tree: &'t SyntaxTree,
        id: NodeId,
        case: &'t CaseNode,
        shape: HostApiShape,
    ) -> FormatResult<Self> {
        let labels = labels::classify(tree, case, shape)?;
        let arm = match &case.form {
            CaseForm::Statement { statements } => {
                CaseArm::Statement(CaseBody::statements(tree, tree.list(*statements)))
            }
            CaseForm::Rule { guard, body } => CaseArm::Rule {
                guard: *guard,
                body: CaseBody::rule(tree, *body),
            },
            CaseForm::Unrecognized { kind } => CaseArm::Unsupported(kind),
        };
        Ok(CaseClause {
            node: id,
            labels,
            arm,
        })
    }

    pub fn guard(&self) -> Option<NodeId> {
        match self.arm {
            CaseArm::Rule { guard, .. } => guard,
            CaseArm::Statement(_) | CaseArm::Unsupported(_) => None,
        }
    }
}

impl FormatVisitor<'_> {
    /// Emit a classified case arm.
    pub fn emit_case(&mut self, clause: &CaseClause<'_>) -> FormatResult {
        self.sync(clause.node);
        self.forced_break();
        self.emit_labels(clause.labels)?;

        match clause.arm {
            CaseArm::Statement(body) => self.emit_statement_arm(body),
            CaseArm::Rule { guard, body } => self.emit_rule_arm(guard, body),
            CaseArm::Unsupported(kind) => {
                debug!(kind, "unsupported case kind");
                Err(FormatError::UnsupportedCaseKind {
                    kind: kind.to_owned(),
                })
            }
        }
    }

    /// `default`, or `case` followed by the labels.
    fn emit_labels(&mut self, labels: LabelSet<'_>) -> FormatResult {
        let indents = self.indents();
        if labels.is_default() {
            self.token_hinted("default", indents.plus_two);
            return Ok(());
        }

        self.token_hinted("case", indents.plus_two);
        self.space();
        self.open(if labels.len() > 1 {
            indents.plus_four
        } else {
            indents.zero
        });
        for (i, &label) in labels.labels().iter().enumerate() {
            if i > 0 {
                self.token(",");
                self.break_op(" ");
            }
            self.scan(label)?;
        }
        self.close();
        Ok(())
    }

    fn emit_statement_arm(&mut self, body: CaseBody<'_>) -> FormatResult {
        self.token(":");
        match body {
            CaseBody::SingleBlock(block) => {
                self.open(self.indents().zero);
                self.space();
                self.scan(block)?;
                self.close();
            }
            CaseBody::StatementList(statements) => {
                self.open(self.indents().plus_two);
                self.visit_statements(statements, false)?;
                self.close();
            }
            CaseBody::Expression(statement) | CaseBody::Throw(statement) => {
                self.open(self.indents().plus_two);
                self.visit_statements(&[statement], false)?;
                self.close();
            }
        }
        Ok(())
    }

    fn emit_rule_arm(&mut self, guard: Option<NodeId>, body: CaseBody<'_>) -> FormatResult {
        if let Some(guard) = guard {
            self.spaced_token("when");
            self.scan(guard)?;
        }
        self.space();
        self.token("-");
        self.token(">");
        self.space();
        match body {
            CaseBody::SingleBlock(block) => self.visit_block(block, BlockOptions::CASE_RULE)?,
            CaseBody::Expression(body) | CaseBody::Throw(body) => self.scan(body)?,
            CaseBody::StatementList(statements) => self.scan_all(statements)?,
        }
        // Only an expression body lacks its own terminator; the sink drops
        // the guess after a statement that already ended in `;`.
        self.guess_token(";");
        Ok(())
    }
}

/// Handler for case nodes.
pub(crate) fn visit_case(v: &mut FormatVisitor<'_>, id: NodeId) -> FormatResult {
    let tree = v.tree();
    let Some(case) = tree.case_node(id) else {
        return v.walk_children(id);
    };
    let clause = CaseClause::from_node(tree, id, case, v.shape())?;
    trace!(node = ?id, labels = clause.labels.len(), arm = %case.kind(), "case clause");
    v.emit_case(&clause)
}

/// `default` inside a label list, as in `case null, default`.
pub(crate) fn visit_default_label(v: &mut FormatVisitor<'_>, _id: NodeId) -> FormatResult {
    v.token("default");
    Ok(())
}

/// `case 1`: the constant expression itself.
pub(crate) fn visit_constant_label(v: &mut FormatVisitor<'_>, id: NodeId) -> FormatResult {
    let NodeKind::ConstantLabel { expr } = v.tree().kind(id) else {
        return v.walk_children(id);
    };
    v.scan(*expr)
}

/// `case P` or `case P when g`.
pub(crate) fn visit_pattern_label(v: &mut FormatVisitor<'_>, id: NodeId) -> FormatResult {
    let tree = v.tree();
    let NodeKind::PatternLabel { pattern, guard } = tree.kind(id) else {
        return v.walk_children(id);
    };
    v.emit_pattern(Pattern::classify(tree, *pattern))?;
    if let Some(guard) = guard {
        v.spaced_token("when");
        v.scan(*guard)?;
    }
    Ok(())
}

//! Convenience constructors.
//!
//! Parsers and tests build trees bottom-up; these helpers allocate one node
//! each and return its id. Case constructors take structured label nodes and
//! derive the flat expression list a legacy host would report.

use crate::{BinaryOp, CaseForm, CaseNode, NodeId, NodeKind, SyntaxTree};

impl SyntaxTree {
    // ===== Expressions =====

    pub fn ident(&mut self, name: &str) -> NodeId {
        self.alloc(NodeKind::Ident(name.into()))
    }

    pub fn literal(&mut self, text: &str) -> NodeId {
        self.alloc(NodeKind::Literal(text.into()))
    }

    pub fn binary(&mut self, left: NodeId, op: BinaryOp, right: NodeId) -> NodeId {
        self.alloc(NodeKind::Binary { left, op, right })
    }

    pub fn call(&mut self, callee: NodeId, args: &[NodeId]) -> NodeId {
        let args = self.alloc_list(args.iter().copied());
        self.alloc(NodeKind::Call { callee, args })
    }

    pub fn paren(&mut self, expr: NodeId) -> NodeId {
        self.alloc(NodeKind::Parenthesized { expr })
    }

    // ===== Statements =====

    pub fn expr_stmt(&mut self, expr: NodeId) -> NodeId {
        self.alloc(NodeKind::ExprStmt { expr })
    }

    pub fn throw_stmt(&mut self, expr: NodeId) -> NodeId {
        self.alloc(NodeKind::Throw { expr })
    }

    pub fn yield_stmt(&mut self, expr: NodeId) -> NodeId {
        self.alloc(NodeKind::Yield { expr })
    }

    pub fn block(&mut self, statements: &[NodeId]) -> NodeId {
        let statements = self.alloc_list(statements.iter().copied());
        self.alloc(NodeKind::Block { statements })
    }

    pub fn switch(&mut self, selector: NodeId, cases: &[NodeId]) -> NodeId {
        let cases = self.alloc_list(cases.iter().copied());
        self.alloc(NodeKind::Switch { selector, cases })
    }

    // ===== Case labels =====

    pub fn default_label(&mut self) -> NodeId {
        self.alloc(NodeKind::DefaultLabel)
    }

    pub fn constant_label(&mut self, expr: NodeId) -> NodeId {
        self.alloc(NodeKind::ConstantLabel { expr })
    }

    pub fn pattern_label(&mut self, pattern: NodeId, guard: Option<NodeId>) -> NodeId {
        self.alloc(NodeKind::PatternLabel { pattern, guard })
    }

    // ===== Patterns =====

    /// `ty name`
    pub fn binding_pattern(&mut self, ty: &str, name: &str) -> NodeId {
        let ty = self.ident(ty);
        let name = self.ident(name);
        self.alloc(NodeKind::BindingPattern { ty, name })
    }

    /// `deconstructor(nested...) variable?`
    pub fn deconstruction(
        &mut self,
        deconstructor: &str,
        nested: &[NodeId],
        variable: Option<&str>,
    ) -> NodeId {
        let deconstructor = self.ident(deconstructor);
        let nested = self.alloc_list(nested.iter().copied());
        let variable = variable.map(|name| self.ident(name));
        self.alloc(NodeKind::DeconstructionPattern {
            deconstructor,
            nested,
            variable,
        })
    }

    pub fn paren_pattern(&mut self, pattern: NodeId) -> NodeId {
        self.alloc(NodeKind::ParenthesizedPattern { pattern })
    }

    // ===== Cases =====

    /// `case labels: statements...`
    pub fn statement_case(&mut self, labels: &[NodeId], statements: &[NodeId]) -> NodeId {
        let statements = self.alloc_list(statements.iter().copied());
        self.case(labels, CaseForm::Statement { statements })
    }

    /// `case labels when guard -> body`
    pub fn rule_case(&mut self, labels: &[NodeId], guard: Option<NodeId>, body: NodeId) -> NodeId {
        self.case(labels, CaseForm::Rule { guard, body })
    }

    /// An arm whose kind this tree model does not describe.
    pub fn unrecognized_case(&mut self, labels: &[NodeId], kind: &str) -> NodeId {
        self.case(labels, CaseForm::Unrecognized { kind: kind.into() })
    }

    fn case(&mut self, labels: &[NodeId], form: CaseForm) -> NodeId {
        // Legacy hosts only see constants; default and pattern labels vanish.
        let constants: Vec<NodeId> = labels
            .iter()
            .filter_map(|&label| match self.kind(label) {
                NodeKind::ConstantLabel { expr } => Some(*expr),
                _ => None,
            })
            .collect();
        let labels = self.alloc_list(labels.iter().copied());
        let expressions = self.alloc_list(constants);
        self.alloc(NodeKind::Case(CaseNode {
            labels,
            expressions,
            form,
        }))
    }
}

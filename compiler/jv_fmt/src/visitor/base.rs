//! Handlers shared by every language level.
//!
//! Expressions, statements, blocks and the switch statement itself. Each
//! handler is registered for exactly one node kind; the `let ... else`
//! fallbacks only guard against a table registering a handler for the wrong
//! kind.

use jv_ir::{NodeId, NodeKind};

use super::FormatVisitor;
use crate::error::FormatResult;
use crate::ops::BlankLine;

/// How a block is laid out.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BlockOptions {
    /// Render an empty block as `{}`.
    pub collapse_empty: bool,
    /// Allow a blank line after `{`.
    pub allow_leading_blank_line: bool,
    /// Allow a blank line before `}`.
    pub allow_trailing_blank_line: bool,
}

impl BlockOptions {
    /// Blocks in statement position.
    pub const STATEMENT: BlockOptions = BlockOptions {
        collapse_empty: false,
        allow_leading_blank_line: true,
        allow_trailing_blank_line: true,
    };

    /// Bodies of arrow-form case rules.
    pub const CASE_RULE: BlockOptions = BlockOptions {
        collapse_empty: true,
        allow_leading_blank_line: false,
        allow_trailing_blank_line: false,
    };
}

impl Default for BlockOptions {
    fn default() -> Self {
        Self::STATEMENT
    }
}

impl FormatVisitor<'_> {
    /// Emit a block with explicit layout options.
    pub fn visit_block(&mut self, id: NodeId, options: BlockOptions) -> FormatResult {
        let tree = self.tree();
        let NodeKind::Block { statements } = tree.kind(id) else {
            return self.scan(id);
        };
        let statements = tree.list(*statements);
        let plus_two = self.indents().plus_two;

        if statements.is_empty() && options.collapse_empty {
            self.token("{");
            self.blank_line(BlankLine::No);
            self.token_hinted("}", plus_two);
            return Ok(());
        }

        self.token("{");
        self.open(plus_two);
        self.blank_line(if options.allow_leading_blank_line {
            BlankLine::Preserve
        } else {
            BlankLine::No
        });
        self.visit_statements(statements, false)?;
        self.close();
        self.forced_break();
        if !options.allow_trailing_blank_line {
            self.blank_line(BlankLine::No);
        }
        self.token_hinted("}", plus_two);
        Ok(())
    }

    /// Emit statements, each on its own line.
    ///
    /// With `first_on_same_line`, no break precedes the first statement, so a
    /// block that follows `case X:` opens on the colon line.
    pub fn visit_statements(
        &mut self,
        statements: &[NodeId],
        first_on_same_line: bool,
    ) -> FormatResult {
        for (i, &statement) in statements.iter().enumerate() {
            if i > 0 || !first_on_same_line {
                self.forced_break();
            }
            self.scan(statement)?;
        }
        Ok(())
    }
}

pub(crate) fn visit_leaf(v: &mut FormatVisitor<'_>, id: NodeId) -> FormatResult {
    match v.tree().kind(id) {
        NodeKind::Ident(text) | NodeKind::Literal(text) => {
            v.token(text);
            Ok(())
        }
        _ => v.walk_children(id),
    }
}

pub(crate) fn visit_binary(v: &mut FormatVisitor<'_>, id: NodeId) -> FormatResult {
    let NodeKind::Binary { left, op, right } = v.tree().kind(id) else {
        return v.walk_children(id);
    };
    v.scan(*left)?;
    v.spaced_token(op.as_str());
    v.scan(*right)
}

pub(crate) fn visit_call(v: &mut FormatVisitor<'_>, id: NodeId) -> FormatResult {
    let tree = v.tree();
    let NodeKind::Call { callee, args } = tree.kind(id) else {
        return v.walk_children(id);
    };
    v.scan(*callee)?;
    v.token("(");
    let args = tree.list(*args);
    if !args.is_empty() {
        v.open(v.indents().plus_four);
        v.break_op("");
        for (i, &arg) in args.iter().enumerate() {
            if i > 0 {
                v.token(",");
                v.break_op(" ");
            }
            v.scan(arg)?;
        }
        v.close();
    }
    v.token(")");
    Ok(())
}

/// `(expr)`, allowed to break after the opening parenthesis.
pub(crate) fn visit_parenthesized(v: &mut FormatVisitor<'_>, id: NodeId) -> FormatResult {
    let NodeKind::Parenthesized { expr } = v.tree().kind(id) else {
        return v.walk_children(id);
    };
    v.token("(");
    v.open(v.indents().plus_four);
    v.break_op("");
    v.scan(*expr)?;
    v.close();
    v.token(")");
    Ok(())
}

pub(crate) fn visit_expr_stmt(v: &mut FormatVisitor<'_>, id: NodeId) -> FormatResult {
    let NodeKind::ExprStmt { expr } = v.tree().kind(id) else {
        return v.walk_children(id);
    };
    v.scan(*expr)?;
    v.token(";");
    Ok(())
}

pub(crate) fn visit_throw(v: &mut FormatVisitor<'_>, id: NodeId) -> FormatResult {
    keyword_statement(v, id, "throw")
}

pub(crate) fn visit_yield(v: &mut FormatVisitor<'_>, id: NodeId) -> FormatResult {
    keyword_statement(v, id, "yield")
}

/// `keyword expr;`
fn keyword_statement(v: &mut FormatVisitor<'_>, id: NodeId, keyword: &str) -> FormatResult {
    let (NodeKind::Throw { expr } | NodeKind::Yield { expr }) = v.tree().kind(id) else {
        return v.walk_children(id);
    };
    v.token(keyword);
    v.space();
    v.scan(*expr)?;
    v.token(";");
    Ok(())
}

pub(crate) fn visit_block_default(v: &mut FormatVisitor<'_>, id: NodeId) -> FormatResult {
    v.visit_block(id, BlockOptions::STATEMENT)
}

pub(crate) fn visit_switch(v: &mut FormatVisitor<'_>, id: NodeId) -> FormatResult {
    let tree = v.tree();
    let NodeKind::Switch { selector, cases } = tree.kind(id) else {
        return v.walk_children(id);
    };
    v.sync(id);
    v.token("switch");
    v.space();
    v.token("(");
    v.scan(*selector)?;
    v.token(")");
    v.space();
    v.token("{");
    v.open(v.indents().plus_two);
    v.blank_line(BlankLine::No);
    v.scan_all(tree.list(*cases))?;
    v.close();
    v.forced_break();
    v.blank_line(BlankLine::No);
    v.token_hinted("}", v.indents().plus_two);
    Ok(())
}

/// `Type name`
pub(crate) fn visit_binding_pattern(v: &mut FormatVisitor<'_>, id: NodeId) -> FormatResult {
    let NodeKind::BindingPattern { ty, name } = v.tree().kind(id) else {
        return v.walk_children(id);
    };
    v.scan(*ty)?;
    v.space();
    v.scan(*name)
}

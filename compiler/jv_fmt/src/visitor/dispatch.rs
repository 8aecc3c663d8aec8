//! Handler tables per language level.
//!
//! The base table covers constructs every level shares. Each newer level
//! copies its parent's table and overlays only the handlers it changes or
//! adds. Tables are built on first use and never mutated afterwards.

use std::fmt;
use std::sync::OnceLock;

use jv_ir::{NodeId, NodeTag};
use rustc_hash::FxHashMap;
use tracing::debug;

use super::{base, FormatVisitor};
use crate::case;
use crate::config::LanguageLevel;
use crate::error::FormatResult;
use crate::patterns;

/// Override point for one node kind.
pub type Handler = fn(&mut FormatVisitor<'_>, NodeId) -> FormatResult;

/// Node kind to handler mapping for one language level.
#[derive(Clone)]
pub struct DispatchTable {
    level: LanguageLevel,
    handlers: FxHashMap<NodeTag, Handler>,
}

static JAVA14: OnceLock<DispatchTable> = OnceLock::new();
static JAVA19: OnceLock<DispatchTable> = OnceLock::new();
static JAVA21: OnceLock<DispatchTable> = OnceLock::new();

impl DispatchTable {
    /// Shared table for `level`, built on first use.
    pub fn for_level(level: LanguageLevel) -> &'static DispatchTable {
        let cell = match level {
            LanguageLevel::Java14 => &JAVA14,
            LanguageLevel::Java19 => &JAVA19,
            LanguageLevel::Java21 => &JAVA21,
        };
        cell.get_or_init(|| Self::build(level))
    }

    /// Build the table for `level` from scratch.
    pub fn build(level: LanguageLevel) -> DispatchTable {
        let table = match level.parent() {
            None => DispatchTable {
                level,
                handlers: BASE_HANDLERS.iter().copied().collect(),
            },
            Some(parent) => Self::for_level(parent)
                .overlay(level, overlay_handlers(level).iter().copied()),
        };
        debug!(?level, handlers = table.handlers.len(), "built dispatch table");
        table
    }

    /// Copy of this table with `handlers` replacing or adding entries.
    #[must_use]
    pub fn overlay(
        &self,
        level: LanguageLevel,
        handlers: impl IntoIterator<Item = (NodeTag, Handler)>,
    ) -> DispatchTable {
        let mut merged = self.handlers.clone();
        merged.extend(handlers);
        DispatchTable {
            level,
            handlers: merged,
        }
    }

    #[inline]
    pub fn level(&self) -> LanguageLevel {
        self.level
    }

    /// Handler for `tag`, or `None` for the default walk.
    #[inline]
    pub fn handler(&self, tag: NodeTag) -> Option<Handler> {
        self.handlers.get(&tag).copied()
    }

    pub fn handles(&self, tag: NodeTag) -> bool {
        self.handlers.contains_key(&tag)
    }
}

impl fmt::Debug for DispatchTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tags: Vec<NodeTag> = self.handlers.keys().copied().collect();
        tags.sort_unstable();
        f.debug_struct("DispatchTable")
            .field("level", &self.level)
            .field("handles", &tags)
            .finish()
    }
}

/// Constructs present at every level.
const BASE_HANDLERS: &[(NodeTag, Handler)] = &[
    (NodeTag::Ident, base::visit_leaf),
    (NodeTag::Literal, base::visit_leaf),
    (NodeTag::Binary, base::visit_binary),
    (NodeTag::Call, base::visit_call),
    (NodeTag::Parenthesized, base::visit_parenthesized),
    (NodeTag::ExprStmt, base::visit_expr_stmt),
    (NodeTag::Throw, base::visit_throw),
    (NodeTag::Yield, base::visit_yield),
    (NodeTag::Block, base::visit_block_default),
    (NodeTag::Switch, base::visit_switch),
    (NodeTag::BindingPattern, base::visit_binding_pattern),
    (NodeTag::Case, case::visit_case),
];

/// Record deconstruction, parenthesized patterns, structured labels.
const JAVA19_HANDLERS: &[(NodeTag, Handler)] = &[
    (NodeTag::DefaultLabel, case::visit_default_label),
    (NodeTag::ConstantLabel, case::visit_constant_label),
    (NodeTag::PatternLabel, case::visit_pattern_label),
    (NodeTag::DeconstructionPattern, patterns::visit_pattern),
    (NodeTag::ParenthesizedPattern, patterns::visit_pattern),
];

/// Parenthesized expressions stay on one line.
const JAVA21_HANDLERS: &[(NodeTag, Handler)] = &[(
    NodeTag::Parenthesized,
    patterns::visit_atomic_parenthesized,
)];

/// Handlers a level adds on top of its parent.
fn overlay_handlers(level: LanguageLevel) -> &'static [(NodeTag, Handler)] {
    match level {
        LanguageLevel::Java14 => &[],
        LanguageLevel::Java19 => JAVA19_HANDLERS,
        LanguageLevel::Java21 => JAVA21_HANDLERS,
    }
}

//! Case Label Classification
//!
//! Turns a case arm's raw labels into a [`LabelSet`] once, so emission never
//! re-inspects list sizes or label kinds to tell `default` from a label list.

use jv_ir::{CaseNode, NodeId, NodeTag, SyntaxTree};
use tracing::trace;

use crate::compat::HostApiShape;
use crate::error::{FormatError, FormatResult};

/// Classified labels of one case arm, in source order.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LabelSet<'t> {
    Default,
    ConstantExpressions(&'t [NodeId]),
    Patterns(&'t [NodeId]),
}

impl<'t> LabelSet<'t> {
    /// Label nodes to emit after `case`; empty for `default`.
    pub fn labels(&self) -> &'t [NodeId] {
        match self {
            LabelSet::Default => &[],
            LabelSet::ConstantExpressions(labels) | LabelSet::Patterns(labels) => labels,
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, LabelSet::Default)
    }

    /// Number of labels after `case`.
    pub fn len(&self) -> usize {
        self.labels().len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels().is_empty()
    }
}

/// Classify a case arm's labels under `shape`.
///
/// Mixed constant and pattern labels are not rejected: the parser owns that
/// check. A set with any pattern label classifies as [`LabelSet::Patterns`].
pub fn classify<'t>(
    tree: &'t SyntaxTree,
    case: &CaseNode,
    shape: HostApiShape,
) -> FormatResult<LabelSet<'t>> {
    let set = match shape {
        HostApiShape::StructuredLabelList => {
            let labels = tree
                .case_labels(case)
                .ok_or(FormatError::IncompatibleHostApi)?;
            classify_structured(tree, labels)
        }
        HostApiShape::LegacyExpressionLabels => {
            let expressions = tree
                .case_expressions(case)
                .ok_or(FormatError::IncompatibleHostApi)?;
            if expressions.is_empty() {
                LabelSet::Default
            } else {
                LabelSet::ConstantExpressions(expressions)
            }
        }
    };
    trace!(?shape, labels = set.len(), default = set.is_default(), "classified case labels");
    Ok(set)
}

fn classify_structured<'t>(tree: &SyntaxTree, labels: &'t [NodeId]) -> LabelSet<'t> {
    match labels {
        // A structured list is never empty in a well-formed tree; treat a
        // malformed empty one like its legacy equivalent.
        [] => LabelSet::Default,
        [only] if tree.tag(*only) == NodeTag::DefaultLabel => LabelSet::Default,
        _ if labels
            .iter()
            .any(|&label| tree.tag(label) == NodeTag::PatternLabel) =>
        {
            LabelSet::Patterns(labels)
        }
        _ => LabelSet::ConstantExpressions(labels),
    }
}

#[cfg(test)]
mod tests;

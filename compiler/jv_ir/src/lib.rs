//! jv IR - Host Syntax Tree
//!
//! The formatter core never parses source text. It consumes a tree produced by
//! a host parser and reads it through the per-kind accessors defined here:
//! - [`Span`] for source locations used by partial-format markers
//! - [`NodeId`] / [`NodeRange`] handles into a flat [`SyntaxTree`] arena
//! - [`NodeKind`] with one variant per construct the formatter understands
//! - [`CaseNode`] / [`CaseForm`] for switch arms across grammar revisions
//! - [`HostCapabilities`] describing which case-label accessors the host exposes
//!
//! # Design
//!
//! - **Flat storage**: nodes live in one `Vec`, children are `NodeId` indices,
//!   child lists are `NodeRange`s into a shared list buffer.
//! - **Immutable after build**: the formatter only ever borrows the tree.
//! - **Accessor drift is explicit**: label access goes through
//!   [`SyntaxTree::case_labels`] / [`SyntaxTree::case_expressions`], which
//!   return `None` when the host does not provide that accessor.

mod builders;
mod host;
mod node;
mod node_id;
mod span;
mod tree;

pub use host::{HostCapabilities, LabelAccessProbe, LabelAccessor};
pub use node::{BinaryOp, CaseForm, CaseKind, CaseNode, Node, NodeKind, NodeTag};
pub use node_id::{NodeId, NodeRange};
pub use span::Span;
pub use tree::SyntaxTree;

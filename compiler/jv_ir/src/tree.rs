//! Flat syntax tree storage.

use crate::{
    CaseNode, HostCapabilities, LabelAccessProbe, LabelAccessor, Node, NodeId, NodeKind,
    NodeRange, NodeTag, Span,
};

/// Contiguous storage for every node of one source file.
///
/// Children refer to each other through [`NodeId`]; child lists are
/// [`NodeRange`]s into a single shared buffer. The tree also records which
/// case-label accessors its host provides.
#[derive(Clone, Debug, Default)]
pub struct SyntaxTree {
    nodes: Vec<Node>,
    lists: Vec<NodeId>,
    capabilities: HostCapabilities,
}

/// Convert a buffer length to a `u32` handle.
#[inline]
fn next_index(len: usize) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("syntax tree exceeds u32::MAX entries"))
}

impl SyntaxTree {
    /// Empty tree for a host with structured labels.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty tree for a host with the given accessors.
    pub fn with_capabilities(capabilities: HostCapabilities) -> Self {
        SyntaxTree {
            capabilities,
            ..Self::default()
        }
    }

    #[inline]
    pub fn capabilities(&self) -> HostCapabilities {
        self.capabilities
    }

    // ===== Allocation =====

    /// Allocate a node without a source position.
    #[inline]
    pub fn alloc(&mut self, kind: NodeKind) -> NodeId {
        self.alloc_at(kind, Span::DUMMY)
    }

    /// Allocate a node at `span`.
    #[inline]
    pub fn alloc_at(&mut self, kind: NodeKind, span: Span) -> NodeId {
        let id = NodeId::new(next_index(self.nodes.len()));
        self.nodes.push(Node::new(kind, span));
        id
    }

    /// Allocate a child list.
    pub fn alloc_list(&mut self, ids: impl IntoIterator<Item = NodeId>) -> NodeRange {
        let start = next_index(self.lists.len());
        self.lists.extend(ids);
        NodeRange::new(start, next_index(self.lists.len()) - start)
    }

    // ===== Access =====

    /// Get a node by id.
    ///
    /// # Panics
    /// Panics if `id` does not belong to this tree.
    #[inline]
    #[track_caller]
    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    #[inline]
    #[track_caller]
    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.get(id).kind
    }

    #[inline]
    #[track_caller]
    pub fn tag(&self, id: NodeId) -> NodeTag {
        self.kind(id).tag()
    }

    #[inline]
    #[track_caller]
    pub fn span(&self, id: NodeId) -> Span {
        self.get(id).span
    }

    /// Resolve a child list.
    #[inline]
    #[track_caller]
    pub fn list(&self, range: NodeRange) -> &[NodeId] {
        &self.lists[range.bounds()]
    }

    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The case payload of `id`, if it is a case node.
    pub fn case_node(&self, id: NodeId) -> Option<&CaseNode> {
        match self.kind(id) {
            NodeKind::Case(case) => Some(case),
            _ => None,
        }
    }

    // ===== Host label accessors =====

    /// Structured label list, when the host provides one.
    pub fn case_labels(&self, case: &CaseNode) -> Option<&[NodeId]> {
        self.capabilities
            .labels
            .then(|| self.list(case.labels))
    }

    /// Flat constant-expression list, when the host provides one.
    pub fn case_expressions(&self, case: &CaseNode) -> Option<&[NodeId]> {
        self.capabilities
            .expressions
            .then(|| self.list(case.expressions))
    }
}

impl LabelAccessProbe for SyntaxTree {
    fn has_label_accessor(&self, accessor: LabelAccessor) -> bool {
        self.capabilities.has_label_accessor(accessor)
    }
}

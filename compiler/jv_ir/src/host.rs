//! Host label-accessor capabilities.
//!
//! Hosts from different grammar revisions expose case labels differently:
//! older ones only as a flat list of constant expressions (an empty list means
//! `default`), newer ones as a structured list of label nodes that includes an
//! explicit default marker. Some expose both. The formatter probes these
//! capabilities once instead of testing for them at every call site.

/// A way of reading a case arm's labels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LabelAccessor {
    /// Structured label nodes.
    Labels,
    /// Flat constant expressions.
    Expressions,
}

/// Capability probe implemented by hosts.
pub trait LabelAccessProbe {
    /// Whether the host provides `accessor`.
    fn has_label_accessor(&self, accessor: LabelAccessor) -> bool;
}

/// Accessors a host exposes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct HostCapabilities {
    pub labels: bool,
    pub expressions: bool,
}

impl HostCapabilities {
    /// Current hosts: structured labels, with the flat accessor kept for
    /// compatibility.
    pub const STRUCTURED: HostCapabilities = HostCapabilities {
        labels: true,
        expressions: true,
    };

    /// Hosts that predate structured labels.
    pub const LEGACY: HostCapabilities = HostCapabilities {
        labels: false,
        expressions: true,
    };

    /// Hosts exposing only structured labels.
    pub const LABELS_ONLY: HostCapabilities = HostCapabilities {
        labels: true,
        expressions: false,
    };

    /// A host with neither accessor.
    pub const NONE: HostCapabilities = HostCapabilities {
        labels: false,
        expressions: false,
    };
}

impl Default for HostCapabilities {
    fn default() -> Self {
        Self::STRUCTURED
    }
}

impl LabelAccessProbe for HostCapabilities {
    fn has_label_accessor(&self, accessor: LabelAccessor) -> bool {
        match accessor {
            LabelAccessor::Labels => self.labels,
            LabelAccessor::Expressions => self.expressions,
        }
    }
}

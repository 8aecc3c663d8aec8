//! Host API Compatibility
//!
//! Hosts from different grammar revisions expose case labels in one of two
//! shapes. The resolver probes which one is available exactly once and
//! publishes the answer as a closed [`HostApiShape`] that callers pass along
//! explicitly, so no call site tests for accessors on its own.

use std::sync::OnceLock;

use jv_ir::{LabelAccessProbe, LabelAccessor};
use tracing::debug;

use crate::error::{FormatError, FormatResult};

/// How a host exposes case labels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HostApiShape {
    /// Flat list of constant expressions; an empty list means `default`.
    LegacyExpressionLabels,
    /// Structured list of label nodes with an explicit default marker.
    StructuredLabelList,
}

impl HostApiShape {
    /// Accessor this shape reads labels through.
    pub fn accessor(self) -> LabelAccessor {
        match self {
            HostApiShape::LegacyExpressionLabels => LabelAccessor::Expressions,
            HostApiShape::StructuredLabelList => LabelAccessor::Labels,
        }
    }
}

/// Memoized capability probe.
///
/// The first [`resolve`](Self::resolve) probes the host; every later call,
/// from any thread, returns the published outcome without probing again. A
/// failed probe is published too: a host that lacks both accessors will not
/// grow one later.
#[derive(Debug, Default)]
pub struct CompatibilityResolver {
    outcome: OnceLock<FormatResult<HostApiShape>>,
}

static GLOBAL_RESOLVER: CompatibilityResolver = CompatibilityResolver::new();

impl CompatibilityResolver {
    pub const fn new() -> Self {
        CompatibilityResolver {
            outcome: OnceLock::new(),
        }
    }

    /// Process-wide resolver, for processes that link a single host.
    pub fn global() -> &'static CompatibilityResolver {
        &GLOBAL_RESOLVER
    }

    /// Resolve the host's label shape, probing on first use.
    pub fn resolve(&self, probe: &dyn LabelAccessProbe) -> FormatResult<HostApiShape> {
        self.outcome.get_or_init(|| probe_shape(probe)).clone()
    }

    /// Shape to format `host` with.
    ///
    /// The published shape when `host` supports it. Otherwise `host` came from
    /// another grammar revision than the host that settled the resolver (or
    /// the published outcome is a failure), and its shape is worked out for
    /// it alone without changing what was published. Fails only for a host
    /// with neither accessor.
    pub fn shape_for(&self, host: &dyn LabelAccessProbe) -> FormatResult<HostApiShape> {
        match self.resolve(host) {
            Ok(shape) if host.has_label_accessor(shape.accessor()) => Ok(shape),
            published => {
                debug!(?published, "host does not support the published label shape");
                probe_shape(host)
            }
        }
    }

    /// The published outcome, if resolution already ran.
    pub fn resolved(&self) -> Option<&FormatResult<HostApiShape>> {
        self.outcome.get()
    }
}

/// Probe a host once. Structured labels win when both accessors exist.
pub fn probe_shape(probe: &dyn LabelAccessProbe) -> FormatResult<HostApiShape> {
    let shape = if probe.has_label_accessor(LabelAccessor::Labels) {
        HostApiShape::StructuredLabelList
    } else if probe.has_label_accessor(LabelAccessor::Expressions) {
        HostApiShape::LegacyExpressionLabels
    } else {
        debug!("host exposes no case-label accessor");
        return Err(FormatError::IncompatibleHostApi);
    };
    debug!(?shape, "resolved host case-label shape");
    Ok(shape)
}

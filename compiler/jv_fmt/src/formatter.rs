//! Format entry points.

use jv_ir::{NodeId, SyntaxTree};
use tracing::debug;

use crate::compat::CompatibilityResolver;
use crate::config::FormatConfig;
use crate::error::FormatResult;
use crate::ops::{Op, OpsBuilder, OpsSink};
use crate::visitor::FormatVisitor;

/// Formats host trees into instruction streams.
///
/// Cheap to construct and `Copy`; the resolver it borrows is the only state
/// shared between invocations.
#[derive(Copy, Clone, Debug)]
pub struct Formatter<'r> {
    config: FormatConfig,
    resolver: &'r CompatibilityResolver,
}

impl Formatter<'static> {
    /// Formatter backed by the process-wide resolver.
    pub fn new(config: FormatConfig) -> Self {
        Formatter {
            config,
            resolver: CompatibilityResolver::global(),
        }
    }
}

impl Default for Formatter<'static> {
    fn default() -> Self {
        Self::new(FormatConfig::default())
    }
}

impl<'r> Formatter<'r> {
    /// Formatter backed by a caller-owned resolver.
    pub fn with_resolver(config: FormatConfig, resolver: &'r CompatibilityResolver) -> Self {
        Formatter { config, resolver }
    }

    pub fn config(&self) -> FormatConfig {
        self.config
    }

    /// Emit instructions for `root` into `sink`.
    ///
    /// The host's label shape is resolved before anything is emitted, so an
    /// incompatible host leaves the sink untouched. Any other error stops the
    /// traversal where it occurred; what the sink received by then is not a
    /// usable stream.
    pub fn emit_into(
        &self,
        tree: &SyntaxTree,
        root: NodeId,
        sink: &mut dyn OpsSink,
    ) -> FormatResult {
        let shape = self.resolver.shape_for(tree)?;
        debug!(?shape, level = ?self.config.level, root = ?root, "formatting");
        FormatVisitor::new(tree, sink, shape, self.config).scan(root)
    }

    /// Format `root` into a fresh instruction stream.
    ///
    /// On error no partial stream is returned.
    pub fn format(&self, tree: &SyntaxTree, root: NodeId) -> FormatResult<Vec<Op>> {
        let mut builder = OpsBuilder::with_capacity(tree.len() * 2);
        self.emit_into(tree, root, &mut builder)?;
        Ok(builder.into_ops())
    }
}

/// Format `root` with the default configuration and the process-wide
/// resolver.
pub fn format_node(tree: &SyntaxTree, root: NodeId) -> FormatResult<Vec<Op>> {
    Formatter::default().format(tree, root)
}

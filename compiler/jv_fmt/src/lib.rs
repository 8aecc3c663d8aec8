//! Switch Formatting Core
//!
//! Turns `switch` statements, case arms and patterns of a host syntax tree
//! into formatting instructions for a downstream layout solver.
//!
//! # Architecture
//!
//! 1. **Resolve**: probe once which case-label accessor the host exposes
//!    ([`CompatibilityResolver`]). An incompatible host fails here, before
//!    anything is emitted.
//! 2. **Traverse**: [`FormatVisitor`] dispatches each node through the
//!    [`DispatchTable`] of the configured [`LanguageLevel`]. Case arms are
//!    classified ([`labels`], [`case`]) and emitted; patterns go through
//!    [`patterns`].
//! 3. **Record**: instructions are pushed into an [`OpsSink`];
//!    [`OpsBuilder`] keeps them as a `Vec<Op>`.
//!
//! # Example
//!
//! ```
//! use jv_fmt::{format_node, render_flat};
//! use jv_ir::SyntaxTree;
//!
//! let mut tree = SyntaxTree::new();
//! let one = tree.literal("1");
//! let label = tree.constant_label(one);
//! let body = tree.literal("\"one\"");
//! let case = tree.rule_case(&[label], None, body);
//! let x = tree.ident("x");
//! let switch = tree.switch(x, &[case]);
//!
//! let ops = format_node(&tree, switch).unwrap();
//! assert_eq!(render_flat(&ops), "switch (x) {\ncase 1 -> \"one\";\n}");
//! ```
//!
//! # Modules
//!
//! - [`compat`]: host label-accessor resolution
//! - [`labels`]: case label classification
//! - [`case`]: case arm emission
//! - [`patterns`]: deconstruction and parenthesized patterns
//! - [`visitor`]: traversal and per-level dispatch
//! - [`ops`]: the instruction protocol

pub mod case;
pub mod compat;
pub mod config;
pub mod error;
pub mod formatter;
pub mod labels;
pub mod ops;
pub mod patterns;
pub mod visitor;

pub use case::{CaseArm, CaseBody, CaseClause};
pub use compat::{CompatibilityResolver, HostApiShape};
pub use config::{FormatConfig, Indents, LanguageLevel};
pub use error::{FormatError, FormatResult};
pub use formatter::{format_node, Formatter};
pub use labels::LabelSet;
pub use ops::{render_flat, BlankLine, Indent, Op, OpsBuilder, OpsSink};
pub use patterns::Pattern;
pub use visitor::{BlockOptions, DispatchTable, FormatVisitor, Handler};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber filtered by `RUST_LOG`.
///
/// Does nothing when `RUST_LOG` is unset. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

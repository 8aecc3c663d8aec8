//! Format errors.
//!
//! Both kinds are fatal: they describe a mismatch between the grammar this
//! crate supports and the tree it was handed, so the invocation is abandoned
//! and no partial instruction stream is returned.

/// Fatal formatting error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// The host exposes neither a structured case-label list nor flat case
    /// expressions.
    #[error("incompatible host API: no case-label accessor is available")]
    IncompatibleHostApi,

    /// A case clause reports a kind other than statement or rule.
    #[error("unsupported case kind `{kind}`")]
    UnsupportedCaseKind { kind: String },
}

/// Result alias used by every handler.
pub type FormatResult<T = ()> = Result<T, FormatError>;

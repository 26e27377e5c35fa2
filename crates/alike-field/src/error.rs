//! Error types for field resolution.

use thiserror::Error;

/// Errors that can occur while resolving a field access against a subject
/// catalog.
///
/// Resolution happens eagerly, when a rule is registered or a one-off
/// comparison is requested, so a bad access never survives into evaluation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldResolutionError {
    /// The access names something that is not a plain field identifier.
    #[error("invalid field name: {name:?}: {reason}")]
    InvalidName { name: String, reason: String },

    /// The name is a well-formed identifier but the subject type declares no
    /// field with that name.
    #[error("unknown field: {name:?} on subject type {subject}")]
    UnknownField { name: String, subject: &'static str },
}

/// Convenience type alias for resolution operations.
pub type Result<T> = std::result::Result<T, FieldResolutionError>;

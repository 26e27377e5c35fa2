//! Error types for comparison evaluation.

use thiserror::Error;

/// Boxed error carried out of caller-supplied async message providers.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A message provider failed while a comparison report was being built.
///
/// The whole comparison aborts with this error; partial reports are never
/// returned.
#[derive(Debug, Error)]
#[error("message provider for field {field:?} failed")]
pub struct MessageResolutionError {
    /// The field whose provider failed.
    pub field: String,
    /// The provider's underlying error.
    #[source]
    pub source: BoxError,
}

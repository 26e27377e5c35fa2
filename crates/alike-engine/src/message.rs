use std::sync::Arc;

use futures::future::BoxFuture;

use crate::error::BoxError;

/// Message recorded for a difference when no custom provider is set.
pub const DEFAULT_MESSAGE: &str = "Difference found";

/// How the message for one rule's differences is produced.
///
/// A rule has exactly one message source at a time: setting a provider
/// replaces the previous one, whether sync or async.
pub(crate) enum MessagePolicy<T> {
    /// A fixed message.
    Literal(String),
    /// Computed from the first subject at comparison time.
    Compute(Arc<dyn Fn(&T) -> String + Send + Sync>),
    /// Computed asynchronously from the first subject at comparison time.
    ComputeAsync(Arc<dyn Fn(&T) -> BoxFuture<'static, Result<String, BoxError>> + Send + Sync>),
}

impl<T> MessagePolicy<T> {
    /// The policy every rule starts with.
    pub(crate) fn default_literal() -> Self {
        Self::Literal(DEFAULT_MESSAGE.to_string())
    }

    /// Resolve the message against the first subject.
    pub(crate) async fn resolve(&self, subject: &T) -> Result<String, BoxError> {
        match self {
            Self::Literal(text) => Ok(text.clone()),
            Self::Compute(provider) => Ok(provider(subject)),
            Self::ComputeAsync(provider) => provider(subject).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::FutureExt;

    struct Order {
        total: u64,
    }

    #[tokio::test]
    async fn default_policy_resolves_to_fixed_literal() {
        let policy = MessagePolicy::<Order>::default_literal();
        let message = policy.resolve(&Order { total: 0 }).await.unwrap();
        assert_eq!(message, "Difference found");
    }

    #[tokio::test]
    async fn compute_reads_the_subject() {
        let policy = MessagePolicy::Compute(Arc::new(|order: &Order| {
            format!("total was {}", order.total)
        }));
        let message = policy.resolve(&Order { total: 250 }).await.unwrap();
        assert_eq!(message, "total was 250");
    }

    #[tokio::test]
    async fn compute_async_awaits_the_provider() {
        let policy = MessagePolicy::ComputeAsync(Arc::new(|order: &Order| {
            let total = order.total;
            async move { Ok(format!("total was {total}")) }.boxed()
        }));
        let message = policy.resolve(&Order { total: 99 }).await.unwrap();
        assert_eq!(message, "total was 99");
    }

    #[tokio::test]
    async fn compute_async_surfaces_provider_errors() {
        let policy = MessagePolicy::ComputeAsync(Arc::new(|_: &Order| {
            async { Err(BoxError::from("backend offline")) }.boxed()
        }));
        let err = policy.resolve(&Order { total: 1 }).await.unwrap_err();
        assert_eq!(err.to_string(), "backend offline");
    }
}

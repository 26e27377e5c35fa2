use std::fmt;
use std::sync::Arc;

use futures::future::BoxFuture;

use crate::error::BoxError;
use crate::message::MessagePolicy;
use crate::rule::Rule;

/// Mutable builder surface over one registered rule.
///
/// A handle borrows its rule from the comparator's registry, so rules are
/// configured strictly before evaluation. Registering the same field again
/// returns a handle to the same rule. All methods consume the handle and
/// hand it back for chaining.
pub struct RuleHandle<'a, T, V> {
    rule: &'a mut Rule<T>,
    get: fn(&T) -> V,
}

impl<'a, T: 'static, V> RuleHandle<'a, T, V> {
    pub(crate) fn new(rule: &'a mut Rule<T>, get: fn(&T) -> V) -> Self {
        Self { rule, get }
    }

    /// Rebind the default predicate: typed equality of the two field values.
    pub fn with_default_equality(self) -> Self
    where
        V: PartialEq + 'static,
    {
        let get = self.get;
        self.rule.predicate = Arc::new(move |a: &T, b: &T| get(a) == get(b));
        self
    }

    /// Replace the predicate with a caller-supplied equality test over the
    /// two whole subjects.
    pub fn compare_using<P>(self, predicate: P) -> Self
    where
        P: Fn(&T, &T) -> bool + Send + Sync + 'static,
    {
        self.rule.predicate = Arc::new(predicate);
        self
    }

    /// Replace the predicate with a test of the first subject's field
    /// against a fixed value. The second subject is not consulted.
    pub fn compare_against(self, value: V) -> Self
    where
        V: PartialEq + Send + Sync + 'static,
    {
        let get = self.get;
        self.rule.predicate = Arc::new(move |a: &T, _: &T| get(a) == value);
        self
    }

    /// Record a fixed message for differences on this field.
    pub fn with_message(self, message: impl Into<String>) -> Self {
        self.rule.message = MessagePolicy::Literal(message.into());
        self
    }

    /// Compute the difference message from the first subject at comparison
    /// time.
    pub fn with_message_fn<F>(self, provider: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        self.rule.message = MessagePolicy::Compute(Arc::new(provider));
        self
    }

    /// Compute the difference message asynchronously from the first subject.
    ///
    /// Replaces any previously set provider, sync or async: the last setter
    /// wins.
    pub fn with_async_message<F>(self, provider: F) -> Self
    where
        F: Fn(&T) -> BoxFuture<'static, Result<String, BoxError>> + Send + Sync + 'static,
    {
        self.rule.message = MessagePolicy::ComputeAsync(Arc::new(provider));
        self
    }

    /// Suppress messages for this field entirely.
    ///
    /// Suppression is sticky: it survives later provider changes, and
    /// recorded differences carry no message.
    pub fn without_message(self) -> Self {
        self.rule.suppress_message = true;
        self
    }

    /// Exclude this field from comparison and from existence probes.
    pub fn ignore(self) -> Self {
        self.rule.ignored = true;
        self
    }
}

impl<T, V> fmt::Debug for RuleHandle<'_, T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleHandle")
            .field("field", &self.rule.identity)
            .finish()
    }
}

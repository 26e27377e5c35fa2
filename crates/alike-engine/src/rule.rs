use std::sync::Arc;

use alike_field::{FieldIdentity, FieldProjection};
use serde::Serialize;
use serde_json::Value;

use crate::message::MessagePolicy;

// ---------------------------------------------------------------------------
// Rule
// ---------------------------------------------------------------------------

/// One registered comparison rule.
pub(crate) struct Rule<T> {
    /// Resolved identity of the field this rule governs.
    pub(crate) identity: FieldIdentity,
    /// Projects a subject into the field's serialized value for reports.
    pub(crate) project: Arc<dyn Fn(&T) -> Value + Send + Sync>,
    /// Per-field equality predicate over whole subjects.
    pub(crate) predicate: Arc<dyn Fn(&T, &T) -> bool + Send + Sync>,
    /// Ignored rules never produce differences and stay out of the
    /// existence conjunction.
    pub(crate) ignored: bool,
    /// When set, recorded differences carry no message regardless of the
    /// message policy.
    pub(crate) suppress_message: bool,
    /// How difference messages are produced.
    pub(crate) message: MessagePolicy<T>,
}

impl<T: 'static> Rule<T> {
    /// Default-configured rule for a typed access: typed equality predicate,
    /// serialized projection, default message.
    pub(crate) fn from_access<V>(identity: FieldIdentity, get: fn(&T) -> V) -> Self
    where
        V: PartialEq + Serialize + 'static,
    {
        Self {
            identity,
            project: Arc::new(move |subject: &T| {
                serde_json::to_value(get(subject)).unwrap_or(Value::Null)
            }),
            predicate: Arc::new(move |a: &T, b: &T| get(a) == get(b)),
            ignored: false,
            suppress_message: false,
            message: MessagePolicy::default_literal(),
        }
    }

    /// Default-configured rule from a catalog projection. Equality is the
    /// typed predicate captured at the declaration site; the serialized
    /// projection is only used to materialize reports.
    pub(crate) fn from_projection(identity: FieldIdentity, projection: &FieldProjection<T>) -> Self {
        Self {
            identity,
            project: Arc::clone(&projection.project),
            predicate: Arc::clone(&projection.equals),
            ignored: false,
            suppress_message: false,
            message: MessagePolicy::default_literal(),
        }
    }
}

// ---------------------------------------------------------------------------
// RuleSet
// ---------------------------------------------------------------------------

/// Ordered rule registry, unique by field identity.
///
/// The first registration claims the slot and fixes the evaluation order;
/// later registrations for the same field find the existing rule.
pub(crate) struct RuleSet<T> {
    rules: Vec<Rule<T>>,
}

impl<T> RuleSet<T> {
    pub(crate) fn new() -> Self {
        Self { rules: Vec::new() }
    }

    pub(crate) fn len(&self) -> usize {
        self.rules.len()
    }

    pub(crate) fn iter(&self) -> std::slice::Iter<'_, Rule<T>> {
        self.rules.iter()
    }

    /// Index of the rule for `identity`, if one is registered.
    pub(crate) fn position(&self, identity: &FieldIdentity) -> Option<usize> {
        self.rules.iter().position(|rule| rule.identity == *identity)
    }

    /// Insert a rule, or keep the existing one for the same field.
    ///
    /// Returns the index of the surviving rule.
    pub(crate) fn insert_or_keep(&mut self, rule: Rule<T>) -> usize {
        match self.position(&rule.identity) {
            Some(index) => index,
            None => {
                self.rules.push(rule);
                self.rules.len() - 1
            }
        }
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> &mut Rule<T> {
        &mut self.rules[index]
    }
}

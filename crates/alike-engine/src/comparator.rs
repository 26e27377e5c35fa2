use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use alike_field::{FieldAccess, FieldIdentity, FieldResolutionError, Subject};

use crate::error::MessageResolutionError;
use crate::handle::RuleHandle;
use crate::report::{
    ComparisonReport, ExistenceReport, FieldDifference, SubjectLabels, ValuePair,
};
use crate::rule::{Rule, RuleSet};

/// Declarative per-field comparator for one subject type.
///
/// A comparator is configured once (rules registered, subjects named) and
/// then evaluated repeatedly. Evaluation borrows the comparator immutably,
/// so the rule set cannot change mid-comparison; sharing a configured
/// comparator across threads is safe because every stored closure is
/// `Send + Sync`.
pub struct Comparator<T> {
    rules: RuleSet<T>,
    labels: SubjectLabels,
}

impl<T: 'static> Default for Comparator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> Comparator<T> {
    /// Create a comparator with no rules and the default subject labels.
    pub fn new() -> Self {
        Self {
            rules: RuleSet::new(),
            labels: SubjectLabels::default(),
        }
    }

    /// Create a comparator with custom subject labels.
    pub fn with_labels(a: impl Into<String>, b: impl Into<String>) -> Self {
        Self {
            rules: RuleSet::new(),
            labels: SubjectLabels::new(a, b),
        }
    }

    /// Create a comparator and run a configuration closure over it.
    pub fn configured(configure: impl FnOnce(&mut Self)) -> Self {
        let mut comparator = Self::new();
        configure(&mut comparator);
        comparator
    }

    /// Create a comparator pre-populated with a default rule for every
    /// scalar-like field in the subject catalog.
    pub fn with_default_rules() -> Self
    where
        T: Subject,
    {
        let mut comparator = Self::new();
        comparator.register_default_rules();
        comparator
    }

    /// Rename the subjects in produced reports.
    pub fn name_subjects(&mut self, a: impl Into<String>, b: impl Into<String>) -> &mut Self {
        self.labels = SubjectLabels::new(a, b);
        self
    }

    /// The current subject labels.
    pub fn labels(&self) -> &SubjectLabels {
        &self.labels
    }

    /// Number of registered rules.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Register a default equality rule for every scalar-like field in the
    /// subject catalog, in declaration order.
    ///
    /// Composite fields are skipped. Fields that already have a rule keep
    /// their existing configuration.
    pub fn register_default_rules(&mut self)
    where
        T: Subject,
    {
        for descriptor in T::fields() {
            if !descriptor.kind().is_scalar_like() {
                continue;
            }
            let projection = match descriptor.projection() {
                Some(projection) => projection,
                None => continue,
            };
            let identity = FieldIdentity::new(descriptor.name(), projection.type_name);
            if self.rules.position(&identity).is_none() {
                debug!(field = %identity, kind = ?descriptor.kind(), "default rule registered");
            }
            self.rules
                .insert_or_keep(Rule::from_projection(identity, projection));
        }
    }

    /// Register (or retrieve) the rule for a field and return its handle.
    ///
    /// The first registration creates the rule with default typed equality
    /// and the default message. Later registrations for the same field
    /// return the existing rule, so configuration through any handle lands
    /// on the one shared rule. Resolution failures surface here, never at
    /// evaluation time.
    pub fn rule_for<V>(
        &mut self,
        access: FieldAccess<T, V>,
    ) -> Result<RuleHandle<'_, T, V>, FieldResolutionError>
    where
        T: Subject,
        V: PartialEq + Serialize + 'static,
    {
        let identity = access.resolve()?;
        let index = self
            .rules
            .insert_or_keep(Rule::from_access(identity, access.get));
        Ok(RuleHandle::new(self.rules.get_mut(index), access.get))
    }

    /// Compare two subjects under the registered rules.
    ///
    /// Rules are evaluated in registration order and ignored rules are
    /// skipped. Each difference records the projected value pair and its
    /// resolved message. The returned future completes only once every
    /// message, including async ones, has resolved; a failing provider
    /// aborts the whole comparison. Dropping the future cancels the
    /// evaluation.
    pub async fn compare(&self, a: &T, b: &T) -> Result<ComparisonReport, MessageResolutionError> {
        let mut differences = Vec::new();

        for rule in self.rules.iter() {
            if rule.ignored {
                continue;
            }
            if (rule.predicate)(a, b) {
                continue;
            }

            let message = if rule.suppress_message {
                None
            } else {
                match rule.message.resolve(a).await {
                    Ok(text) => Some(text),
                    Err(source) => {
                        return Err(MessageResolutionError {
                            field: rule.identity.name.to_string(),
                            source,
                        });
                    }
                }
            };

            debug!(field = %rule.identity, "difference recorded");
            differences.push(FieldDifference {
                field: rule.identity,
                message,
                values: ValuePair {
                    a: (rule.project)(a),
                    b: (rule.project)(b),
                },
            });
        }

        Ok(ComparisonReport {
            labels: self.labels.clone(),
            differences,
        })
    }

    /// One-off comparison of a single field against a fixed value.
    ///
    /// The access is resolved eagerly and evaluated as an ephemeral rule
    /// that never enters the registry. The report carries at most one
    /// difference, whose second value is the supplied one and whose message
    /// is exactly `message`, or absent.
    pub fn compare_with_value<V>(
        &self,
        subject: &T,
        access: FieldAccess<T, V>,
        value: V,
        message: Option<&str>,
    ) -> Result<ComparisonReport, FieldResolutionError>
    where
        T: Subject,
        V: PartialEq + Serialize,
    {
        let identity = access.resolve()?;
        let observed = (access.get)(subject);

        let mut differences = Vec::new();
        if observed != value {
            differences.push(FieldDifference {
                field: identity,
                message: message.map(String::from),
                values: ValuePair {
                    a: serde_json::to_value(&observed).unwrap_or(Value::Null),
                    b: serde_json::to_value(&value).unwrap_or(Value::Null),
                },
            });
        }

        Ok(ComparisonReport {
            labels: self.labels.clone(),
            differences,
        })
    }

    /// Test whether `subject` has an equivalent among `candidates`.
    ///
    /// A candidate matches when every non-ignored rule's predicate accepts
    /// the pair; the scan stops at the first match. With no active rules the
    /// conjunction is vacuously true, so any non-empty candidate list
    /// produces a hit. On a miss the probed subject is handed back inside
    /// the report.
    pub fn exists(&self, subject: T, candidates: &[T]) -> ExistenceReport<T> {
        let active: Vec<&Rule<T>> = self.rules.iter().filter(|rule| !rule.ignored).collect();

        let found = candidates.iter().any(|candidate| {
            active
                .iter()
                .all(|rule| (rule.predicate)(&subject, candidate))
        });

        if found {
            ExistenceReport::found()
        } else {
            debug!(candidates = candidates.len(), "no equivalent candidate");
            ExistenceReport::missing(subject)
        }
    }

    /// Probe many subjects against one candidate set and report only the
    /// subjects without an equivalent, in probe order.
    pub fn exists_batch(&self, subjects: Vec<T>, candidates: &[T]) -> Vec<ExistenceReport<T>> {
        subjects
            .into_iter()
            .map(|subject| self.exists(subject, candidates))
            .filter(|report| !report.exists)
            .collect()
    }
}

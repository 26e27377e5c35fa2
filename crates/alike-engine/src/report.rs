use serde::Serialize;
use serde_json::Value;

use alike_field::FieldIdentity;

// ---------------------------------------------------------------------------
// SubjectLabels
// ---------------------------------------------------------------------------

/// Display names for the two compared subjects.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SubjectLabels {
    /// Label for the first subject.
    pub a: String,
    /// Label for the second subject.
    pub b: String,
}

impl SubjectLabels {
    /// Create labels from the two names.
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
        }
    }
}

impl Default for SubjectLabels {
    fn default() -> Self {
        Self::new("A", "B")
    }
}

// ---------------------------------------------------------------------------
// ValuePair
// ---------------------------------------------------------------------------

/// The serialized field values of both subjects at a recorded difference.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ValuePair {
    /// The first subject's value.
    pub a: Value,
    /// The second subject's value.
    pub b: Value,
}

// ---------------------------------------------------------------------------
// FieldDifference
// ---------------------------------------------------------------------------

/// One field on which the two subjects differ.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FieldDifference {
    /// Identity of the differing field.
    pub field: FieldIdentity,
    /// The resolved message, or `None` when the rule suppresses messages.
    pub message: Option<String>,
    /// Both subjects' values for the field.
    pub values: ValuePair,
}

// ---------------------------------------------------------------------------
// ComparisonReport
// ---------------------------------------------------------------------------

/// The outcome of comparing two subjects under a rule set.
///
/// Contains one entry per differing, non-ignored field, in rule registration
/// order. An empty report means the subjects are equal under the rules.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ComparisonReport {
    /// The subject labels active when the report was produced.
    pub labels: SubjectLabels,
    /// The recorded differences, in rule registration order.
    pub differences: Vec<FieldDifference>,
}

impl ComparisonReport {
    /// Returns `true` if any difference was recorded.
    pub fn is_different(&self) -> bool {
        !self.differences.is_empty()
    }

    /// Returns `true` if no difference was recorded.
    pub fn is_empty(&self) -> bool {
        self.differences.is_empty()
    }

    /// Number of recorded differences.
    pub fn len(&self) -> usize {
        self.differences.len()
    }

    /// The difference recorded for `field`, if any.
    pub fn difference_for(&self, field: &str) -> Option<&FieldDifference> {
        self.differences.iter().find(|d| d.field.name == field)
    }
}

// ---------------------------------------------------------------------------
// ExistenceReport
// ---------------------------------------------------------------------------

/// The outcome of probing a candidate set for an equivalent subject.
///
/// The probed subject is carried back only when no candidate matched, so a
/// hit is a plain flag and a miss hands the caller their instance back.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ExistenceReport<T> {
    /// Whether an equivalent candidate was found.
    pub exists: bool,
    /// The probed subject, present only on a miss.
    pub subject: Option<T>,
}

impl<T> ExistenceReport<T> {
    pub(crate) fn found() -> Self {
        Self {
            exists: true,
            subject: None,
        }
    }

    pub(crate) fn missing(subject: T) -> Self {
        Self {
            exists: false,
            subject: Some(subject),
        }
    }

    /// Take the probed subject back out of a miss report.
    pub fn into_subject(self) -> Option<T> {
        self.subject
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn age_difference() -> FieldDifference {
        FieldDifference {
            field: FieldIdentity::new("age", "u32"),
            message: Some("Difference found".into()),
            values: ValuePair {
                a: json!(36),
                b: json!(37),
            },
        }
    }

    #[test]
    fn default_labels_are_a_and_b() {
        let labels = SubjectLabels::default();
        assert_eq!(labels.a, "A");
        assert_eq!(labels.b, "B");
    }

    #[test]
    fn empty_report_is_not_different() {
        let report = ComparisonReport {
            labels: SubjectLabels::default(),
            differences: Vec::new(),
        };
        assert!(!report.is_different());
        assert!(report.is_empty());
        assert_eq!(report.len(), 0);
    }

    #[test]
    fn difference_lookup_by_field_name() {
        let report = ComparisonReport {
            labels: SubjectLabels::default(),
            differences: vec![age_difference()],
        };
        assert!(report.is_different());
        assert_eq!(report.difference_for("age").unwrap().values.b, json!(37));
        assert!(report.difference_for("name").is_none());
    }

    #[test]
    fn report_serializes_labels_and_differences() {
        let report = ComparisonReport {
            labels: SubjectLabels::new("expected", "actual"),
            differences: vec![age_difference()],
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["labels"]["a"], "expected");
        assert_eq!(json["differences"][0]["field"]["name"], "age");
        assert_eq!(json["differences"][0]["message"], "Difference found");
        assert_eq!(json["differences"][0]["values"]["a"], 36);
        assert_eq!(json["differences"][0]["values"]["b"], 37);
    }

    #[test]
    fn hit_report_carries_no_subject() {
        let report = ExistenceReport::<String>::found();
        assert!(report.exists);
        assert!(report.subject.is_none());
    }

    #[test]
    fn miss_report_hands_the_probe_back() {
        let report = ExistenceReport::missing("orphan".to_string());
        assert!(!report.exists);
        assert_eq!(report.into_subject().as_deref(), Some("orphan"));
    }
}

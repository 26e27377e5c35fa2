//! High-level facade for Alike.
//!
//! Re-exports the full public API so applications depend on a single crate.
//! This is the main entry point for applications embedding Alike.
//!
//! # Quick Start
//!
//! ```rust
//! use alike::{field, subject, Comparator};
//!
//! struct Sensor {
//!     id: String,
//!     reading: i64,
//! }
//!
//! subject!(Sensor {
//!     id => text,
//!     reading => scalar,
//! });
//!
//! let mut sensors = Comparator::new();
//! sensors.name_subjects("expected", "observed");
//! sensors.rule_for(field("id", |s: &Sensor| s.id.clone())).unwrap();
//! sensors
//!     .rule_for(field("reading", |s: &Sensor| s.reading))
//!     .unwrap()
//!     .with_message("reading drifted");
//!
//! let expected = Sensor { id: "s-1".into(), reading: 20 };
//! let observed = Sensor { id: "s-1".into(), reading: 23 };
//!
//! let report = futures::executor::block_on(sensors.compare(&expected, &observed)).unwrap();
//! assert_eq!(report.len(), 1);
//! assert_eq!(report.differences[0].message.as_deref(), Some("reading drifted"));
//! assert_eq!(report.labels.a, "expected");
//! ```

// Re-export key types
pub use alike_field::{
    field, subject, FieldAccess, FieldDescriptor, FieldIdentity, FieldKind, FieldProjection,
    FieldResolutionError, Subject,
};

pub use alike_engine::{
    BoxError, Comparator, ComparisonReport, ExistenceReport, FieldDifference,
    MessageResolutionError, RuleHandle, SubjectLabels, ValuePair, DEFAULT_MESSAGE,
};

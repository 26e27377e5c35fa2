//! Comparison engine for Alike.
//!
//! Callers declare per-field equality rules once on a [`Comparator`], then
//! evaluate pairs of subjects into difference reports or probe candidate
//! sets for equivalent instances. Rules are evaluated in registration order
//! and every report is a plain value the caller owns.
//!
//! # Quick Start
//!
//! ```rust
//! use alike_engine::Comparator;
//! use alike_field::{field, subject};
//!
//! struct Person {
//!     name: String,
//!     age: u32,
//! }
//!
//! subject!(Person {
//!     name => text,
//!     age => scalar,
//! });
//!
//! let mut people = Comparator::new();
//! people.rule_for(field("name", |p: &Person| p.name.clone())).unwrap();
//! people.rule_for(field("age", |p: &Person| p.age)).unwrap();
//!
//! let a = Person { name: "Ada".into(), age: 36 };
//! let b = Person { name: "Ada".into(), age: 37 };
//!
//! let report = futures::executor::block_on(people.compare(&a, &b)).unwrap();
//! assert!(report.is_different());
//! assert_eq!(report.differences[0].field.name, "age");
//! ```

pub mod comparator;
pub mod error;
pub mod handle;
mod message;
pub mod report;
mod rule;

// Re-exports for convenience.
pub use comparator::Comparator;
pub use error::{BoxError, MessageResolutionError};
pub use handle::RuleHandle;
pub use message::DEFAULT_MESSAGE;
pub use report::{ComparisonReport, ExistenceReport, FieldDifference, SubjectLabels, ValuePair};

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Serialize;

/// The resolved identity of a comparable field.
///
/// Identity is determined by `name` alone: two rules that resolve to the same
/// field name address the same rule slot, regardless of how the value type is
/// spelled. The `type_name` is carried for diagnostics and serialized reports
/// and never participates in equality or hashing.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct FieldIdentity {
    /// The field name as declared on the subject type.
    pub name: &'static str,
    /// The Rust type of the field value at the declaration site.
    pub type_name: &'static str,
}

impl FieldIdentity {
    /// Create an identity from a field name and its value type name.
    pub fn new(name: &'static str, type_name: &'static str) -> Self {
        Self { name, type_name }
    }
}

impl PartialEq for FieldIdentity {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for FieldIdentity {}

impl Hash for FieldIdentity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for FieldIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

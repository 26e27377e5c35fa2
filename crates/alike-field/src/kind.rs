use serde::Serialize;

/// Classification of a subject field for automatic rule registration.
///
/// The automatic pass registers default equality rules only for kinds whose
/// values compare meaningfully as a whole: primitives, strings, and date/time
/// values. Everything else is [`FieldKind::Composite`] and must be given an
/// explicit rule if it is to participate in comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum FieldKind {
    /// Primitive values: booleans, integers, floats, chars.
    Scalar,
    /// String-like values.
    Text,
    /// Date and time values.
    Temporal,
    /// Structured values; skipped by the automatic pass.
    Composite,
}

impl FieldKind {
    /// Returns `true` if the automatic pass registers a default rule for
    /// fields of this kind.
    pub fn is_scalar_like(&self) -> bool {
        !matches!(self, Self::Composite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_like_kinds() {
        assert!(FieldKind::Scalar.is_scalar_like());
        assert!(FieldKind::Text.is_scalar_like());
        assert!(FieldKind::Temporal.is_scalar_like());
        assert!(!FieldKind::Composite.is_scalar_like());
    }
}

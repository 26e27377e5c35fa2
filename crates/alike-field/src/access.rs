//! Typed field accesses and their resolution against subject catalogs.
//!
//! An access pairs a field name with a getter rooted at the subject
//! parameter. Valid field names:
//! - Must be non-empty
//! - Must be a single identifier (no `.` chains, no `::` paths)
//! - Must not start with a digit
//! - Must contain only ASCII alphanumerics and `_`

use crate::error::{FieldResolutionError, Result};
use crate::identity::FieldIdentity;
use crate::subject::Subject;

// ---------------------------------------------------------------------------
// FieldAccess
// ---------------------------------------------------------------------------

/// A typed access to one field of a subject type `T` with value type `V`.
///
/// The getter is a plain function pointer. Capturing closures do not coerce
/// to `fn`, so an access rooted in anything other than the subject parameter
/// (a captured local, a constant) is rejected at compile time.
pub struct FieldAccess<T, V> {
    /// The field name, validated against the subject catalog on resolution.
    pub name: &'static str,
    /// Getter returning the field's value from a subject.
    pub get: fn(&T) -> V,
}

/// Build a [`FieldAccess`] from a field name and getter.
///
/// # Examples
///
/// ```
/// use alike_field::field;
///
/// struct Person { age: u32 }
///
/// let access = field("age", |p: &Person| p.age);
/// assert_eq!(access.name, "age");
/// ```
pub fn field<T, V>(name: &'static str, get: fn(&T) -> V) -> FieldAccess<T, V> {
    FieldAccess { name, get }
}

impl<T, V> Clone for FieldAccess<T, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, V> Copy for FieldAccess<T, V> {}

impl<T: Subject, V> FieldAccess<T, V> {
    /// Resolve this access against the subject catalog.
    ///
    /// Validates the name shape, checks that the catalog declares the field,
    /// and returns an identity carrying the accessor's value type.
    pub fn resolve(&self) -> Result<FieldIdentity> {
        validate_field_name(self.name)?;
        if T::field(self.name).is_none() {
            return Err(FieldResolutionError::UnknownField {
                name: self.name.to_string(),
                subject: std::any::type_name::<T>(),
            });
        }
        Ok(FieldIdentity::new(self.name, std::any::type_name::<V>()))
    }
}

// ---------------------------------------------------------------------------
// Name validation
// ---------------------------------------------------------------------------

/// Validate a field name, returning `Ok(())` if valid.
///
/// # Examples
///
/// ```
/// use alike_field::access::validate_field_name;
///
/// assert!(validate_field_name("age").is_ok());
/// assert!(validate_field_name("first_name").is_ok());
/// assert!(validate_field_name("").is_err());
/// assert!(validate_field_name("address.city").is_err());
/// ```
pub fn validate_field_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(FieldResolutionError::InvalidName {
            name: name.to_string(),
            reason: "field name must not be empty".into(),
        });
    }

    // Traversal chains address nested state, which comparison rules do not
    // support.
    if name.contains('.') || name.contains("::") {
        return Err(FieldResolutionError::InvalidName {
            name: name.to_string(),
            reason: "must name a single field, not a path".into(),
        });
    }

    if name.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        return Err(FieldResolutionError::InvalidName {
            name: name.to_string(),
            reason: "must not start with a digit".into(),
        });
    }

    if let Some(ch) = name.chars().find(|c| !c.is_ascii_alphanumeric() && *c != '_') {
        return Err(FieldResolutionError::InvalidName {
            name: name.to_string(),
            reason: format!("contains forbidden character: {ch:?}"),
        });
    }

    Ok(())
}

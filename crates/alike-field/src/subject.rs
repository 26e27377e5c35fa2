use crate::descriptor::FieldDescriptor;

/// A type whose comparable fields are declared in a catalog.
///
/// The catalog is the declaration-time source of truth for field resolution:
/// an access resolves only if its name appears here. It also drives the
/// automatic registration pass, which walks [`Subject::fields`] in
/// declaration order and registers a default rule for every scalar-like
/// entry.
///
/// Implementations are normally written with the `subject!` macro rather
/// than by hand.
pub trait Subject: Sized {
    /// The declared field catalog, in declaration order.
    fn fields() -> Vec<FieldDescriptor<Self>>;

    /// Look up one declared field by name.
    fn field(name: &str) -> Option<FieldDescriptor<Self>> {
        Self::fields().into_iter().find(|d| d.name() == name)
    }
}

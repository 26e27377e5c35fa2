//! Foundation field types for Alike.
//!
//! This crate provides the field-level vocabulary used by the comparison
//! engine: resolved identities, kind classifications, catalog descriptors,
//! and typed accessors. The engine crate builds its rules on top of
//! `alike-field`.
//!
//! # Key Types
//!
//! - [`FieldIdentity`] — Resolved field name plus its declared value type
//! - [`FieldKind`] — Classification driving the automatic registration pass
//! - [`FieldDescriptor`] — One catalog entry, with a type-erased projection
//! - [`Subject`] — Per-type field catalog, usually written by [`subject!`]
//! - [`FieldAccess`] — A field name paired with a getter, built by [`field`]
//! - [`FieldResolutionError`] — Eager failure for accesses that do not resolve

pub mod access;
pub mod descriptor;
pub mod error;
pub mod identity;
pub mod kind;
mod macros;
pub mod subject;

pub use access::{field, FieldAccess};
pub use descriptor::{FieldDescriptor, FieldProjection};
pub use error::FieldResolutionError;
pub use identity::FieldIdentity;
pub use kind::FieldKind;
pub use subject::Subject;

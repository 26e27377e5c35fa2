use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::kind::FieldKind;

// ---------------------------------------------------------------------------
// FieldProjection
// ---------------------------------------------------------------------------

/// Type-erased projection of a subject into one field's serialized value.
///
/// Values that cannot be serialized render as [`Value::Null`] rather than
/// failing mid-report. Equality is tested on the field's Rust type,
/// independent of its serialized rendering.
pub struct FieldProjection<T> {
    /// The Rust type of the field value captured at the declaration site.
    pub type_name: &'static str,
    /// Projects the subject into the field's serialized value.
    pub project: Arc<dyn Fn(&T) -> Value + Send + Sync>,
    /// Compares the field value across two subjects with typed `==`.
    pub equals: Arc<dyn Fn(&T, &T) -> bool + Send + Sync>,
}

impl<T> Clone for FieldProjection<T> {
    fn clone(&self) -> Self {
        Self {
            type_name: self.type_name,
            project: Arc::clone(&self.project),
            equals: Arc::clone(&self.equals),
        }
    }
}

impl<T> fmt::Debug for FieldProjection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldProjection")
            .field("type_name", &self.type_name)
            .finish()
    }
}

// ---------------------------------------------------------------------------
// FieldDescriptor
// ---------------------------------------------------------------------------

/// One entry in a subject type's field catalog.
///
/// Scalar-like descriptors ([`FieldKind::Scalar`], [`FieldKind::Text`],
/// [`FieldKind::Temporal`]) carry a projection and are eligible for the
/// automatic registration pass. [`FieldKind::Composite`] descriptors carry
/// no projection: they exist so explicit rules on structured fields resolve,
/// and the automatic pass skips them.
pub struct FieldDescriptor<T> {
    name: &'static str,
    kind: FieldKind,
    projection: Option<FieldProjection<T>>,
}

impl<T> FieldDescriptor<T> {
    /// Declare a primitive-valued field.
    pub fn scalar<V>(name: &'static str, get: fn(&T) -> V) -> Self
    where
        T: 'static,
        V: PartialEq + Serialize + 'static,
    {
        Self::projected(name, FieldKind::Scalar, get)
    }

    /// Declare a string-valued field.
    pub fn text<V>(name: &'static str, get: fn(&T) -> V) -> Self
    where
        T: 'static,
        V: PartialEq + Serialize + 'static,
    {
        Self::projected(name, FieldKind::Text, get)
    }

    /// Declare a date/time-valued field.
    pub fn temporal<V>(name: &'static str, get: fn(&T) -> V) -> Self
    where
        T: 'static,
        V: PartialEq + Serialize + 'static,
    {
        Self::projected(name, FieldKind::Temporal, get)
    }

    /// Declare a structured field with no projection.
    pub fn composite(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Composite,
            projection: None,
        }
    }

    fn projected<V>(name: &'static str, kind: FieldKind, get: fn(&T) -> V) -> Self
    where
        T: 'static,
        V: PartialEq + Serialize + 'static,
    {
        let projection = FieldProjection {
            type_name: std::any::type_name::<V>(),
            project: Arc::new(move |subject: &T| {
                serde_json::to_value(get(subject)).unwrap_or(Value::Null)
            }),
            equals: Arc::new(move |a: &T, b: &T| get(a) == get(b)),
        };
        Self {
            name,
            kind,
            projection: Some(projection),
        }
    }

    /// The declared field name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The declared field kind.
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// The projection, present for every scalar-like kind.
    pub fn projection(&self) -> Option<&FieldProjection<T>> {
        self.projection.as_ref()
    }
}

impl<T> Clone for FieldDescriptor<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            kind: self.kind,
            projection: self.projection.clone(),
        }
    }
}

impl<T> fmt::Debug for FieldDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("projectable", &self.projection.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    struct Person {
        name: String,
        age: u32,
        born: NaiveDate,
    }

    fn alice() -> Person {
        Person {
            name: "Alice".into(),
            age: 33,
            born: NaiveDate::from_ymd_opt(1991, 4, 2).unwrap(),
        }
    }

    #[test]
    fn scalar_descriptor_projects_value() {
        let descriptor = FieldDescriptor::scalar("age", |p: &Person| p.age);
        let projection = descriptor.projection().unwrap();
        assert_eq!((projection.project)(&alice()), json!(33));
    }

    #[test]
    fn text_descriptor_projects_value() {
        let descriptor = FieldDescriptor::text("name", |p: &Person| p.name.clone());
        let projection = descriptor.projection().unwrap();
        assert_eq!((projection.project)(&alice()), json!("Alice"));
    }

    #[test]
    fn temporal_descriptor_projects_value() {
        let descriptor = FieldDescriptor::temporal("born", |p: &Person| p.born);
        let projection = descriptor.projection().unwrap();
        assert_eq!((projection.project)(&alice()), json!("1991-04-02"));
    }

    #[test]
    fn projection_captures_value_type_name() {
        let descriptor = FieldDescriptor::scalar("age", |p: &Person| p.age);
        assert_eq!(descriptor.projection().unwrap().type_name, "u32");
    }

    #[test]
    fn projection_equality_is_typed() {
        struct Gauge {
            level: f64,
        }

        let descriptor = FieldDescriptor::scalar("level", |g: &Gauge| g.level);
        let projection = descriptor.projection().unwrap();
        let equals = &projection.equals;

        assert!(equals(&Gauge { level: 1.5 }, &Gauge { level: 1.5 }));
        // Both project to null, but they are different values.
        let high = Gauge {
            level: f64::INFINITY,
        };
        let low = Gauge {
            level: f64::NEG_INFINITY,
        };
        assert!(!equals(&high, &low));
    }

    #[test]
    fn unserializable_value_projects_null() {
        use std::collections::HashMap;

        struct Gauge {
            // Tuple keys cannot be serialized as JSON map keys.
            samples: HashMap<(u8, u8), u8>,
        }

        let descriptor = FieldDescriptor::scalar("samples", |g: &Gauge| g.samples.clone());
        let gauge = Gauge {
            samples: HashMap::from([((0, 1), 7)]),
        };
        let projection = descriptor.projection().unwrap();
        assert_eq!((projection.project)(&gauge), Value::Null);
    }

    #[test]
    fn composite_descriptor_has_no_projection() {
        let descriptor = FieldDescriptor::<Person>::composite("address");
        assert_eq!(descriptor.kind(), FieldKind::Composite);
        assert!(descriptor.projection().is_none());
    }

    #[test]
    fn kinds_are_recorded() {
        assert_eq!(
            FieldDescriptor::scalar("age", |p: &Person| p.age).kind(),
            FieldKind::Scalar
        );
        assert_eq!(
            FieldDescriptor::text("name", |p: &Person| p.name.clone()).kind(),
            FieldKind::Text
        );
        assert_eq!(
            FieldDescriptor::temporal("born", |p: &Person| p.born).kind(),
            FieldKind::Temporal
        );
    }
}

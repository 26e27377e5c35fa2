/// Declare the comparable-field catalog for a subject type.
///
/// Each row has the form `name => kind`, where the kind is one of `scalar`,
/// `text`, `temporal`, or `composite`. Scalar-like rows capture a getter
/// that clones the named field; `composite` rows declare the field for
/// resolution only and the automatic registration pass skips them.
///
/// # Examples
///
/// ```
/// use alike_field::{subject, FieldKind, Subject};
///
/// struct Person {
///     name: String,
///     age: u32,
/// }
///
/// subject!(Person {
///     name => text,
///     age => scalar,
/// });
///
/// assert_eq!(Person::fields().len(), 2);
/// assert_eq!(Person::field("age").unwrap().kind(), FieldKind::Scalar);
/// ```
#[macro_export]
macro_rules! subject {
    ($ty:ty { $($field:ident => $kind:tt),* $(,)? }) => {
        impl $crate::Subject for $ty {
            fn fields() -> ::std::vec::Vec<$crate::FieldDescriptor<Self>> {
                ::std::vec![
                    $($crate::subject!(@descriptor $ty, $field, $kind)),*
                ]
            }
        }
    };
    (@descriptor $ty:ty, $field:ident, scalar) => {
        $crate::FieldDescriptor::scalar(stringify!($field), |s: &$ty| s.$field.clone())
    };
    (@descriptor $ty:ty, $field:ident, text) => {
        $crate::FieldDescriptor::text(stringify!($field), |s: &$ty| s.$field.clone())
    };
    (@descriptor $ty:ty, $field:ident, temporal) => {
        $crate::FieldDescriptor::temporal(stringify!($field), |s: &$ty| s.$field.clone())
    };
    (@descriptor $ty:ty, $field:ident, composite) => {
        $crate::FieldDescriptor::composite(stringify!($field))
    };
}

#[cfg(test)]
mod tests {
    use crate::kind::FieldKind;
    use crate::subject::Subject;
    use chrono::NaiveDate;
    use serde_json::json;

    struct Address {
        city: String,
    }

    struct Person {
        name: String,
        age: u32,
        born: NaiveDate,
        address: Address,
    }

    subject!(Person {
        name => text,
        age => scalar,
        born => temporal,
        address => composite,
    });

    fn bob() -> Person {
        Person {
            name: "Bob".into(),
            age: 40,
            born: NaiveDate::from_ymd_opt(1984, 11, 5).unwrap(),
            address: Address { city: "Utrecht".into() },
        }
    }

    #[test]
    fn catalog_lists_all_rows_in_order() {
        let names: Vec<_> = Person::fields().iter().map(|d| d.name()).collect();
        assert_eq!(names, vec!["name", "age", "born", "address"]);
    }

    #[test]
    fn kinds_match_declarations() {
        assert_eq!(Person::field("name").unwrap().kind(), FieldKind::Text);
        assert_eq!(Person::field("age").unwrap().kind(), FieldKind::Scalar);
        assert_eq!(Person::field("born").unwrap().kind(), FieldKind::Temporal);
        assert_eq!(Person::field("address").unwrap().kind(), FieldKind::Composite);
    }

    #[test]
    fn generated_projections_read_the_struct() {
        let person = bob();
        let age = Person::field("age").unwrap();
        let projection = age.projection().unwrap();
        assert_eq!((projection.project)(&person), json!(40));

        let born = Person::field("born").unwrap();
        let projection = born.projection().unwrap();
        assert_eq!((projection.project)(&person), json!("1984-11-05"));
    }

    #[test]
    fn composite_row_has_no_projection() {
        assert!(Person::field("address").unwrap().projection().is_none());
    }

    #[test]
    fn city_is_reachable_through_the_composite_owner() {
        // The composite row resolves as a field; its contents stay opaque.
        assert_eq!(bob().address.city, "Utrecht");
        assert!(Person::field("city").is_none());
    }
}

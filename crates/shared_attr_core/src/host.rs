//! Host-type integration: type-level and instance-level entry points.
//!
//! # Responsibility
//! - Give every host type access to its own static slot table.
//! - Route instance-level access to the same table as type-level access.
//!
//! # Invariants
//! - Instances hold no attribute storage.
//! - Instance-level writes delegate to the type-level writer.

use crate::error::AttrResult;
use crate::slot::table::SlotTable;
use serde_json::Value;

/// Implemented by types that carry shared, type-scoped attributes.
///
/// Usually implemented through `shared_attributes!`.
pub trait SharedAttributes {
    /// Returns the slot table owned by the implementing type.
    fn attr_table() -> &'static SlotTable;

    /// Type-level read.
    fn read_shared(name: &str) -> AttrResult<Value> {
        Self::attr_table().read(name)
    }

    /// Type-level write; returns the assigned value.
    fn write_shared(name: &str, value: impl Into<Value>) -> AttrResult<Value> {
        Self::attr_table().write(name, value)
    }

    /// Instance-level read; resolves to the type's slot.
    fn shared(&self, name: &str) -> AttrResult<Value> {
        Self::read_shared(name)
    }

    /// Instance-level write; same code path as `write_shared`.
    fn set_shared(&self, name: &str, value: impl Into<Value>) -> AttrResult<Value> {
        Self::write_shared(name, value)
    }

    /// Instance-level read-modify-write under one slot lock.
    fn update_shared(&self, name: &str, f: impl FnOnce(&Value) -> Value) -> AttrResult<Value> {
        Self::attr_table().update(name, f)
    }
}

/// Implements `SharedAttributes` with a lazily built static table.
///
/// ```
/// use shared_attr_core::{shared_attributes, SharedAttributes};
///
/// struct Counter;
///
/// shared_attributes! {
///     type Counter {
///         declare_accessors("count", "count=");
///     }
/// }
///
/// Counter::write_shared("count", 10).unwrap();
/// assert_eq!(Counter.shared("count").unwrap(), 10);
/// ```
///
/// `module` builds an incorporable table; `incorporates [..]` takes
/// `&'static SlotTable` expressions. Name literals are checked at compile
/// time, so `""` or `"="` fail the build. Incorporating a type table panics
/// on first access to the host's table.
#[macro_export]
macro_rules! shared_attributes {
    (@label $host:ty) => { ::core::stringify!($host) };
    (@label $host:ty, $label:literal) => { $label };
    (@table type, $label:expr) => { $crate::SlotTable::for_type($label) };
    (@table module, $label:expr) => { $crate::SlotTable::for_module($label) };
    (
        $kind:ident $host:ty $(as $label:literal)? $(: incorporates [$($module:expr),* $(,)?])? {
            $($decl:ident($($name:literal),* $(,)?);)*
        }
    ) => {
        $($(
            const _: () = ::core::assert!(
                $crate::model::name::is_normalizable($name),
                "shared attribute name cannot be normalized",
            );
        )*)*
        impl $crate::SharedAttributes for $host {
            fn attr_table() -> &'static $crate::SlotTable {
                static TABLE: $crate::__private::Lazy<$crate::SlotTable> =
                    $crate::__private::Lazy::new(|| {
                        let label = $crate::shared_attributes!(@label $host $(, $label)?);
                        let table = $crate::shared_attributes!(@table $kind, label);
                        $($(
                            $crate::__private::require(
                                &table,
                                "incorporate",
                                table.incorporate($module),
                            );
                        )*)?
                        $(
                            $crate::__private::require(
                                &table,
                                ::core::stringify!($decl),
                                table.$decl(&[$($name),*] as &[&str]),
                            );
                        )*
                        table
                    });
                &TABLE
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::SharedAttributes;
    use crate::error::AttrError;
    use serde_json::json;

    struct Gauge {
        _id: u32,
    }

    crate::shared_attributes! {
        type Gauge as "Gauge" {
            declare_accessors("level", "level=", "limit=");
        }
    }

    #[test]
    fn instance_and_type_share_one_slot() {
        let first = Gauge { _id: 1 };
        let second = Gauge { _id: 2 };

        assert_eq!(Gauge::write_shared("level", 5).expect("type write"), json!(5));
        assert_eq!(first.shared("level").expect("instance read"), json!(5));

        second.set_shared("level", 9).expect("instance write");
        assert_eq!(Gauge::read_shared("level").expect("type read"), json!(9));
        assert_eq!(first.shared("level").expect("instance read"), json!(9));
    }

    #[test]
    fn writer_only_name_has_no_reader() {
        let gauge = Gauge { _id: 3 };
        gauge.set_shared("limit", 100).expect("writer exists");
        let err = gauge.shared("limit").expect_err("no reader generated");
        assert!(matches!(err, AttrError::UndefinedReader { .. }));
    }

    struct Concrete;
    struct Incorporator;

    crate::shared_attributes! {
        type Concrete {
            declare_shared_accessors("shared=");
        }
    }

    crate::shared_attributes! {
        type Incorporator: incorporates [Concrete::attr_table()] {}
    }

    #[test]
    #[should_panic(expected = "Concrete is a type and cannot be incorporated")]
    fn incorporating_a_type_fails_on_first_access() {
        let _ = Incorporator::read_shared("shared");
    }

    #[test]
    fn table_label_comes_from_macro() {
        assert_eq!(Gauge::attr_table().owner().label, "Gauge");
        assert!(Gauge::attr_table().has_slot("limit"));
    }
}

//! Lock-guarded storage cell behind one declared attribute.

use crate::model::name::AttrName;
use crate::model::owner::OwnerId;
use parking_lot::RwLock;
use serde_json::Value;

/// Single storage location for one `(owner, name)` pair.
///
/// Every read and write goes through the slot's own lock, so type-level and
/// instance-level accessors never race on the value.
#[derive(Debug)]
pub struct SharedSlot {
    owner: OwnerId,
    name: AttrName,
    value: RwLock<Value>,
}

impl SharedSlot {
    /// Creates a slot in the absent (`Null`) state.
    pub fn new(owner: OwnerId, name: AttrName) -> Self {
        Self::with_value(owner, name, Value::Null)
    }

    pub fn with_value(owner: OwnerId, name: AttrName, value: Value) -> Self {
        Self {
            owner,
            name,
            value: RwLock::new(value),
        }
    }

    pub fn owner(&self) -> &OwnerId {
        &self.owner
    }

    pub fn name(&self) -> &AttrName {
        &self.name
    }

    /// Returns a snapshot of the current value.
    pub fn get(&self) -> Value {
        self.value.read().clone()
    }

    /// Replaces the value and returns the assigned value.
    pub fn set(&self, value: Value) -> Value {
        let mut guard = self.value.write();
        *guard = value;
        guard.clone()
    }

    /// Applies `f` under one write lock and returns the resulting value.
    pub fn update(&self, f: impl FnOnce(&Value) -> Value) -> Value {
        let mut guard = self.value.write();
        let next = f(&guard);
        *guard = next;
        guard.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::SharedSlot;
    use crate::model::name::AttrName;
    use crate::model::owner::OwnerId;
    use serde_json::{json, Value};

    fn slot() -> SharedSlot {
        SharedSlot::new(
            OwnerId::new("Widget"),
            AttrName::parse("count").expect("valid name"),
        )
    }

    #[test]
    fn starts_absent() {
        assert_eq!(slot().get(), Value::Null);
    }

    #[test]
    fn set_returns_assigned_value() {
        let slot = slot();
        assert_eq!(slot.set(json!({"a": [1, 2]})), json!({"a": [1, 2]}));
        assert_eq!(slot.get(), json!({"a": [1, 2]}));
    }

    #[test]
    fn update_sees_previous_value() {
        let slot = slot();
        slot.set(json!(41));
        let next = slot.update(|current| json!(current.as_i64().unwrap_or(0) + 1));
        assert_eq!(next, json!(42));
    }
}

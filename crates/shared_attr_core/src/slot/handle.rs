//! Resolved entry-point handles.
//!
//! A handle pins the slot that resolved when it was created, so repeated
//! access skips name lookup. Reads stay live: they observe every later write.

use crate::model::name::AttrName;
use crate::model::owner::OwnerId;
use crate::slot::shared_slot::SharedSlot;
use serde_json::Value;
use std::sync::Arc;

/// Reader entry point bound to one slot.
#[derive(Debug, Clone)]
pub struct Reader {
    slot: Arc<SharedSlot>,
}

impl Reader {
    pub(crate) fn new(slot: Arc<SharedSlot>) -> Self {
        Self { slot }
    }

    pub fn name(&self) -> &AttrName {
        self.slot.name()
    }

    /// Owner of the storage; differs from the table it was taken from when
    /// the slot lives in an incorporated module.
    pub fn slot_owner(&self) -> &OwnerId {
        self.slot.owner()
    }

    pub fn get(&self) -> Value {
        self.slot.get()
    }

    /// Returns whether both handles address the same storage location.
    pub fn same_slot(&self, other: &Reader) -> bool {
        Arc::ptr_eq(&self.slot, &other.slot)
    }
}

/// Writer entry point bound to one slot.
#[derive(Debug, Clone)]
pub struct Writer {
    slot: Arc<SharedSlot>,
}

impl Writer {
    pub(crate) fn new(slot: Arc<SharedSlot>) -> Self {
        Self { slot }
    }

    pub fn name(&self) -> &AttrName {
        self.slot.name()
    }

    /// Assigns and returns the assigned value.
    pub fn set(&self, value: impl Into<Value>) -> Value {
        self.slot.set(value.into())
    }

    pub fn update(&self, f: impl FnOnce(&Value) -> Value) -> Value {
        self.slot.update(f)
    }

    /// Returns whether this writer feeds the slot `reader` observes.
    pub fn feeds(&self, reader: &Reader) -> bool {
        Arc::ptr_eq(&self.slot, &reader.slot)
    }
}

#[cfg(test)]
mod tests {
    use crate::slot::table::SlotTable;
    use serde_json::json;

    #[test]
    fn handles_report_slot_name_and_owner() {
        let table = SlotTable::for_type("Widget");
        table
            .declare_reader_writer(&["level="])
            .expect("accessors declare");
        let reader = table.reader("level").expect("reader bound");
        let writer = table.writer("level").expect("writer bound");

        assert_eq!(reader.name().as_str(), "level");
        assert_eq!(writer.name(), reader.name());
        assert_eq!(reader.slot_owner(), table.owner());

        assert_eq!(writer.set(3), json!(3));
        assert_eq!(reader.get(), json!(3));
    }
}

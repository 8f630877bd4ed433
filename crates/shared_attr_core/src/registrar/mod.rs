//! Shared-attribute registrar.
//!
//! # Responsibility
//! - Turn declared name lists into slots plus reader/writer entry points.
//! - Apply the strict (type-only) and shared (incorporable) declaration modes.
//!
//! # Invariants
//! - Slots are materialized at declaration time with a `Null` value.
//! - Redeclaring a name re-binds entry points and keeps the slot value.
//!
//! The operations live on `SlotTable` so a host declares against its own
//! table: `TABLE.declare_accessors(&["count", "limit="])`.

mod declare;

//! Shared slot storage and per-owner slot tables.
//!
//! # Responsibility
//! - Hold the single storage location behind each declared attribute.
//! - Resolve entry points from an owner (or its incorporated modules) to a slot.
//!
//! # Invariants
//! - For one `(owner, name)` pair there is at most one slot.
//! - Instance-level access never owns storage; it resolves to the owner's slot.

pub mod handle;
pub mod shared_slot;
pub mod table;

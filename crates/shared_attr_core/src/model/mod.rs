//! Names and owner identities shared by the registrar.
//!
//! # Responsibility
//! - Normalize declared names into slot names plus a requested direction.
//! - Identify the type or module that owns each slot table.
//!
//! # Invariants
//! - One normalized name addresses at most one slot per owner.

pub mod name;
pub mod owner;

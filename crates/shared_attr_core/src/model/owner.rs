//! Owner identity and binding visibility.
//!
//! # Invariants
//! - Every slot table mints exactly one `OwnerId` and never changes it.
//! - Only `OwnerKind::Module` owners can be incorporated by other owners.

use serde::Serialize;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Identity of a slot-owning type or module.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct OwnerId {
    /// Random identity; labels are not required to be unique.
    pub uuid: Uuid,
    /// Human-readable name used in logs and errors.
    pub label: String,
}

impl OwnerId {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            label: label.into(),
        }
    }
}

impl Display for OwnerId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label)
    }
}

/// Kind of construct that owns a slot table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OwnerKind {
    /// Concrete type: has instances, cannot be incorporated.
    Type,
    /// Reusable construct that types incorporate.
    Module,
}

impl OwnerKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Type => "type",
            Self::Module => "module",
        }
    }
}

/// Reach of one generated entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    /// Reachable only through the declaring owner.
    Strict,
    /// Also reachable through every owner that incorporates the declaring one.
    Shared,
}

impl Visibility {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Shared => "shared",
        }
    }
}

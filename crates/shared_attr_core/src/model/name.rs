//! Attribute name model and normalization.
//!
//! # Responsibility
//! - Split a raw declared name into its slot name and requested direction.
//! - Reject names that normalize to nothing.
//!
//! # Invariants
//! - `a` and `a=` always normalize to the same `AttrName`.
//! - Exactly one trailing assignment marker is stripped (`a==` names `a=`).
//! - Surrounding ASCII whitespace is never part of a name.
//! - `is_normalizable` and `parse_raw_name` agree on every input.

use crate::error::{AttrError, AttrResult};
use serde::Serialize;
use std::borrow::Borrow;
use std::fmt::{Display, Formatter};

/// Trailing marker that turns a bare identifier into an assignment-style one.
pub const ASSIGNMENT_MARKER: char = '=';

/// Normalized, non-empty attribute name.
///
/// One `AttrName` addresses at most one slot per owner.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct AttrName(String);

impl AttrName {
    /// Normalizes one raw name, stripping an assignment marker if present.
    pub fn parse(raw: &str) -> AttrResult<Self> {
        parse_raw_name(raw).map(|declared| declared.name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for AttrName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for AttrName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for AttrName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<&str> for AttrName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Access direction requested by a raw declared name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Bare identifier: a reader was requested.
    Read,
    /// Assignment-style identifier: a writer was requested.
    Write,
}

/// One raw name after normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclaredName {
    pub name: AttrName,
    pub direction: Direction,
}

/// Parses one raw name into slot name plus requested direction.
///
/// # Errors
/// - `AttrError::InvalidName` when nothing remains after trimming and marker
///   removal (`""`, `"   "`, `"="`).
pub fn parse_raw_name(raw: &str) -> AttrResult<DeclaredName> {
    let trimmed = raw.trim_matches(|c: char| c.is_ascii_whitespace());
    let (base, direction) = match trimmed.strip_suffix(ASSIGNMENT_MARKER) {
        Some(base) => (base, Direction::Write),
        None => (trimmed, Direction::Read),
    };
    let base = base.trim_end_matches(|c: char| c.is_ascii_whitespace());
    if base.is_empty() {
        return Err(AttrError::InvalidName(raw.to_string()));
    }

    Ok(DeclaredName {
        name: AttrName(base.to_string()),
        direction,
    })
}

/// Parses a whole batch, failing before any name is used.
pub fn parse_raw_names<S: AsRef<str>>(raw: &[S]) -> AttrResult<Vec<DeclaredName>> {
    raw.iter().map(|value| parse_raw_name(value.as_ref())).collect()
}

/// Compile-time check used by `shared_attributes!` on name literals.
///
/// Mirrors `parse_raw_name` byte for byte.
pub const fn is_normalizable(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    let mut start = 0;
    let mut end = bytes.len();
    while start < end && bytes[start].is_ascii_whitespace() {
        start += 1;
    }
    while end > start && bytes[end - 1].is_ascii_whitespace() {
        end -= 1;
    }
    if end > start && bytes[end - 1] == b'=' {
        end -= 1;
    }
    while end > start && bytes[end - 1].is_ascii_whitespace() {
        end -= 1;
    }
    end > start
}

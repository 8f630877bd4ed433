//! Per-owner slot table: storage, entry-point bindings and incorporation.
//!
//! # Responsibility
//! - Own every shared slot declared on one type or module.
//! - Record which entry points (reader/writer) exist and how far they reach.
//! - Resolve type-level and instance-level access to one slot.
//!
//! # Invariants
//! - At most one slot per normalized name; slots are never removed.
//! - A slot keeps its value when entry points are regenerated.
//! - Incorporated modules are referenced, never copied.
//! - Resolution holds at most one table lock at a time.

use crate::error::{AttrError, AttrResult};
use crate::model::name::{AttrName, Direction};
use crate::model::owner::{OwnerId, OwnerKind, Visibility};
use crate::slot::handle::{Reader, Writer};
use crate::slot::shared_slot::SharedSlot;
use log::debug;
use parking_lot::RwLock;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;

struct Binding {
    slot: Arc<SharedSlot>,
    reader: Option<Visibility>,
    writer: Option<Visibility>,
}

impl Binding {
    fn entry_point(&self, direction: Direction) -> Option<Visibility> {
        match direction {
            Direction::Read => self.reader,
            Direction::Write => self.writer,
        }
    }
}

#[derive(Default)]
struct TableState {
    bindings: BTreeMap<AttrName, Binding>,
    modules: Vec<&'static SlotTable>,
}

/// Slot table owned by one type or module.
///
/// Hosts keep their table in a `static`, so the table lives as long as the
/// type it belongs to.
pub struct SlotTable {
    owner: OwnerId,
    kind: OwnerKind,
    state: RwLock<TableState>,
}

/// Serializable view of one attribute in a table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttributeSnapshot {
    pub name: AttrName,
    pub reader: Option<Visibility>,
    pub writer: Option<Visibility>,
    pub value: Value,
}

/// Serializable view of a whole table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableSnapshot {
    pub owner: String,
    pub kind: OwnerKind,
    /// Sorted by attribute name.
    pub attributes: Vec<AttributeSnapshot>,
    /// Incorporated module labels, in incorporation order.
    pub modules: Vec<String>,
}

impl SlotTable {
    /// Creates an empty table for a concrete type.
    pub fn for_type(label: impl Into<String>) -> Self {
        Self::new(OwnerId::new(label), OwnerKind::Type)
    }

    /// Creates an empty table for an incorporable module.
    pub fn for_module(label: impl Into<String>) -> Self {
        Self::new(OwnerId::new(label), OwnerKind::Module)
    }

    fn new(owner: OwnerId, kind: OwnerKind) -> Self {
        Self {
            owner,
            kind,
            state: RwLock::new(TableState::default()),
        }
    }

    pub fn owner(&self) -> &OwnerId {
        &self.owner
    }

    pub fn kind(&self) -> OwnerKind {
        self.kind
    }

    /// Reads through the reader entry point for `name`.
    ///
    /// # Errors
    /// - `AttrError::UndefinedReader` when no reader resolves.
    pub fn read(&self, name: &str) -> AttrResult<Value> {
        self.reader(name).map(|reader| reader.get())
    }

    /// Assigns through the writer entry point and returns the assigned value.
    ///
    /// # Errors
    /// - `AttrError::UndefinedWriter` when no writer resolves.
    pub fn write(&self, name: &str, value: impl Into<Value>) -> AttrResult<Value> {
        self.writer(name).map(|writer| writer.set(value))
    }

    /// Read-modify-write through the writer entry point under one slot lock.
    pub fn update(&self, name: &str, f: impl FnOnce(&Value) -> Value) -> AttrResult<Value> {
        self.writer(name).map(|writer| writer.update(f))
    }

    /// Returns a live reader handle bound to the resolved slot.
    pub fn reader(&self, name: &str) -> AttrResult<Reader> {
        self.resolve(name, Direction::Read, false)
            .map(Reader::new)
            .ok_or_else(|| AttrError::UndefinedReader {
                owner: self.owner.label.clone(),
                name: name.to_string(),
            })
    }

    /// Returns a writer handle bound to the resolved slot.
    pub fn writer(&self, name: &str) -> AttrResult<Writer> {
        self.resolve(name, Direction::Write, false)
            .map(Writer::new)
            .ok_or_else(|| AttrError::UndefinedWriter {
                owner: self.owner.label.clone(),
                name: name.to_string(),
            })
    }

    /// Returns whether a reader resolves here or through incorporated modules.
    pub fn has_reader(&self, name: &str) -> bool {
        self.resolve(name, Direction::Read, false).is_some()
    }

    /// Returns whether a writer resolves here or through incorporated modules.
    pub fn has_writer(&self, name: &str) -> bool {
        self.resolve(name, Direction::Write, false).is_some()
    }

    /// Returns whether this owner itself holds a slot for `name`.
    pub fn has_slot(&self, name: &str) -> bool {
        self.state.read().bindings.contains_key(name)
    }

    /// Returns sorted names of slots owned by this table.
    pub fn slot_names(&self) -> Vec<AttrName> {
        self.state.read().bindings.keys().cloned().collect()
    }

    /// Assigns a slot directly, as a type body would before declaring
    /// accessors. Creates the slot when absent; binds no entry points.
    pub fn assign_slot(&self, name: &str, value: impl Into<Value>) -> AttrResult<Value> {
        let name = AttrName::parse(name)?;
        let slot = self.ensure_slot(name);
        Ok(slot.set(value.into()))
    }

    /// Incorporates a module so its shared entry points resolve through this
    /// owner. Incorporating the same module twice is a no-op.
    ///
    /// # Errors
    /// - `AttrError::NotIncorporable` when `module` is a type table.
    /// - `AttrError::CyclicIncorporation` when `module` already reaches this
    ///   owner (or is this owner).
    pub fn incorporate(&self, module: &'static SlotTable) -> AttrResult<()> {
        if module.kind != OwnerKind::Module {
            return Err(AttrError::NotIncorporable {
                owner: module.owner.label.clone(),
            });
        }
        if module.owner.uuid == self.owner.uuid || module.reaches(&self.owner) {
            return Err(AttrError::CyclicIncorporation {
                owner: self.owner.label.clone(),
                module: module.owner.label.clone(),
            });
        }

        let mut state = self.state.write();
        if state
            .modules
            .iter()
            .any(|existing| existing.owner.uuid == module.owner.uuid)
        {
            return Ok(());
        }
        state.modules.push(module);
        debug!(
            "event=module_incorporated module=registrar owner={} incorporated={} status=ok",
            self.owner, module.owner
        );
        Ok(())
    }

    /// Returns incorporated module identities in incorporation order.
    pub fn incorporated_modules(&self) -> Vec<OwnerId> {
        self.state
            .read()
            .modules
            .iter()
            .map(|module| module.owner.clone())
            .collect()
    }

    /// Captures bindings and current values.
    pub fn snapshot(&self) -> TableSnapshot {
        let state = self.state.read();
        TableSnapshot {
            owner: self.owner.label.clone(),
            kind: self.kind,
            attributes: state
                .bindings
                .iter()
                .map(|(name, binding)| AttributeSnapshot {
                    name: name.clone(),
                    reader: binding.reader,
                    writer: binding.writer,
                    value: binding.slot.get(),
                })
                .collect(),
            modules: state
                .modules
                .iter()
                .map(|module| module.owner.label.clone())
                .collect(),
        }
    }

    /// Materializes the slot for `name` (absent value) when missing.
    ///
    /// A name that already resolves through an incorporated module reuses the
    /// module's slot instead of creating a second one.
    pub(crate) fn ensure_slot(&self, name: AttrName) -> Arc<SharedSlot> {
        if let Some(binding) = self.state.read().bindings.get(&name) {
            return Arc::clone(&binding.slot);
        }
        let inherited = self.inherited_slot(name.as_ref());

        let mut state = self.state.write();
        let binding = state.bindings.entry(name).or_insert_with_key(|name| {
            let slot = match inherited {
                Some(slot) => {
                    debug!(
                        "event=slot_aliased module=registrar owner={} name={} slot_owner={}",
                        self.owner,
                        name,
                        slot.owner()
                    );
                    slot
                }
                None => {
                    debug!(
                        "event=slot_materialized module=registrar owner={} name={}",
                        self.owner, name
                    );
                    Arc::new(SharedSlot::new(self.owner.clone(), name.clone()))
                }
            };
            Binding {
                slot,
                reader: None,
                writer: None,
            }
        });
        Arc::clone(&binding.slot)
    }

    /// Binds one entry point, materializing the slot first. A later binding
    /// for the same name and direction overwrites the earlier one.
    pub(crate) fn bind(&self, name: &AttrName, direction: Direction, visibility: Visibility) {
        self.ensure_slot(name.clone());
        let mut state = self.state.write();
        let Some(binding) = state.bindings.get_mut(name) else {
            return;
        };
        let entry_point = match direction {
            Direction::Read => &mut binding.reader,
            Direction::Write => &mut binding.writer,
        };
        let event = if entry_point.is_some() {
            "accessor_rebound"
        } else {
            "accessor_bound"
        };
        *entry_point = Some(visibility);
        debug!(
            "event={} module=registrar owner={} name={} direction={} visibility={}",
            event,
            self.owner,
            name,
            direction_str(direction),
            visibility.as_str()
        );
    }

    /// Own bindings first, then incorporated modules most recent first.
    /// Strict entry points are skipped when reached through incorporation.
    /// An entry point found in a module still targets this owner's slot when
    /// the owner holds one for `name`.
    fn resolve(
        &self,
        name: &str,
        direction: Direction,
        via_incorporation: bool,
    ) -> Option<Arc<SharedSlot>> {
        let (own_slot, modules) = {
            let state = self.state.read();
            let own = state.bindings.get(name);
            if let Some(binding) = own {
                match binding.entry_point(direction) {
                    Some(Visibility::Shared) => return Some(Arc::clone(&binding.slot)),
                    Some(Visibility::Strict) if !via_incorporation => {
                        return Some(Arc::clone(&binding.slot))
                    }
                    _ => {}
                }
            }
            (
                own.map(|binding| Arc::clone(&binding.slot)),
                state.modules.clone(),
            )
        };

        let inherited = modules
            .iter()
            .rev()
            .find_map(|module| module.resolve(name, direction, true))?;
        Some(own_slot.unwrap_or(inherited))
    }

    /// Slot behind any shared entry point an incorporated module exposes.
    fn inherited_slot(&self, name: &str) -> Option<Arc<SharedSlot>> {
        let modules = self.state.read().modules.clone();
        modules.iter().rev().find_map(|module| {
            module
                .resolve(name, Direction::Read, true)
                .or_else(|| module.resolve(name, Direction::Write, true))
        })
    }

    fn reaches(&self, target: &OwnerId) -> bool {
        let modules = self.state.read().modules.clone();
        modules
            .iter()
            .any(|module| module.owner.uuid == target.uuid || module.reaches(target))
    }
}

impl std::fmt::Debug for SlotTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlotTable")
            .field("owner", &self.owner)
            .field("kind", &self.kind)
            .field("slots", &self.slot_names())
            .finish()
    }
}

fn direction_str(direction: Direction) -> &'static str {
    match direction {
        Direction::Read => "reader",
        Direction::Write => "writer",
    }
}

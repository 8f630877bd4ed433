//! Declaration operations on slot tables.
//!
//! # Invariants
//! - A batch is fully normalized before any slot or entry point is touched.
//! - Writers are generated before readers in combined declarations.
//! - Strict combined declarations give assignment-only names no reader;
//!   shared combined declarations give every writer a paired reader.

use crate::error::AttrResult;
use crate::model::name::{parse_raw_names, AttrName, DeclaredName, Direction};
use crate::model::owner::Visibility;
use crate::slot::table::SlotTable;
use log::warn;

impl SlotTable {
    /// Generates strict readers. Returns the normalized names in input order.
    ///
    /// Regenerating an existing reader re-binds it to the same slot.
    pub fn declare_readers<S: AsRef<str>>(&self, names: &[S]) -> AttrResult<Vec<AttrName>> {
        self.generate("declare_readers", names, Direction::Read, Visibility::Strict)
    }

    /// Generates strict writers. `a` and `a=` name the same slot.
    pub fn declare_writers<S: AsRef<str>>(&self, names: &[S]) -> AttrResult<Vec<AttrName>> {
        self.generate("declare_writers", names, Direction::Write, Visibility::Strict)
    }

    /// Generates strict accessors from mixed bare/assignment-style names.
    ///
    /// Bare names get readers, assignment-style names get writers only.
    /// Returns readers followed by writers.
    pub fn declare_accessors<S: AsRef<str>>(&self, names: &[S]) -> AttrResult<Vec<AttrName>> {
        let (readers, writers) = self.partition("declare_accessors", names)?;
        self.combine(readers, writers, Visibility::Strict)
    }

    /// Strict reader and writer for every name. Returns readers then writers,
    /// so each name appears twice.
    pub fn declare_reader_writer<S: AsRef<str>>(
        &self,
        names: &[S],
    ) -> AttrResult<Vec<AttrName>> {
        let mut generated = self.declare_readers(names)?;
        generated.extend(self.declare_writers(names)?);
        Ok(generated)
    }

    /// Generates readers that incorporating owners can also reach.
    pub fn declare_shared_readers<S: AsRef<str>>(
        &self,
        names: &[S],
    ) -> AttrResult<Vec<AttrName>> {
        self.generate(
            "declare_shared_readers",
            names,
            Direction::Read,
            Visibility::Shared,
        )
    }

    /// Generates writers that incorporating owners can also reach.
    pub fn declare_shared_writers<S: AsRef<str>>(
        &self,
        names: &[S],
    ) -> AttrResult<Vec<AttrName>> {
        self.generate(
            "declare_shared_writers",
            names,
            Direction::Write,
            Visibility::Shared,
        )
    }

    /// Shared counterpart of `declare_accessors`.
    ///
    /// Every assignment-style name also gets a reader. Returns the reader set
    /// (writer names appended) followed by the writer set.
    pub fn declare_shared_accessors<S: AsRef<str>>(
        &self,
        names: &[S],
    ) -> AttrResult<Vec<AttrName>> {
        let (mut readers, writers) = self.partition("declare_shared_accessors", names)?;
        readers.extend(writers.iter().cloned());
        self.combine(readers, writers, Visibility::Shared)
    }

    /// Shared reader and writer for every name.
    pub fn declare_shared_reader_writer<S: AsRef<str>>(
        &self,
        names: &[S],
    ) -> AttrResult<Vec<AttrName>> {
        let mut generated = self.declare_shared_readers(names)?;
        generated.extend(self.declare_shared_writers(names)?);
        Ok(generated)
    }

    fn generate<S: AsRef<str>>(
        &self,
        operation: &str,
        names: &[S],
        direction: Direction,
        visibility: Visibility,
    ) -> AttrResult<Vec<AttrName>> {
        let declared = self.normalize(operation, names)?;
        let names = declared
            .into_iter()
            .map(|declared| declared.name)
            .collect::<Vec<_>>();
        self.bind_all(&names, direction, visibility);
        Ok(names)
    }

    fn partition<S: AsRef<str>>(
        &self,
        operation: &str,
        names: &[S],
    ) -> AttrResult<(Vec<AttrName>, Vec<AttrName>)> {
        let (writers, readers): (Vec<DeclaredName>, Vec<DeclaredName>) = self
            .normalize(operation, names)?
            .into_iter()
            .partition(|declared| declared.direction == Direction::Write);
        Ok((
            readers.into_iter().map(|declared| declared.name).collect(),
            writers.into_iter().map(|declared| declared.name).collect(),
        ))
    }

    fn combine(
        &self,
        readers: Vec<AttrName>,
        writers: Vec<AttrName>,
        visibility: Visibility,
    ) -> AttrResult<Vec<AttrName>> {
        self.bind_all(&writers, Direction::Write, visibility);
        self.bind_all(&readers, Direction::Read, visibility);

        let mut generated = readers;
        generated.extend(writers);
        Ok(generated)
    }

    fn bind_all(&self, names: &[AttrName], direction: Direction, visibility: Visibility) {
        for name in names {
            self.bind(name, direction, visibility);
        }
    }

    fn normalize<S: AsRef<str>>(
        &self,
        operation: &str,
        names: &[S],
    ) -> AttrResult<Vec<DeclaredName>> {
        parse_raw_names(names).inspect_err(|err| {
            warn!(
                "event=declare module=registrar status=error op={} owner={} reason={}",
                operation,
                self.owner(),
                err
            );
        })
    }
}

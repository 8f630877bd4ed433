//! Shared, type-scoped attributes.
//! One slot per declared name per owner, reachable from the type and from
//! every instance of it.

pub mod config;
pub mod error;
pub mod host;
pub mod logging;
pub mod model;
pub mod registrar;
pub mod slot;

pub use config::LoggingConfig;
pub use error::{AttrError, AttrResult};
pub use host::SharedAttributes;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::name::{AttrName, Direction};
pub use model::owner::{OwnerId, OwnerKind, Visibility};
pub use slot::handle::{Reader, Writer};
pub use slot::table::{AttributeSnapshot, SlotTable, TableSnapshot};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[doc(hidden)]
pub mod __private {
    use crate::error::AttrResult;
    use crate::slot::table::SlotTable;
    use log::error;

    pub use once_cell::sync::Lazy;

    /// Fails a macro-built table initializer on the first definition error.
    ///
    /// Declarations and incorporations run once, when the type is defined, so
    /// an error here is a definition mistake and aborts like one.
    pub fn require<T>(table: &SlotTable, operation: &str, result: AttrResult<T>) {
        if let Err(err) = result {
            error!(
                "event=define module=registrar status=error op={} owner={} reason={}",
                operation,
                table.owner(),
                err
            );
            panic!("{operation} failed while defining {}: {err}", table.owner());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}

//! Registrar error taxonomy.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result alias for declaration and access operations.
pub type AttrResult<T> = Result<T, AttrError>;

/// Declaration and access errors.
///
/// Overwriting an existing entry point and re-incorporating a module are
/// policy, not errors, and never surface here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrError {
    /// Raw name is empty after trimming and marker removal.
    InvalidName(String),
    /// No reader was generated for this name on the owner or its modules.
    UndefinedReader { owner: String, name: String },
    /// No writer was generated for this name on the owner or its modules.
    UndefinedWriter { owner: String, name: String },
    /// Only module tables can be incorporated.
    NotIncorporable { owner: String },
    /// Incorporation would make an owner reach itself.
    CyclicIncorporation { owner: String, module: String },
}

impl Display for AttrError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidName(value) => write!(f, "attribute name cannot be normalized: `{value}`"),
            Self::UndefinedReader { owner, name } => {
                write!(f, "undefined shared reader `{name}` for {owner}")
            }
            Self::UndefinedWriter { owner, name } => {
                write!(f, "undefined shared writer `{name}=` for {owner}")
            }
            Self::NotIncorporable { owner } => {
                write!(f, "{owner} is a type and cannot be incorporated")
            }
            Self::CyclicIncorporation { owner, module } => {
                write!(f, "cyclic incorporation of {module} into {owner}")
            }
        }
    }
}

impl Error for AttrError {}

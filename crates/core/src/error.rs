//! Binding lookup errors.

use thiserror::Error;

use crate::types::BindingKind;

/// A name-based query hit a name with no binding in the queried namespace.
///
/// This is a caller bug (misspelled name, or a query before the matching
/// define call), so it is never recovered internally.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("undefined {kind} binding \"{name}\"")]
pub struct UndefinedBindingError {
    pub name: String,
    pub kind: BindingKind,
}

impl UndefinedBindingError {
    pub fn new(name: impl Into<String>, kind: BindingKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn key(name: impl Into<String>) -> Self {
        Self::new(name, BindingKind::Key)
    }

    pub fn axis(name: impl Into<String>) -> Self {
        Self::new(name, BindingKind::Axis)
    }
}

/// Result of a name-based binding query.
pub type BindingResult<T> = std::result::Result<T, UndefinedBindingError>;

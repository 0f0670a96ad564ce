use std::fmt;

use crate::model::PersonaId;

/// Errors raised while constructing a [`crate::model::PersonaRecord`]
#[derive(Debug, Clone, PartialEq)]
pub enum PersonaError {
    EmptyId,
    DuplicateId(PersonaId),
    NotFinite {
        field: &'static str,
    },
    Negative {
        field: &'static str,
        value: f64,
    },
    /// Payback must be at least one day before the allocator floors it
    NonPositivePayback,
    ShareOutOfRange {
        value: f64,
    },
}

impl fmt::Display for PersonaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersonaError::EmptyId => write!(f, "persona id cannot be empty"),
            PersonaError::DuplicateId(id) => write!(f, "persona {id} is listed more than once"),
            PersonaError::NotFinite { field } => write!(f, "{field} must be a finite number"),
            PersonaError::Negative { field, value } => {
                write!(f, "{field} cannot be negative (got {value})")
            }
            PersonaError::NonPositivePayback => {
                write!(f, "payback days must be a positive number of days")
            }
            PersonaError::ShareOutOfRange { value } => {
                write!(f, "current share must be between 0 and 100 (got {value})")
            }
        }
    }
}

impl std::error::Error for PersonaError {}

/// Errors related to target mix updates
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MixError {
    UnknownPersona(PersonaId),
    /// A share above 100 in a deserialized mix
    ShareOutOfRange { id: PersonaId, value: u8 },
}

impl fmt::Display for MixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MixError::UnknownPersona(id) => write!(f, "persona {id} not found"),
            MixError::ShareOutOfRange { id, value } => {
                write!(f, "target share for {id} must be between 0 and 100 (got {value})")
            }
        }
    }
}

impl std::error::Error for MixError {}

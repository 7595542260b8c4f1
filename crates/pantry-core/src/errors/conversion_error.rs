//! Unit conversion errors.

use super::error_code::{self, PantryErrorCode};

/// Errors reported by the unit converter.
///
/// `Incompatible` is the explicit cross-kind failure: the converter never
/// silently returns the input unchanged when it cannot convert.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    #[error("cannot convert {from} to {to}: incompatible units")]
    Incompatible { from: String, to: String },

    #[error("unknown unit: {unit}")]
    UnknownUnit { unit: String },

    #[error("invalid quantity: {input:?}")]
    InvalidQuantity { input: String },

    #[error("amount too large to convert from {from} to {to}")]
    Overflow { from: String, to: String },
}

impl PantryErrorCode for ConversionError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Incompatible { .. } => error_code::UNIT_INCOMPATIBLE,
            Self::UnknownUnit { .. } => error_code::UNKNOWN_UNIT,
            Self::InvalidQuantity { .. } => error_code::INVALID_QUANTITY,
            Self::Overflow { .. } => error_code::QUANTITY_OVERFLOW,
        }
    }
}

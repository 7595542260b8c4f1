use super::error_code::{self, PantryErrorCode};
use super::{ConfigError, ConversionError, ParserError};

/// Top-level error type. Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum PantryError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("conversion error: {0}")]
    Conversion(#[from] ConversionError),

    #[error("parser error: {0}")]
    Parser(#[from] ParserError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl PantryErrorCode for PantryError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Conversion(e) => e.error_code(),
            Self::Parser(e) => e.error_code(),
            Self::Io(_) => error_code::IO_ERROR,
            Self::Serialization(_) => error_code::SERIALIZATION_ERROR,
        }
    }
}

/// Convenience alias used across the workspace.
pub type PantryResult<T> = Result<T, PantryError>;

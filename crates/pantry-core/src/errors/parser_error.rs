//! Errors raised by pluggable ingredient parsers.
//!
//! The local text parser never fails; these errors come from external
//! backends and always end in a fallback to the local parser.

use super::error_code::{self, PantryErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    #[error("parser backend unavailable: {backend}: {reason}")]
    BackendUnavailable { backend: String, reason: String },

    #[error("parser backend {backend} timed out after {timeout_secs}s")]
    Timeout { backend: String, timeout_secs: u64 },

    #[error("malformed parser response: {reason}")]
    MalformedResponse { reason: String },
}

impl PantryErrorCode for ParserError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::BackendUnavailable { .. } => error_code::PARSER_UNAVAILABLE,
            Self::Timeout { .. } => error_code::PARSER_TIMEOUT,
            Self::MalformedResponse { .. } => error_code::MALFORMED_RESPONSE,
        }
    }
}

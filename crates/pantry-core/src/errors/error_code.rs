//! PantryErrorCode trait for stable, machine-readable error codes.

/// Every error enum implements this to provide a structured error code
/// string for callers that render or log errors outside Rust.
pub trait PantryErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const UNIT_INCOMPATIBLE: &str = "UNIT_INCOMPATIBLE";
pub const UNKNOWN_UNIT: &str = "UNKNOWN_UNIT";
pub const INVALID_QUANTITY: &str = "INVALID_QUANTITY";
pub const QUANTITY_OVERFLOW: &str = "QUANTITY_OVERFLOW";
pub const PARSER_UNAVAILABLE: &str = "PARSER_UNAVAILABLE";
pub const PARSER_TIMEOUT: &str = "PARSER_TIMEOUT";
pub const MALFORMED_RESPONSE: &str = "MALFORMED_RESPONSE";
pub const IO_ERROR: &str = "IO_ERROR";
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";

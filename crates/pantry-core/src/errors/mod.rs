//! Error handling for Pantry.
//! One error enum per subsystem, `thiserror` only.
//!
//! Review findings about individual ingredient lines (ambiguous parses,
//! incompatible units, unknown categories) are not errors; they travel as
//! `ReviewIssue` annotations on the aggregated entries.

pub mod config_error;
pub mod conversion_error;
pub mod error_code;
pub mod pantry_error;
pub mod parser_error;

pub use config_error::ConfigError;
pub use conversion_error::ConversionError;
pub use error_code::PantryErrorCode;
pub use pantry_error::{PantryError, PantryResult};
pub use parser_error::ParserError;

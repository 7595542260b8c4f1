/// Pantry engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Separator between the base ingredient and its preserved variants in a canonical key.
pub const KEY_SEPARATOR: char = ':';

/// Separator between preserved variants in a canonical key.
pub const VARIANT_SEPARATOR: &str = "-";

/// Project config filename looked up by `PantryConfig::load`.
pub const CONFIG_FILENAME: &str = "pantry.toml";

/// Environment variable read by `tracing::init_tracing`.
pub const LOG_ENV_VAR: &str = "PANTRY_LOG";

/// Component name used for parser degradation events.
pub const PARSER_COMPONENT: &str = "parser";

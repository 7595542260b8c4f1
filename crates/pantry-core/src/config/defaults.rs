// Single source of truth for all default values.

// --- Rounding (granularity in the display unit) ---
pub const DEFAULT_VOLUME_GRANULARITY: &str = "1/4";
pub const DEFAULT_WEIGHT_GRANULARITY: &str = "1/4";
pub const DEFAULT_COUNT_GRANULARITY: &str = "1";
pub const DEFAULT_UNSPECIFIED_GRANULARITY: &str = "1/4";
pub const DEFAULT_PER_UNIT_GRANULARITY: &[(&str, &str)] = &[("gram", "1"), ("milliliter", "1")];

// --- Parser backend ---
pub const DEFAULT_PARSER_MODEL: &str = "qwen2.5:0.5b";
pub const DEFAULT_PARSER_HOST: &str = "http://localhost:11434";
pub const DEFAULT_PARSER_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_PARSER_BATCH: bool = true;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";

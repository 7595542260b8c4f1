//! Configuration system for Pantry.
//! TOML-based, 3-layer resolution: env > project file > compiled defaults.
//! The resolved `PantryConfig` is passed explicitly to every engine.

pub mod aggregator_config;
pub mod category_config;
pub mod defaults;
pub mod normalizer_config;
pub mod observability_config;
pub mod pantry_config;
pub mod parser_config;
pub mod rounding_config;

pub use aggregator_config::{AggregatorConfig, DisplayUnitPolicy};
pub use category_config::CategoryConfig;
pub use normalizer_config::{ModifierRule, NormalizerConfig, Verdict};
pub use observability_config::ObservabilityConfig;
pub use pantry_config::{CliOverrides, PantryConfig};
pub use parser_config::{ParserBackend, ParserConfig};
pub use rounding_config::RoundingConfig;

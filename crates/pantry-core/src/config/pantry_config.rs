//! Top-level Pantry configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{
    AggregatorConfig, CategoryConfig, DisplayUnitPolicy, NormalizerConfig, ObservabilityConfig,
    ParserBackend, ParserConfig, RoundingConfig,
};
use crate::constants::CONFIG_FILENAME;
use crate::errors::ConfigError;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `CliOverrides`)
/// 2. Environment variables (`PANTRY_*`)
/// 3. Project config (`pantry.toml`, or an explicit path)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PantryConfig {
    pub rounding: RoundingConfig,
    pub normalizer: NormalizerConfig,
    pub aggregator: AggregatorConfig,
    pub categories: CategoryConfig,
    pub parser: ParserConfig,
    pub observability: ObservabilityConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub parser_backend: Option<ParserBackend>,
    pub display_unit: Option<DisplayUnitPolicy>,
    pub log_level: Option<String>,
}

impl PantryConfig {
    /// Load configuration from `pantry.toml` in `root` (if present), then
    /// environment, then CLI flags, and validate the result.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let project_config_path = root.join(CONFIG_FILENAME);
        let config = if project_config_path.exists() {
            Self::from_file(&project_config_path)?
        } else {
            Self::default()
        };
        Self::finish(config, cli_overrides)
    }

    /// Same as `load` but with an explicit config file, which must exist.
    pub fn load_file(path: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let config = Self::from_file(path)?;
        Self::finish(config, cli_overrides)
    }

    fn finish(mut config: Self, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        Self::apply_env_overrides(&mut config, |key| std::env::var(key).ok());
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Read and parse a TOML file. Missing keys take their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.rounding.validate()?;

        if self.parser.timeout_secs == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "parser.timeout_secs".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.parser.backend == ParserBackend::Ollama && self.parser.host.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "parser.host".to_string(),
                message: "required when backend is \"ollama\"".to_string(),
            });
        }
        if !LOG_LEVELS.contains(&self.observability.log_level.as_str()) {
            return Err(ConfigError::ValidationFailed {
                field: "observability.log_level".to_string(),
                message: format!("must be one of {}", LOG_LEVELS.join(", ")),
            });
        }
        for rule in &self.normalizer.modifier_rules {
            if rule.base.trim().is_empty() || rule.modifier.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "normalizer.modifier_rules".to_string(),
                    message: "base and modifier must be non-empty".to_string(),
                });
            }
        }
        for (base, variant) in &self.normalizer.default_variants {
            if base.trim().is_empty() || variant.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "normalizer.default_variants".to_string(),
                    message: "base and variant must be non-empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Apply environment variable overrides through `lookup`.
    /// Pattern: `PANTRY_PARSER_BACKEND`, `PANTRY_AGGREGATOR_DISPLAY_UNIT`, etc.
    /// Unparseable values are ignored.
    pub fn apply_env_overrides<F>(config: &mut PantryConfig, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("PANTRY_PARSER_BACKEND") {
            match val.to_ascii_lowercase().as_str() {
                "local" => config.parser.backend = ParserBackend::Local,
                "ollama" => config.parser.backend = ParserBackend::Ollama,
                _ => {}
            }
        }
        if let Some(val) = lookup("PANTRY_PARSER_MODEL") {
            config.parser.model = val;
        }
        if let Some(val) = lookup("PANTRY_PARSER_HOST") {
            config.parser.host = val;
        }
        if let Some(val) = lookup("PANTRY_PARSER_TIMEOUT_SECS") {
            if let Ok(v) = val.parse::<u64>() {
                config.parser.timeout_secs = v;
            }
        }
        if let Some(val) = lookup("PANTRY_PARSER_BATCH") {
            if let Ok(v) = val.parse::<bool>() {
                config.parser.batch = v;
            }
        }
        if let Some(val) = lookup("PANTRY_AGGREGATOR_DISPLAY_UNIT") {
            match val.to_ascii_lowercase().as_str() {
                "most_common" => config.aggregator.display_unit = DisplayUnitPolicy::MostCommon,
                "first_seen" => config.aggregator.display_unit = DisplayUnitPolicy::FirstSeen,
                _ => {}
            }
        }
        if let Some(val) = lookup("PANTRY_LOG_LEVEL") {
            config.observability.log_level = val.to_ascii_lowercase();
        }
    }

    /// Apply CLI overrides (highest priority).
    pub fn apply_cli_overrides(config: &mut PantryConfig, cli: &CliOverrides) {
        if let Some(backend) = cli.parser_backend {
            config.parser.backend = backend;
        }
        if let Some(policy) = cli.display_unit {
            config.aggregator.display_unit = policy;
        }
        if let Some(ref level) = cli.log_level {
            config.observability.log_level = level.clone();
        }
    }

    /// Serialize the config to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialize>".to_string(),
            message: e.to_string(),
        })
    }
}

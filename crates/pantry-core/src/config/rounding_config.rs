use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;
use crate::models::UnitKind;
use crate::quantity::Quantity;

/// Round-up granularity, expressed in the display unit of each total.
///
/// Values are fraction strings (`"1/4"`, `"1"`, `"0.5"`). A per-unit entry,
/// keyed by canonical unit name, wins over the per-kind value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundingConfig {
    pub volume: String,
    pub weight: String,
    pub count: String,
    pub unspecified: String,
    pub per_unit: BTreeMap<String, String>,
}

impl Default for RoundingConfig {
    fn default() -> Self {
        Self {
            volume: defaults::DEFAULT_VOLUME_GRANULARITY.to_string(),
            weight: defaults::DEFAULT_WEIGHT_GRANULARITY.to_string(),
            count: defaults::DEFAULT_COUNT_GRANULARITY.to_string(),
            unspecified: defaults::DEFAULT_UNSPECIFIED_GRANULARITY.to_string(),
            per_unit: defaults::DEFAULT_PER_UNIT_GRANULARITY
                .iter()
                .map(|(u, g)| (u.to_string(), g.to_string()))
                .collect(),
        }
    }
}

impl RoundingConfig {
    /// Raw granularity string for a kind.
    pub fn for_kind(&self, kind: UnitKind) -> &str {
        match kind {
            UnitKind::Volume => &self.volume,
            UnitKind::Weight => &self.weight,
            UnitKind::Count => &self.count,
            UnitKind::Unspecified => &self.unspecified,
        }
    }

    /// Parse one granularity value, rejecting zero and malformed input.
    pub fn parse_granularity(field: &str, raw: &str) -> Result<Quantity, ConfigError> {
        let value: Quantity = raw.parse().map_err(|_| ConfigError::ValidationFailed {
            field: field.to_string(),
            message: format!("{raw:?} is not a fraction or decimal"),
        })?;
        if value.is_zero() {
            return Err(ConfigError::ValidationFailed {
                field: field.to_string(),
                message: "granularity must be greater than 0".to_string(),
            });
        }
        Ok(value)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for kind in UnitKind::ALL {
            Self::parse_granularity(&format!("rounding.{kind}"), self.for_kind(kind))?;
        }
        for (unit, raw) in &self.per_unit {
            Self::parse_granularity(&format!("rounding.per_unit.{unit}"), raw)?;
        }
        Ok(())
    }
}

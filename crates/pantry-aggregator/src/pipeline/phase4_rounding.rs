//! Phase 4: one round-up per final total, never down.

use std::collections::HashMap;

use pantry_core::config::RoundingConfig;
use pantry_core::errors::ConfigError;
use pantry_core::{Quantity, UnitKind};

use tracing::warn;

use super::phase3_summing::SummedGroup;

/// Parsed round-up granularities.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundingPolicy {
    per_kind: HashMap<UnitKind, Quantity>,
    per_unit: HashMap<String, Quantity>,
}

impl RoundingPolicy {
    pub fn from_config(config: &RoundingConfig) -> Result<Self, ConfigError> {
        let mut per_kind = HashMap::new();
        for kind in UnitKind::ALL {
            let step = RoundingConfig::parse_granularity(
                &format!("rounding.{kind}"),
                config.for_kind(kind),
            )?;
            per_kind.insert(kind, step);
        }
        let mut per_unit = HashMap::new();
        for (unit, raw) in &config.per_unit {
            let step = RoundingConfig::parse_granularity(&format!("rounding.per_unit.{unit}"), raw)?;
            per_unit.insert(unit.trim().to_lowercase(), step);
        }
        Ok(Self { per_kind, per_unit })
    }

    /// Granularity for a total in `unit` of `kind`. A per-unit entry wins.
    pub fn step_for(&self, unit: Option<&str>, kind: UnitKind) -> Quantity {
        unit.and_then(|u| self.per_unit.get(u))
            .or_else(|| self.per_kind.get(&kind))
            .cloned()
            .unwrap_or_else(|| Quantity::whole(1))
    }

    /// `None` when the rounded total does not fit.
    pub fn round_up(&self, exact: &Quantity, unit: Option<&str>, kind: UnitKind) -> Option<Quantity> {
        exact.ceil_to(&self.step_for(unit, kind))
    }
}

/// Round every tally up. A tally too large to round keeps its exact value
/// and its members are flagged.
pub fn round_group(mut summed: SummedGroup, policy: &RoundingPolicy) -> SummedGroup {
    for tally in &mut summed.tallies {
        match policy.round_up(&tally.exact, tally.unit.as_deref(), tally.kind) {
            Some(rounded) => tally.rounded = rounded,
            None => {
                warn!(unit = ?tally.unit, "Total too large to round up");
                tally.rounded = tally.exact.clone();
                summed.overflowed.extend(tally.members.iter().copied());
            }
        }
    }
    summed.overflowed.sort_unstable();
    summed.overflowed.dedup();
    summed
}

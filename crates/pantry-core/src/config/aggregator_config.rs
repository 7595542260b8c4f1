use serde::{Deserialize, Serialize};

/// How the display unit of a group is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayUnitPolicy {
    /// The unit of the first member line. Adding recipes only ever adds to
    /// the primary total.
    #[default]
    FirstSeen,
    /// The unit used by the most member lines; ties go to the first seen.
    /// A later recipe can change the display unit, so totals are not
    /// guaranteed to grow monotonically.
    MostCommon,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregatorConfig {
    pub display_unit: DisplayUnitPolicy,
}

use std::fmt;

use serde::{Deserialize, Serialize};

/// Measurement kind of a unit. Conversion is only defined within one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitKind {
    Volume,
    Weight,
    Count,
    Unspecified,
}

impl UnitKind {
    pub const ALL: [UnitKind; 4] = [
        UnitKind::Volume,
        UnitKind::Weight,
        UnitKind::Count,
        UnitKind::Unspecified,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Volume => "volume",
            Self::Weight => "weight",
            Self::Count => "count",
            Self::Unspecified => "unspecified",
        }
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

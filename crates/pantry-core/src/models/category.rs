use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Shopping category. Declaration order is the order sections appear in a list.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Produce,
    Meat,
    Seafood,
    Dairy,
    Bakery,
    Pantry,
    Spices,
    #[default]
    Other,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Produce,
        Category::Meat,
        Category::Seafood,
        Category::Dairy,
        Category::Bakery,
        Category::Pantry,
        Category::Spices,
        Category::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Produce => "produce",
            Self::Meat => "meat",
            Self::Seafood => "seafood",
            Self::Dairy => "dairy",
            Self::Bakery => "bakery",
            Self::Pantry => "pantry",
            Self::Spices => "spices",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| ConfigError::ValidationFailed {
                field: "category".to_string(),
                message: format!("unknown category {s:?}"),
            })
    }
}

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::Category;

/// Category overrides keyed by base ingredient name; consulted before the built-in table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryConfig {
    pub overrides: BTreeMap<String, Category>,
}

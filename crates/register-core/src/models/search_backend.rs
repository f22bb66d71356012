//! Search backend selection.

use serde::{Deserialize, Serialize};

use crate::defaults;

/// The active search backend plus the fixed set it was chosen from.
///
/// `updated` is a unix timestamp stamped on every successful write; records
/// that have never been written through the selector carry `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchBackendConfig {
    pub active: String,
    pub available: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<i64>,
}

impl Default for SearchBackendConfig {
    fn default() -> Self {
        Self {
            active: defaults::SEARCH_BACKEND_ACTIVE.to_string(),
            available: defaults::SEARCH_BACKENDS_AVAILABLE
                .iter()
                .map(|s| s.to_string())
                .collect(),
            updated: None,
        }
    }
}

impl SearchBackendConfig {
    /// Whether a backend name is a member of the fixed available set.
    pub fn is_selectable(backend: &str) -> bool {
        defaults::SEARCH_BACKENDS_AVAILABLE.contains(&backend)
    }
}

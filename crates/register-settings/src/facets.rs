//! Facet display settings.
//!
//! Reads and writes both pass the stored document through the normalizer,
//! so malformed records left by older releases are repaired on the next
//! read rather than erroring.

use serde_json::Value;
use tracing::info;

use register_core::models::FacetConfig;
use register_core::Result;

use crate::service::SettingsService;
use crate::store::{self, keys};

const DOMAIN: &str = "facet";

impl SettingsService {
    /// Current facet configuration, normalized.
    pub async fn get_facets(&self) -> Result<FacetConfig> {
        let raw = store::read_raw(self.store.as_ref(), keys::FACETS, DOMAIN).await?;
        Ok(match raw {
            Some(value) => FacetConfig::from_value(&value),
            None => FacetConfig::default(),
        })
    }

    /// Replace the facet configuration with the normalized form of an
    /// arbitrary JSON document.
    pub async fn update_facets(&self, input: &Value) -> Result<FacetConfig> {
        let config = FacetConfig::from_value(input);
        store::write_config(self.store.as_ref(), keys::FACETS, DOMAIN, &config).await?;
        info!(
            subsystem = "settings",
            component = "facets",
            op = "update",
            domain = DOMAIN,
            facet_count = config.facets.len(),
            "Updated facet settings"
        );
        Ok(config)
    }
}

//! SOLR connection settings.

use tracing::info;

use register_core::models::{SolrConfig, SolrUpdate};
use register_core::Result;

use crate::service::SettingsService;
use crate::store::{self, keys};

const DOMAIN: &str = "SOLR";

impl SettingsService {
    /// Current SOLR connection configuration.
    pub async fn get_solr(&self) -> Result<SolrConfig> {
        store::read_or_defaults(self.store.as_ref(), keys::SOLR, DOMAIN).await
    }

    /// Replace the SOLR configuration. Numeric fields accept stringly input
    /// from the admin UI and are stored as numbers.
    pub async fn update_solr(&self, update: SolrUpdate) -> Result<SolrConfig> {
        let config = update.into_config();
        store::write_config(self.store.as_ref(), keys::SOLR, DOMAIN, &config).await?;
        info!(
            subsystem = "settings",
            component = "solr",
            op = "update",
            domain = DOMAIN,
            enabled = config.enabled,
            host = %config.host,
            port = config.port,
            "Updated SOLR settings"
        );
        Ok(config)
    }
}

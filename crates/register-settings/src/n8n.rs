//! n8n workflow-automation settings.

use tracing::info;

use register_core::models::{N8nConfig, N8nUpdate};
use register_core::Result;

use crate::service::SettingsService;
use crate::store::{self, keys};

const DOMAIN: &str = "n8n";

impl SettingsService {
    /// Current n8n integration configuration.
    pub async fn get_n8n(&self) -> Result<N8nConfig> {
        store::read_or_defaults(self.store.as_ref(), keys::N8N, DOMAIN).await
    }

    /// Replace the n8n configuration.
    pub async fn update_n8n(&self, update: N8nUpdate) -> Result<N8nConfig> {
        let config = update.into_config();
        store::write_config(self.store.as_ref(), keys::N8N, DOMAIN, &config).await?;
        info!(
            subsystem = "settings",
            component = "n8n",
            op = "update",
            domain = DOMAIN,
            enabled = config.enabled,
            sync_enabled = config.sync_enabled,
            "Updated n8n settings"
        );
        Ok(config)
    }
}

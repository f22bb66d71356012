//! Data retention settings.

use tracing::info;

use register_core::models::{RetentionConfig, RetentionUpdate};
use register_core::Result;

use crate::service::SettingsService;
use crate::store::{self, keys};

const DOMAIN: &str = "retention";

impl SettingsService {
    /// Current retention windows and cleanup flags.
    pub async fn get_retention(&self) -> Result<RetentionConfig> {
        store::read_or_defaults(self.store.as_ref(), keys::RETENTION, DOMAIN).await
    }

    /// Replace the retention configuration.
    pub async fn update_retention(&self, update: RetentionUpdate) -> Result<RetentionConfig> {
        let config = update.into_config();
        store::write_config(self.store.as_ref(), keys::RETENTION, DOMAIN, &config).await?;
        info!(
            subsystem = "settings",
            component = "retention",
            op = "update",
            domain = DOMAIN,
            cleanup_enabled = config.cleanup_enabled,
            "Updated retention settings"
        );
        Ok(config)
    }
}

//! File text-extraction settings.

use tracing::info;

use register_core::models::{FilesConfig, FilesUpdate};
use register_core::Result;

use crate::service::SettingsService;
use crate::store::{self, keys};

const DOMAIN: &str = "file";

impl SettingsService {
    /// Current file extraction configuration.
    pub async fn get_files(&self) -> Result<FilesConfig> {
        store::read_or_defaults(self.store.as_ref(), keys::FILES, DOMAIN).await
    }

    /// Replace the file extraction configuration.
    pub async fn update_files(&self, update: FilesUpdate) -> Result<FilesConfig> {
        let config = update.into_config();
        store::write_config(self.store.as_ref(), keys::FILES, DOMAIN, &config).await?;
        info!(
            subsystem = "settings",
            component = "files",
            op = "update",
            domain = DOMAIN,
            extraction_enabled = config.extraction_enabled,
            file_types = config.enabled_file_types.len(),
            "Updated file settings"
        );
        Ok(config)
    }
}

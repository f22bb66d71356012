//! Object vectorization settings.

use tracing::info;

use register_core::models::{ObjectsConfig, ObjectsUpdate};
use register_core::Result;

use crate::service::SettingsService;
use crate::store::{self, keys};

const DOMAIN: &str = "object";

impl SettingsService {
    /// Current object vectorization configuration.
    pub async fn get_objects(&self) -> Result<ObjectsConfig> {
        store::read_or_defaults(self.store.as_ref(), keys::OBJECTS, DOMAIN).await
    }

    /// Replace the object vectorization configuration.
    pub async fn update_objects(&self, update: ObjectsUpdate) -> Result<ObjectsConfig> {
        let config = update.into_config();
        store::write_config(self.store.as_ref(), keys::OBJECTS, DOMAIN, &config).await?;
        info!(
            subsystem = "settings",
            component = "objects",
            op = "update",
            domain = DOMAIN,
            auto_vectorize = config.auto_vectorize,
            batch_size = config.batch_size,
            "Updated object settings"
        );
        Ok(config)
    }
}

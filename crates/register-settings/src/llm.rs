//! LLM provider settings.
//!
//! Unlike the other settings domains, LLM updates are merges: fields absent
//! from an update keep their stored value instead of reverting to defaults.
//! Provider credentials arrive one screen at a time from the admin UI, so a
//! replace-style write here would wipe the keys of every provider not on
//! the submitted screen.

use tracing::info;

use register_core::models::{LlmConfig, LlmUpdate};
use register_core::Result;

use crate::service::SettingsService;
use crate::store::{self, keys};

const DOMAIN: &str = "LLM";

impl SettingsService {
    /// Current LLM configuration. Records written by older releases gain
    /// newly added fields on read.
    pub async fn get_llm(&self) -> Result<LlmConfig> {
        store::read_or_defaults(self.store.as_ref(), keys::LLM, DOMAIN).await
    }

    /// Merge an update into the stored LLM configuration.
    pub async fn update_llm(&self, update: LlmUpdate) -> Result<LlmConfig> {
        let existing = self.get_llm().await?;
        let config = update.merge_into(existing);
        store::write_config(self.store.as_ref(), keys::LLM, DOMAIN, &config).await?;
        info!(
            subsystem = "settings",
            component = "llm",
            op = "update",
            domain = DOMAIN,
            enabled = config.enabled,
            chat_provider = %config.chat_provider,
            embedding_provider = %config.embedding_provider,
            "Updated LLM settings"
        );
        Ok(config)
    }
}

//! n8n workflow-automation integration settings.

use serde::{Deserialize, Serialize};

use crate::coerce::LooseInt;
use crate::defaults;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct N8nConfig {
    pub enabled: bool,
    pub base_url: String,
    pub api_key: String,
    pub webhook_secret: String,
    pub timeout: i64,
    pub sync_enabled: bool,
    pub workflow_tag: String,
}

impl Default for N8nConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::N8N_ENABLED,
            base_url: defaults::N8N_BASE_URL.to_string(),
            api_key: defaults::N8N_API_KEY.to_string(),
            webhook_secret: defaults::N8N_WEBHOOK_SECRET.to_string(),
            timeout: defaults::N8N_TIMEOUT_SECS,
            sync_enabled: defaults::N8N_SYNC_ENABLED,
            workflow_tag: defaults::N8N_WORKFLOW_TAG.to_string(),
        }
    }
}

/// Partial n8n update; unset fields revert to hard defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct N8nUpdate {
    pub enabled: Option<bool>,
    pub base_url: Option<String>,
    pub api_key: Option<String>,
    pub webhook_secret: Option<String>,
    pub timeout: Option<LooseInt>,
    pub sync_enabled: Option<bool>,
    pub workflow_tag: Option<String>,
}

impl N8nUpdate {
    pub fn into_config(self) -> N8nConfig {
        let d = N8nConfig::default();
        N8nConfig {
            enabled: self.enabled.unwrap_or(d.enabled),
            base_url: self.base_url.unwrap_or(d.base_url),
            api_key: self.api_key.unwrap_or(d.api_key),
            webhook_secret: self.webhook_secret.unwrap_or(d.webhook_secret),
            timeout: self.timeout.map(LooseInt::into_inner).unwrap_or(d.timeout),
            sync_enabled: self.sync_enabled.unwrap_or(d.sync_enabled),
            workflow_tag: self.workflow_tag.unwrap_or(d.workflow_tag),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_by_default() {
        let config = N8nConfig::default();
        assert!(!config.enabled);
        assert_eq!(config.base_url, "http://localhost:5678");
    }

    #[test]
    fn update_keeps_only_submitted_fields() {
        let update: N8nUpdate = serde_json::from_str(
            r#"{"enabled": true, "apiKey": "k-123", "timeout": "45"}"#,
        )
        .unwrap();
        let config = update.into_config();
        assert!(config.enabled);
        assert_eq!(config.api_key, "k-123");
        assert_eq!(config.timeout, 45);
        assert_eq!(config.workflow_tag, "openregister");
    }
}

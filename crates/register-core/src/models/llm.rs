//! LLM provider settings.
//!
//! This is the one PATCH domain: updates merge field-by-field against the
//! existing stored record, so rotating an API key never wipes the sibling
//! `model` field. Every other domain resolves unset fields straight to the
//! hard defaults.
//!
//! Read-path compatibility: records written before the `enabled` and
//! `vectorConfig` fields existed decode with those injected (container
//! defaults), and the long-deprecated `solrCollection` key is dropped by
//! the typed decode on every read.

use serde::{Deserialize, Serialize};

use crate::defaults;

/// OpenAI-compatible provider settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OpenAiProviderConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub embedding_model: String,
}

impl Default for OpenAiProviderConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: defaults::OPENAI_BASE_URL.to_string(),
            model: defaults::OPENAI_MODEL.to_string(),
            embedding_model: defaults::OPENAI_EMBEDDING_MODEL.to_string(),
        }
    }
}

/// Ollama provider settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OllamaProviderConfig {
    pub base_url: String,
    pub model: String,
    pub embedding_model: String,
}

impl Default for OllamaProviderConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::OLLAMA_BASE_URL.to_string(),
            model: defaults::OLLAMA_MODEL.to_string(),
            embedding_model: defaults::OLLAMA_EMBEDDING_MODEL.to_string(),
        }
    }
}

/// Fireworks provider settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FireworksProviderConfig {
    pub api_key: String,
    pub model: String,
    pub embedding_model: String,
}

impl Default for FireworksProviderConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: defaults::FIREWORKS_MODEL.to_string(),
            embedding_model: defaults::FIREWORKS_EMBEDDING_MODEL.to_string(),
        }
    }
}

/// Where computed vectors live and how they are produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VectorConfig {
    pub backend: String,
    pub solr_field: String,
}

impl Default for VectorConfig {
    fn default() -> Self {
        Self {
            backend: defaults::VECTOR_BACKEND.to_string(),
            solr_field: defaults::VECTOR_SOLR_FIELD.to_string(),
        }
    }
}

/// LLM settings domain: top-level provider selection plus nested
/// per-provider configs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LlmConfig {
    pub enabled: bool,
    pub embedding_provider: String,
    pub chat_provider: String,
    pub openai_config: OpenAiProviderConfig,
    pub ollama_config: OllamaProviderConfig,
    pub fireworks_config: FireworksProviderConfig,
    pub vector_config: VectorConfig,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::LLM_ENABLED,
            embedding_provider: defaults::LLM_EMBEDDING_PROVIDER.to_string(),
            chat_provider: defaults::LLM_CHAT_PROVIDER.to_string(),
            openai_config: OpenAiProviderConfig::default(),
            ollama_config: OllamaProviderConfig::default(),
            fireworks_config: FireworksProviderConfig::default(),
            vector_config: VectorConfig::default(),
        }
    }
}

/// Partial update for one OpenAI-compatible provider.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenAiProviderUpdate {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: Option<String>,
    pub embedding_model: Option<String>,
}

impl OpenAiProviderUpdate {
    fn merge_into(self, existing: OpenAiProviderConfig) -> OpenAiProviderConfig {
        OpenAiProviderConfig {
            api_key: self.api_key.unwrap_or(existing.api_key),
            base_url: self.base_url.unwrap_or(existing.base_url),
            model: self.model.unwrap_or(existing.model),
            embedding_model: self.embedding_model.unwrap_or(existing.embedding_model),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OllamaProviderUpdate {
    pub base_url: Option<String>,
    pub model: Option<String>,
    pub embedding_model: Option<String>,
}

impl OllamaProviderUpdate {
    fn merge_into(self, existing: OllamaProviderConfig) -> OllamaProviderConfig {
        OllamaProviderConfig {
            base_url: self.base_url.unwrap_or(existing.base_url),
            model: self.model.unwrap_or(existing.model),
            embedding_model: self.embedding_model.unwrap_or(existing.embedding_model),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FireworksProviderUpdate {
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub embedding_model: Option<String>,
}

impl FireworksProviderUpdate {
    fn merge_into(self, existing: FireworksProviderConfig) -> FireworksProviderConfig {
        FireworksProviderConfig {
            api_key: self.api_key.unwrap_or(existing.api_key),
            model: self.model.unwrap_or(existing.model),
            embedding_model: self.embedding_model.unwrap_or(existing.embedding_model),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VectorUpdate {
    pub backend: Option<String>,
    pub solr_field: Option<String>,
}

impl VectorUpdate {
    fn merge_into(self, existing: VectorConfig) -> VectorConfig {
        VectorConfig {
            backend: self.backend.unwrap_or(existing.backend),
            solr_field: self.solr_field.unwrap_or(existing.solr_field),
        }
    }
}

/// Partial LLM update, merged against the existing stored config.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LlmUpdate {
    pub enabled: Option<bool>,
    pub embedding_provider: Option<String>,
    pub chat_provider: Option<String>,
    pub openai_config: Option<OpenAiProviderUpdate>,
    pub ollama_config: Option<OllamaProviderUpdate>,
    pub fireworks_config: Option<FireworksProviderUpdate>,
    pub vector_config: Option<VectorUpdate>,
}

impl LlmUpdate {
    /// Three-level fallback chain: `input ?? existing ?? default`.
    ///
    /// `existing` is the result of a read, so it is already backfilled with
    /// the hard defaults; a plain `input ?? existing` here completes the
    /// chain. Nested provider objects merge field-by-field, never replace
    /// wholesale.
    pub fn merge_into(self, existing: LlmConfig) -> LlmConfig {
        LlmConfig {
            enabled: self.enabled.unwrap_or(existing.enabled),
            embedding_provider: self.embedding_provider.unwrap_or(existing.embedding_provider),
            chat_provider: self.chat_provider.unwrap_or(existing.chat_provider),
            openai_config: match self.openai_config {
                Some(update) => update.merge_into(existing.openai_config),
                None => existing.openai_config,
            },
            ollama_config: match self.ollama_config {
                Some(update) => update.merge_into(existing.ollama_config),
                None => existing.ollama_config,
            },
            fireworks_config: match self.fireworks_config {
                Some(update) => update.merge_into(existing.fireworks_config),
                None => existing.fireworks_config,
            },
            vector_config: match self.vector_config {
                Some(update) => update.merge_into(existing.vector_config),
                None => existing.vector_config,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_record_gains_enabled_and_vector_config() {
        // Record written before `enabled` and `vectorConfig` existed.
        let raw = r#"{
            "embeddingProvider": "ollama",
            "chatProvider": "ollama",
            "solrCollection": "legacy"
        }"#;
        let config: LlmConfig = serde_json::from_str(raw).unwrap();
        assert!(!config.enabled);
        assert_eq!(config.vector_config.backend, "php");
        assert_eq!(config.vector_config.solr_field, "_embedding_");
        // deprecated key never survives a read
        let json = serde_json::to_value(&config).unwrap();
        assert!(json.get("solrCollection").is_none());
    }

    #[test]
    fn partial_vector_config_backfills_sub_fields() {
        let raw = r#"{"vectorConfig": {"backend": "native"}}"#;
        let config: LlmConfig = serde_json::from_str(raw).unwrap();
        assert_eq!(config.vector_config.backend, "native");
        assert_eq!(config.vector_config.solr_field, "_embedding_");
    }

    #[test]
    fn nested_merge_preserves_sibling_fields() {
        let mut existing = LlmConfig::default();
        existing.openai_config.model = "gpt-4.1".to_string();
        existing.openai_config.api_key = "old-key".to_string();

        let update: LlmUpdate =
            serde_json::from_str(r#"{"openaiConfig": {"apiKey": "new-key"}}"#).unwrap();
        let merged = update.merge_into(existing);

        assert_eq!(merged.openai_config.api_key, "new-key");
        assert_eq!(merged.openai_config.model, "gpt-4.1");
        assert_eq!(merged.chat_provider, "openai");
    }

    #[test]
    fn top_level_scalars_fall_through_existing_then_default() {
        let existing = LlmConfig {
            enabled: true,
            ..LlmConfig::default()
        };
        let merged = LlmUpdate::default().merge_into(existing);
        assert!(merged.enabled);
        assert_eq!(merged.embedding_provider, "openai");
    }

    #[test]
    fn wire_names_are_camel_case() {
        let json = serde_json::to_value(LlmConfig::default()).unwrap();
        assert!(json.get("openaiConfig").is_some());
        assert!(json.get("fireworksConfig").is_some());
        assert!(json["vectorConfig"].get("solrField").is_some());
    }
}

//! Shared read/write plumbing over the configuration store.
//!
//! Every settings domain persists as one JSON document under one key.
//! Reads treat an absent or empty record as "never configured" and fall
//! back to the domain's `Default`; decoding relies on each config type's
//! container-level defaults, so records written by older releases gain
//! newly added fields on read without a migration.

use serde::de::DeserializeOwned;
use serde::Serialize;

use register_core::{ConfigStore, Error, Result};

/// Store keys, one per settings domain.
pub mod keys {
    pub const RBAC: &str = "rbac";
    pub const MULTITENANCY: &str = "multitenancy";
    pub const RETENTION: &str = "retention";
    pub const SOLR: &str = "solr";
    pub const LLM: &str = "llm";
    pub const FILES: &str = "files";
    pub const N8N: &str = "n8n";
    pub const OBJECTS: &str = "objects";
    pub const SEARCH_BACKEND: &str = "search_backend";
    pub const FACETS: &str = "facets";
}

/// Read a domain's configuration, falling back to defaults when the key
/// was never written.
pub(crate) async fn read_or_defaults<T>(
    store: &dyn ConfigStore,
    key: &str,
    domain: &str,
) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    let raw = store
        .get(key)
        .await
        .map_err(|e| Error::retrieval(domain, e))?;

    match raw.as_deref() {
        None | Some("") => Ok(T::default()),
        Some(json) => serde_json::from_str(json).map_err(|e| Error::retrieval(domain, e)),
    }
}

/// Read a domain's raw stored JSON value, if any.
pub(crate) async fn read_raw(
    store: &dyn ConfigStore,
    key: &str,
    domain: &str,
) -> Result<Option<serde_json::Value>> {
    let raw = store
        .get(key)
        .await
        .map_err(|e| Error::retrieval(domain, e))?;

    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some(json) => serde_json::from_str(json)
            .map(Some)
            .map_err(|e| Error::retrieval(domain, e)),
    }
}

/// Serialize and persist a domain's configuration.
pub(crate) async fn write_config<T>(
    store: &dyn ConfigStore,
    key: &str,
    domain: &str,
    config: &T,
) -> Result<()>
where
    T: Serialize,
{
    let json = serde_json::to_string(config).map_err(|e| Error::update(domain, e))?;
    store
        .set(key, &json)
        .await
        .map_err(|e| Error::update(domain, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use register_core::models::RbacConfig;
    use register_db::MemoryConfigStore;

    #[tokio::test]
    async fn absent_key_yields_defaults() {
        let store = MemoryConfigStore::new();
        let config: RbacConfig = read_or_defaults(&store, keys::RBAC, "RBAC").await.unwrap();
        assert_eq!(config, RbacConfig::default());
    }

    #[tokio::test]
    async fn empty_record_yields_defaults() {
        let store = MemoryConfigStore::new();
        store.seed(keys::RBAC, "").await;
        let config: RbacConfig = read_or_defaults(&store, keys::RBAC, "RBAC").await.unwrap();
        assert_eq!(config, RbacConfig::default());
    }

    #[tokio::test]
    async fn corrupt_record_reports_retrieval_error() {
        let store = MemoryConfigStore::new();
        store.seed(keys::RBAC, "{not json").await;
        let err = read_or_defaults::<RbacConfig>(&store, keys::RBAC, "RBAC")
            .await
            .unwrap_err();
        assert!(err.to_string().starts_with("Failed to retrieve RBAC"));
    }

    #[tokio::test]
    async fn write_then_read_round_trips() {
        let store = MemoryConfigStore::new();
        let mut config = RbacConfig::default();
        config.enabled = true;
        write_config(&store, keys::RBAC, "RBAC", &config)
            .await
            .unwrap();
        let read: RbacConfig = read_or_defaults(&store, keys::RBAC, "RBAC").await.unwrap();
        assert_eq!(read, config);
    }
}

//! In-memory configuration store for tests and local development.

use std::collections::HashMap;

use tokio::sync::RwLock;

use register_core::{ConfigStore, Result};

/// HashMap-backed [`ConfigStore`] with the same last-write-wins semantics
/// as the PostgreSQL store.
#[derive(Default)]
pub struct MemoryConfigStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value, bypassing the settings layer. Useful for staging
    /// legacy records in tests.
    pub async fn seed(&self, key: &str, value: &str) {
        self.values
            .write()
            .await
            .insert(key.to_string(), value.to_string());
    }

    /// Number of keys currently stored.
    pub async fn len(&self) -> usize {
        self.values.read().await.len()
    }

    /// Whether the store holds no keys.
    pub async fn is_empty(&self) -> bool {
        self.values.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl ConfigStore for MemoryConfigStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn get_returns_none_for_unwritten_key() {
        let store = MemoryConfigStore::new();
        assert_eq!(store.get("rbac").await.unwrap(), None);
    }

    #[tokio::test]
    async fn set_then_get_round_trips() {
        let store = MemoryConfigStore::new();
        store.set("solr", r#"{"enabled":true}"#).await.unwrap();
        assert_eq!(
            store.get("solr").await.unwrap().as_deref(),
            Some(r#"{"enabled":true}"#)
        );
    }

    #[tokio::test]
    async fn last_write_wins() {
        let store = MemoryConfigStore::new();
        store.set("llm", "first").await.unwrap();
        store.set("llm", "second").await.unwrap();
        assert_eq!(store.get("llm").await.unwrap().as_deref(), Some("second"));
        assert_eq!(store.len().await, 1);
    }
}

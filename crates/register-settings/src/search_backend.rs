//! Search backend selection.

use chrono::Utc;
use tracing::info;

use register_core::models::SearchBackendConfig;
use register_core::{Error, Result};

use crate::service::SettingsService;
use crate::store::{self, keys};

const DOMAIN: &str = "search backend";

impl SettingsService {
    /// The active search backend plus the available set.
    pub async fn get_search_backend(&self) -> Result<SearchBackendConfig> {
        store::read_or_defaults(self.store.as_ref(), keys::SEARCH_BACKEND, DOMAIN).await
    }

    /// Select the active search backend.
    ///
    /// The requested backend is validated against the fixed available set
    /// before anything is written; an invalid name leaves the stored
    /// selection untouched.
    pub async fn set_search_backend(&self, backend: &str) -> Result<SearchBackendConfig> {
        if !SearchBackendConfig::is_selectable(backend) {
            return Err(Error::InvalidBackend(backend.to_string()));
        }

        let mut config = SearchBackendConfig::default();
        config.active = backend.to_string();
        config.updated = Some(Utc::now().timestamp());
        store::write_config(self.store.as_ref(), keys::SEARCH_BACKEND, DOMAIN, &config).await?;
        info!(
            subsystem = "settings",
            component = "search_backend",
            op = "update",
            backend = backend,
            "Selected search backend"
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use register_db::MemoryConfigStore;

    use super::*;

    fn service() -> SettingsService {
        SettingsService::new(Arc::new(MemoryConfigStore::new()))
    }

    #[tokio::test]
    async fn defaults_to_solr() {
        let config = service().get_search_backend().await.unwrap();
        assert_eq!(config.active, "solr");
        assert!(config.updated.is_none());
    }

    #[tokio::test]
    async fn valid_selection_is_stamped_and_persisted() {
        let svc = service();
        let config = svc.set_search_backend("elasticsearch").await.unwrap();
        assert_eq!(config.active, "elasticsearch");
        assert!(config.updated.is_some());

        let read = svc.get_search_backend().await.unwrap();
        assert_eq!(read.active, "elasticsearch");
    }

    #[tokio::test]
    async fn invalid_selection_is_rejected_without_writing() {
        let svc = service();
        svc.set_search_backend("elasticsearch").await.unwrap();

        let err = svc.set_search_backend("lucene").await.unwrap_err();
        assert!(matches!(err, Error::InvalidBackend(_)));

        let read = svc.get_search_backend().await.unwrap();
        assert_eq!(read.active, "elasticsearch");
    }
}

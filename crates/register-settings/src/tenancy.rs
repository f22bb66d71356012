//! Multi-tenancy settings and organisation listings.

use tracing::{info, warn};

use register_core::models::{TenancyConfig, TenancyUpdate};
use register_core::{Organisation, Result};

use crate::service::SettingsService;
use crate::store::{self, keys};

const DOMAIN: &str = "multitenancy";

impl SettingsService {
    /// Current multi-tenancy configuration.
    pub async fn get_tenancy(&self) -> Result<TenancyConfig> {
        store::read_or_defaults(self.store.as_ref(), keys::MULTITENANCY, DOMAIN).await
    }

    /// Replace the multi-tenancy configuration.
    pub async fn update_tenancy(&self, update: TenancyUpdate) -> Result<TenancyConfig> {
        let config = update.into_config();
        store::write_config(self.store.as_ref(), keys::MULTITENANCY, DOMAIN, &config).await?;
        info!(
            subsystem = "settings",
            component = "tenancy",
            op = "update",
            domain = DOMAIN,
            enabled = config.enabled,
            "Updated multi-tenancy settings"
        );
        Ok(config)
    }

    /// All organisations with member counts.
    ///
    /// Degrades to an empty list when no organisation directory is attached
    /// or the lookup fails; the settings screen renders without tenants
    /// rather than erroring.
    pub async fn list_organisations(&self) -> Vec<Organisation> {
        let Some(organisations) = self.organisations.as_ref() else {
            return Vec::new();
        };
        match organisations.list_with_user_counts().await {
            Ok(list) => list,
            Err(e) => {
                warn!(
                    subsystem = "settings",
                    component = "tenancy",
                    op = "list_organisations",
                    error = %e,
                    "Organisation lookup failed, returning empty list"
                );
                Vec::new()
            }
        }
    }

    /// The configured default user tenant, falling back to the first
    /// organisation when none is configured.
    pub async fn default_tenant_id(&self) -> Result<Option<String>> {
        let config = self.get_tenancy().await?;
        if !config.default_user_tenant.is_empty() {
            return Ok(Some(config.default_user_tenant));
        }
        Ok(self
            .list_organisations()
            .await
            .first()
            .map(|org| org.uuid.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use register_core::{Error, OrganisationDirectory};
    use register_db::MemoryConfigStore;
    use uuid::Uuid;

    use super::*;

    struct FixedOrganisations(Vec<Organisation>);

    #[async_trait]
    impl OrganisationDirectory for FixedOrganisations {
        async fn list_with_user_counts(&self) -> Result<Vec<Organisation>> {
            Ok(self.0.clone())
        }
    }

    struct BrokenOrganisations;

    #[async_trait]
    impl OrganisationDirectory for BrokenOrganisations {
        async fn list_with_user_counts(&self) -> Result<Vec<Organisation>> {
            Err(Error::CollaboratorUnavailable("organisations".to_string()))
        }
    }

    fn org(name: &str, users: i64) -> Organisation {
        Organisation {
            uuid: Uuid::new_v4(),
            name: name.to_string(),
            user_count: users,
        }
    }

    #[tokio::test]
    async fn enabled_by_default() {
        let svc = SettingsService::new(Arc::new(MemoryConfigStore::new()));
        assert!(svc.get_tenancy().await.unwrap().enabled);
    }

    #[tokio::test]
    async fn organisations_degrade_to_empty() {
        let svc = SettingsService::new(Arc::new(MemoryConfigStore::new()));
        assert!(svc.list_organisations().await.is_empty());

        let svc = svc.with_organisations(Arc::new(BrokenOrganisations));
        assert!(svc.list_organisations().await.is_empty());
    }

    #[tokio::test]
    async fn default_tenant_falls_back_to_first_organisation() {
        let orgs = vec![org("alpha", 3), org("beta", 1)];
        let expected = orgs[0].uuid.to_string();
        let svc = SettingsService::new(Arc::new(MemoryConfigStore::new()))
            .with_organisations(Arc::new(FixedOrganisations(orgs)));

        assert_eq!(svc.default_tenant_id().await.unwrap(), Some(expected));
    }

    #[tokio::test]
    async fn configured_default_tenant_wins() {
        let svc = SettingsService::new(Arc::new(MemoryConfigStore::new()))
            .with_organisations(Arc::new(FixedOrganisations(vec![org("alpha", 3)])));

        let update: TenancyUpdate =
            serde_json::from_str(r#"{"defaultUserTenant": "tenant-42"}"#).unwrap();
        svc.update_tenancy(update).await.unwrap();

        assert_eq!(
            svc.default_tenant_id().await.unwrap(),
            Some("tenant-42".to_string())
        );
    }
}

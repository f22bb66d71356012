//! Role-based access control settings.

use tracing::info;

use register_core::models::{RbacConfig, RbacUpdate};
use register_core::{Error, GroupInfo, Result, UserInfo};

use crate::service::SettingsService;
use crate::store::{self, keys};

const DOMAIN: &str = "RBAC";

impl SettingsService {
    /// Current RBAC configuration, with defaults for anything unset.
    pub async fn get_rbac(&self) -> Result<RbacConfig> {
        store::read_or_defaults(self.store.as_ref(), keys::RBAC, DOMAIN).await
    }

    /// Replace the RBAC configuration. Fields absent from the update revert
    /// to hard defaults.
    pub async fn update_rbac(&self, update: RbacUpdate) -> Result<RbacConfig> {
        let config = update.into_config();
        store::write_config(self.store.as_ref(), keys::RBAC, DOMAIN, &config).await?;
        info!(
            subsystem = "settings",
            component = "rbac",
            op = "update",
            domain = DOMAIN,
            enabled = config.enabled,
            "Updated RBAC settings"
        );
        Ok(config)
    }

    /// Search groups in the host identity backend.
    pub async fn search_groups(&self, query: &str) -> Result<Vec<GroupInfo>> {
        let groups = self
            .groups
            .as_ref()
            .ok_or_else(|| Error::CollaboratorUnavailable("group directory".to_string()))?;
        groups.search_groups(query).await
    }

    /// Search users in the host identity backend.
    pub async fn search_users(&self, query: &str, limit: i64) -> Result<Vec<UserInfo>> {
        let users = self
            .users
            .as_ref()
            .ok_or_else(|| Error::CollaboratorUnavailable("user directory".to_string()))?;
        users.search_users(query, limit).await
    }
}

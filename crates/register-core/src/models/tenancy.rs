//! Multitenancy settings.

use serde::{Deserialize, Serialize};

use crate::defaults;

/// Tenant-isolation settings domain. `enabled` defaults to `true`:
/// isolation-by-default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TenancyConfig {
    pub enabled: bool,
    pub default_user_tenant: String,
    pub default_object_tenant: String,
    pub published_objects_bypass_multi_tenancy: bool,
    pub admin_override: bool,
}

impl Default for TenancyConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::TENANCY_ENABLED,
            default_user_tenant: defaults::TENANCY_DEFAULT_USER_TENANT.to_string(),
            default_object_tenant: defaults::TENANCY_DEFAULT_OBJECT_TENANT.to_string(),
            published_objects_bypass_multi_tenancy: defaults::TENANCY_PUBLISHED_BYPASS,
            admin_override: defaults::TENANCY_ADMIN_OVERRIDE,
        }
    }
}

/// Partial multitenancy update; unset fields revert to hard defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenancyUpdate {
    pub enabled: Option<bool>,
    pub default_user_tenant: Option<String>,
    pub default_object_tenant: Option<String>,
    pub published_objects_bypass_multi_tenancy: Option<bool>,
    pub admin_override: Option<bool>,
}

impl TenancyUpdate {
    pub fn into_config(self) -> TenancyConfig {
        let d = TenancyConfig::default();
        TenancyConfig {
            enabled: self.enabled.unwrap_or(d.enabled),
            default_user_tenant: self.default_user_tenant.unwrap_or(d.default_user_tenant),
            default_object_tenant: self
                .default_object_tenant
                .unwrap_or(d.default_object_tenant),
            published_objects_bypass_multi_tenancy: self
                .published_objects_bypass_multi_tenancy
                .unwrap_or(d.published_objects_bypass_multi_tenancy),
            admin_override: self.admin_override.unwrap_or(d.admin_override),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn isolation_is_on_by_default() {
        assert!(TenancyConfig::default().enabled);
    }

    #[test]
    fn backfills_bypass_flag_on_old_records() {
        let config: TenancyConfig =
            serde_json::from_str(r#"{"enabled": false, "defaultUserTenant": "t1"}"#).unwrap();
        assert!(!config.enabled);
        assert_eq!(config.default_user_tenant, "t1");
        assert!(!config.published_objects_bypass_multi_tenancy);
        assert!(config.admin_override);
    }

    #[test]
    fn update_reverts_unset_fields() {
        let update = TenancyUpdate {
            default_user_tenant: Some("org-a".to_string()),
            ..TenancyUpdate::default()
        };
        let config = update.into_config();
        assert!(config.enabled);
        assert_eq!(config.default_user_tenant, "org-a");
    }
}

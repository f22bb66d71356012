//! Role-based access control settings.

use serde::{Deserialize, Serialize};

use crate::defaults;

/// RBAC settings domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RbacConfig {
    pub enabled: bool,
    pub anonymous_group: String,
    pub default_new_user_group: String,
    pub default_object_owner: String,
    pub admin_override: bool,
}

impl Default for RbacConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::RBAC_ENABLED,
            anonymous_group: defaults::RBAC_ANONYMOUS_GROUP.to_string(),
            default_new_user_group: defaults::RBAC_DEFAULT_NEW_USER_GROUP.to_string(),
            default_object_owner: defaults::RBAC_DEFAULT_OBJECT_OWNER.to_string(),
            admin_override: defaults::RBAC_ADMIN_OVERRIDE,
        }
    }
}

/// Partial RBAC update. Unset fields revert to the hard defaults, not to
/// the previously stored value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RbacUpdate {
    pub enabled: Option<bool>,
    pub anonymous_group: Option<String>,
    pub default_new_user_group: Option<String>,
    pub default_object_owner: Option<String>,
    pub admin_override: Option<bool>,
}

impl RbacUpdate {
    /// Resolve to a full config: `input ?? default` per field.
    pub fn into_config(self) -> RbacConfig {
        let d = RbacConfig::default();
        RbacConfig {
            enabled: self.enabled.unwrap_or(d.enabled),
            anonymous_group: self.anonymous_group.unwrap_or(d.anonymous_group),
            default_new_user_group: self
                .default_new_user_group
                .unwrap_or(d.default_new_user_group),
            default_object_owner: self.default_object_owner.unwrap_or(d.default_object_owner),
            admin_override: self.admin_override.unwrap_or(d.admin_override),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_empty_object_to_defaults() {
        let config: RbacConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, RbacConfig::default());
        assert_eq!(config.anonymous_group, "public");
    }

    #[test]
    fn backfills_missing_fields_from_defaults() {
        let config: RbacConfig = serde_json::from_str(r#"{"enabled": true}"#).unwrap();
        assert!(config.enabled);
        assert_eq!(config.anonymous_group, "public");
        assert!(config.admin_override);
    }

    #[test]
    fn uses_camel_case_wire_names() {
        let json = serde_json::to_value(RbacConfig::default()).unwrap();
        assert!(json.get("anonymousGroup").is_some());
        assert!(json.get("defaultNewUserGroup").is_some());
        assert!(json.get("adminOverride").is_some());
    }

    #[test]
    fn partial_update_resets_unset_fields_to_defaults() {
        let update = RbacUpdate {
            enabled: Some(true),
            anonymous_group: Some("guests".to_string()),
            ..RbacUpdate::default()
        };
        let config = update.into_config();
        assert!(config.enabled);
        assert_eq!(config.anonymous_group, "guests");
        assert_eq!(config.default_new_user_group, "");
        assert!(config.admin_override);
    }
}

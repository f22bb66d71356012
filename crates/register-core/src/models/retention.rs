//! Retention settings: seven retention windows plus two cleanup flags.
//!
//! All windows are stored in milliseconds.

use serde::{Deserialize, Serialize};

use crate::coerce::LooseInt;
use crate::defaults;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RetentionConfig {
    pub deleted_retention: i64,
    pub version_retention: i64,
    pub audit_trail_retention: i64,
    pub search_trail_retention: i64,
    pub event_log_retention: i64,
    pub file_retention: i64,
    pub export_retention: i64,
    pub cleanup_enabled: bool,
    pub hard_delete_on_cleanup: bool,
}

impl Default for RetentionConfig {
    fn default() -> Self {
        Self {
            deleted_retention: defaults::RETENTION_DELETED_MS,
            version_retention: defaults::RETENTION_VERSION_MS,
            audit_trail_retention: defaults::RETENTION_AUDIT_TRAIL_MS,
            search_trail_retention: defaults::RETENTION_SEARCH_TRAIL_MS,
            event_log_retention: defaults::RETENTION_EVENT_LOG_MS,
            file_retention: defaults::RETENTION_FILE_MS,
            export_retention: defaults::RETENTION_EXPORT_MS,
            cleanup_enabled: defaults::RETENTION_CLEANUP_ENABLED,
            hard_delete_on_cleanup: defaults::RETENTION_HARD_DELETE,
        }
    }
}

/// Partial retention update. Windows accept numbers or numeric strings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetentionUpdate {
    pub deleted_retention: Option<LooseInt>,
    pub version_retention: Option<LooseInt>,
    pub audit_trail_retention: Option<LooseInt>,
    pub search_trail_retention: Option<LooseInt>,
    pub event_log_retention: Option<LooseInt>,
    pub file_retention: Option<LooseInt>,
    pub export_retention: Option<LooseInt>,
    pub cleanup_enabled: Option<bool>,
    pub hard_delete_on_cleanup: Option<bool>,
}

impl RetentionUpdate {
    pub fn into_config(self) -> RetentionConfig {
        let d = RetentionConfig::default();
        RetentionConfig {
            deleted_retention: self
                .deleted_retention
                .map(LooseInt::into_inner)
                .unwrap_or(d.deleted_retention),
            version_retention: self
                .version_retention
                .map(LooseInt::into_inner)
                .unwrap_or(d.version_retention),
            audit_trail_retention: self
                .audit_trail_retention
                .map(LooseInt::into_inner)
                .unwrap_or(d.audit_trail_retention),
            search_trail_retention: self
                .search_trail_retention
                .map(LooseInt::into_inner)
                .unwrap_or(d.search_trail_retention),
            event_log_retention: self
                .event_log_retention
                .map(LooseInt::into_inner)
                .unwrap_or(d.event_log_retention),
            file_retention: self
                .file_retention
                .map(LooseInt::into_inner)
                .unwrap_or(d.file_retention),
            export_retention: self
                .export_retention
                .map(LooseInt::into_inner)
                .unwrap_or(d.export_retention),
            cleanup_enabled: self.cleanup_enabled.unwrap_or(d.cleanup_enabled),
            hard_delete_on_cleanup: self
                .hard_delete_on_cleanup
                .unwrap_or(d.hard_delete_on_cleanup),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_fixed_day_windows() {
        let config = RetentionConfig::default();
        assert_eq!(config.deleted_retention, 30 * defaults::DAY_MS);
        assert_eq!(config.file_retention, 365 * defaults::DAY_MS);
        assert!(config.cleanup_enabled);
        assert!(!config.hard_delete_on_cleanup);
    }

    #[test]
    fn update_accepts_numeric_strings() {
        let update: RetentionUpdate =
            serde_json::from_str(r#"{"deletedRetention": "1209600000"}"#).unwrap();
        let config = update.into_config();
        assert_eq!(config.deleted_retention, 1_209_600_000);
        assert_eq!(config.version_retention, defaults::RETENTION_VERSION_MS);
    }

    #[test]
    fn old_record_gains_new_windows_on_decode() {
        let config: RetentionConfig =
            serde_json::from_str(r#"{"auditTrailRetention": 1000}"#).unwrap();
        assert_eq!(config.audit_trail_retention, 1000);
        assert_eq!(config.export_retention, defaults::RETENTION_EXPORT_MS);
    }
}

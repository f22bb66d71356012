//! SOLR connection settings.

use serde::{Deserialize, Serialize};

use crate::coerce::{LooseBool, LooseInt};
use crate::defaults;

/// SOLR connection, auth, and collection settings.
///
/// Scalar fields are stored with their canonical JSON types; the update
/// struct accepts stringly numbers and booleans from the admin form and
/// coerces on write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SolrConfig {
    pub enabled: bool,
    pub scheme: String,
    pub host: String,
    pub port: i64,
    pub path: String,
    pub core: String,
    pub collection: String,
    pub username: String,
    pub password: String,
    pub auth_enabled: bool,
    pub timeout: i64,
    pub commit_within: i64,
    pub auto_commit: bool,
    pub soft_commit: bool,
    pub verify_ssl: bool,
    pub zookeeper_hosts: String,
    pub query_default_field: String,
    pub query_operator: String,
    pub enable_facets: bool,
    pub enable_highlighting: bool,
}

impl Default for SolrConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::SOLR_ENABLED,
            scheme: defaults::SOLR_SCHEME.to_string(),
            host: defaults::SOLR_HOST.to_string(),
            port: defaults::SOLR_PORT,
            path: defaults::SOLR_PATH.to_string(),
            core: defaults::SOLR_CORE.to_string(),
            collection: defaults::SOLR_COLLECTION.to_string(),
            username: defaults::SOLR_USERNAME.to_string(),
            password: defaults::SOLR_PASSWORD.to_string(),
            auth_enabled: defaults::SOLR_AUTH_ENABLED,
            timeout: defaults::SOLR_TIMEOUT_SECS,
            commit_within: defaults::SOLR_COMMIT_WITHIN_MS,
            auto_commit: defaults::SOLR_AUTO_COMMIT,
            soft_commit: defaults::SOLR_SOFT_COMMIT,
            verify_ssl: defaults::SOLR_VERIFY_SSL,
            zookeeper_hosts: defaults::SOLR_ZOOKEEPER_HOSTS.to_string(),
            query_default_field: defaults::SOLR_QUERY_DEFAULT_FIELD.to_string(),
            query_operator: defaults::SOLR_QUERY_OPERATOR.to_string(),
            enable_facets: defaults::SOLR_ENABLE_FACETS,
            enable_highlighting: defaults::SOLR_ENABLE_HIGHLIGHTING,
        }
    }
}

impl SolrConfig {
    /// Base URL of the SOLR installation, e.g. `http://localhost:8983/solr`.
    pub fn base_url(&self) -> String {
        format!(
            "{}://{}:{}{}",
            self.scheme, self.host, self.port, self.path
        )
    }
}

/// Partial SOLR update; unset fields revert to hard defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolrUpdate {
    pub enabled: Option<LooseBool>,
    pub scheme: Option<String>,
    pub host: Option<String>,
    pub port: Option<LooseInt>,
    pub path: Option<String>,
    pub core: Option<String>,
    pub collection: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub auth_enabled: Option<LooseBool>,
    pub timeout: Option<LooseInt>,
    pub commit_within: Option<LooseInt>,
    pub auto_commit: Option<LooseBool>,
    pub soft_commit: Option<LooseBool>,
    pub verify_ssl: Option<LooseBool>,
    pub zookeeper_hosts: Option<String>,
    pub query_default_field: Option<String>,
    pub query_operator: Option<String>,
    pub enable_facets: Option<LooseBool>,
    pub enable_highlighting: Option<LooseBool>,
}

impl SolrUpdate {
    pub fn into_config(self) -> SolrConfig {
        let d = SolrConfig::default();
        SolrConfig {
            enabled: self.enabled.map(LooseBool::into_inner).unwrap_or(d.enabled),
            scheme: self.scheme.unwrap_or(d.scheme),
            host: self.host.unwrap_or(d.host),
            port: self.port.map(LooseInt::into_inner).unwrap_or(d.port),
            path: self.path.unwrap_or(d.path),
            core: self.core.unwrap_or(d.core),
            collection: self.collection.unwrap_or(d.collection),
            username: self.username.unwrap_or(d.username),
            password: self.password.unwrap_or(d.password),
            auth_enabled: self
                .auth_enabled
                .map(LooseBool::into_inner)
                .unwrap_or(d.auth_enabled),
            timeout: self.timeout.map(LooseInt::into_inner).unwrap_or(d.timeout),
            commit_within: self
                .commit_within
                .map(LooseInt::into_inner)
                .unwrap_or(d.commit_within),
            auto_commit: self
                .auto_commit
                .map(LooseBool::into_inner)
                .unwrap_or(d.auto_commit),
            soft_commit: self
                .soft_commit
                .map(LooseBool::into_inner)
                .unwrap_or(d.soft_commit),
            verify_ssl: self
                .verify_ssl
                .map(LooseBool::into_inner)
                .unwrap_or(d.verify_ssl),
            zookeeper_hosts: self.zookeeper_hosts.unwrap_or(d.zookeeper_hosts),
            query_default_field: self.query_default_field.unwrap_or(d.query_default_field),
            query_operator: self.query_operator.unwrap_or(d.query_operator),
            enable_facets: self
                .enable_facets
                .map(LooseBool::into_inner)
                .unwrap_or(d.enable_facets),
            enable_highlighting: self
                .enable_highlighting
                .map(LooseBool::into_inner)
                .unwrap_or(d.enable_highlighting),
        }
    }
}

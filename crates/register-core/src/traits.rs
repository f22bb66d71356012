//! Collaborator traits for the settings service.
//!
//! These traits define the interfaces that concrete implementations must
//! satisfy, enabling pluggable backends and testability. The settings
//! services only ever see these abstractions: the key-value store, the
//! identity directories, and the search statistics endpoint are all
//! injected.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Result;
use crate::models::stats::SearchServiceStats;

// =============================================================================
// CONFIGURATION STORE
// =============================================================================

/// Key-value configuration store scoped to one application namespace.
///
/// Values at this boundary are always JSON-encoded strings. Writes are
/// last-write-wins with no locking or versioning; settings changes are
/// low-frequency administrative operations.
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Read the stored value for a key, `None` when never written.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store a value under a key, overwriting any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<()>;
}

// =============================================================================
// IDENTITY DIRECTORIES
// =============================================================================

/// A group known to the host identity backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupInfo {
    pub id: String,
    pub display_name: String,
}

/// A user known to the host identity backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub display_name: String,
}

/// An organisation (tenant) with its member count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organisation {
    pub uuid: Uuid,
    pub name: String,
    pub user_count: i64,
}

/// Group lookup for the RBAC settings screens.
#[async_trait]
pub trait GroupDirectory: Send + Sync {
    /// Search groups by display name or id substring.
    async fn search_groups(&self, query: &str) -> Result<Vec<GroupInfo>>;
}

/// User lookup for the RBAC settings screens.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Search users by display name or id substring, capped at `limit`.
    async fn search_users(&self, query: &str, limit: i64) -> Result<Vec<UserInfo>>;
}

/// Organisation lookup, reused by the default-tenant accessor.
#[async_trait]
pub trait OrganisationDirectory: Send + Sync {
    /// List all organisations with their member counts.
    async fn list_with_user_counts(&self) -> Result<Vec<Organisation>>;
}

// =============================================================================
// SEARCH STATISTICS
// =============================================================================

/// Raw statistics source for the dashboard transformer.
///
/// Implementations report unreachability through `Err`; the dashboard path
/// absorbs that into [`SearchServiceStats::Unavailable`] instead of
/// propagating, so a down search backend degrades the dashboard rather than
/// breaking it.
#[async_trait]
pub trait SearchStatsProvider: Send + Sync {
    async fn fetch_stats(&self) -> Result<SearchServiceStats>;
}

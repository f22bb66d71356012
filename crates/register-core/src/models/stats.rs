//! Raw and dashboard-shaped search statistics.
//!
//! The stats provider reports either `Available` raw counters or an
//! `Unavailable` reason; the dashboard transformer in `register-settings`
//! maps both states into the fixed dashboard schema.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Two-state input to the dashboard transformer.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchServiceStats {
    /// The backend is absent, unreachable, or reported itself unavailable.
    Unavailable { reason: String },
    /// The backend answered with raw counters.
    Available(IndexStats),
}

/// Per-core raw statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CoreStats {
    pub name: String,
    pub num_docs: i64,
    pub size_bytes: i64,
}

/// Raw service counters, as accumulated by the search backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ServiceCounters {
    pub searches: i64,
    pub search_time_ms: f64,
    pub indexes: i64,
    pub index_time_ms: f64,
    pub commits: i64,
    pub errors: i64,
    pub total_ops: i64,
    pub total_time_ms: f64,
}

/// Raw statistics snapshot from an available search backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct IndexStats {
    pub core: String,
    pub version: String,
    pub uptime_ms: i64,
    pub num_docs: i64,
    pub size_bytes: i64,
    pub cores: Vec<CoreStats>,
    pub service: ServiceCounters,
}

// =============================================================================
// DASHBOARD SCHEMA
// =============================================================================

/// Index overview section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Overview {
    pub available: bool,
    pub core: String,
    pub version: String,
    pub document_count: i64,
    pub index_size: String,
    pub index_size_bytes: i64,
    pub uptime_ms: i64,
}

/// One core in the dashboard core list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoreOverview {
    pub name: String,
    pub document_count: i64,
    pub size: String,
    pub size_bytes: i64,
}

/// Derived performance metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Performance {
    pub operations_per_sec: f64,
    pub error_rate: f64,
    pub avg_search_time_ms: f64,
    pub avg_index_time_ms: f64,
}

/// Health summary section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
    pub errors: i64,
}

/// Operation counters section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operations {
    pub searches: i64,
    pub indexes: i64,
    pub commits: i64,
    pub total_operations: i64,
}

/// The fixed dashboard statistics schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub overview: Overview,
    pub cores: Vec<CoreOverview>,
    pub performance: Performance,
    pub health: Health,
    pub operations: Operations,
    pub generated_at: DateTime<Utc>,
    pub warnings: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

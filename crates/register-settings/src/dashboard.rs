//! Dashboard statistics transformer.
//!
//! Collects raw search-service counters and reshapes them into the fixed
//! dashboard schema. An unreachable or disabled backend produces a fully
//! populated "unavailable" document rather than an error; the dashboard
//! always renders.

use chrono::Utc;
use tracing::warn;

use register_core::models::{
    CoreOverview, DashboardStats, Health, IndexStats, Operations, Overview, Performance,
    SearchServiceStats,
};
use register_core::Result;
use register_core::SearchStatsProvider;

use crate::service::SettingsService;
use crate::solr_client::SolrStatsClient;

const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Render a byte count with the largest unit that keeps the value above 1,
/// rounded to two decimals with trailing zeros trimmed.
pub fn format_bytes(bytes: i64) -> String {
    if bytes <= 0 {
        return "0 B".to_string();
    }
    let exponent = ((bytes as f64).log(1024.0).floor() as usize).min(UNITS.len() - 1);
    let value = round2(bytes as f64 / 1024_f64.powi(exponent as i32));
    format!("{} {}", value, UNITS[exponent])
}

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Reshape raw service statistics into the dashboard schema.
pub fn transform_stats(stats: &SearchServiceStats) -> DashboardStats {
    match stats {
        SearchServiceStats::Unavailable { reason } => unavailable_stats(reason),
        SearchServiceStats::Available(raw) => available_stats(raw),
    }
}

fn unavailable_stats(reason: &str) -> DashboardStats {
    DashboardStats {
        overview: Overview {
            available: false,
            core: String::new(),
            version: String::new(),
            document_count: 0,
            index_size: "0 B".to_string(),
            index_size_bytes: 0,
            uptime_ms: 0,
        },
        cores: Vec::new(),
        performance: Performance {
            operations_per_sec: 0.0,
            error_rate: 0.0,
            avg_search_time_ms: 0.0,
            avg_index_time_ms: 0.0,
        },
        health: Health {
            status: "unavailable".to_string(),
            errors: 0,
        },
        operations: Operations {
            searches: 0,
            indexes: 0,
            commits: 0,
            total_operations: 0,
        },
        generated_at: Utc::now(),
        warnings: vec![format!("Search service unavailable: {reason}")],
        error: Some(reason.to_string()),
    }
}

fn available_stats(raw: &IndexStats) -> DashboardStats {
    let service = &raw.service;

    // Every ratio guards its denominator; a fresh core reports zeros, not NaN.
    let busy_secs = service.total_time_ms / 1000.0;
    let operations_per_sec = if busy_secs > 0.0 {
        round2(service.total_ops as f64 / busy_secs)
    } else {
        0.0
    };
    let error_rate = if service.total_ops > 0 {
        round2(service.errors as f64 * 100.0 / service.total_ops as f64)
    } else {
        0.0
    };
    let avg_search_time_ms = if service.searches > 0 {
        round2(service.search_time_ms / service.searches as f64)
    } else {
        0.0
    };
    let avg_index_time_ms = if service.indexes > 0 {
        round2(service.index_time_ms / service.indexes as f64)
    } else {
        0.0
    };

    let mut warnings = Vec::new();
    if raw.num_docs == 0 {
        warnings.push("Index contains no documents".to_string());
    }
    if service.errors > 0 {
        warnings.push(format!("{} errors recorded since startup", service.errors));
    }

    let status = if service.errors == 0 {
        "healthy"
    } else {
        "degraded"
    };

    DashboardStats {
        overview: Overview {
            available: true,
            core: raw.core.clone(),
            version: raw.version.clone(),
            document_count: raw.num_docs,
            index_size: format_bytes(raw.size_bytes),
            index_size_bytes: raw.size_bytes,
            uptime_ms: raw.uptime_ms,
        },
        cores: raw
            .cores
            .iter()
            .map(|core| CoreOverview {
                name: core.name.clone(),
                document_count: core.num_docs,
                size: format_bytes(core.size_bytes),
                size_bytes: core.size_bytes,
            })
            .collect(),
        performance: Performance {
            operations_per_sec,
            error_rate,
            avg_search_time_ms,
            avg_index_time_ms,
        },
        health: Health {
            status: status.to_string(),
            errors: service.errors,
        },
        operations: Operations {
            searches: service.searches,
            indexes: service.indexes,
            commits: service.commits,
            total_operations: service.total_ops,
        },
        generated_at: Utc::now(),
        warnings,
        error: None,
    }
}

impl SettingsService {
    /// Dashboard statistics document for the admin overview page.
    pub async fn dashboard_stats(&self) -> Result<DashboardStats> {
        let stats = self.collect_stats().await?;
        Ok(transform_stats(&stats))
    }

    /// Collect raw statistics from the injected provider, or from a SOLR
    /// client built from the stored connection settings.
    async fn collect_stats(&self) -> Result<SearchServiceStats> {
        if let Some(provider) = self.stats.as_ref() {
            return Ok(absorb(provider.fetch_stats().await));
        }

        let solr = self.get_solr().await?;
        if !solr.enabled {
            return Ok(SearchServiceStats::Unavailable {
                reason: "SOLR integration is disabled".to_string(),
            });
        }

        match SolrStatsClient::from_config(&solr) {
            Ok(client) => Ok(absorb(client.fetch_stats().await)),
            Err(e) => Ok(SearchServiceStats::Unavailable {
                reason: e.to_string(),
            }),
        }
    }
}

/// Fold a provider failure into the unavailable state.
fn absorb(result: Result<SearchServiceStats>) -> SearchServiceStats {
    match result {
        Ok(stats) => stats,
        Err(e) => {
            warn!(
                subsystem = "settings",
                component = "dashboard",
                op = "collect",
                error = %e,
                "Statistics provider failed, reporting unavailable"
            );
            SearchServiceStats::Unavailable {
                reason: e.to_string(),
            }
        }
    }
}

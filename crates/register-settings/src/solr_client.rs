//! HTTP client for the SOLR admin endpoints.
//!
//! Only the statistics surface is implemented here; indexing and query
//! traffic goes through the host platform's own search client. All
//! failures surface as `CollaboratorUnavailable` so the dashboard path can
//! degrade instead of erroring.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use register_core::models::{CoreStats, IndexStats, SearchServiceStats, ServiceCounters};
use register_core::{Error, Result, SearchStatsProvider, SolrConfig};

/// Statistics client over the SOLR core-admin API.
pub struct SolrStatsClient {
    client: Client,
    base_url: String,
    core: String,
}

impl SolrStatsClient {
    /// Build a client from stored SOLR connection settings.
    pub fn from_config(config: &SolrConfig) -> Result<Self> {
        let mut builder = Client::builder().timeout(Duration::from_secs(config.timeout.max(1) as u64));
        if !config.verify_ssl {
            builder = builder.danger_accept_invalid_certs(true);
        }
        let client = builder
            .build()
            .map_err(|e| Error::CollaboratorUnavailable(format!("SOLR client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url(),
            core: config.core.clone(),
        })
    }

    async fn get_json(&self, path: &str) -> Result<Value> {
        let url = format!("{}/{}", self.base_url, path);
        debug!(
            subsystem = "search",
            component = "solr_client",
            op = "get",
            url = %url,
            "Fetching SOLR admin endpoint"
        );
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::CollaboratorUnavailable(format!("SOLR unreachable: {e}")))?;

        if !response.status().is_success() {
            return Err(Error::CollaboratorUnavailable(format!(
                "SOLR returned HTTP {}",
                response.status()
            )));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| Error::CollaboratorUnavailable(format!("SOLR response: {e}")))
    }

    /// Parse the core-admin STATUS payload into per-core statistics.
    fn parse_cores(status: &Value) -> Vec<CoreStats> {
        status
            .get("status")
            .and_then(Value::as_object)
            .map(|cores| {
                cores
                    .iter()
                    .map(|(name, core)| CoreStats {
                        name: name.clone(),
                        num_docs: core
                            .pointer("/index/numDocs")
                            .and_then(Value::as_i64)
                            .unwrap_or(0),
                        size_bytes: core
                            .pointer("/index/sizeInBytes")
                            .and_then(Value::as_i64)
                            .unwrap_or(0),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Sum query/update handler counters from the metrics payload.
    fn parse_counters(metrics: &Value) -> ServiceCounters {
        let mut counters = ServiceCounters::default();
        let Some(groups) = metrics.get("metrics").and_then(Value::as_object) else {
            return counters;
        };
        for group in groups.values() {
            let Some(entries) = group.as_object() else {
                continue;
            };
            for (metric, value) in entries {
                let count = value
                    .get("count")
                    .and_then(Value::as_i64)
                    .or_else(|| value.as_i64())
                    .unwrap_or(0);
                let total_time = value
                    .get("totalTime")
                    .and_then(Value::as_f64)
                    .unwrap_or(0.0);
                if metric.starts_with("QUERY.") && metric.ends_with(".requests") {
                    counters.searches += count;
                    counters.search_time_ms += total_time;
                } else if metric.starts_with("UPDATE.") && metric.ends_with(".requests") {
                    counters.indexes += count;
                    counters.index_time_ms += total_time;
                } else if metric.ends_with(".commits") {
                    counters.commits += count;
                } else if metric.ends_with(".errors") {
                    counters.errors += count;
                }
            }
        }
        counters.total_ops = counters.searches + counters.indexes + counters.commits;
        counters.total_time_ms = counters.search_time_ms + counters.index_time_ms;
        counters
    }
}

#[async_trait]
impl SearchStatsProvider for SolrStatsClient {
    async fn fetch_stats(&self) -> Result<SearchServiceStats> {
        let status = self.get_json("admin/cores?action=STATUS&wt=json").await?;
        let cores = Self::parse_cores(&status);

        // Version and uptime come from the system endpoint; metrics are
        // optional and default to zero when the endpoint is unavailable.
        let system = self.get_json("admin/info/system?wt=json").await.ok();
        let metrics = self
            .get_json("admin/metrics?group=core&wt=json")
            .await
            .ok();

        let version = system
            .as_ref()
            .and_then(|v| v.pointer("/lucene/solr-spec-version"))
            .and_then(Value::as_str)
            .unwrap_or("unknown")
            .to_string();
        let uptime_ms = system
            .as_ref()
            .and_then(|v| v.pointer("/jvm/jmx/upTimeMS"))
            .and_then(Value::as_i64)
            .unwrap_or(0);

        let num_docs = cores.iter().map(|c| c.num_docs).sum();
        let size_bytes = cores.iter().map(|c| c.size_bytes).sum();
        let service = metrics
            .as_ref()
            .map(Self::parse_counters)
            .unwrap_or_default();

        Ok(SearchServiceStats::Available(IndexStats {
            core: self.core.clone(),
            version,
            uptime_ms,
            num_docs,
            size_bytes,
            cores,
            service,
        }))
    }
}

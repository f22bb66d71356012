//! Per-domain configuration models.
//!
//! Each domain gets a full config struct and an all-optional update struct.
//! Config structs carry container-level `#[serde(default)]`, so decoding a
//! stored record written by an older release backfills every missing field
//! from the hard defaults, the shallow per-field fallback every read path
//! relies on. Update structs resolve to a full config with a two-level
//! chain (`input ?? default`), except the LLM domain which merges against
//! the existing stored record (`input ?? existing ?? default`).

pub mod facets;
pub mod files;
pub mod llm;
pub mod n8n;
pub mod objects;
pub mod rbac;
pub mod retention;
pub mod search_backend;
pub mod solr;
pub mod stats;
pub mod tenancy;

pub use facets::{FacetConfig, FacetDefaults, FacetEntry};
pub use files::{FilesConfig, FilesUpdate};
pub use llm::{
    FireworksProviderConfig, FireworksProviderUpdate, LlmConfig, LlmUpdate, OllamaProviderConfig,
    OllamaProviderUpdate, OpenAiProviderConfig, OpenAiProviderUpdate, VectorConfig, VectorUpdate,
};
pub use n8n::{N8nConfig, N8nUpdate};
pub use objects::{ObjectsConfig, ObjectsUpdate};
pub use rbac::{RbacConfig, RbacUpdate};
pub use retention::{RetentionConfig, RetentionUpdate};
pub use search_backend::SearchBackendConfig;
pub use solr::{SolrConfig, SolrUpdate};
pub use stats::{
    CoreOverview, CoreStats, DashboardStats, Health, IndexStats, Operations, Overview,
    Performance, SearchServiceStats, ServiceCounters,
};
pub use tenancy::{TenancyConfig, TenancyUpdate};

//! Centralized default constants for the OpenRegister settings service.
//!
//! **This module is the single source of truth** for every hard default a
//! settings domain falls back to. The per-domain config models reference
//! these constants from their serde default functions, so a stored record
//! written by an older release is backfilled field-by-field on read without
//! any migration step.
//!
//! Organized by settings domain. When adding new constants, place them in
//! the appropriate section.

/// Application namespace under which all settings keys are stored.
pub const APP_NAMESPACE: &str = "openregister";

/// One day in milliseconds, the unit every retention window is derived from.
pub const DAY_MS: i64 = 86_400_000;

// =============================================================================
// RBAC
// =============================================================================

/// Whether role-based access control is enforced.
pub const RBAC_ENABLED: bool = false;

/// Group granted to unauthenticated visitors.
pub const RBAC_ANONYMOUS_GROUP: &str = "public";

/// Group newly created users are placed in ("" = none).
pub const RBAC_DEFAULT_NEW_USER_GROUP: &str = "";

/// Owner assigned to objects created without an explicit owner ("" = creator).
pub const RBAC_DEFAULT_OBJECT_OWNER: &str = "";

/// Whether admins bypass per-object permissions.
pub const RBAC_ADMIN_OVERRIDE: bool = true;

// =============================================================================
// MULTITENANCY
// =============================================================================

/// Tenant isolation is on by default: a fresh install never leaks objects
/// across tenants because an admin forgot to flip a switch.
pub const TENANCY_ENABLED: bool = true;

/// Tenant assigned to new users ("" = resolved via the default organisation).
pub const TENANCY_DEFAULT_USER_TENANT: &str = "";

/// Tenant assigned to new objects ("" = creator's tenant).
pub const TENANCY_DEFAULT_OBJECT_TENANT: &str = "";

/// Whether published objects are readable across tenant boundaries.
pub const TENANCY_PUBLISHED_BYPASS: bool = false;

/// Whether admins can see all tenants.
pub const TENANCY_ADMIN_OVERRIDE: bool = true;

// =============================================================================
// RETENTION (all windows in milliseconds)
// =============================================================================

/// How long soft-deleted objects stay recoverable.
pub const RETENTION_DELETED_MS: i64 = 30 * DAY_MS;

/// How long object versions are kept.
pub const RETENTION_VERSION_MS: i64 = 180 * DAY_MS;

/// How long audit trail entries are kept.
pub const RETENTION_AUDIT_TRAIL_MS: i64 = 90 * DAY_MS;

/// How long search trail entries are kept.
pub const RETENTION_SEARCH_TRAIL_MS: i64 = 30 * DAY_MS;

/// How long event log entries are kept.
pub const RETENTION_EVENT_LOG_MS: i64 = 14 * DAY_MS;

/// How long orphaned files are kept.
pub const RETENTION_FILE_MS: i64 = 365 * DAY_MS;

/// How long generated exports are kept.
pub const RETENTION_EXPORT_MS: i64 = 7 * DAY_MS;

/// Whether the background cleanup job runs at all.
pub const RETENTION_CLEANUP_ENABLED: bool = true;

/// Whether cleanup permanently deletes instead of archiving.
pub const RETENTION_HARD_DELETE: bool = false;

// =============================================================================
// SOLR
// =============================================================================

pub const SOLR_ENABLED: bool = false;
pub const SOLR_SCHEME: &str = "http";
pub const SOLR_HOST: &str = "localhost";
pub const SOLR_PORT: i64 = 8983;
pub const SOLR_PATH: &str = "/solr";
pub const SOLR_CORE: &str = "openregister";
pub const SOLR_COLLECTION: &str = "openregister";
pub const SOLR_USERNAME: &str = "";
pub const SOLR_PASSWORD: &str = "";
pub const SOLR_AUTH_ENABLED: bool = false;

/// Request timeout in seconds.
pub const SOLR_TIMEOUT_SECS: i64 = 30;

/// commitWithin window in milliseconds.
pub const SOLR_COMMIT_WITHIN_MS: i64 = 1000;

pub const SOLR_AUTO_COMMIT: bool = true;
pub const SOLR_SOFT_COMMIT: bool = true;
pub const SOLR_VERIFY_SSL: bool = true;
pub const SOLR_ZOOKEEPER_HOSTS: &str = "";
pub const SOLR_QUERY_DEFAULT_FIELD: &str = "_text_";
pub const SOLR_QUERY_OPERATOR: &str = "AND";
pub const SOLR_ENABLE_FACETS: bool = true;
pub const SOLR_ENABLE_HIGHLIGHTING: bool = false;

// =============================================================================
// LLM / VECTORIZATION PROVIDERS
// =============================================================================

pub const LLM_ENABLED: bool = false;
pub const LLM_EMBEDDING_PROVIDER: &str = "openai";
pub const LLM_CHAT_PROVIDER: &str = "openai";

pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const OPENAI_MODEL: &str = "gpt-4o-mini";
pub const OPENAI_EMBEDDING_MODEL: &str = "text-embedding-3-small";

pub const OLLAMA_BASE_URL: &str = "http://localhost:11434";
pub const OLLAMA_MODEL: &str = "llama3.1";
pub const OLLAMA_EMBEDDING_MODEL: &str = "nomic-embed-text";

pub const FIREWORKS_MODEL: &str = "accounts/fireworks/models/llama-v3p1-70b-instruct";
pub const FIREWORKS_EMBEDDING_MODEL: &str = "nomic-ai/nomic-embed-text-v1.5";

/// Identifier of the embedding computation backend on the wire. Kept for
/// compatibility with records written by earlier releases.
pub const VECTOR_BACKEND: &str = "php";

/// SOLR field dense vectors are written to.
pub const VECTOR_SOLR_FIELD: &str = "_embedding_";

// =============================================================================
// FILE MANAGEMENT
// =============================================================================

pub const FILES_EXTRACTION_ENABLED: bool = true;
pub const FILES_VECTORIZATION_ENABLED: bool = false;
pub const FILES_OCR_ENABLED: bool = false;

/// File types eligible for text extraction.
pub const FILES_ENABLED_TYPES: [&str; 11] = [
    "pdf", "docx", "doc", "odt", "txt", "md", "html", "xlsx", "ods", "csv", "pptx",
];

/// Maximum file size considered for extraction, in megabytes.
pub const FILES_MAX_SIZE_MB: i64 = 50;

/// Maximum characters per extracted-text chunk.
pub const FILES_CHUNK_SIZE: i64 = 1000;

/// Overlap characters between adjacent chunks.
pub const FILES_CHUNK_OVERLAP: i64 = 100;

// =============================================================================
// N8N INTEGRATION
// =============================================================================

pub const N8N_ENABLED: bool = false;
pub const N8N_BASE_URL: &str = "http://localhost:5678";
pub const N8N_API_KEY: &str = "";
pub const N8N_WEBHOOK_SECRET: &str = "";
pub const N8N_TIMEOUT_SECS: i64 = 30;
pub const N8N_SYNC_ENABLED: bool = false;
pub const N8N_WORKFLOW_TAG: &str = "openregister";

// =============================================================================
// OBJECT VECTORIZATION
// =============================================================================

pub const OBJECTS_AUTO_VECTORIZE: bool = false;
pub const OBJECTS_VECTORIZE_RELATIONS: bool = false;
pub const OBJECTS_BATCH_SIZE: i64 = 10;
pub const OBJECTS_MAX_TEXT_LENGTH: i64 = 8000;

// =============================================================================
// SEARCH BACKEND
// =============================================================================

/// Default active search backend.
pub const SEARCH_BACKEND_ACTIVE: &str = "solr";

/// Fixed set of selectable search backends. Writes naming anything else are
/// rejected, never silently defaulted.
pub const SEARCH_BACKENDS_AVAILABLE: [&str; 2] = ["solr", "elasticsearch"];

// =============================================================================
// FACETS
// =============================================================================

pub const FACET_ORDER: i64 = 0;
pub const FACET_ENABLED: bool = true;
pub const FACET_SHOW_COUNT: bool = true;
pub const FACET_MAX_ITEMS: i64 = 10;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retention_windows_are_positive_day_multiples() {
        let windows = [
            RETENTION_DELETED_MS,
            RETENTION_VERSION_MS,
            RETENTION_AUDIT_TRAIL_MS,
            RETENTION_SEARCH_TRAIL_MS,
            RETENTION_EVENT_LOG_MS,
            RETENTION_FILE_MS,
            RETENTION_EXPORT_MS,
        ];
        for w in windows {
            assert!(w > 0);
            assert_eq!(w % DAY_MS, 0);
        }
    }

    #[test]
    fn enabled_file_types_has_eleven_entries() {
        const {
            assert!(FILES_ENABLED_TYPES.len() == 11);
        }
    }

    #[test]
    fn default_search_backend_is_available() {
        assert!(SEARCH_BACKENDS_AVAILABLE.contains(&SEARCH_BACKEND_ACTIVE));
    }

    #[test]
    fn chunk_overlap_smaller_than_chunk_size() {
        const {
            assert!(FILES_CHUNK_OVERLAP < FILES_CHUNK_SIZE);
        }
    }
}

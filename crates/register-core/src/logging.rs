//! Structured logging field name constants.
//!
//! All crates use these constants for consistent structured logging fields,
//! so log aggregation tools can query by standardized names across every
//! subsystem.
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | ERROR | Degraded service, requires operator attention |
//! | WARN  | Recoverable issue, automatic fallback applied |
//! | INFO  | Lifecycle events, settings changes |
//! | DEBUG | Decision points, config reads, defaulting choices |

/// Subsystem originating the log event.
/// Values: "api", "settings", "db", "dashboard"
pub const SUBSYSTEM: &str = "subsystem";

/// Component within a subsystem.
/// Examples: "appconfig", "solr_client", "pool"
pub const COMPONENT: &str = "component";

/// Logical operation name.
/// Examples: "read", "write", "fetch_stats"
pub const OPERATION: &str = "op";

/// Settings domain being operated on.
/// Examples: "rbac", "llm", "search_backend"
pub const DOMAIN: &str = "domain";

/// Search backend identifier ("solr", "elasticsearch").
pub const BACKEND: &str = "backend";

/// Wall-clock duration in milliseconds.
pub const DURATION_MS: &str = "duration_ms";

/// Error message when an operation fails.
pub const ERROR_MSG: &str = "error";

/// Boolean success/failure indicator.
pub const SUCCESS: &str = "success";

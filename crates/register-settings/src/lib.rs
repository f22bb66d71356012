//! # register-settings
//!
//! Settings domain services for the OpenRegister settings service.
//!
//! This crate provides:
//! - [`SettingsService`], the facade over every settings domain
//! - Read/write semantics per domain (defaulting reads, replace or merge
//!   writes)
//! - Search backend selection with validation
//! - The dashboard statistics transformer and its SOLR statistics client
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use register_settings::SettingsService;
//! use register_db::PgConfigStore;
//!
//! let store = Arc::new(PgConfigStore::new(pool));
//! let settings = SettingsService::new(store);
//!
//! let rbac = settings.get_rbac().await?;
//! let solr = settings.get_solr().await?;
//! let stats = settings.dashboard_stats().await?;
//! ```

pub mod dashboard;
pub mod facets;
pub mod files;
pub mod llm;
pub mod n8n;
pub mod objects;
pub mod rbac;
pub mod retention;
pub mod search_backend;
pub mod service;
pub mod solr;
pub mod solr_client;
pub mod store;
pub mod tenancy;

pub use dashboard::{format_bytes, round2, transform_stats};
pub use service::SettingsService;
pub use solr_client::SolrStatsClient;
pub use store::keys;

// Re-export core types
pub use register_core::*;

//! # register-db
//!
//! PostgreSQL storage layer for the OpenRegister settings service.
//!
//! This crate provides:
//! - Connection pool management
//! - The `appconfig` key-value store behind [`register_core::ConfigStore`]
//! - Identity directory lookups for the RBAC and tenancy screens
//! - An in-memory store for tests and local development

pub mod appconfig;
pub mod directory;
pub mod memory;
pub mod pool;

pub use appconfig::{ensure_schema, PgConfigStore};
pub use directory::PgDirectory;
pub use memory::MemoryConfigStore;
pub use pool::{create_pool, create_pool_with_config, PoolConfig};

// Re-export core types
pub use register_core::*;

/// Escape LIKE/ILIKE wildcard characters (`%`, `_`, `\`) in user input.
pub fn escape_like(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_like_neutralizes_wildcards() {
        assert_eq!(escape_like("100%_done"), "100\\%\\_done");
        assert_eq!(escape_like("back\\slash"), "back\\\\slash");
        assert_eq!(escape_like("plain"), "plain");
    }
}

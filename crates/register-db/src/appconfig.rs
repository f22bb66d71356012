//! Application configuration store backed by the `appconfig` table.
//!
//! Values are opaque JSON-encoded strings; all typed decoding happens in the
//! settings layer. Rows are keyed by `(app, key)` and writes upsert.

use sqlx::{PgPool, Row};
use tracing::debug;

use register_core::defaults::APP_NAMESPACE;
use register_core::{ConfigStore, Error, Result};

/// PostgreSQL key-value configuration store.
///
/// The application namespace is fixed at construction; every read and write
/// is scoped to it.
#[derive(Clone)]
pub struct PgConfigStore {
    pool: PgPool,
    app: String,
}

impl PgConfigStore {
    /// Create a store scoped to the default application namespace.
    pub fn new(pool: PgPool) -> Self {
        Self::with_namespace(pool, APP_NAMESPACE)
    }

    /// Create a store scoped to an explicit application namespace.
    pub fn with_namespace(pool: PgPool, app: impl Into<String>) -> Self {
        Self {
            pool,
            app: app.into(),
        }
    }

    /// The application namespace this store is scoped to.
    pub fn namespace(&self) -> &str {
        &self.app
    }
}

#[async_trait::async_trait]
impl ConfigStore for PgConfigStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let row = sqlx::query("SELECT value FROM appconfig WHERE app = $1 AND key = $2")
            .bind(&self.app)
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(Error::Database)?;

        debug!(
            subsystem = "database",
            component = "appconfig",
            op = "get",
            app = %self.app,
            key = key,
            found = row.is_some(),
            "Read configuration value"
        );

        Ok(row.map(|r| r.get::<String, _>("value")))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        sqlx::query(
            "INSERT INTO appconfig (app, key, value)
             VALUES ($1, $2, $3)
             ON CONFLICT (app, key) DO UPDATE SET value = EXCLUDED.value",
        )
        .bind(&self.app)
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await
        .map_err(Error::Database)?;

        debug!(
            subsystem = "database",
            component = "appconfig",
            op = "set",
            app = %self.app,
            key = key,
            "Wrote configuration value"
        );

        Ok(())
    }
}

/// Create the `appconfig` table if it does not exist.
///
/// Deployments that manage schema externally can skip this.
pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS appconfig (
            app   TEXT NOT NULL,
            key   TEXT NOT NULL,
            value TEXT NOT NULL,
            PRIMARY KEY (app, key)
        )",
    )
    .execute(pool)
    .await
    .map_err(Error::Database)?;
    Ok(())
}

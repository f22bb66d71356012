//! Identity directory queries for the RBAC and tenancy screens.

use sqlx::{PgPool, Row};
use uuid::Uuid;

use register_core::{
    Error, GroupDirectory, GroupInfo, Organisation, OrganisationDirectory, Result, UserDirectory,
    UserInfo,
};

use crate::escape_like;

/// PostgreSQL-backed identity directory.
///
/// Reads the host platform's `groups`, `users`, and `organisation` tables.
/// All lookups are read-only; the settings service never mutates identity
/// data.
#[derive(Clone)]
pub struct PgDirectory {
    pool: PgPool,
}

impl PgDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl GroupDirectory for PgDirectory {
    async fn search_groups(&self, query: &str) -> Result<Vec<GroupInfo>> {
        let pattern = format!("%{}%", escape_like(query));
        let rows = sqlx::query(
            "SELECT id, display_name FROM groups
             WHERE id ILIKE $1 OR display_name ILIKE $1
             ORDER BY display_name",
        )
        .bind(&pattern)
        .fetch_all(&self.pool)
        .await
        .map_err(Error::Database)?;

        Ok(rows
            .into_iter()
            .map(|r| GroupInfo {
                id: r.get("id"),
                display_name: r.get("display_name"),
            })
            .collect())
    }
}

#[async_trait::async_trait]
impl UserDirectory for PgDirectory {
    async fn search_users(&self, query: &str, limit: i64) -> Result<Vec<UserInfo>> {
        let pattern = format!("%{}%", escape_like(query));
        let rows = sqlx::query(
            "SELECT id, display_name FROM users
             WHERE id ILIKE $1 OR display_name ILIKE $1
             ORDER BY display_name
             LIMIT $2",
        )
        .bind(&pattern)
        .bind(limit.max(1))
        .fetch_all(&self.pool)
        .await
        .map_err(Error::Database)?;

        Ok(rows
            .into_iter()
            .map(|r| UserInfo {
                id: r.get("id"),
                display_name: r.get("display_name"),
            })
            .collect())
    }
}

#[async_trait::async_trait]
impl OrganisationDirectory for PgDirectory {
    async fn list_with_user_counts(&self) -> Result<Vec<Organisation>> {
        let rows = sqlx::query(
            "SELECT o.uuid, o.name, COUNT(m.user_id) AS user_count
             FROM organisation o
             LEFT JOIN organisation_member m ON m.organisation_uuid = o.uuid
             GROUP BY o.uuid, o.name
             ORDER BY o.name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(Error::Database)?;

        Ok(rows
            .into_iter()
            .map(|r| Organisation {
                uuid: r.get::<Uuid, _>("uuid"),
                name: r.get("name"),
                user_count: r.get::<i64, _>("user_count"),
            })
            .collect())
    }
}

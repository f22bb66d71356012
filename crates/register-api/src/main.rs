//! Settings service entry point.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use register_api::build_router;
use register_db::{create_pool, ensure_schema, PgConfigStore, PgDirectory};
use register_settings::SettingsService;

/// Default API port when `REGISTER_API_PORT` is unset.
const DEFAULT_PORT: u16 = 8420;

/// Resolve the listen port from the `REGISTER_API_PORT` value, falling back
/// to the default on absent or unparseable input.
fn resolve_port(value: Option<String>) -> u16 {
    value
        .and_then(|p| p.trim().parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "postgres://localhost/openregister".to_string());
    let pool = create_pool(&database_url).await?;
    ensure_schema(&pool).await?;

    let store = Arc::new(PgConfigStore::new(pool.clone()));
    let directory = Arc::new(PgDirectory::new(pool));
    let settings = SettingsService::new(store)
        .with_groups(directory.clone())
        .with_users(directory.clone())
        .with_organisations(directory);

    let app = build_router(Arc::new(settings));

    let port = resolve_port(std::env::var("REGISTER_API_PORT").ok());
    let addr = format!("0.0.0.0:{port}");
    info!(
        subsystem = "api",
        component = "server",
        op = "start",
        addr = %addr,
        "Starting settings API server"
    );

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_falls_back_on_missing_or_bad_input() {
        assert_eq!(resolve_port(None), DEFAULT_PORT);
        assert_eq!(resolve_port(Some("not a port".to_string())), DEFAULT_PORT);
        assert_eq!(resolve_port(Some("99999".to_string())), DEFAULT_PORT);
    }

    #[test]
    fn port_parses_explicit_value() {
        assert_eq!(resolve_port(Some("8080".to_string())), 8080);
        assert_eq!(resolve_port(Some(" 8421 ".to_string())), 8421);
    }
}

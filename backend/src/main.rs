//! Exercise tracker entry point: loads settings, selects storage and serves
//! the REST API with health checks.

mod server;

use std::io;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use exercise_tracker::inbound::http::health::HealthState;
use exercise_tracker::outbound::persistence::{DbPool, run_pending_migrations};
use server::{AppSettings, ServerConfig, create_server};

#[actix_web::main]
async fn main() -> io::Result<()> {
    let dotenv = dotenvy::dotenv();

    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }
    match dotenv {
        Ok(path) => info!(path = %path.display(), "loaded .env file"),
        Err(e) if !e.not_found() => warn!(error = %e, "failed to load .env file"),
        Err(_) => {}
    }

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .map_err(|e| io::Error::other(format!("failed to load settings: {e}")))?;
    let mut config = ServerConfig::new(settings.bind_addr()?);

    if let Some(pool_config) = settings.pool_config() {
        run_pending_migrations(pool_config.database_url())
            .await
            .map_err(|e| io::Error::other(e.to_string()))?;
        let pool = DbPool::new(pool_config)
            .await
            .map_err(|e| io::Error::other(e.to_string()))?;
        config = config.with_db_pool(pool);
    } else {
        info!("no database configured; data will not survive a restart");
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    let result = server.await;
    health_state.mark_unhealthy();
    result
}

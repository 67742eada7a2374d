//! Backend entry-point: loads settings, wires storage, and serves the REST API.

mod server;

use std::net::{SocketAddr, ToSocketAddrs};

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use fleet_backend::inbound::http::health::HealthState;
use fleet_backend::outbound::persistence::{DbPool, PoolConfig};
use fleet_backend::settings::ServerSettings;
use server::{ServerConfig, create_server};

fn resolve_bind_addr(settings: &ServerSettings) -> std::io::Result<SocketAddr> {
    (settings.host(), settings.port())
        .to_socket_addrs()?
        .next()
        .ok_or_else(|| {
            std::io::Error::other(format!(
                "no address for {}:{}",
                settings.host(),
                settings.port()
            ))
        })
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let bind_addr = resolve_bind_addr(&settings)?;

    let mut config =
        ServerConfig::new(bind_addr).with_schema_on_startup(settings.init_schema_on_startup);
    if let Some(url) = settings.database_url() {
        let pool = DbPool::new(PoolConfig::new(url).with_max_size(settings.pool_max_size()))
            .await
            .map_err(|e| std::io::Error::other(format!("failed to build database pool: {e}")))?;
        config = config.with_database(pool, url);
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config).await?;
    info!(%bind_addr, "listening");
    server.await
}

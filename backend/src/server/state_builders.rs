//! Builders wiring storage adapters into services and HTTP state.

use std::sync::Arc;

use actix_web::web;
use mockable::DefaultClock;

use fleet_backend::domain::ports::{DriverRepository, SchemaInitializer};
use fleet_backend::domain::{DriverService, SchemaService};
use fleet_backend::inbound::http::state::HttpState;
use fleet_backend::outbound::memory::InMemoryFleetStore;
use fleet_backend::outbound::persistence::{DieselDriverRepository, DieselSchemaInitializer};

use super::ServerConfig;

/// Wrap a repository and schema initialiser in services and bundle them.
fn state_from<R, S>(repository: Arc<R>, initializer: Arc<S>) -> HttpState
where
    R: DriverRepository + 'static,
    S: SchemaInitializer + 'static,
{
    let drivers = Arc::new(DriverService::new(repository));
    let schema = Arc::new(SchemaService::new(initializer));
    HttpState::new(drivers.clone(), drivers, schema)
}

/// Build the HTTP state using Diesel adapters when a database is configured,
/// otherwise an in-memory store that lives as long as the process.
pub(crate) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let state = match &config.database {
        Some(database) => state_from(
            Arc::new(DieselDriverRepository::new(database.pool.clone())),
            Arc::new(DieselSchemaInitializer::new(database.url.clone())),
        ),
        None => {
            tracing::warn!("no database configured; using the in-memory store");
            let store = Arc::new(InMemoryFleetStore::new(DefaultClock));
            state_from(store.clone(), store)
        }
    };
    web::Data::new(state)
}

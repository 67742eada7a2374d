//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{DriversCommand, DriversQuery, SchemaCommand};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub drivers: Arc<dyn DriversCommand>,
    pub drivers_query: Arc<dyn DriversQuery>,
    pub schema: Arc<dyn SchemaCommand>,
}

impl HttpState {
    /// Bundle the driving ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use fleet_backend::domain::{DriverService, SchemaService};
    /// use fleet_backend::inbound::http::state::HttpState;
    /// use fleet_backend::outbound::memory::InMemoryFleetStore;
    /// use mockable::DefaultClock;
    ///
    /// let store = Arc::new(InMemoryFleetStore::new(DefaultClock));
    /// let drivers = Arc::new(DriverService::new(store.clone()));
    /// let state = HttpState::new(drivers.clone(), drivers, Arc::new(SchemaService::new(store)));
    /// # let _ = state;
    /// ```
    pub fn new(
        drivers: Arc<dyn DriversCommand>,
        drivers_query: Arc<dyn DriversQuery>,
        schema: Arc<dyn SchemaCommand>,
    ) -> Self {
        Self {
            drivers,
            drivers_query,
            schema,
        }
    }
}

//! HTTP server configuration object and helpers.

use fleet_backend::outbound::persistence::DbPool;
use std::net::SocketAddr;

/// Connection pool plus the URL the schema initialiser connects with.
#[derive(Clone)]
pub(crate) struct DatabaseHandles {
    pub(crate) pool: DbPool,
    pub(crate) url: String,
}

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) database: Option<DatabaseHandles>,
    pub(crate) init_schema_on_startup: bool,
}

impl ServerConfig {
    /// Configuration binding `bind_addr` and backed by the in-memory store.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            database: None,
            init_schema_on_startup: false,
        }
    }

    /// Attach a database connection pool for persistence adapters.
    ///
    /// When provided, the server uses the Diesel adapters instead of the
    /// in-memory store.
    #[must_use]
    pub fn with_database(mut self, pool: DbPool, database_url: impl Into<String>) -> Self {
        self.database = Some(DatabaseHandles {
            pool,
            url: database_url.into(),
        });
        self
    }

    /// Run the schema initialiser before binding.
    #[must_use]
    pub fn with_schema_on_startup(mut self, enabled: bool) -> Self {
        self.init_schema_on_startup = enabled;
        self
    }
}

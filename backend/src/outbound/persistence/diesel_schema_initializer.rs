//! Schema creation backed by embedded Diesel migrations.
//!
//! Migrations use `CREATE ... IF NOT EXISTS`, so running them against a
//! database whose tables were created by other tooling is harmless. Diesel's
//! migration harness is synchronous; it runs on the blocking pool with a
//! dedicated connection rather than a pooled async one.

use async_trait::async_trait;
use diesel::{Connection, PgConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

use crate::domain::ports::{SchemaInitializer, SchemaInitializerError};

/// Migrations compiled into the binary from `backend/migrations`.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Runs pending migrations against `database_url`.
#[derive(Debug, Clone)]
pub struct DieselSchemaInitializer {
    database_url: String,
}

impl DieselSchemaInitializer {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
        }
    }
}

fn run_migrations(database_url: &str) -> Result<usize, SchemaInitializerError> {
    let mut conn = PgConnection::establish(database_url).map_err(|err| {
        tracing::debug!(error = %err, "schema initialiser could not connect");
        SchemaInitializerError::connection(err.to_string())
    })?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| SchemaInitializerError::migration(err.to_string()))?;
    Ok(applied.len())
}

#[async_trait]
impl SchemaInitializer for DieselSchemaInitializer {
    async fn ensure_schema(&self) -> Result<(), SchemaInitializerError> {
        let database_url = self.database_url.clone();
        let applied = tokio::task::spawn_blocking(move || run_migrations(&database_url))
            .await
            .map_err(|err| SchemaInitializerError::migration(format!("migration task: {err}")))??;
        tracing::info!(applied, "pending migrations applied");
        Ok(())
    }
}

//! Port for creating the relational schema on demand.

use async_trait::async_trait;

use super::define_port_error;

define_port_error! {
    /// Errors raised while creating tables.
    pub enum SchemaInitializerError {
        /// Storage could not be reached.
        Connection { message: String } =>
            "schema initialiser connection failed: {message}",
        /// A migration failed to apply.
        Migration { message: String } =>
            "schema migration failed: {message}",
    }
}

/// Creates any missing tables. Never drops or alters existing ones, so
/// repeated calls are harmless.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SchemaInitializer: Send + Sync {
    async fn ensure_schema(&self) -> Result<(), SchemaInitializerError>;
}

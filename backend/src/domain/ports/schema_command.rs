//! Driving port for schema initialisation.

use async_trait::async_trait;

use crate::domain::Error;

/// Ensure the tables backing drivers and vehicles exist.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SchemaCommand: Send + Sync {
    async fn initialise_schema(&self) -> Result<(), Error>;
}

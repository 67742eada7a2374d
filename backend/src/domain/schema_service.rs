//! Schema initialisation service.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::Error;
use crate::domain::ports::{SchemaCommand, SchemaInitializer, SchemaInitializerError};

/// Implements [`SchemaCommand`] over a [`SchemaInitializer`].
#[derive(Clone)]
pub struct SchemaService<S> {
    initializer: Arc<S>,
}

impl<S> SchemaService<S> {
    pub fn new(initializer: Arc<S>) -> Self {
        Self { initializer }
    }
}

#[async_trait]
impl<S> SchemaCommand for SchemaService<S>
where
    S: SchemaInitializer,
{
    async fn initialise_schema(&self) -> Result<(), Error> {
        self.initializer.ensure_schema().await.map_err(|err| match err {
            SchemaInitializerError::Connection { message } => {
                Error::service_unavailable(format!("schema initialiser unavailable: {message}"))
            }
            SchemaInitializerError::Migration { message } => {
                Error::internal(format!("schema initialisation failed: {message}"))
            }
        })?;
        tracing::info!("schema initialised");
        Ok(())
    }
}

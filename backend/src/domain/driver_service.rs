//! Driver domain service.
//!
//! Implements the driving ports for drivers over a [`DriverRepository`],
//! turning repository failures and missing rows into domain [`Error`]s.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use crate::domain::ports::{DriverRepository, DriverRepositoryError, DriversCommand, DriversQuery};
use crate::domain::{Driver, DriverChanges, DriverFilter, DriverId, Error, NewDriver};

/// Driver service implementing [`DriversQuery`] and [`DriversCommand`].
#[derive(Clone)]
pub struct DriverService<R> {
    repository: Arc<R>,
}

impl<R> DriverService<R> {
    /// Create a new service over the given repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

fn map_repository_error(error: DriverRepositoryError) -> Error {
    match error {
        DriverRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("driver repository unavailable: {message}"))
        }
        DriverRepositoryError::Query { message } => {
            Error::internal(format!("driver repository error: {message}"))
        }
        DriverRepositoryError::Conflict { message } => Error::conflict(message),
    }
}

fn driver_not_found(id: DriverId) -> Error {
    Error::not_found(format!("driver {id} not found")).with_details(json!({
        "id": id.as_i32(),
        "code": "driver_not_found",
    }))
}

#[async_trait]
impl<R> DriversQuery for DriverService<R>
where
    R: DriverRepository,
{
    async fn list_drivers(&self, filter: &DriverFilter) -> Result<Vec<Driver>, Error> {
        self.repository
            .list(filter)
            .await
            .map_err(map_repository_error)
    }

    async fn get_driver(&self, id: DriverId) -> Result<Driver, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| driver_not_found(id))
    }
}

#[async_trait]
impl<R> DriversCommand for DriverService<R>
where
    R: DriverRepository,
{
    async fn create_driver(&self, driver: NewDriver) -> Result<Driver, Error> {
        let created = self
            .repository
            .create(&driver)
            .await
            .map_err(map_repository_error)?;
        tracing::debug!(driver_id = %created.id, "driver created");
        Ok(created)
    }

    async fn update_driver(&self, id: DriverId, changes: DriverChanges) -> Result<Driver, Error> {
        self.repository
            .update(id, &changes)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| driver_not_found(id))
    }

    async fn delete_driver(&self, id: DriverId) -> Result<(), Error> {
        let removed = self
            .repository
            .delete(id)
            .await
            .map_err(map_repository_error)?;
        if !removed {
            return Err(driver_not_found(id));
        }
        tracing::debug!(driver_id = %id, "driver deleted");
        Ok(())
    }
}

#[cfg(test)]
#[path = "driver_service_tests.rs"]
mod tests;

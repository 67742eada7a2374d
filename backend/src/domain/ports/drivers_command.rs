//! Driving port for driver mutations.

use async_trait::async_trait;

use crate::domain::{Driver, DriverChanges, DriverId, Error, NewDriver};

/// Domain use-case port for creating, updating and deleting drivers.
///
/// # Errors
///
/// Update and delete return [`crate::domain::ErrorCode::NotFound`] for unknown
/// ids. Delete returns [`crate::domain::ErrorCode::Conflict`] while vehicles
/// still reference the driver.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DriversCommand: Send + Sync {
    async fn create_driver(&self, driver: NewDriver) -> Result<Driver, Error>;

    async fn update_driver(&self, id: DriverId, changes: DriverChanges) -> Result<Driver, Error>;

    async fn delete_driver(&self, id: DriverId) -> Result<(), Error>;
}

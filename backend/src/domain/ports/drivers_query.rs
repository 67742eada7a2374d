//! Driving port for driver reads.
//!
//! Inbound adapters use this port to read drivers without importing outbound
//! persistence concerns.

use async_trait::async_trait;

use crate::domain::{Driver, DriverFilter, DriverId, Error};

/// Domain use-case port for reading drivers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DriversQuery: Send + Sync {
    /// Drivers matching `filter`, ordered by id ascending.
    async fn list_drivers(&self, filter: &DriverFilter) -> Result<Vec<Driver>, Error>;

    /// A single driver.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ErrorCode::NotFound`] when the id is unknown.
    async fn get_driver(&self, id: DriverId) -> Result<Driver, Error>;
}

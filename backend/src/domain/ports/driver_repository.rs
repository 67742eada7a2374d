//! Port for driver persistence.
//!
//! The [`DriverRepository`] trait owns every read and write on the `drivers`
//! table. Adapters translate storage failures into
//! [`DriverRepositoryError`] so services never see driver-specific errors.

use async_trait::async_trait;

use crate::domain::{Driver, DriverChanges, DriverFilter, DriverId, NewDriver};

use super::define_port_error;

define_port_error! {
    /// Errors raised by driver repository adapters.
    pub enum DriverRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "driver repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "driver repository query failed: {message}",
        /// A uniqueness or referential constraint rejected the write.
        Conflict { message: String } =>
            "driver repository conflict: {message}",
    }
}

/// Port for driver storage and retrieval.
///
/// # Semantics
///
/// - `list` returns drivers ordered by id ascending.
/// - `update` with empty changes leaves the row, including `updated_at`,
///   untouched and behaves like `find_by_id`.
/// - `delete` fails with [`DriverRepositoryError::Conflict`] while vehicles
///   still reference the driver.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DriverRepository: Send + Sync {
    /// Fetch every driver satisfying `filter`.
    async fn list(&self, filter: &DriverFilter) -> Result<Vec<Driver>, DriverRepositoryError>;

    /// Fetch a single driver. Returns `None` when no row exists.
    async fn find_by_id(&self, id: DriverId) -> Result<Option<Driver>, DriverRepositoryError>;

    /// Insert a driver, returning the stored row.
    async fn create(&self, driver: &NewDriver) -> Result<Driver, DriverRepositoryError>;

    /// Apply a partial update. Returns `None` when no row exists.
    async fn update(
        &self,
        id: DriverId,
        changes: &DriverChanges,
    ) -> Result<Option<Driver>, DriverRepositoryError>;

    /// Remove a driver. Returns `false` when no row existed.
    async fn delete(&self, id: DriverId) -> Result<bool, DriverRepositoryError>;
}

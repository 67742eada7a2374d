//! Port for vehicle persistence.
//!
//! Vehicles have no HTTP surface. The port exists so tooling and tests can
//! attach vehicles to drivers and exercise the referential rules.

use async_trait::async_trait;

use crate::domain::{DriverId, NewVehicle, Vehicle};

use super::define_port_error;

define_port_error! {
    /// Errors raised by vehicle repository adapters.
    pub enum VehicleRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "vehicle repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "vehicle repository query failed: {message}",
        /// Duplicate plate number or unknown driver.
        Conflict { message: String } =>
            "vehicle repository conflict: {message}",
    }
}

/// Port for vehicle storage.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VehicleRepository: Send + Sync {
    /// Insert a vehicle.
    ///
    /// Fails with [`VehicleRepositoryError::Conflict`] when the plate number
    /// is already registered or `driver_id` names no driver.
    async fn create(&self, vehicle: &NewVehicle) -> Result<Vehicle, VehicleRepositoryError>;

    /// Vehicles owned by a driver, ordered by id ascending.
    async fn list_for_driver(
        &self,
        driver_id: DriverId,
    ) -> Result<Vec<Vehicle>, VehicleRepositoryError>;
}

//! Process-local driver and vehicle store.
//!
//! Emulates the constraints the PostgreSQL schema enforces: sequential ids
//! that are never reused, unique plate numbers, vehicles referencing a live
//! driver, and `updated_at` refreshed on every update without ever moving
//! backwards. Timestamps come from the injected [`Clock`] so tests can
//! control them.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockable::Clock;

use crate::domain::ports::{
    DriverRepository, DriverRepositoryError, SchemaInitializer, SchemaInitializerError,
    VehicleRepository, VehicleRepositoryError,
};
use crate::domain::{
    Driver, DriverChanges, DriverFilter, DriverId, NewDriver, NewVehicle, Vehicle, VehicleId,
};

/// Thread-safe in-memory implementation of the storage ports.
#[derive(Debug, Clone)]
pub struct InMemoryFleetStore<C: Clock + Send + Sync> {
    state: Arc<RwLock<FleetState>>,
    clock: C,
}

#[derive(Debug, Default)]
struct FleetState {
    drivers: BTreeMap<DriverId, Driver>,
    vehicles: BTreeMap<VehicleId, Vehicle>,
    last_driver_id: i32,
    last_vehicle_id: i32,
}

impl FleetState {
    fn next_driver_id(&mut self) -> Option<DriverId> {
        self.last_driver_id = self.last_driver_id.checked_add(1)?;
        Some(DriverId::new(self.last_driver_id))
    }

    fn next_vehicle_id(&mut self) -> Option<VehicleId> {
        self.last_vehicle_id = self.last_vehicle_id.checked_add(1)?;
        Some(VehicleId::new(self.last_vehicle_id))
    }

    fn has_vehicles(&self, driver_id: DriverId) -> bool {
        self.vehicles.values().any(|v| v.driver_id == driver_id)
    }
}

impl<C: Clock + Send + Sync> InMemoryFleetStore<C> {
    /// Creates an empty store reading time from `clock`.
    #[must_use]
    pub fn new(clock: C) -> Self {
        Self {
            state: Arc::new(RwLock::new(FleetState::default())),
            clock,
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, FleetState>, String> {
        self.state.read().map_err(|err| err.to_string())
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, FleetState>, String> {
        self.state.write().map_err(|err| err.to_string())
    }

    /// Current time, never earlier than `floor`.
    fn now_after(&self, floor: DateTime<Utc>) -> DateTime<Utc> {
        self.clock.utc().max(floor)
    }
}

#[async_trait]
impl<C: Clock + Send + Sync> DriverRepository for InMemoryFleetStore<C> {
    async fn list(&self, filter: &DriverFilter) -> Result<Vec<Driver>, DriverRepositoryError> {
        let state = self.read().map_err(DriverRepositoryError::query)?;
        Ok(state
            .drivers
            .values()
            .filter(|driver| filter.matches(driver))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: DriverId) -> Result<Option<Driver>, DriverRepositoryError> {
        let state = self.read().map_err(DriverRepositoryError::query)?;
        Ok(state.drivers.get(&id).cloned())
    }

    async fn create(&self, driver: &NewDriver) -> Result<Driver, DriverRepositoryError> {
        let mut state = self.write().map_err(DriverRepositoryError::query)?;
        let id = state
            .next_driver_id()
            .ok_or_else(|| DriverRepositoryError::query("driver id sequence exhausted"))?;
        let now = self.clock.utc();
        let stored = Driver {
            id,
            first_name: driver.first_name.clone(),
            last_name: driver.last_name.clone(),
            created_at: now,
            updated_at: now,
        };
        state.drivers.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(
        &self,
        id: DriverId,
        changes: &DriverChanges,
    ) -> Result<Option<Driver>, DriverRepositoryError> {
        let mut state = self.write().map_err(DriverRepositoryError::query)?;
        let Some(driver) = state.drivers.get_mut(&id) else {
            return Ok(None);
        };
        if changes.apply_to(driver) {
            driver.updated_at = self.now_after(driver.updated_at);
        }
        Ok(Some(driver.clone()))
    }

    async fn delete(&self, id: DriverId) -> Result<bool, DriverRepositoryError> {
        let mut state = self.write().map_err(DriverRepositoryError::query)?;
        if !state.drivers.contains_key(&id) {
            return Ok(false);
        }
        if state.has_vehicles(id) {
            return Err(DriverRepositoryError::conflict(
                "driver is still referenced by vehicles",
            ));
        }
        state.drivers.remove(&id);
        Ok(true)
    }
}

#[async_trait]
impl<C: Clock + Send + Sync> VehicleRepository for InMemoryFleetStore<C> {
    async fn create(&self, vehicle: &NewVehicle) -> Result<Vehicle, VehicleRepositoryError> {
        let mut state = self.write().map_err(VehicleRepositoryError::query)?;
        if !state.drivers.contains_key(&vehicle.driver_id) {
            return Err(VehicleRepositoryError::conflict(format!(
                "driver {} does not exist",
                vehicle.driver_id
            )));
        }
        if state
            .vehicles
            .values()
            .any(|existing| existing.plate_number == vehicle.plate_number)
        {
            return Err(VehicleRepositoryError::conflict(format!(
                "plate number {} is already registered",
                vehicle.plate_number
            )));
        }
        let id = state
            .next_vehicle_id()
            .ok_or_else(|| VehicleRepositoryError::query("vehicle id sequence exhausted"))?;
        let now = self.clock.utc();
        let stored = Vehicle {
            id,
            driver_id: vehicle.driver_id,
            make: vehicle.make.clone(),
            model: vehicle.model.clone(),
            plate_number: vehicle.plate_number.clone(),
            created_at: now,
            updated_at: now,
        };
        state.vehicles.insert(id, stored.clone());
        Ok(stored)
    }

    async fn list_for_driver(
        &self,
        driver_id: DriverId,
    ) -> Result<Vec<Vehicle>, VehicleRepositoryError> {
        let state = self.read().map_err(VehicleRepositoryError::query)?;
        Ok(state
            .vehicles
            .values()
            .filter(|v| v.driver_id == driver_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl<C: Clock + Send + Sync> SchemaInitializer for InMemoryFleetStore<C> {
    async fn ensure_schema(&self) -> Result<(), SchemaInitializerError> {
        Ok(())
    }
}

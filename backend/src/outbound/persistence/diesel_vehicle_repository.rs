//! PostgreSQL-backed `VehicleRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::DatabaseErrorKind;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{VehicleRepository, VehicleRepositoryError};
use crate::domain::{DriverId, NewVehicle, Vehicle};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewVehicleRow, VehicleRow};
use super::pool::DbPool;
use super::schema::vehicles;

/// Diesel-backed implementation of the [`VehicleRepository`] port.
#[derive(Clone)]
pub struct DieselVehicleRepository {
    pool: DbPool,
}

impl DieselVehicleRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn row_to_vehicle(row: VehicleRow) -> Result<Vehicle, VehicleRepositoryError> {
    let id = row.id;
    Vehicle::try_from(row).map_err(|err| {
        tracing::warn!(vehicle_id = id, error = %err, "stored vehicle row failed validation");
        VehicleRepositoryError::query(format!("stored vehicle {id} is invalid: {err}"))
    })
}

#[async_trait]
impl VehicleRepository for DieselVehicleRepository {
    async fn create(&self, vehicle: &NewVehicle) -> Result<Vehicle, VehicleRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = diesel::insert_into(vehicles::table)
            .values(NewVehicleRow {
                driver_id: vehicle.driver_id.as_i32(),
                make: vehicle.make.as_deref(),
                model: vehicle.model.as_deref(),
                plate_number: vehicle.plate_number.as_str(),
            })
            .returning(VehicleRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|err| {
                map_diesel_error(err, |kind| match kind {
                    DatabaseErrorKind::UniqueViolation => format!(
                        "plate number {} is already registered",
                        vehicle.plate_number
                    ),
                    _ => format!("driver {} does not exist", vehicle.driver_id),
                })
            })?;

        row_to_vehicle(row)
    }

    async fn list_for_driver(
        &self,
        driver_id: DriverId,
    ) -> Result<Vec<Vehicle>, VehicleRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows = vehicles::table
            .filter(vehicles::driver_id.eq(driver_id.as_i32()))
            .select(VehicleRow::as_select())
            .order(vehicles::id.asc())
            .load::<VehicleRow>(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, |_| "unexpected vehicle conflict".to_owned()))?;

        rows.into_iter().map(row_to_vehicle).collect()
    }
}

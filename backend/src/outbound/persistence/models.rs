//! Internal Diesel row structs.
//!
//! Rows never leave the persistence layer; adapters convert them into domain
//! types, re-validating column widths on the way out.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::domain::{
    Driver, DriverId, DriverValidationError, FirstName, LastName, PlateNumber, Vehicle, VehicleId,
    VehicleValidationError,
};

use super::schema::{drivers, vehicles};

/// Row read from `drivers`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = drivers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct DriverRow {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<DriverRow> for Driver {
    type Error = DriverValidationError;

    fn try_from(row: DriverRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: DriverId::new(row.id),
            first_name: FirstName::new(row.first_name)?,
            last_name: LastName::new(row.last_name)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Insert payload for `drivers`; timestamps come from column defaults.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = drivers)]
pub(crate) struct NewDriverRow<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
}

/// Partial update for `drivers`. `None` fields are skipped by Diesel.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = drivers)]
pub(crate) struct DriverChangeset<'a> {
    pub first_name: Option<&'a str>,
    pub last_name: Option<&'a str>,
}

/// Row read from `vehicles`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = vehicles)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct VehicleRow {
    pub id: i32,
    pub driver_id: i32,
    pub make: Option<String>,
    pub model: Option<String>,
    pub plate_number: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<VehicleRow> for Vehicle {
    type Error = VehicleValidationError;

    fn try_from(row: VehicleRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: VehicleId::new(row.id),
            driver_id: DriverId::new(row.driver_id),
            make: row.make,
            model: row.model,
            plate_number: PlateNumber::new(row.plate_number)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = vehicles)]
pub(crate) struct NewVehicleRow<'a> {
    pub driver_id: i32,
    pub make: Option<&'a str>,
    pub model: Option<&'a str>,
    pub plate_number: &'a str,
}

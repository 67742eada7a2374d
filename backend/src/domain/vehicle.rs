//! Vehicle data model.

use std::fmt;

use chrono::{DateTime, Utc};

use super::driver::DriverId;

/// Maximum length of a plate number, in characters.
pub const PLATE_NUMBER_MAX: usize = 20;

/// Validation errors raised while constructing vehicle values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VehicleValidationError {
    #[error("plate number must be at most {max} characters, got {actual}")]
    PlateNumberTooLong { max: usize, actual: usize },
}

/// Primary key of a vehicle row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VehicleId(i32);

impl VehicleId {
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    pub const fn as_i32(self) -> i32 {
        self.0
    }
}

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Registration plate; unique across all vehicles.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlateNumber(String);

impl PlateNumber {
    /// Validate the length and wrap the value.
    pub fn new(value: impl Into<String>) -> Result<Self, VehicleValidationError> {
        let value = value.into();
        let actual = value.chars().count();
        if actual > PLATE_NUMBER_MAX {
            return Err(VehicleValidationError::PlateNumberTooLong {
                max: PLATE_NUMBER_MAX,
                actual,
            });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for PlateNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A persisted vehicle.
///
/// `driver_id` always references an existing driver; storage enforces this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    pub id: VehicleId,
    pub driver_id: DriverId,
    pub make: Option<String>,
    pub model: Option<String>,
    pub plate_number: PlateNumber,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Values required to insert a vehicle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVehicle {
    pub driver_id: DriverId,
    pub make: Option<String>,
    pub model: Option<String>,
    pub plate_number: PlateNumber,
}

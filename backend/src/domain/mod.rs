//! Domain primitives, services and ports.
//!
//! Purpose: define strongly typed driver and vehicle entities used by the API
//! and persistence layers, plus the services that implement the driving
//! ports.
//!
//! Public surface:
//! - Error (alias to `error::Error`): API error response payload.
//! - ErrorCode (alias to `error::ErrorCode`): stable error identifier.
//! - Driver, Vehicle and their validated field types.
//! - DriverFilter: list filtering parsed from query parameters.

pub mod driver;
pub mod driver_filter;
mod driver_service;
pub mod error;
pub mod ports;
mod schema_service;
pub mod trace_id;
pub mod vehicle;

pub use self::driver::{
    Driver, DriverChanges, DriverId, DriverValidationError, FirstName, LastName, NewDriver,
};
pub use self::driver_filter::{DriverFilter, DriverFilterError, DriverPredicate};
pub use self::driver_service::DriverService;
pub use self::error::{Error, ErrorCode, TRACE_ID_HEADER};
pub use self::schema_service::SchemaService;
pub use self::trace_id::TraceId;
pub use self::vehicle::{NewVehicle, PlateNumber, Vehicle, VehicleId, VehicleValidationError};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use fleet_backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<()> {
///     Err(Error::not_found("driver 1 not found"))
/// }
/// # assert!(handler().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;

//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`*Repository`, [`SchemaInitializer`]) are implemented by
//! outbound adapters. Driving ports ([`DriversQuery`], [`DriversCommand`],
//! [`SchemaCommand`]) are consumed by inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod driver_repository;
mod drivers_command;
mod drivers_query;
mod schema_command;
mod schema_initializer;
mod vehicle_repository;

#[cfg(test)]
pub use driver_repository::MockDriverRepository;
pub use driver_repository::{DriverRepository, DriverRepositoryError};
#[cfg(test)]
pub use drivers_command::MockDriversCommand;
pub use drivers_command::DriversCommand;
#[cfg(test)]
pub use drivers_query::MockDriversQuery;
pub use drivers_query::DriversQuery;
#[cfg(test)]
pub use schema_command::MockSchemaCommand;
pub use schema_command::SchemaCommand;
#[cfg(test)]
pub use schema_initializer::MockSchemaInitializer;
pub use schema_initializer::{SchemaInitializer, SchemaInitializerError};
#[cfg(test)]
pub use vehicle_repository::MockVehicleRepository;
pub use vehicle_repository::{VehicleRepository, VehicleRepositoryError};

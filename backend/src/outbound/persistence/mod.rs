//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repositories are thin translators between Diesel rows and domain types;
//! row structs (`models.rs`) and table definitions (`schema.rs`) stay private
//! to this module. Connections come from a shared [`DbPool`].
//!
//! # Example
//!
//! ```no_run
//! use fleet_backend::outbound::persistence::{DbPool, DieselDriverRepository, PoolConfig};
//!
//! # async fn wire() -> Result<(), fleet_backend::outbound::persistence::PoolError> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/fleet")).await?;
//! let drivers = DieselDriverRepository::new(pool);
//! # let _ = drivers;
//! # Ok(())
//! # }
//! ```

mod diesel_driver_repository;
mod diesel_error_mapping;
mod diesel_schema_initializer;
mod diesel_vehicle_repository;
mod models;
mod pool;
mod schema;

pub use diesel_driver_repository::DieselDriverRepository;
pub use diesel_schema_initializer::{DieselSchemaInitializer, MIGRATIONS};
pub use diesel_vehicle_repository::DieselVehicleRepository;
pub use pool::{DEFAULT_MAX_SIZE, DbPool, PoolConfig, PoolError};

//! HTTP inbound adapter exposing REST endpoints.

pub mod drivers;
pub mod error;
pub mod health;
pub mod schema_init;
pub mod schemas;
pub mod state;
pub(crate) mod validation;

pub use error::ApiResult;

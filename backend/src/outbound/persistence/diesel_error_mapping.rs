//! Shared Diesel and pool error mapping for the fleet repositories.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::{debug, warn};

use crate::domain::ports::{DriverRepositoryError, VehicleRepositoryError};

use super::pool::PoolError;

/// Port error types the Diesel adapters can produce.
pub(crate) trait StorageError: Sized {
    fn connection_failed(message: String) -> Self;
    fn query_failed(message: String) -> Self;
    fn constraint_violated(message: String) -> Self;
}

macro_rules! impl_storage_error {
    ($($error:ty),* $(,)?) => {
        $(
            impl StorageError for $error {
                fn connection_failed(message: String) -> Self {
                    Self::connection(message)
                }

                fn query_failed(message: String) -> Self {
                    Self::query(message)
                }

                fn constraint_violated(message: String) -> Self {
                    Self::conflict(message)
                }
            }
        )*
    };
}

impl_storage_error!(DriverRepositoryError, VehicleRepositoryError);

/// Pool failures always surface as connection errors.
pub(crate) fn map_pool_error<E: StorageError>(error: PoolError) -> E {
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    E::connection_failed(message)
}

/// Map a Diesel error into a port error.
///
/// Unique and foreign-key violations become conflicts, described by
/// `describe_conflict`. Closed connections become connection errors.
/// Everything else is a query error with a generic message.
pub(crate) fn map_diesel_error<E, F>(error: DieselError, describe_conflict: F) -> E
where
    E: StorageError,
    F: FnOnce(&DatabaseErrorKind) -> String,
{
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(
                ?kind,
                message = info.message(),
                constraint = info.constraint_name(),
                "diesel operation failed"
            );
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(
            kind @ (DatabaseErrorKind::UniqueViolation | DatabaseErrorKind::ForeignKeyViolation),
            _,
        ) => E::constraint_violated(describe_conflict(&kind)),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            E::connection_failed("database connection error".to_owned())
        }
        DieselError::DatabaseError(
            kind @ (DatabaseErrorKind::CheckViolation | DatabaseErrorKind::NotNullViolation),
            info,
        ) => {
            warn!(?kind, message = info.message(), "unexpected constraint violation");
            E::query_failed("database constraint violated".to_owned())
        }
        DieselError::QueryBuilderError(_) => E::query_failed("database query error".to_owned()),
        _ => E::query_failed("database error".to_owned()),
    }
}

//! PostgreSQL-backed `DriverRepository` implementation using Diesel ORM.
//!
//! List filters are translated into a boxed query, one `WHERE` clause per
//! predicate. `updated_at` is maintained by a database trigger.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{DriverRepository, DriverRepositoryError};
use crate::domain::{Driver, DriverChanges, DriverFilter, DriverId, DriverPredicate, NewDriver};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{DriverChangeset, DriverRow, NewDriverRow};
use super::pool::DbPool;
use super::schema::drivers;

/// Diesel-backed implementation of the [`DriverRepository`] port.
#[derive(Clone)]
pub struct DieselDriverRepository {
    pool: DbPool,
}

impl DieselDriverRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_error(error: diesel::result::Error) -> DriverRepositoryError {
    // Drivers carry no unique columns; the only constraint a write can trip
    // is the vehicles foreign key on delete.
    map_diesel_error(error, |_| "driver is still referenced by vehicles".to_owned())
}

fn row_to_driver(row: DriverRow) -> Result<Driver, DriverRepositoryError> {
    let id = row.id;
    Driver::try_from(row).map_err(|err| {
        tracing::warn!(driver_id = id, error = %err, "stored driver row failed validation");
        DriverRepositoryError::query(format!("stored driver {id} is invalid: {err}"))
    })
}

/// Escape `LIKE` metacharacters so `needle` matches literally.
fn like_contains_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for ch in needle.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

#[async_trait]
impl DriverRepository for DieselDriverRepository {
    async fn list(&self, filter: &DriverFilter) -> Result<Vec<Driver>, DriverRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let mut query = drivers::table
            .select(DriverRow::as_select())
            .order(drivers::id.asc())
            .into_boxed();

        for predicate in filter.predicates() {
            query = match predicate {
                DriverPredicate::CreatedAtOnOrBefore(bound) => {
                    query.filter(drivers::created_at.le(*bound))
                }
                DriverPredicate::CreatedAtOnOrAfter(bound) => {
                    query.filter(drivers::created_at.ge(*bound))
                }
                DriverPredicate::LastNameContains(needle) => {
                    query.filter(drivers::last_name.like(like_contains_pattern(needle)))
                }
            };
        }

        let rows = query
            .load::<DriverRow>(&mut conn)
            .await
            .map_err(map_error)?;
        rows.into_iter().map(row_to_driver).collect()
    }

    async fn find_by_id(&self, id: DriverId) -> Result<Option<Driver>, DriverRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = drivers::table
            .find(id.as_i32())
            .select(DriverRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_error)?;

        row.map(row_to_driver).transpose()
    }

    async fn create(&self, driver: &NewDriver) -> Result<Driver, DriverRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = diesel::insert_into(drivers::table)
            .values(NewDriverRow {
                first_name: driver.first_name.as_str(),
                last_name: driver.last_name.as_str(),
            })
            .returning(DriverRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_error)?;

        row_to_driver(row)
    }

    async fn update(
        &self,
        id: DriverId,
        changes: &DriverChanges,
    ) -> Result<Option<Driver>, DriverRepositoryError> {
        if changes.is_empty() {
            return self.find_by_id(id).await;
        }

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let changeset = DriverChangeset {
            first_name: changes.first_name.as_ref().map(|name| name.as_str()),
            last_name: changes.last_name.as_ref().map(|name| name.as_str()),
        };
        let row = diesel::update(drivers::table.find(id.as_i32()))
            .set(&changeset)
            .returning(DriverRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_error)?;

        row.map(row_to_driver).transpose()
    }

    async fn delete(&self, id: DriverId) -> Result<bool, DriverRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(drivers::table.find(id.as_i32()))
            .execute(&mut conn)
            .await
            .map_err(map_error)?;

        Ok(deleted > 0)
    }
}

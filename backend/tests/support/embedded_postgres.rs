//! Direct SQL helpers for arranging embedded PostgreSQL state.
//!
//! These use the synchronous `postgres` client so fixtures can reach past the
//! repositories, for example to backdate rows. Call them outside any Tokio
//! runtime.

use chrono::{DateTime, Utc};
use postgres::{Client, NoTls};

use super::format_postgres_error;

fn connect(url: &str) -> Result<Client, String> {
    Client::connect(url, NoTls).map_err(|err| format_postgres_error(&err))
}

/// Empty both tables and restart their id sequences.
pub fn reset_tables(url: &str) -> Result<(), String> {
    connect(url)?
        .batch_execute("TRUNCATE vehicles, drivers RESTART IDENTITY CASCADE;")
        .map_err(|err| format_postgres_error(&err))
}

/// Overwrite a driver's creation time.
///
/// The `updated_at` trigger sets `updated_at` to the current time, so only
/// past values keep `created_at <= updated_at`.
pub fn backdate_driver(url: &str, id: i32, created_at: DateTime<Utc>) -> Result<(), String> {
    connect(url)?
        .execute(
            "UPDATE drivers SET created_at = $1 WHERE id = $2",
            &[&created_at, &id],
        )
        .map(|_| ())
        .map_err(|err| format_postgres_error(&err))
}

/// Read a driver's stored `updated_at`.
pub fn driver_updated_at(url: &str, id: i32) -> Result<DateTime<Utc>, String> {
    connect(url)?
        .query_one("SELECT updated_at FROM drivers WHERE id = $1", &[&id])
        .map(|row| row.get(0))
        .map_err(|err| format_postgres_error(&err))
}

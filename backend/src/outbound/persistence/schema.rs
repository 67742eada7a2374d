//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `migrations/` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Registered drivers.
    drivers (id) {
        id -> Int4,
        /// At most 50 characters.
        first_name -> Varchar,
        /// At most 80 characters.
        last_name -> Varchar,
        created_at -> Timestamptz,
        /// Refreshed by the `drivers_set_updated_at` trigger.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Vehicles, each owned by exactly one driver.
    vehicles (id) {
        id -> Int4,
        /// References `drivers.id` with `ON DELETE RESTRICT`.
        driver_id -> Int4,
        make -> Nullable<Text>,
        model -> Nullable<Text>,
        /// Unique; at most 20 characters.
        plate_number -> Varchar,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::joinable!(vehicles -> drivers (driver_id));
diesel::allow_tables_to_appear_in_same_query!(drivers, vehicles);

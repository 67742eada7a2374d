//! Driver data model.
//!
//! Drivers own zero or more vehicles. Name fields are bounded by the widths
//! of their `VARCHAR` columns; no other content rules apply.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

/// Maximum length of a driver's first name, in characters.
pub const FIRST_NAME_MAX: usize = 50;
/// Maximum length of a driver's last name, in characters.
pub const LAST_NAME_MAX: usize = 80;

/// Validation errors raised while constructing driver values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DriverValidationError {
    #[error("driver id must be an integer, got {value:?}")]
    InvalidId { value: String },
    #[error("first name must be at most {max} characters, got {actual}")]
    FirstNameTooLong { max: usize, actual: usize },
    #[error("last name must be at most {max} characters, got {actual}")]
    LastNameTooLong { max: usize, actual: usize },
}

/// Primary key of a driver row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DriverId(i32);

impl DriverId {
    /// Wrap a raw key.
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Raw key as stored in the `drivers.id` column.
    pub const fn as_i32(self) -> i32 {
        self.0
    }
}

impl fmt::Display for DriverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DriverId {
    type Err = DriverValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i32>()
            .map(Self)
            .map_err(|_| DriverValidationError::InvalidId {
                value: s.to_owned(),
            })
    }
}

macro_rules! bounded_name {
    ($(#[$meta:meta])* $name:ident, $max:expr, $variant:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name(String);

        impl $name {
            /// Validate the length and wrap the value.
            pub fn new(value: impl Into<String>) -> Result<Self, DriverValidationError> {
                let value = value.into();
                let actual = value.chars().count();
                if actual > $max {
                    return Err(DriverValidationError::$variant { max: $max, actual });
                }
                Ok(Self(value))
            }

            /// Borrow the inner string.
            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

bounded_name!(
    /// Driver first name, at most [`FIRST_NAME_MAX`] characters.
    FirstName,
    FIRST_NAME_MAX,
    FirstNameTooLong
);

bounded_name!(
    /// Driver last name, at most [`LAST_NAME_MAX`] characters.
    LastName,
    LAST_NAME_MAX,
    LastNameTooLong
);

/// A persisted driver.
///
/// ## Invariants
/// - `updated_at >= created_at`.
/// - `created_at` never changes once the row exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Driver {
    pub id: DriverId,
    pub first_name: FirstName,
    pub last_name: LastName,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Values required to insert a driver; keys and timestamps are assigned by
/// storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDriver {
    pub first_name: FirstName,
    pub last_name: LastName,
}

/// Partial update of a driver. `None` leaves the column unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DriverChanges {
    pub first_name: Option<FirstName>,
    pub last_name: Option<LastName>,
}

impl DriverChanges {
    /// True when no column would change.
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none() && self.last_name.is_none()
    }

    /// Apply the changes to an in-memory driver, returning whether anything
    /// changed.
    pub fn apply_to(&self, driver: &mut Driver) -> bool {
        if let Some(first_name) = &self.first_name {
            driver.first_name = first_name.clone();
        }
        if let Some(last_name) = &self.last_name {
            driver.last_name = last_name.clone();
        }
        !self.is_empty()
    }
}

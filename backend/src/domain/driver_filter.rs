//! Translation of list query parameters into driver predicates.
//!
//! Recognised keys are matched exactly. Unknown keys are ignored so clients
//! can pass through unrelated parameters without failing the request.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use super::driver::Driver;

/// Query key bounding `created_at` from above.
pub const CREATED_AT_LTE: &str = "created_at__lte";
/// Query key bounding `created_at` from below.
pub const CREATED_AT_GTE: &str = "created_at__gte";
/// Query key selecting drivers whose last name contains a substring.
pub const LAST_NAME_CONTAINS: &str = "last_name__contains";

/// Accepted date layout for `created_at` bounds, e.g. `31-12-2021`.
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Errors raised while translating query parameters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DriverFilterError {
    #[error("{field} must be a date formatted DD-MM-YYYY, got {value:?}")]
    InvalidDate { field: &'static str, value: String },
}

impl DriverFilterError {
    /// Query key that failed to parse.
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidDate { field, .. } => field,
        }
    }
}

/// A single condition on a driver row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriverPredicate {
    CreatedAtOnOrBefore(DateTime<Utc>),
    CreatedAtOnOrAfter(DateTime<Utc>),
    /// Case-sensitive substring match on `last_name`.
    LastNameContains(String),
}

impl DriverPredicate {
    /// Evaluate the predicate against an in-memory driver.
    pub fn matches(&self, driver: &Driver) -> bool {
        match self {
            Self::CreatedAtOnOrBefore(bound) => driver.created_at <= *bound,
            Self::CreatedAtOnOrAfter(bound) => driver.created_at >= *bound,
            Self::LastNameContains(needle) => driver.last_name.as_str().contains(needle.as_str()),
        }
    }
}

/// Conjunction of [`DriverPredicate`]s. An empty filter selects every driver.
///
/// # Examples
/// ```
/// use fleet_backend::domain::DriverFilter;
///
/// let filter = DriverFilter::from_query_pairs([
///     ("created_at__gte", "01-01-2021"),
///     ("page", "2"),
/// ])
/// .expect("valid filter");
/// assert_eq!(filter.predicates().len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DriverFilter {
    predicates: Vec<DriverPredicate>,
}

impl DriverFilter {
    /// Filter with no predicates.
    pub fn all() -> Self {
        Self::default()
    }

    /// Build a filter from raw query pairs.
    ///
    /// A date bound names a calendar day and is taken at 00:00 UTC. When a
    /// recognised key repeats, only its first occurrence counts.
    pub fn from_query_pairs<I, K, V>(pairs: I) -> Result<Self, DriverFilterError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut predicates = Vec::new();
        let mut seen: Vec<&'static str> = Vec::new();
        for (key, value) in pairs {
            let Some(key) = recognised_key(key.as_ref()) else {
                continue;
            };
            if seen.contains(&key) {
                continue;
            }
            seen.push(key);
            let value = value.as_ref();
            let predicate = match key {
                CREATED_AT_LTE => {
                    DriverPredicate::CreatedAtOnOrBefore(parse_day(CREATED_AT_LTE, value)?)
                }
                CREATED_AT_GTE => {
                    DriverPredicate::CreatedAtOnOrAfter(parse_day(CREATED_AT_GTE, value)?)
                }
                LAST_NAME_CONTAINS => DriverPredicate::LastNameContains(value.to_owned()),
                _ => continue,
            };
            predicates.push(predicate);
        }
        Ok(Self { predicates })
    }

    /// Add a predicate to the conjunction.
    pub fn with(mut self, predicate: DriverPredicate) -> Self {
        self.predicates.push(predicate);
        self
    }

    pub fn predicates(&self) -> &[DriverPredicate] {
        &self.predicates
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// True when every predicate holds for `driver`.
    pub fn matches(&self, driver: &Driver) -> bool {
        self.predicates.iter().all(|p| p.matches(driver))
    }
}

fn recognised_key(key: &str) -> Option<&'static str> {
    [CREATED_AT_LTE, CREATED_AT_GTE, LAST_NAME_CONTAINS]
        .into_iter()
        .find(|known| *known == key)
}

fn parse_day(field: &'static str, value: &str) -> Result<DateTime<Utc>, DriverFilterError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map(|day| day.and_time(NaiveTime::MIN).and_utc())
        .map_err(|_| DriverFilterError::InvalidDate {
            field,
            value: value.to_owned(),
        })
}

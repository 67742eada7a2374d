//! Shared validation helpers for inbound HTTP adapters.
//!
//! Every helper produces an `invalid_request` [`Error`] whose details carry
//! the offending field and a machine-readable code.

use serde_json::json;

use crate::domain::{
    DriverFilterError, DriverId, DriverValidationError, Error, FirstName, LastName,
};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValidationCode {
    MissingField,
    NullField,
    InvalidId,
    TooLong,
    InvalidDate,
}

impl ValidationCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::NullField => "null_field",
            Self::InvalidId => "invalid_id",
            Self::TooLong => "too_long",
            Self::InvalidDate => "invalid_date",
        }
    }
}

/// Newtype wrapper for HTTP field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub(crate) fn as_str(self) -> &'static str {
        self.0
    }
}

pub(crate) const FIRST_NAME: FieldName = FieldName::new("first_name");
pub(crate) const LAST_NAME: FieldName = FieldName::new("last_name");
pub(crate) const ID: FieldName = FieldName::new("id");

fn field_error(field: FieldName, code: ValidationCode, message: String) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "code": code.as_str(),
    }))
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let name = field.as_str();
    field_error(
        field,
        ValidationCode::MissingField,
        format!("missing required field: {name}"),
    )
}

pub(crate) fn null_field_error(field: FieldName) -> Error {
    let name = field.as_str();
    field_error(
        field,
        ValidationCode::NullField,
        format!("{name} must not be null"),
    )
}

/// Parse a path segment as a driver id.
pub(crate) fn parse_driver_id(raw: &str) -> Result<DriverId, Error> {
    raw.parse::<DriverId>().map_err(|_| {
        Error::invalid_request("id must be an integer").with_details(json!({
            "field": ID.as_str(),
            "value": raw,
            "code": ValidationCode::InvalidId.as_str(),
        }))
    })
}

fn name_error(field: FieldName, err: &DriverValidationError) -> Error {
    field_error(field, ValidationCode::TooLong, err.to_string())
}

pub(crate) fn parse_first_name(value: String) -> Result<FirstName, Error> {
    FirstName::new(value).map_err(|err| name_error(FIRST_NAME, &err))
}

pub(crate) fn parse_last_name(value: String) -> Result<LastName, Error> {
    LastName::new(value).map_err(|err| name_error(LAST_NAME, &err))
}

/// Map a filter parse failure to a request error naming the query key.
pub(crate) fn filter_error(err: &DriverFilterError) -> Error {
    match err {
        DriverFilterError::InvalidDate { field, value } => Error::invalid_request(err.to_string())
            .with_details(json!({
                "field": field,
                "value": value,
                "code": ValidationCode::InvalidDate.as_str(),
            })),
    }
}

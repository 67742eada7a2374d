//! Driver HTTP handlers.
//!
//! ```text
//! GET    /drivers/driver/
//! GET    /drivers/driver/{id}/
//! POST   /drivers/driver/
//! PUT    /drivers/driver/{id}
//! DELETE /drivers/driver/{id}
//! ```

use actix_web::{delete, get, post, put, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{Driver, DriverChanges, DriverFilter, NewDriver};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FIRST_NAME, LAST_NAME, filter_error, missing_field_error, null_field_error, parse_driver_id,
    parse_first_name, parse_last_name,
};

/// Layout used for `created_at` in list responses, e.g. `31/12/21`.
pub const LIST_DATE_FORMAT: &str = "%d/%m/%y";

/// Confirmation message returned by the delete endpoint.
pub const DELETED_MESSAGE: &str = "driver was deleted successfully";

/// Request payload for creating a driver. Both fields are required.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateDriverRequest {
    #[schema(max_length = 50)]
    pub first_name: Option<String>,
    #[schema(max_length = 80)]
    pub last_name: Option<String>,
}

/// Request payload for a partial driver update.
///
/// The outer `Option` records whether a field was sent at all, so an explicit
/// `null` can be rejected instead of being read as "leave unchanged".
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateDriverRequest {
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<String>, max_length = 50)]
    pub first_name: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<String>, max_length = 80)]
    pub last_name: Option<Option<String>>,
}

/// Only called for keys present in the body; absent keys take the default.
fn present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

/// Query parameters recognised by the list endpoint. Others are ignored.
#[derive(IntoParams)]
#[into_params(parameter_in = Query)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct DriverListParams {
    /// Only drivers created on or before this day, `DD-MM-YYYY`.
    #[param(rename = "created_at__lte", example = "31-12-2021")]
    created_at_lte: Option<String>,
    /// Only drivers created on or after this day, `DD-MM-YYYY`.
    #[param(rename = "created_at__gte", example = "01-01-2021")]
    created_at_gte: Option<String>,
    /// Only drivers whose last name contains this text (case-sensitive).
    #[param(rename = "last_name__contains")]
    last_name_contains: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DriverSummary {
    pub first_name: String,
    pub last_name: String,
    /// Creation date formatted `DD/MM/YY`.
    #[schema(example = "01/01/22")]
    pub created_at: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DriverListResponse {
    pub drivers: Vec<DriverSummary>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DriverNameResponse {
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DriverResponse {
    pub first_name: String,
    pub last_name: String,
    pub id: i32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteDriverResponse {
    pub message: String,
}

fn format_list_date(value: DateTime<Utc>) -> String {
    value.format(LIST_DATE_FORMAT).to_string()
}

impl From<Driver> for DriverSummary {
    fn from(driver: Driver) -> Self {
        Self {
            first_name: driver.first_name.into(),
            last_name: driver.last_name.into(),
            created_at: format_list_date(driver.created_at),
        }
    }
}

impl From<Driver> for DriverNameResponse {
    fn from(driver: Driver) -> Self {
        Self {
            first_name: driver.first_name.into(),
            last_name: driver.last_name.into(),
        }
    }
}

impl From<Driver> for DriverResponse {
    fn from(driver: Driver) -> Self {
        Self {
            id: driver.id.as_i32(),
            first_name: driver.first_name.into(),
            last_name: driver.last_name.into(),
        }
    }
}

fn parse_create_request(payload: CreateDriverRequest) -> ApiResult<NewDriver> {
    let first_name = payload
        .first_name
        .ok_or_else(|| missing_field_error(FIRST_NAME))?;
    let last_name = payload
        .last_name
        .ok_or_else(|| missing_field_error(LAST_NAME))?;
    Ok(NewDriver {
        first_name: parse_first_name(first_name)?,
        last_name: parse_last_name(last_name)?,
    })
}

fn parse_update_request(payload: UpdateDriverRequest) -> ApiResult<DriverChanges> {
    let first_name = match payload.first_name {
        None => None,
        Some(None) => return Err(null_field_error(FIRST_NAME)),
        Some(Some(value)) => Some(parse_first_name(value)?),
    };
    let last_name = match payload.last_name {
        None => None,
        Some(None) => return Err(null_field_error(LAST_NAME)),
        Some(Some(value)) => Some(parse_last_name(value)?),
    };
    Ok(DriverChanges {
        first_name,
        last_name,
    })
}

/// List drivers, optionally filtered.
#[utoipa::path(
    get,
    path = "/drivers/driver/",
    params(DriverListParams),
    responses(
        (status = 200, description = "Drivers ordered by id", body = DriverListResponse),
        (status = 400, description = "Malformed filter value", body = ErrorSchema),
        (status = 503, description = "Storage unavailable", body = ErrorSchema)
    ),
    tags = ["drivers"],
    operation_id = "listDrivers"
)]
#[get("/drivers/driver/")]
pub async fn list_drivers(
    state: web::Data<HttpState>,
    query: web::Query<Vec<(String, String)>>,
) -> ApiResult<web::Json<DriverListResponse>> {
    let filter = DriverFilter::from_query_pairs(query.into_inner())
        .map_err(|err| filter_error(&err))?;
    let drivers = state.drivers_query.list_drivers(&filter).await?;
    Ok(web::Json(DriverListResponse {
        drivers: drivers.into_iter().map(DriverSummary::from).collect(),
    }))
}

/// Fetch a single driver's names.
#[utoipa::path(
    get,
    path = "/drivers/driver/{id}/",
    params(("id" = i32, Path, description = "Driver id")),
    responses(
        (status = 200, description = "Driver names", body = DriverNameResponse),
        (status = 400, description = "Id is not an integer", body = ErrorSchema),
        (status = 404, description = "Driver not found", body = ErrorSchema)
    ),
    tags = ["drivers"],
    operation_id = "getDriver"
)]
#[get("/drivers/driver/{id}/")]
pub async fn get_driver(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<DriverNameResponse>> {
    let id = parse_driver_id(&path)?;
    let driver = state.drivers_query.get_driver(id).await?;
    Ok(web::Json(DriverNameResponse::from(driver)))
}

/// Create a driver.
#[utoipa::path(
    post,
    path = "/drivers/driver/",
    request_body = CreateDriverRequest,
    responses(
        (status = 200, description = "Created driver", body = DriverResponse),
        (status = 400, description = "Missing or invalid field", body = ErrorSchema),
        (status = 503, description = "Storage unavailable", body = ErrorSchema)
    ),
    tags = ["drivers"],
    operation_id = "createDriver"
)]
#[post("/drivers/driver/")]
pub async fn create_driver(
    state: web::Data<HttpState>,
    payload: web::Json<CreateDriverRequest>,
) -> ApiResult<web::Json<DriverResponse>> {
    let new_driver = parse_create_request(payload.into_inner())?;
    let driver = state.drivers.create_driver(new_driver).await?;
    Ok(web::Json(DriverResponse::from(driver)))
}

/// Partially update a driver.
#[utoipa::path(
    put,
    path = "/drivers/driver/{id}",
    params(("id" = i32, Path, description = "Driver id")),
    request_body = UpdateDriverRequest,
    responses(
        (status = 200, description = "Updated driver", body = DriverResponse),
        (status = 400, description = "Invalid id or field", body = ErrorSchema),
        (status = 404, description = "Driver not found", body = ErrorSchema)
    ),
    tags = ["drivers"],
    operation_id = "updateDriver"
)]
#[put("/drivers/driver/{id}")]
pub async fn update_driver(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UpdateDriverRequest>,
) -> ApiResult<web::Json<DriverResponse>> {
    let id = parse_driver_id(&path)?;
    let changes = parse_update_request(payload.into_inner())?;
    let driver = state.drivers.update_driver(id, changes).await?;
    Ok(web::Json(DriverResponse::from(driver)))
}

/// Delete a driver that owns no vehicles.
#[utoipa::path(
    delete,
    path = "/drivers/driver/{id}",
    params(("id" = i32, Path, description = "Driver id")),
    responses(
        (status = 200, description = "Driver deleted", body = DeleteDriverResponse),
        (status = 400, description = "Id is not an integer", body = ErrorSchema),
        (status = 404, description = "Driver not found", body = ErrorSchema),
        (status = 409, description = "Driver still owns vehicles", body = ErrorSchema)
    ),
    tags = ["drivers"],
    operation_id = "deleteDriver"
)]
#[delete("/drivers/driver/{id}")]
pub async fn delete_driver(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<DeleteDriverResponse>> {
    let id = parse_driver_id(&path)?;
    state.drivers.delete_driver(id).await?;
    Ok(web::Json(DeleteDriverResponse {
        message: DELETED_MESSAGE.to_owned(),
    }))
}

#[cfg(test)]
mod tests;

//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint from the inbound layer together
//! with the request/response bodies and the error wrappers ([`ErrorSchema`],
//! [`ErrorCodeSchema`]) that describe domain errors without coupling domain
//! types to utoipa. Swagger UI serves the document in debug builds.

use crate::inbound::http::drivers::{
    CreateDriverRequest, DeleteDriverResponse, DriverListResponse, DriverNameResponse,
    DriverResponse, DriverSummary, UpdateDriverRequest,
};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Fleet backend API",
        description = "Manage drivers and the vehicles registered to them.",
        license(name = "MIT")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::schema_init::init_schema,
        crate::inbound::http::drivers::list_drivers,
        crate::inbound::http::drivers::get_driver,
        crate::inbound::http::drivers::create_driver,
        crate::inbound::http::drivers::update_driver,
        crate::inbound::http::drivers::delete_driver,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        CreateDriverRequest,
        UpdateDriverRequest,
        DriverSummary,
        DriverListResponse,
        DriverNameResponse,
        DriverResponse,
        DeleteDriverResponse,
    )),
    tags(
        (name = "drivers", description = "Driver registry operations"),
        (name = "schema", description = "Storage schema management"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

//! Schema initialisation endpoint.
//!
//! ```text
//! GET /init
//! ```

use actix_web::{get, web};

use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Body returned once the tables exist.
pub const INIT_OK_BODY: &str = "200";

/// Create any missing tables. Safe to call repeatedly.
#[utoipa::path(
    get,
    path = "/init",
    responses(
        (status = 200, description = "Tables exist; body is the string \"200\"", body = String),
        (status = 500, description = "Migration failed", body = ErrorSchema),
        (status = 503, description = "Storage unavailable", body = ErrorSchema)
    ),
    tags = ["schema"],
    operation_id = "initSchema"
)]
#[get("/init")]
pub async fn init_schema(state: web::Data<HttpState>) -> ApiResult<web::Json<&'static str>> {
    state.schema.initialise_schema().await?;
    Ok(web::Json(INIT_OK_BODY))
}

//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::ServerConfig;

use state_builders::build_http_state;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use fleet_backend::Trace;
#[cfg(debug_assertions)]
use fleet_backend::doc::ApiDoc;
use fleet_backend::inbound::http::drivers::{
    create_driver, delete_driver, get_driver, list_drivers, update_driver,
};
use fleet_backend::inbound::http::error::{json_config, query_config};
use fleet_backend::inbound::http::health::{HealthState, live, ready};
use fleet_backend::inbound::http::schema_init::init_schema;
use fleet_backend::inbound::http::state::HttpState;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(json_config())
        .app_data(query_config())
        .wrap(Trace)
        .service(init_schema)
        .service(list_drivers)
        .service(get_driver)
        .service(create_driver)
        .service(update_driver)
        .service(delete_driver)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// Runs the schema initialiser first when the configuration asks for it, and
/// marks the server ready once the listener is bound.
///
/// # Errors
/// Propagates [`std::io::Error`] when schema initialisation fails or the
/// socket cannot be bound.
pub async fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let http_state = build_http_state(&config);

    if config.init_schema_on_startup {
        http_state
            .schema
            .initialise_schema()
            .await
            .map_err(|err| std::io::Error::other(format!("schema initialisation failed: {err}")))?;
    }

    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || build_app(server_health_state.clone(), http_state.clone()))
        .bind(config.bind_addr)?
        .run();

    health_state.mark_ready();
    Ok(server)
}

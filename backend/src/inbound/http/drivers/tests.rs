//! Tests for driver handlers.

use std::sync::Arc;

use super::*;
use crate::domain::ports::{MockDriversCommand, MockDriversQuery, MockSchemaCommand};
use crate::domain::{DriverId, DriverPredicate, Error, FirstName, LastName};
use crate::inbound::http::error::{json_config, query_config};
use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test};
use chrono::TimeZone;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

#[fixture]
fn grace() -> Driver {
    let created = Utc
        .with_ymd_and_hms(2022, 3, 9, 14, 0, 0)
        .single()
        .expect("valid timestamp");
    Driver {
        id: DriverId::new(7),
        first_name: FirstName::new("Grace").expect("first name"),
        last_name: LastName::new("Hopper").expect("last name"),
        created_at: created,
        updated_at: created,
    }
}

fn test_app(
    command: MockDriversCommand,
    query: MockDriversQuery,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let state = HttpState::new(
        Arc::new(command),
        Arc::new(query),
        Arc::new(MockSchemaCommand::new()),
    );
    App::new()
        .app_data(web::Data::new(state))
        .app_data(json_config())
        .app_data(query_config())
        .service(list_drivers)
        .service(get_driver)
        .service(create_driver)
        .service(update_driver)
        .service(delete_driver)
}

async fn send(
    command: MockDriversCommand,
    query: MockDriversQuery,
    request: actix_test::TestRequest,
) -> (StatusCode, Value) {
    let app = actix_test::init_service(test_app(command, query)).await;
    let response = actix_test::call_service(&app, request.to_request()).await;
    let status = response.status();
    let body = actix_test::read_body(response).await;
    let value = serde_json::from_slice(&body).expect("JSON response body");
    (status, value)
}

#[rstest]
#[actix_web::test]
async fn list_renders_short_dates(grace: Driver) {
    let mut query = MockDriversQuery::new();
    query
        .expect_list_drivers()
        .withf(|filter| filter.is_empty())
        .times(1)
        .return_once(move |_| Ok(vec![grace]));

    let (status, body) = send(
        MockDriversCommand::new(),
        query,
        actix_test::TestRequest::get().uri("/drivers/driver/"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "drivers": [
                { "first_name": "Grace", "last_name": "Hopper", "created_at": "09/03/22" }
            ]
        })
    );
}

#[rstest]
#[actix_web::test]
async fn list_passes_recognised_filters_only() {
    let mut query = MockDriversQuery::new();
    query
        .expect_list_drivers()
        .withf(|filter| {
            filter.predicates() == [DriverPredicate::LastNameContains("Smith".into())]
        })
        .times(1)
        .return_once(|_| Ok(Vec::new()));

    let (status, body) = send(
        MockDriversCommand::new(),
        query,
        actix_test::TestRequest::get().uri(
            "/drivers/driver/?last_name__contains=Smith&sort=asc&last_name__contains=Jones",
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "drivers": [] }));
}

#[rstest]
#[actix_web::test]
async fn list_rejects_malformed_dates() {
    let (status, body) = send(
        MockDriversCommand::new(),
        MockDriversQuery::new(),
        actix_test::TestRequest::get().uri("/drivers/driver/?created_at__gte=2020-01-01"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["details"]["field"], "created_at__gte");
}

#[rstest]
#[actix_web::test]
async fn get_returns_names_only(grace: Driver) {
    let mut query = MockDriversQuery::new();
    query
        .expect_get_driver()
        .withf(|id| *id == DriverId::new(7))
        .return_once(move |_| Ok(grace));

    let (status, body) = send(
        MockDriversCommand::new(),
        query,
        actix_test::TestRequest::get().uri("/drivers/driver/7/"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "first_name": "Grace", "last_name": "Hopper" }));
}

#[rstest]
#[case("/drivers/driver/abc/")]
#[case("/drivers/driver/1.5/")]
#[actix_web::test]
async fn get_rejects_non_integer_ids(#[case] uri: &str) {
    let (status, body) = send(
        MockDriversCommand::new(),
        MockDriversQuery::new(),
        actix_test::TestRequest::get().uri(uri),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["code"], "invalid_id");
}

#[rstest]
#[actix_web::test]
async fn get_maps_not_found() {
    let mut query = MockDriversQuery::new();
    query
        .expect_get_driver()
        .return_once(|_| Err(Error::not_found("driver 9 not found")));

    let (status, body) = send(
        MockDriversCommand::new(),
        query,
        actix_test::TestRequest::get().uri("/drivers/driver/9/"),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "driver 9 not found");
}

#[rstest]
#[actix_web::test]
async fn create_returns_id_and_names(grace: Driver) {
    let mut command = MockDriversCommand::new();
    command
        .expect_create_driver()
        .withf(|new| new.first_name.as_str() == "Grace" && new.last_name.as_str() == "Hopper")
        .times(1)
        .return_once(move |_| Ok(grace));

    let (status, body) = send(
        command,
        MockDriversQuery::new(),
        actix_test::TestRequest::post()
            .uri("/drivers/driver/")
            .set_json(json!({ "first_name": "Grace", "last_name": "Hopper" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "first_name": "Grace", "last_name": "Hopper", "id": 7 })
    );
}

#[rstest]
#[case(json!({ "last_name": "Hopper" }), "first_name", "missing_field")]
#[case(json!({ "first_name": "Grace" }), "last_name", "missing_field")]
#[case(json!({ "first_name": "G".repeat(51), "last_name": "Hopper" }), "first_name", "too_long")]
#[case(json!({ "first_name": "Grace", "last_name": "H".repeat(81) }), "last_name", "too_long")]
#[actix_web::test]
async fn create_rejects_invalid_payloads(
    #[case] payload: Value,
    #[case] field: &str,
    #[case] code: &str,
) {
    let mut command = MockDriversCommand::new();
    command.expect_create_driver().never();

    let (status, body) = send(
        command,
        MockDriversQuery::new(),
        actix_test::TestRequest::post()
            .uri("/drivers/driver/")
            .set_json(payload),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], field);
    assert_eq!(body["details"]["code"], code);
}

#[rstest]
#[actix_web::test]
async fn create_rejects_mistyped_fields() {
    let mut command = MockDriversCommand::new();
    command.expect_create_driver().never();

    let (status, body) = send(
        command,
        MockDriversQuery::new(),
        actix_test::TestRequest::post()
            .uri("/drivers/driver/")
            .set_json(json!({ "first_name": 1, "last_name": "Hopper" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "invalid_request");
}

#[rstest]
#[actix_web::test]
async fn update_forwards_only_present_fields(grace: Driver) {
    let mut command = MockDriversCommand::new();
    command
        .expect_update_driver()
        .withf(|id, changes| {
            *id == DriverId::new(7)
                && changes.first_name.as_ref().map(FirstName::as_str) == Some("Grace")
                && changes.last_name.is_none()
        })
        .times(1)
        .return_once(move |_, _| Ok(grace));

    let (status, body) = send(
        command,
        MockDriversQuery::new(),
        actix_test::TestRequest::put()
            .uri("/drivers/driver/7")
            .set_json(json!({ "first_name": "Grace" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 7);
    assert_eq!(body["last_name"], "Hopper");
}

#[rstest]
#[case(json!({ "first_name": null }), "first_name")]
#[case(json!({ "first_name": "Grace", "last_name": null }), "last_name")]
#[actix_web::test]
async fn update_rejects_null_fields(#[case] payload: Value, #[case] field: &str) {
    let mut command = MockDriversCommand::new();
    command.expect_update_driver().never();

    let (status, body) = send(
        command,
        MockDriversQuery::new(),
        actix_test::TestRequest::put()
            .uri("/drivers/driver/7")
            .set_json(payload),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["details"]["field"], field);
    assert_eq!(body["details"]["code"], "null_field");
}

#[rstest]
#[case(actix_test::TestRequest::post().uri("/drivers/driver/"))]
#[case(actix_test::TestRequest::put().uri("/drivers/driver/7"))]
#[actix_web::test]
async fn unknown_body_fields_are_rejected(#[case] request: actix_test::TestRequest) {
    let mut command = MockDriversCommand::new();
    command.expect_create_driver().never();
    command.expect_update_driver().never();

    let (status, body) = send(
        command,
        MockDriversQuery::new(),
        request.set_json(json!({
            "first_name": "Grace",
            "last_name": "Hopper",
            "nickname": "Amazing Grace",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "invalid_request");
}

#[rstest]
#[case(Ok(()), StatusCode::OK)]
#[case(Err(Error::not_found("driver 7 not found")), StatusCode::NOT_FOUND)]
#[case(
    Err(Error::conflict("driver is still referenced by vehicles")),
    StatusCode::CONFLICT
)]
#[actix_web::test]
async fn delete_maps_outcome(#[case] outcome: Result<(), Error>, #[case] expected: StatusCode) {
    let mut command = MockDriversCommand::new();
    command
        .expect_delete_driver()
        .withf(|id| *id == DriverId::new(7))
        .return_once(move |_| outcome);

    let (status, body) = send(
        command,
        MockDriversQuery::new(),
        actix_test::TestRequest::delete().uri("/drivers/driver/7"),
    )
    .await;

    assert_eq!(status, expected);
    if expected == StatusCode::OK {
        assert_eq!(body, json!({ "message": DELETED_MESSAGE }));
    }
}

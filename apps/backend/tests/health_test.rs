mod common;

use std::collections::BTreeMap;

use actix_web::{test, web, App};
use backend::middleware::request_trace::RequestTrace;
use backend::routes;
use backend::AppState;
use sea_orm::{DatabaseBackend, MockDatabase, Value};
use serde_json::Value as Json;

use common::state_with;

#[actix_web::test]
async fn health_reports_ok_with_a_live_database() {
    let row: BTreeMap<&str, Value> = [("health_check", Value::Int(Some(1)))].into_iter().collect();
    let conn = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![row]])
        .into_connection();
    let state = state_with(conn).await;

    let app = test::init_service(
        App::new()
            .wrap(RequestTrace)
            .app_data(web::Data::new(state))
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);

    let body: Json = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["db"], "ok");
    assert!(body.get("db_error").is_none());
    assert!(!body["time"].as_str().unwrap().is_empty());
}

#[actix_web::test]
async fn health_reports_the_database_as_down_when_unconfigured() {
    let state = AppState::without_db();

    let app = test::init_service(
        App::new()
            .wrap(RequestTrace)
            .app_data(web::Data::new(state))
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);

    let body: Json = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["db"], "error");
    assert!(body["db_error"].as_str().unwrap().contains("DB unavailable"));
}

#[actix_web::test]
async fn root_greets() {
    let state = AppState::without_db();

    let app = test::init_service(
        App::new()
            .wrap(RequestTrace)
            .app_data(web::Data::new(state))
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);

    let body = test::read_body(resp).await;
    assert_eq!(body, "Arcadia backend is running".as_bytes());
}

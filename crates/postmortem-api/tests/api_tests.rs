use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use postmortem_api::gateway::acbl::AcblClient;
use postmortem_api::gateway::ffbridge::FfbridgeClient;
use postmortem_api::{app, ApiConfig, AppState};

const TEST_DEAL: &str = "N:T5.J98643.K95.76 432.KQ5.863.T984 86.AT72.QJT7.AKQ AKQJ97..A42.J532";

fn test_app() -> Router {
    // Provider hosts are never contacted by the offline routes under test.
    let config = ApiConfig {
        port: 0,
        ffbridge_base_url: "http://localhost:9".to_string(),
        acbl_api_base_url: "http://localhost:9".to_string(),
        acbl_club_base_url: "http://localhost:9".to_string(),
        acbl_api_key: None,
    };
    app(AppState {
        ffbridge: FfbridgeClient::new(&config),
        acbl: AcblClient::new(&config),
    })
}

async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_read_root() {
    let response = test_app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"message": "Welcome to Bridge Postmortem API"})
    );
}

#[tokio::test]
async fn test_get_auction_valid() {
    let request = Request::builder()
        .method("POST")
        .uri("/get_auction")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            serde_json::to_vec(&json!({"pbn": TEST_DEAL})).unwrap(),
        ))
        .unwrap();
    let response = test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["auction"], json!(["1H", "Pass", "4H", "Pass", "Pass", "Pass"]));
    assert!(body["explanation"].is_string());
}

#[tokio::test]
async fn test_get_auction_invalid() {
    let request = Request::builder()
        .method("POST")
        .uri("/get_auction")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            serde_json::to_vec(&json!({"pbn": "invalid deal"})).unwrap(),
        ))
        .unwrap();
    let response = test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn test_unknown_route() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/acbl/tournament/player_id")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

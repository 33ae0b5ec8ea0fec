use crate::helpers;

use helpers::{get_bytes, test_app};
use hyper::StatusCode;
use pretty_assertions::assert_eq;

#[tokio::test]
async fn it_should_report_liveness() {
    let app = test_app();

    let (status, body) = get_bytes(&app.router, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"OK");
}

#[tokio::test]
async fn it_should_report_readiness() {
    let app = test_app();

    let (status, body) = get_bytes(&app.router, "/health/ready").await;
    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "ready");
}

mod common;

use axum::{body::Body, http::Request};
use common::{test_router, FakeProvider};
use tower::ServiceExt;

#[tokio::test]
async fn healthz_works() {
    let app = test_router(FakeProvider::default()).await;

    let response = app
        .oneshot(Request::builder().uri("/api/v1/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn readyz_works() {
    let app = test_router(FakeProvider::default()).await;

    let response = app
        .oneshot(Request::builder().uri("/api/v1/readyz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn openapi_document_lists_routes() {
    let app = test_router(FakeProvider::default()).await;
    let (status, doc) = common::get_json(app, "/openapi.json").await;

    assert_eq!(status, 200);
    assert!(doc["paths"]["/api/v1/risk"].is_object());
    assert!(doc["paths"]["/api/v1/render"].is_object());
}

use crate::ApiError;

use hd_client::ClientError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_unauthenticated_returns_401_with_code() {
    let error = ApiError::Unauthenticated {
        message: "A valid bearer token is required".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "UNAUTHENTICATED");
    assert_eq!(json["error"]["message"], "A valid bearer token is required");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "User not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::Validation {
        message: "Not a UUID".into(),
        field: Some("id".into()),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "id");
}

#[tokio::test]
async fn test_client_timeout_maps_to_bad_gateway() {
    let error = ApiError::from(ClientError::Timeout {
        message: "deadline elapsed".into(),
        location: ErrorLocation::from(Location::caller()),
    });

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(json["error"]["code"], "UPSTREAM_ERROR");
}

#[tokio::test]
async fn test_client_server_error_maps_to_bad_gateway() {
    let error = ApiError::from(ClientError::Api {
        status: 503,
        code: "UNAVAILABLE".into(),
        message: "maintenance".into(),
        location: ErrorLocation::from(Location::caller()),
    });

    assert_eq!(error.status(), StatusCode::BAD_GATEWAY);
}

#[test]
fn test_client_not_found_maps_to_not_found() {
    let error = ApiError::from(ClientError::not_found("user 42"));

    assert_eq!(error.status(), StatusCode::NOT_FOUND);
    assert_eq!(error.error_code(), "NOT_FOUND");
}

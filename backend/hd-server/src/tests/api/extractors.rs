use crate::{ApiError, CurrentPrincipal, MaybePrincipal};

use hd_core::Principal;

use axum::extract::FromRequestParts;
use http::Request;
use uuid::Uuid;

fn principal() -> Principal {
    Principal {
        id: Uuid::new_v4(),
        employee_code: "E1".to_string(),
        email: "jane@x.com".to_string(),
        role: "requestor".to_string(),
        is_active: true,
    }
}

fn parts_with(principal: Option<Principal>) -> http::request::Parts {
    let (mut parts, _) = Request::builder().uri("/").body(()).unwrap().into_parts();
    if let Some(principal) = principal {
        parts.extensions.insert(principal);
    }
    parts
}

#[tokio::test]
async fn given_attached_principal_when_extracting_current_then_principal_returned() {
    let expected = principal();
    let mut parts = parts_with(Some(expected.clone()));

    let CurrentPrincipal(actual) = CurrentPrincipal::from_request_parts(&mut parts, &())
        .await
        .unwrap();

    assert_eq!(actual, expected);
}

#[tokio::test]
async fn given_no_principal_when_extracting_current_then_unauthenticated() {
    let mut parts = parts_with(None);

    let result = CurrentPrincipal::from_request_parts(&mut parts, &()).await;

    assert!(matches!(result, Err(ApiError::Unauthenticated { .. })));
}

#[tokio::test]
async fn given_no_principal_when_extracting_maybe_then_none() {
    let mut parts = parts_with(None);

    let MaybePrincipal(actual) = MaybePrincipal::from_request_parts(&mut parts, &())
        .await
        .unwrap();

    assert!(actual.is_none());
}

#[tokio::test]
async fn given_attached_principal_when_extracting_maybe_then_some() {
    let expected = principal();
    let mut parts = parts_with(Some(expected.clone()));

    let MaybePrincipal(actual) = MaybePrincipal::from_request_parts(&mut parts, &())
        .await
        .unwrap();

    assert_eq!(actual, Some(expected));
}

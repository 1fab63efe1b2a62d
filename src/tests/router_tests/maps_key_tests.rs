// src/tests/router_tests/maps_key_tests.rs
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, test_app, FakeApi};
use serde_json::Value;
use std::sync::Arc;

#[test]
fn returns_configured_key() -> Result<(), ServerError> {
    let app = test_app(
        Arc::new(FakeApi::default()),
        &[("GOOGLE_MAPS_API_KEY", "AIzaSyLocalKey")],
    );

    let resp = handle(get("/api/maps-key", None), &app)?;
    assert_eq!(resp.status(), 200);
    let json: Value = serde_json::from_str(&body_string(resp)).unwrap();
    assert_eq!(json["apiKey"], "AIzaSyLocalKey");
    Ok(())
}

#[test]
fn missing_key_is_a_500_with_message() -> Result<(), ServerError> {
    let app = test_app(Arc::new(FakeApi::default()), &[]);

    let resp = handle(get("/api/maps-key", None), &app)?;
    assert_eq!(resp.status(), 500);
    let json: Value = serde_json::from_str(&body_string(resp)).unwrap();
    assert_eq!(json["error"], "API key not configured");
    Ok(())
}

#[test]
fn unreadable_secret_is_a_500_with_message() -> Result<(), ServerError> {
    let app = test_app(
        Arc::new(FakeApi::default()),
        &[
            ("HOUSING_ENV", "production"),
            ("GOOGLE_MAPS_API_KEY_FILE", "/definitely/not/here/maps-key"),
        ],
    );

    let resp = handle(get("/api/maps-key", None), &app)?;
    assert_eq!(resp.status(), 500);
    let json: Value = serde_json::from_str(&body_string(resp)).unwrap();
    assert_eq!(json["error"], "Failed to fetch API key");
    Ok(())
}

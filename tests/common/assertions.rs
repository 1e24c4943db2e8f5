//! Assertion helpers for tests.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use super::app::TestResponse;

/// Assert response has expected status code
pub fn assert_status(response: &TestResponse, expected: StatusCode) {
    assert_eq!(
        response.status, expected,
        "Expected status {}, got {}. Body: {}",
        expected,
        response.status,
        response.text()
    );
}

/// Assert response is OK (200)
pub fn assert_ok(response: &TestResponse) {
    assert_status(response, StatusCode::OK);
}

/// Assert response is a valid time payload and return the timestamp string.
///
/// Valid means: 200, JSON content type, a JSON object with exactly one
/// key `currentTime` holding a string.
pub fn assert_valid_time_response(response: &TestResponse) -> String {
    assert_ok(response);

    let content_type = response
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok());
    assert_eq!(
        content_type,
        Some("application/json"),
        "Expected Content-Type: application/json"
    );

    let json: serde_json::Value = response.json();
    let object = json.as_object().expect("Expected a JSON object");
    assert_eq!(
        object.len(),
        1,
        "Expected exactly one key, got {:?}",
        object.keys().collect::<Vec<_>>()
    );

    json["currentTime"]
        .as_str()
        .expect("Expected currentTime to be a string")
        .to_string()
}

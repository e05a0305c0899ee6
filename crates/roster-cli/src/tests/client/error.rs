use crate::ClientError;

use reqwest::StatusCode;

#[test]
fn test_status_error_uses_body_text() {
    let err = ClientError::status(StatusCode::INTERNAL_SERVER_ERROR, "TypeError: oops");
    assert!(err.to_string().contains("TypeError: oops"));
    assert!(err.to_string().contains("500"));
}

#[test]
fn test_status_error_empty_body_falls_back_to_reason() {
    let err = ClientError::status(StatusCode::NOT_FOUND, "{}");
    assert!(err.to_string().contains("Not Found"));
    assert!(err.is_not_found());
}

#[test]
fn test_json_error_is_not_not_found() {
    let source = serde_json::from_str::<u32>("nope").unwrap_err();
    let err = ClientError::from_json(source);
    assert!(!err.is_not_found());
}

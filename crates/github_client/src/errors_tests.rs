use super::*;

#[test]
fn test_api_error_display_includes_status_and_message() {
    let error = Error::ApiError {
        status: 422,
        message: "Validation Failed".to_string(),
    };
    assert_eq!(
        error.to_string(),
        "GitHub API request failed with status 422: Validation Failed"
    );
}

#[test]
fn test_auth_error_display() {
    let error = Error::AuthError("Bad credentials".to_string());
    assert_eq!(
        error.to_string(),
        "Failed to authenticate or initialize GitHub client: Bad credentials"
    );
}

#[test]
fn test_from_status_maps_auth_failures() {
    assert!(matches!(
        Error::from_status(401, "Bad credentials"),
        Error::AuthError(msg) if msg == "Bad credentials"
    ));
    assert!(matches!(
        Error::from_status(403, "Forbidden"),
        Error::AuthError(_)
    ));
}

#[test]
fn test_from_status_maps_not_found() {
    assert!(matches!(Error::from_status(404, "Not Found"), Error::NotFound));
}

#[test]
fn test_from_status_maps_rate_limit() {
    assert!(matches!(
        Error::from_status(429, "Too Many Requests"),
        Error::RateLimitExceeded
    ));
}

#[test]
fn test_from_status_falls_back_to_api_error() {
    match Error::from_status(500, "Server Error") {
        Error::ApiError { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "Server Error");
        }
        other => panic!("Expected ApiError, got {other:?}"),
    }
}

#[test]
fn test_deserialization_error_from_serde() {
    let serde_error = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let error: Error = serde_error.into();
    assert!(error
        .to_string()
        .starts_with("Failed to deserialize GitHub response"));
}

#[test]
fn test_error_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Error>();
}

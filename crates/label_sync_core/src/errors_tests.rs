use super::*;

#[test]
fn test_label_file_not_found_display() {
    let error = Error::LabelFileNotFound {
        path: PathBuf::from("labels.yml"),
    };
    assert_eq!(error.to_string(), "Label file not found: labels.yml");
}

#[test]
fn test_invalid_label_display() {
    let error = Error::InvalidLabel {
        name: "bug".to_string(),
        reason: "color must be six hex digits".to_string(),
    };
    assert_eq!(
        error.to_string(),
        "Invalid label 'bug': color must be six hex digits"
    );
}

#[test]
fn test_invalid_repository_display() {
    let error = Error::InvalidRepository("just-a-name".to_string());
    assert_eq!(
        error.to_string(),
        "Invalid repository 'just-a-name', expected the form owner/repo"
    );
}

#[test]
fn test_github_error_converts() {
    let error: Error = github_client::Error::NotFound.into();
    assert!(matches!(error, Error::GitHub(github_client::Error::NotFound)));
    assert_eq!(error.to_string(), "GitHub request failed: Resource not found");
}

#[test]
fn test_operation_error_display() {
    let error = Error::Operation {
        operation: "delete".to_string(),
        label: "stale".to_string(),
        source: github_client::Error::NotFound,
    };
    assert_eq!(
        error.to_string(),
        "Failed to delete label 'stale': Resource not found"
    );
}

#[test]
fn test_partial_failure_lists_labels() {
    let error = Error::PartialFailure {
        failed: vec!["bug".to_string(), "feature".to_string()],
    };
    assert_eq!(
        error.to_string(),
        "Failed to reconcile 2 label(s): bug, feature"
    );
}

#[test]
fn test_read_label_file_keeps_source() {
    use std::error::Error as _;

    let error = Error::ReadLabelFile {
        path: PathBuf::from("labels.yml"),
        source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
    };
    assert!(error.source().is_some());
}

#[test]
fn test_error_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Error>();
}

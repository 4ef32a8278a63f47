//! Tests for error display

use prometheus_reactions::core::ReactionError;

#[test]
fn test_error_display() {
    let err = ReactionError::InvalidConfig("history_capacity must be greater than 0".into());
    assert_eq!(
        err.to_string(),
        "invalid config: history_capacity must be greater than 0"
    );

    let err = ReactionError::InvalidEmotion {
        id: "happy".into(),
        reason: "duration_ms must be greater than 0".into(),
    };
    assert_eq!(
        err.to_string(),
        "invalid emotion `happy`: duration_ms must be greater than 0"
    );

    let err = ReactionError::DuplicateEmotion("happy".into());
    assert_eq!(err.to_string(), "duplicate emotion id: happy");
}

#[test]
fn test_error_into_anyhow() {
    let result: prometheus_reactions::core::AppResult<()> =
        Err(ReactionError::Parse("bad".into()).into());
    assert!(result.unwrap_err().to_string().contains("bad"));
}

use super::*;

#[test]
fn no_status_is_rejected() {
    let mut action = StatusAction::new();
    assert_eq!(action.begin(), Err(STATUS_REQUIRED_MESSAGE));
    assert!(!action.is_busy());
}

#[test]
fn decline_with_blank_reason_sends_nothing() {
    let mut action = StatusAction::new();
    action.select("declined");
    action.reason = "   ".to_owned();
    assert_eq!(action.begin(), Err(REASON_REQUIRED_MESSAGE));
    assert!(!action.is_busy());
}

#[test]
fn decline_with_reason_builds_one_request() {
    let mut action = StatusAction::new();
    action.select("declined");
    action.reason = " fraud detected ".to_owned();
    let request = action.begin().unwrap().unwrap();
    assert_eq!(
        request,
        StatusUpdateRequest { status: "declined".to_owned(), declined_reason: "fraud detected".to_owned() }
    );
    assert_eq!(action.begin(), Ok(None), "busy form must not issue a second request");
    assert_eq!(action.button_label(), BUSY_LABEL);
}

#[test]
fn approve_ignores_reason() {
    let mut action = StatusAction::new();
    action.select("declined");
    action.reason = "leftover".to_owned();
    action.select("approved");
    assert!(!action.needs_reason());
    let request = action.validate().unwrap();
    assert_eq!(request.status, "approved");
    assert_eq!(request.declined_reason, "");
}

#[test]
fn select_ignores_non_actionable_values() {
    let mut action = StatusAction::new();
    action.select("waiting approval");
    assert_eq!(action.status(), None);
    action.select("");
    assert_eq!(action.status(), None);
}

#[test]
fn success_resets_and_returns_server_message() {
    let mut action = StatusAction::new();
    action.select("approved");
    action.begin().unwrap();
    let result = action.apply_outcome(ApiOutcome::Success(Value::String("Status updated.".to_owned())));
    assert_eq!(result, StatusResult::Updated("Status updated.".to_owned()));
    assert_eq!(action, StatusAction::new());
    assert_eq!(action.button_label(), SAVE_LABEL);
}

#[test]
fn unauthorized_is_reported() {
    let mut action = StatusAction::new();
    action.select("approved");
    action.begin().unwrap();
    assert_eq!(action.apply_outcome(ApiOutcome::Unauthorized), StatusResult::Unauthorized);
    assert!(!action.is_busy());
}

#[test]
fn validation_error_keeps_input() {
    let mut action = StatusAction::new();
    action.select("declined");
    action.reason = "dup".to_owned();
    action.begin().unwrap();
    let result = action.apply_outcome(ApiOutcome::ValidationError("already declined".to_owned()));
    assert_eq!(result, StatusResult::Failed("already declined".to_owned()));
    assert_eq!(action.reason, "dup");
}

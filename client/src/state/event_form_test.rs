use super::*;

fn question(id: &str, title: &str) -> GoogleFormQuestion {
    GoogleFormQuestion { id: id.to_owned(), title: title.to_owned() }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn accepted_form() -> NewEventForm {
    let mut form = NewEventForm::new();
    form.google_form_id = "1FAIpQL".to_owned();
    assert_eq!(form.begin_validation().as_deref(), Some("1FAIpQL"));
    assert!(!form.apply_validation(ApiOutcome::Success(Some(vec![question("q1", "Name")]))));
    form
}

fn complete_form() -> NewEventForm {
    let mut form = accepted_form();
    form.name = "Stand up comedy".to_owned();
    form.location = "Jalan Suka Maju 45".to_owned();
    form.preregister_date = Some(date(2024, 1, 1));
    form.event_date = Some(date(2024, 2, 1));
    form
}

// =============================================================
// Form validation step
// =============================================================

#[test]
fn empty_form_id_is_rejected_without_request() {
    let mut form = NewEventForm::new();
    form.google_form_id = "  ".to_owned();
    assert_eq!(form.begin_validation(), None);
    assert_eq!(form.form_error(), Some(FORM_ID_REQUIRED_MESSAGE));
    assert!(!form.is_validating());
}

#[test]
fn accepted_questions_unlock_details_and_lock_id() {
    let form = accepted_form();
    assert!(form.form_accepted());
    assert!(form.form_id_locked());
    assert_eq!(form.questions().len(), 1);
    assert_eq!(form.form_error(), None);
}

#[test]
fn locked_id_cannot_be_revalidated() {
    let mut form = accepted_form();
    assert_eq!(form.begin_validation(), None);
}

#[test]
fn empty_question_list_is_not_accepted() {
    let mut form = NewEventForm::new();
    form.google_form_id = "abc".to_owned();
    form.begin_validation();
    form.apply_validation(ApiOutcome::Success(None));
    assert!(!form.form_accepted());
    assert_eq!(form.form_error(), Some(FORM_EMPTY_MESSAGE));
}

#[test]
fn validation_error_shows_server_message() {
    let mut form = NewEventForm::new();
    form.google_form_id = "abc".to_owned();
    form.begin_validation();
    form.apply_validation(ApiOutcome::ValidationError("form not shared".to_owned()));
    assert_eq!(form.form_error(), Some("form not shared"));
    assert!(!form.form_id_locked());
}

#[test]
fn validation_401_is_reported() {
    let mut form = NewEventForm::new();
    form.google_form_id = "abc".to_owned();
    form.begin_validation();
    assert!(form.apply_validation(ApiOutcome::Unauthorized));
}

#[test]
fn reset_unlocks_form_id() {
    let mut form = complete_form();
    form.reset();
    assert!(!form.form_accepted());
    assert!(!form.form_id_locked());
    assert!(form.google_form_id.is_empty());
}

// =============================================================
// Submit gating
// =============================================================

#[test]
fn submit_requires_accepted_form() {
    let mut form = NewEventForm::new();
    form.name = "Gig".to_owned();
    form.location = "Hall".to_owned();
    form.preregister_date = Some(date(2024, 1, 1));
    form.event_date = Some(date(2024, 2, 1));
    assert!(form.details_complete());
    assert!(!form.can_submit());
    assert_eq!(form.begin_submit(), None);
}

#[test]
fn submit_requires_every_detail_field() {
    let base = complete_form();
    assert!(base.can_submit());

    let mut missing_name = base.clone();
    missing_name.name = " ".to_owned();
    assert!(!missing_name.can_submit());

    let mut missing_location = base.clone();
    missing_location.location.clear();
    assert!(!missing_location.can_submit());

    let mut missing_prereg = base.clone();
    missing_prereg.preregister_date = None;
    assert!(!missing_prereg.can_submit());

    let mut missing_event = base;
    missing_event.event_date = None;
    assert!(!missing_event.can_submit());
}

#[test]
fn submit_in_flight_disables_button() {
    let mut form = complete_form();
    let request = form.begin_submit().unwrap();
    assert_eq!(request.preregister_date, "1704067200");
    assert_eq!(request.event_date, "1706745600");
    assert_eq!(request.name, "Stand up comedy");
    assert!(!form.can_submit());
    assert_eq!(form.begin_submit(), None);
}

#[test]
fn successful_submit_resets_form() {
    let mut form = complete_form();
    form.begin_submit();
    assert_eq!(form.apply_submit(ApiOutcome::Success(Value::Null)), SubmitResult::Created);
    assert_eq!(form, NewEventForm::new());
}

#[test]
fn rejected_submit_keeps_input() {
    let mut form = complete_form();
    form.begin_submit();
    let result = form.apply_submit(ApiOutcome::ValidationError("event already exists".to_owned()));
    assert_eq!(result, SubmitResult::Rejected("event already exists".to_owned()));
    assert!(form.can_submit());
}

#[test]
fn server_fault_on_submit_leaves_visible_message() {
    let mut form = complete_form();
    form.begin_submit();
    let result = form.apply_submit(ApiOutcome::ServerFault("server error: 500".to_owned()));
    assert_eq!(result, SubmitResult::Failed("server error: 500".to_owned()));
    assert_eq!(form.submit_error(), Some("server error: 500"));
    assert!(form.can_submit());

    form.begin_submit();
    assert_eq!(form.submit_error(), None);
}

#[test]
fn network_failure_on_submit_leaves_visible_message() {
    let mut form = complete_form();
    form.begin_submit();
    form.apply_submit(ApiOutcome::NetworkFailure("request failed: offline".to_owned()));
    assert_eq!(form.submit_error(), Some("request failed: offline"));
}

#[test]
fn submit_401_is_reported() {
    let mut form = complete_form();
    form.begin_submit();
    assert_eq!(form.apply_submit(ApiOutcome::Unauthorized), SubmitResult::Unauthorized);
}

// =============================================================
// Dates
// =============================================================

#[test]
fn parse_date_input_accepts_iso_dates() {
    assert_eq!(parse_date_input("2024-03-05"), Some(date(2024, 3, 5)));
    assert_eq!(parse_date_input(""), None);
    assert_eq!(parse_date_input("05/03/2024"), None);
}

#[test]
fn epoch_string_is_utc_midnight() {
    assert_eq!(epoch_string(date(1970, 1, 2)), "86400");
}

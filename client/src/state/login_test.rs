use super::*;

const RATE_LIMIT_TEXT: &str = "For security purposes, you can only request this once every 60 seconds";

fn form_with_email(email: &str) -> LoginForm {
    let mut form = LoginForm::new();
    form.email = email.to_owned();
    form
}

// =============================================================
// Cooldown
// =============================================================

#[test]
fn cooldown_counts_down_to_zero() {
    let mut cd = Cooldown::start(3);
    assert!(cd.is_active());
    assert!(!cd.tick());
    assert!(!cd.tick());
    assert!(cd.tick());
    assert!(!cd.is_active());
    assert!(!cd.tick());
}

#[test]
fn cooldown_label_shows_remaining() {
    assert_eq!(Cooldown::start(60).label(), "Please wait (60)");
}

// =============================================================
// Request validation
// =============================================================

#[test]
fn initial_form_prompts_for_email() {
    let form = LoginForm::new();
    assert_eq!(form.message(), PROMPT_MESSAGE);
    assert_eq!(form.button_label(), REQUEST_LABEL);
    assert!(!form.button_disabled());
}

#[test]
fn empty_email_is_rejected_without_request() {
    let mut form = form_with_email("   ");
    assert_eq!(form.begin_request(), None);
    assert!(form.is_error());
    assert_eq!(form.message(), EMAIL_REQUIRED_MESSAGE);
    assert!(!form.button_disabled());
}

#[test]
fn begin_request_trims_and_marks_busy() {
    let mut form = form_with_email("  admin@tix.id ");
    assert_eq!(form.begin_request().as_deref(), Some("admin@tix.id"));
    assert!(form.button_disabled());
    assert_eq!(form.button_label(), BUSY_LABEL);
    assert_eq!(form.begin_request(), None, "second submit while busy must not send");
}

// =============================================================
// Outcomes
// =============================================================

#[test]
fn success_switches_to_link_sent() {
    let mut form = form_with_email("a@b.c");
    form.begin_request();
    form.apply_outcome(ApiOutcome::Success(Value::Null));
    assert_eq!(form.stage(), LoginStage::LinkSent);
    assert!(!form.button_disabled());
}

#[test]
fn server_fault_reenables_as_resend() {
    let mut form = form_with_email("a@b.c");
    form.begin_request();
    form.apply_outcome(ApiOutcome::ServerFault("smtp down".to_owned()));
    assert!(form.is_error());
    assert_eq!(form.message(), "smtp down");
    assert_eq!(form.button_label(), RESEND_LABEL);
    assert!(!form.button_disabled());
}

#[test]
fn rate_limit_disables_for_exactly_sixty_seconds() {
    let mut form = form_with_email("a@b.c");
    form.begin_request();
    form.apply_outcome(ApiOutcome::RateLimited(RATE_LIMIT_TEXT.to_owned()));
    assert_eq!(form.message(), RATE_LIMIT_TEXT);
    assert_eq!(form.button_label(), "Please wait (60)");

    for elapsed in 1..LOGIN_COOLDOWN_SECS {
        assert!(form.button_disabled(), "still disabled after {elapsed}s");
        form.tick();
        assert_eq!(form.button_label(), format!("Please wait ({})", LOGIN_COOLDOWN_SECS - elapsed));
    }
    assert!(form.button_disabled(), "disabled until the 60th tick");
    form.tick();
    assert!(!form.button_disabled());
    assert_eq!(form.button_label(), RESEND_LABEL);
    assert_eq!(form.begin_request().as_deref(), Some("a@b.c"));
}

#[test]
fn submit_during_cooldown_sends_nothing() {
    let mut form = form_with_email("a@b.c");
    form.begin_request();
    form.apply_outcome(ApiOutcome::RateLimited("slow down".to_owned()));
    form.tick();
    assert_eq!(form.begin_request(), None);
}

#[test]
fn reopen_resets_stage_but_keeps_cooldown() {
    let mut form = form_with_email("a@b.c");
    form.begin_request();
    form.apply_outcome(ApiOutcome::RateLimited("slow down".to_owned()));
    form.tick();
    form.reopen();
    assert_eq!(form.stage(), LoginStage::EnterEmail);
    assert_eq!(form.email, "a@b.c");
    assert!(form.button_disabled());
    assert_eq!(form.button_label(), "Please wait (59)");
}

#[test]
fn tick_without_cooldown_is_noop() {
    let mut form = LoginForm::new();
    form.tick();
    assert_eq!(form, LoginForm::new());
}

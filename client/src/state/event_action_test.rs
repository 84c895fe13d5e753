use super::*;
use crate::util::storage::MemoryStore;

#[test]
fn action_needs_selected_event() {
    let store = MemoryStore::new();
    let mut session = Session::load(&store);
    assert_eq!(action_event_id(&session), Err(SELECT_EVENT_MESSAGE));

    session.select_event(&store, "form-1", "Gig");
    assert_eq!(action_event_id(&session).as_deref(), Ok("form-1"));

    session.clear_event(&store);
    assert_eq!(action_event_id(&session), Err(SELECT_EVENT_MESSAGE));
}

#[test]
fn success_reports_server_message() {
    let r = report("Action Sync Data", ApiOutcome::Success(Value::String("Synced 12 rows".to_owned())));
    assert_eq!(r.kind, ToastKind::Info);
    assert_eq!(r.title, "Action Sync Data");
    assert_eq!(r.description, "Synced 12 rows");
    assert!(!r.leave_to_events);
}

#[test]
fn unauthorized_leaves_to_events() {
    let r = report("Action Export Data", ApiOutcome::Unauthorized);
    assert_eq!(r.title, "Unauthenticated");
    assert_eq!(r.description, UNAUTHORIZED_MESSAGE);
    assert!(r.leave_to_events);
}

#[test]
fn failure_reports_error_message() {
    let r = report("Action Export Data", ApiOutcome::ValidationError("no participants".to_owned()));
    assert_eq!(r.kind, ToastKind::Error);
    assert_eq!(r.description, "no participants");
    assert!(!r.leave_to_events);
}

#[test]
fn row_action_follows_status() {
    assert_eq!(row_action(&ParticipantStatus::Approved), Some(RowAction::ResendTicket));
    assert_eq!(row_action(&ParticipantStatus::WaitingApproval), Some(RowAction::UpdateStatus));
    assert_eq!(row_action(&ParticipantStatus::Declined), None);
    assert_eq!(row_action(&ParticipantStatus::Other("refunded".to_owned())), None);
}

#[test]
fn ticket_message_names_recipient() {
    assert_eq!(
        ticket_sent_message("Ticket generated.", "p@tix.id"),
        "Ticket generated. We will send the ticket to p@tix.id and to your email."
    );
    assert_eq!(ticket_sent_message(" ", "p@tix.id"), "We will send the ticket to p@tix.id and to your email.");
}

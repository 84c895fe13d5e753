use super::*;
use crate::net::types::StatusUpdateRequest;

#[test]
fn join_url_normalizes_slashes() {
    assert_eq!(join_url("/api/v1/", "/events"), "/api/v1/events");
    assert_eq!(join_url("http://localhost:8000/api/v1", "users"), "http://localhost:8000/api/v1/users");
}

#[test]
fn magic_link_request_posts_email() {
    let req = request_magic_link_request("admin@tix.id");
    assert_eq!(req.method, Method::Post);
    assert_eq!(req.path, "auth/validate");
    assert_eq!(req.body, Some(serde_json::json!({ "email": "admin@tix.id" })));
}

#[test]
fn verify_request_carries_jwt_and_type() {
    let req = verify_session_request("tok", "invite");
    assert_eq!(req.path, "auth/verify");
    assert_eq!(req.body, Some(serde_json::json!({ "jwt": "tok", "type": "invite" })));
}

#[test]
fn read_requests_have_no_body() {
    for req in [profile_request(), list_users_request(), list_events_request(), event_overview_request("f1")] {
        assert_eq!(req.method, Method::Get);
        assert!(req.body.is_none(), "{} should not carry a body", req.path);
    }
}

#[test]
fn event_scoped_paths_use_event_id() {
    assert_eq!(event_overview_request("f1").path, "events/f1/overview");
    assert_eq!(event_participants_request("f1").path, "events/f1/participants");
    assert_eq!(sync_participants_request("f1").path, "events/f1/sync");
    assert_eq!(export_event_request("f1", ExportType::Xls).path, "events/f1/export/xls");
}

#[test]
fn status_update_is_patch_with_reason() {
    let payload = StatusUpdateRequest { status: "declined".to_owned(), declined_reason: "fraud".to_owned() };
    let req = update_status_request("f1", 42, &payload);
    assert_eq!(req.method, Method::Patch);
    assert_eq!(req.path, "events/f1/participants/42/status");
    assert_eq!(
        req.body,
        Some(serde_json::json!({ "status": "declined", "declined_reason": "fraud" }))
    );
}

#[test]
fn ticket_request_sends_empty_object() {
    let req = generate_ticket_request("f1", 7);
    assert_eq!(req.path, "events/f1/participants/7/ticket");
    assert_eq!(req.body, Some(serde_json::json!({})));
}

#[test]
fn remove_user_is_delete_by_uuid() {
    let req = remove_user_request("9b1d");
    assert_eq!(req.method, Method::Delete);
    assert_eq!(req.path, "users/remove/9b1d");
}

#[test]
fn request_url_uses_configured_base() {
    let url = list_events_request().url();
    assert!(url.ends_with("/events"));
    assert!(url.starts_with(&api_base_url()));
}

#[test]
fn payload_text_renders_strings_and_values() {
    assert_eq!(payload_text(&serde_json::json!(" synced ")), "synced");
    assert_eq!(payload_text(&serde_json::Value::Null), "");
    assert_eq!(payload_text(&serde_json::json!(3)), "3");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn execute_is_stubbed_off_browser() {
    let outcome: ApiOutcome<()> = block_on(execute(profile_request()));
    assert!(matches!(outcome, ApiOutcome::NetworkFailure(_)));
}

#[cfg(not(feature = "hydrate"))]
fn block_on<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    loop {
        if let Poll::Ready(out) = fut.as_mut().poll(&mut cx) {
            return out;
        }
    }
}

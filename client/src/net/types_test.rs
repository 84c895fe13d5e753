use super::*;

#[test]
fn event_list_item_defaults_overview_fields() {
    let raw = serde_json::json!({
        "id": 3,
        "google_form_id": "1FAIpQL",
        "name": "Stand up comedy",
        "location": "Jalan Suka Maju 45",
        "preregister_date": 1_700_000_000,
        "event_date": 1_710_000_000,
        "total_participants": 12,
        "is_active": true
    });
    let event: Event = serde_json::from_value(raw).unwrap();
    assert_eq!(event.google_form_id, "1FAIpQL");
    assert_eq!(event.total_participants, 12);
    assert_eq!(event.total_declined_participant, 0);
    assert!(event.weekly_overview.is_empty());
    assert!(event.latest_respondents.is_empty());
}

#[test]
fn event_overview_accepts_null_lists() {
    let raw = serde_json::json!({
        "id": 1,
        "google_form_id": "f",
        "name": "n",
        "weekly_overview": null,
        "latest_respondents": null
    });
    let event: Event = serde_json::from_value(raw).unwrap();
    assert!(event.weekly_overview.is_empty());
    assert!(event.latest_respondents.is_empty());
}

#[test]
fn participant_reads_payment_field_and_status() {
    let raw = serde_json::json!({
        "id": 9,
        "event_id": 1,
        "name": "Rina",
        "email": "rina@example.com",
        "phone": "0812",
        "job": "engineer",
        "prof_of_payment": "https://img.example/pop.png",
        "date_of_birth": "1999-01-01",
        "approved_at": null,
        "declined_at": 1_700_000_100,
        "status": "declined",
        "declined_reason": "fraud"
    });
    let participant: Participant = serde_json::from_value(raw).unwrap();
    assert_eq!(participant.proof_of_payment, "https://img.example/pop.png");
    assert_eq!(participant.status, ParticipantStatus::Declined);
    assert_eq!(participant.approved_at, None);
    assert_eq!(participant.declined_at, Some(1_700_000_100));
}

#[test]
fn participant_status_accepts_short_waiting_spelling() {
    assert_eq!(ParticipantStatus::parse("waiting"), ParticipantStatus::WaitingApproval);
    assert_eq!(ParticipantStatus::parse("Waiting Approval"), ParticipantStatus::WaitingApproval);
}

#[test]
fn participant_status_keeps_unknown_values() {
    let status = ParticipantStatus::parse("none");
    assert_eq!(status, ParticipantStatus::Other("none".to_owned()));
    assert_eq!(status.to_string(), "none");
}

#[test]
fn participant_status_serializes_wire_string() {
    let value = serde_json::to_value(ParticipantStatus::WaitingApproval).unwrap();
    assert_eq!(value, serde_json::json!("waiting approval"));
}

#[test]
fn profile_payload_decodes_into_user() {
    let raw = serde_json::json!({ "uuid": "u-1", "email": "admin@tix.id", "username": "admin" });
    let user: User = serde_json::from_value(raw).unwrap();
    assert_eq!(user.username, "admin");
    assert_eq!(user.id, 0);
    assert!(!user.is_verified);
    assert_eq!(user.initials(), "ad");
}

#[test]
fn verify_request_renames_kind_to_type() {
    let body = VerifyRequest { jwt: "abc".to_owned(), kind: "magiclink".to_owned() };
    assert_eq!(
        serde_json::to_value(body).unwrap(),
        serde_json::json!({ "jwt": "abc", "type": "magiclink" })
    );
}

#[test]
fn export_type_path_segments() {
    assert_eq!(ExportType::Pdf.as_str(), "pdf");
    assert_eq!(ExportType::Xls.as_str(), "xls");
}

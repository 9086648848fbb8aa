use moodlog_audit::AuditEvent;
use serde_json::json;

#[test]
fn builder_sets_all_fields() {
    let event = AuditEvent::new("create", "checkin", "c-1", "u-1")
        .with_details(json!({ "overall": 17 }));

    assert_eq!(event.action, "create");
    assert_eq!(event.resource_type, "checkin");
    assert_eq!(event.resource_id, "c-1");
    assert_eq!(event.user_id, "u-1");
    assert_eq!(event.details, Some(json!({ "overall": 17 })));
}

#[test]
fn details_omitted_from_json_when_absent() {
    let event = AuditEvent::new("delete", "diary_entry", "d-1", "u-1");
    let value = serde_json::to_value(&event).unwrap();
    assert!(value.get("details").is_none());
    assert_eq!(value["action"], "delete");
}

#[test]
fn emit_without_subscriber_is_harmless() {
    AuditEvent::new("create", "mood_entry", "m-1", "u-1").emit();
}

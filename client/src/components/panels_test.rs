use super::*;

#[test]
fn init_failure_message_includes_adapter_reason() {
    let message = init_failure_message(&InitFailure::Adapter("timeout".into()));
    assert!(message.contains("timeout"));
    assert!(message.contains("Reload"));
}

#[test]
fn init_failure_message_for_reentry() {
    assert!(init_failure_message(&InitFailure::AlreadyStarted).contains("twice"));
}

#[test]
fn forbidden_message_by_role_count() {
    assert_eq!(forbidden_message(&[]), "Your account is not allowed to view this page.");
    assert_eq!(forbidden_message(&["admin".to_owned()]), "This page requires the 'admin' role.");
    assert_eq!(
        forbidden_message(&["admin".to_owned(), "auditor".to_owned()]),
        "This page requires these roles: admin, auditor."
    );
}

use crate::{SyncSnapshot, SyncStatus, UserRecord};

#[test]
fn given_synced_and_settled_without_error_then_complete() {
    let snapshot = SyncSnapshot {
        record: Some(UserRecord::new(
            "user_a".to_string(),
            "a@example.com".to_string(),
            None,
        )),
        status: SyncStatus::Synced,
        settled: true,
        ..Default::default()
    };

    assert!(snapshot.is_complete());
    assert!(!snapshot.is_failed());
}

#[test]
fn given_stale_record_visible_with_error_then_failed_not_complete() {
    // Given: a record from an earlier run while this run failed
    let snapshot = SyncSnapshot {
        record: Some(UserRecord::new(
            "user_a".to_string(),
            "a@example.com".to_string(),
            None,
        )),
        status: SyncStatus::Synced,
        last_error: Some("No email found for user".to_string()),
        settled: true,
        ..Default::default()
    };

    // Then
    assert!(snapshot.is_synced());
    assert!(snapshot.is_failed());
    assert!(!snapshot.is_complete());
}

#[test]
fn given_synced_but_not_settled_then_not_complete() {
    let snapshot = SyncSnapshot {
        status: SyncStatus::Synced,
        ..Default::default()
    };

    assert!(!snapshot.is_complete());
}

use crate::{SyncSnapshot, SyncStatus};

use std::str::FromStr;

use googletest::prelude::*;

#[test]
fn given_each_status_when_round_tripped_through_str_then_unchanged() {
    for status in [SyncStatus::Loading, SyncStatus::Synced, SyncStatus::NotSynced] {
        let parsed = SyncStatus::from_str(status.as_str()).unwrap();
        assert_that!(parsed, eq(status));
    }
}

#[test]
fn given_unknown_value_when_parsed_then_error() {
    assert_that!(SyncStatus::from_str("error"), err(anything()));
}

#[test]
fn given_snapshot_when_serialized_then_status_is_snake_case() {
    let snapshot = SyncSnapshot {
        status: SyncStatus::NotSynced,
        retry_count: 2,
        last_error: Some("timeout".to_string()),
        ..Default::default()
    };

    let json = serde_json::to_value(&snapshot).unwrap();

    assert_that!(json["status"].as_str(), some(eq("not_synced")));
    assert_that!(json["retry_count"].as_u64(), some(eq(2u64)));
    assert!(json["record"].is_null());
}

#[test]
fn given_settled_snapshot_with_error_then_failed() {
    let snapshot = SyncSnapshot {
        last_error: Some("No email found for user".to_string()),
        settled: true,
        ..Default::default()
    };

    assert!(snapshot.is_failed());
    assert!(!snapshot.is_synced());
}

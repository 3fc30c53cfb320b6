use crate::{RecordState, UserRecord};

use googletest::prelude::*;

#[test]
fn given_none_when_converted_then_missing() {
    assert_that!(RecordState::from(None), eq(&RecordState::Missing));
}

#[test]
fn given_record_when_converted_then_found() {
    let record = UserRecord::new("user_1".to_string(), "a@example.com".to_string(), None);

    let state = RecordState::from(Some(record.clone()));

    assert_that!(state.record(), some(eq(&record)));
    assert!(record.belongs_to("user_1"));
    assert!(!record.belongs_to("user_2"));
}

#[test]
fn given_default_state_then_pending() {
    assert!(RecordState::default().is_pending());
}

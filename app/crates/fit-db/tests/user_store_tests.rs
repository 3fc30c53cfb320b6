mod common;

use common::{create_test_identity, create_test_pool, create_test_request};

use fit_core::{IdentityState, RecordState};
use fit_db::{DbError, UserStore};

use std::time::Duration;

use googletest::prelude::*;
use tokio::sync::watch;
use tokio::time::timeout;
use uuid::Uuid;

const WAIT: Duration = Duration::from_secs(5);

#[tokio::test]
async fn given_signed_out_identity_when_current_user_then_none() {
    // Given
    let store = UserStore::new(create_test_pool().await);
    store.reconcile(&create_test_request("user_alpha")).await.unwrap();

    // When
    let result = store.current_user(&IdentityState::SignedOut).await.unwrap();

    // Then
    assert_that!(result, none());
}

#[tokio::test]
async fn given_signed_in_identity_with_record_when_current_user_then_returns_record() {
    // Given
    let store = UserStore::new(create_test_pool().await);
    let id = store.reconcile(&create_test_request("user_alpha")).await.unwrap();
    let identity = IdentityState::SignedIn(create_test_identity("user_alpha"));

    // When
    let result = store.current_user(&identity).await.unwrap();

    // Then
    assert_that!(result.map(|r| r.id), some(eq(id)));
}

#[tokio::test]
async fn given_unknown_id_when_user_by_id_then_not_found() {
    // Given
    let store = UserStore::new(create_test_pool().await);

    // When
    let result = store.user_by_id(Uuid::new_v4()).await;

    // Then
    assert!(matches!(result, Err(DbError::UserNotFound { .. })));
}

#[tokio::test]
async fn given_signed_out_when_update_profile_then_not_authenticated() {
    // Given
    let store = UserStore::new(create_test_pool().await);

    // When
    let result = store
        .update_profile(&IdentityState::SignedOut, Some("Name"))
        .await;

    // Then
    assert!(matches!(result, Err(DbError::NotAuthenticated { .. })));
}

#[tokio::test]
async fn given_signed_in_without_record_when_update_profile_then_not_found() {
    // Given
    let store = UserStore::new(create_test_pool().await);
    let identity = IdentityState::SignedIn(create_test_identity("user_alpha"));

    // When
    let result = store.update_profile(&identity, Some("Name")).await;

    // Then
    assert!(matches!(result, Err(DbError::UserNotFound { .. })));
}

#[tokio::test]
async fn given_subscription_when_identity_signs_in_and_record_created_then_pending_missing_found() {
    // Given: A subscription while the provider is still initializing
    let store = UserStore::new(create_test_pool().await);
    let (identity_tx, identity_rx) = watch::channel(IdentityState::Initializing);
    let mut record_rx = store.watch_current_user(identity_rx);
    assert!(record_rx.borrow().is_pending());

    // When: The identity signs in without a record
    identity_tx
        .send(IdentityState::SignedIn(create_test_identity("user_alpha")))
        .unwrap();

    // Then: The query resolves to Missing
    timeout(WAIT, record_rx.wait_for(|s| *s == RecordState::Missing))
        .await
        .unwrap()
        .unwrap();

    // When: The record is created
    let id = store.reconcile(&create_test_request("user_alpha")).await.unwrap();

    // Then: The query resolves to Found
    let state = timeout(WAIT, record_rx.wait_for(|s| s.record().is_some()))
        .await
        .unwrap()
        .unwrap()
        .clone();
    assert_that!(state.record().map(|r| r.id), some(eq(id)));
}

#[tokio::test]
async fn given_found_record_when_identity_signs_out_then_missing() {
    // Given
    let store = UserStore::new(create_test_pool().await);
    store.reconcile(&create_test_request("user_alpha")).await.unwrap();
    let (identity_tx, identity_rx) =
        watch::channel(IdentityState::SignedIn(create_test_identity("user_alpha")));
    let mut record_rx = store.watch_current_user(identity_rx);
    timeout(WAIT, record_rx.wait_for(|s| s.record().is_some()))
        .await
        .unwrap()
        .unwrap();

    // When
    identity_tx.send(IdentityState::SignedOut).unwrap();

    // Then
    timeout(WAIT, record_rx.wait_for(|s| *s == RecordState::Missing))
        .await
        .unwrap()
        .unwrap();
}

#[tokio::test]
async fn given_found_record_when_profile_updated_then_subscription_sees_new_name() {
    // Given
    let store = UserStore::new(create_test_pool().await);
    store.reconcile(&create_test_request("user_alpha")).await.unwrap();
    let identity = IdentityState::SignedIn(create_test_identity("user_alpha"));
    let (_identity_tx, identity_rx) = watch::channel(identity.clone());
    let mut record_rx = store.watch_current_user(identity_rx);
    timeout(WAIT, record_rx.wait_for(|s| s.record().is_some()))
        .await
        .unwrap()
        .unwrap();

    // When
    store
        .update_profile(&identity, Some("Renamed"))
        .await
        .unwrap();

    // Then
    timeout(
        WAIT,
        record_rx.wait_for(|s| {
            s.record().and_then(|r| r.name.as_deref()) == Some("Renamed")
        }),
    )
    .await
    .unwrap()
    .unwrap();
}

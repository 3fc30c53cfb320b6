use crate::{EmailAddress, Identity, IdentityState};

use googletest::prelude::*;

#[test]
fn given_primary_flag_on_second_address_when_primary_email_then_returns_flagged_one() {
    let identity = Identity::new("user_1")
        .with_email(EmailAddress::new("first@example.com"))
        .with_email(EmailAddress::primary("main@example.com"));

    assert_that!(identity.primary_email(), some(eq("main@example.com")));
}

#[test]
fn given_no_primary_flag_when_primary_email_then_falls_back_to_first() {
    let identity = Identity::new("user_1")
        .with_email(EmailAddress::new("first@example.com"))
        .with_email(EmailAddress::new("second@example.com"));

    assert_that!(identity.primary_email(), some(eq("first@example.com")));
}

#[test]
fn given_blank_primary_address_when_primary_email_then_skips_it() {
    let identity = Identity::new("user_1")
        .with_email(EmailAddress::new("first@example.com"))
        .with_email(EmailAddress::primary("   "));

    assert_that!(identity.primary_email(), some(eq("first@example.com")));
}

#[test]
fn given_no_emails_when_primary_email_then_none() {
    let identity = Identity::new("user_1");

    assert_that!(identity.primary_email(), none());
}

#[test]
fn given_blank_display_name_when_name_then_none() {
    let identity = Identity::new("user_1").with_display_name("  ");

    assert_that!(identity.name(), none());
}

#[test]
fn given_signed_out_state_when_identity_id_then_none() {
    assert_that!(IdentityState::SignedOut.identity_id(), none());
    assert_that!(IdentityState::Initializing.identity_id(), none());
    assert!(!IdentityState::default().is_signed_in());
}

#[test]
fn given_signed_in_state_when_identity_id_then_returns_id() {
    let state = IdentityState::SignedIn(Identity::new("user_42"));

    assert_that!(state.identity_id(), some(eq("user_42")));
    assert!(state.is_signed_in());
}

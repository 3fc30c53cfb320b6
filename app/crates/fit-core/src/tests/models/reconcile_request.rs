use crate::{EmailAddress, Identity, ReconcileRequest};

use googletest::prelude::*;

#[test]
fn given_identity_with_name_and_primary_email_when_from_identity_then_request_populated() {
    let identity = Identity::new("user_1")
        .with_email(EmailAddress::new("old@example.com"))
        .with_email(EmailAddress::primary("new@example.com"))
        .with_display_name("Jordan Lee");

    let request = ReconcileRequest::from_identity(&identity);

    assert_that!(
        request,
        some(eq(&ReconcileRequest {
            identity_id: "user_1".to_string(),
            email: "new@example.com".to_string(),
            name: Some("Jordan Lee".to_string()),
        }))
    );
}

#[test]
fn given_identity_without_name_when_from_identity_then_name_is_none() {
    let identity = Identity::new("user_1").with_email(EmailAddress::new("a@example.com"));

    let request = ReconcileRequest::from_identity(&identity).unwrap();

    assert_that!(request.name, none());
}

#[test]
fn given_identity_without_emails_when_from_identity_then_none() {
    let identity = Identity::new("user_1").with_display_name("No Mail");

    assert_that!(ReconcileRequest::from_identity(&identity), none());
}

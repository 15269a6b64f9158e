//! Integration tests for profile creation and lookup.

mod common;

use common::{account, profile, TestHarness};
use mentora_core::{ErrorKind, MarketError, Role};

#[test]
fn create_user_stores_profile() {
    let harness = TestHarness::new();
    let ayoub = account("ayoub");

    let user = harness
        .market
        .create_user(&ayoub, profile("ayoub", Role::Mentor))
        .unwrap();
    assert_eq!(user.account_id, ayoub);
    assert_eq!(user.username, "ayoub");
    assert!(user.is_mentor());

    let fetched = harness.market.get_user_by_id(&ayoub).unwrap();
    assert_eq!(fetched.email, "ayoub@gmail.com");
    assert_eq!(fetched.role, Role::Mentor);
}

#[test]
fn one_profile_per_account() {
    let harness = TestHarness::new();
    let ayoub = account("ayoub");

    harness
        .market
        .create_user(&ayoub, profile("ayoub", Role::Mentor))
        .unwrap();

    let mut second = profile("ayoub2", Role::Student);
    second.username = "other".into();
    second.email = "other@gmail.com".into();
    let err = harness.market.create_user(&ayoub, second).unwrap_err();
    assert!(matches!(err, MarketError::ProfileExists { .. }));
    assert_eq!(err.kind(), ErrorKind::Conflict);
}

#[test]
fn username_and_email_are_unique() {
    let harness = TestHarness::new();
    harness.register_mentor("ayoub");

    let mut same_username = profile("ahmed", Role::Student);
    same_username.username = "ayoub".into();
    let err = harness
        .market
        .create_user(&account("ahmed"), same_username)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conflict);

    let mut same_email = profile("ahmed", Role::Student);
    same_email.email = "ayoub@gmail.com".into();
    let err = harness
        .market
        .create_user(&account("ahmed"), same_email)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conflict);

    // A fully distinct profile still goes through.
    harness.register_student("ahmed");
}

#[test]
fn failed_creation_leaves_no_profile() {
    let harness = TestHarness::new();
    harness.register_mentor("ayoub");

    let mut colliding = profile("ahmed", Role::Student);
    colliding.username = "ayoub".into();
    harness
        .market
        .create_user(&account("ahmed"), colliding)
        .unwrap_err();

    let err = harness.market.get_user_by_id(&account("ahmed")).unwrap_err();
    assert!(matches!(err, MarketError::UserNotFound { .. }));
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn unknown_account_is_not_found() {
    let harness = TestHarness::new();
    let err = harness
        .market
        .get_user_by_id(&account("nobody"))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

//! File store round trips against a real filesystem.

use member_store::{MemberFile, StoreError};
use shared::models::{Clearance, Member, MemberKind, SubscriptionLevel};
use shared::registry::MemberRegistry;
use shared::util::ClockSeededIds;

#[test]
fn test_customer_survives_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let store = MemberFile::new(dir.path(), "member.bin");

    let registry = MemberRegistry::new();
    let mut ids = ClockSeededIds::new();
    let mut customer = registry.customer();
    customer.initialize(
        &mut ids,
        "John Doe",
        "123 Maple Rd",
        123456789,
        987654321,
        SubscriptionLevel::Basic,
    );

    store.save(&Member::Customer(customer.clone())).unwrap();
    let loaded = store.load().unwrap();

    assert_eq!(loaded.kind(), MemberKind::Customer);
    assert_eq!(loaded.name(), "John Doe");
    assert_eq!(loaded.address(), "123 Maple Rd");
    assert_eq!(loaded.bracelet_id(), 987654321);
    assert!(loaded.membership_id() > 0);

    let profile = loaded.as_customer().unwrap();
    assert_eq!(profile.credit_card_number, 123456789);
    assert_eq!(profile.gym_credits, 20);
    assert_eq!(profile.subscription_level, SubscriptionLevel::Basic);

    assert_eq!(loaded, Member::Customer(customer));
}

#[test]
fn test_staff_survives_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let store = MemberFile::new(dir.path(), "member.bin");

    let registry = MemberRegistry::new();
    let mut ids = ClockSeededIds::new();
    let mut staff = registry.staff();
    staff.initialize(
        &mut ids,
        "Mary Janes",
        "420 Dank Hill",
        0,
        87654321,
        Clearance::Administrator,
    );

    store.save(&Member::Staff(staff.clone())).unwrap();
    let loaded = store.load().unwrap();

    assert_eq!(loaded.kind(), MemberKind::Staff);
    let profile = loaded.as_staff().unwrap();
    assert_eq!(profile.employee_id, staff.employee_id);
    assert_eq!(profile.clearance, Clearance::Administrator);
    assert_eq!(loaded, Member::Staff(staff));
}

#[test]
fn test_save_replaces_previous_content_entirely() {
    let dir = tempfile::tempdir().unwrap();
    let store = MemberFile::new(dir.path(), "member.bin");

    let registry = MemberRegistry::new();
    let mut long = registry.customer();
    long.name = "A customer with a deliberately long name on file".to_string();
    long.address = "Somewhere far away, behind the word mountains".to_string();
    store.save(&Member::Customer(long)).unwrap();
    let long_len = std::fs::metadata(store.path()).unwrap().len();

    let short = Member::Staff(registry.staff());
    store.save(&short).unwrap();

    let short_len = std::fs::metadata(store.path()).unwrap().len();
    assert!(short_len < long_len);
    assert_eq!(store.load().unwrap(), short);
}

#[test]
fn test_loading_a_missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = MemberFile::new(dir.path(), "absent.bin");
    match store.load() {
        Err(StoreError::Io(_)) => {}
        other => panic!("expected an IO error, got {other:?}"),
    }
}

#[test]
fn test_save_creates_missing_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let store = MemberFile::at_path(dir.path().join("nested/deeper/member.bin"));

    let registry = MemberRegistry::new();
    store.save(&registry.blank(MemberKind::Staff)).unwrap();
    assert_eq!(store.load().unwrap().kind(), MemberKind::Staff);
}

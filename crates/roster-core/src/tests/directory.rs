use crate::tests::{TestStore, draft, server_user};
use crate::{CoreError, OverlaySlot, User, UserDirectory, UserId};

use googletest::assert_that;
use googletest::prelude::{eq, len, none, some};

// =========================================================================
// Hydration
// =========================================================================

#[test]
fn given_empty_store_when_hydrated_then_overlays_are_empty() {
    let directory = UserDirectory::hydrate(TestStore::default());

    assert!(directory.overlay().is_empty());
    assert!(directory.users().is_empty());
}

#[test]
fn given_persisted_slots_when_hydrated_then_overlays_are_restored() {
    let store = TestStore::with_slot(OverlaySlot::Added, r#"[{"id":"local-1","name":"Bob"}]"#);
    store
        .slots
        .borrow_mut()
        .insert(OverlaySlot::Deleted.key(), r#"["1"]"#.to_string());

    let mut directory = UserDirectory::hydrate(store);
    directory.sync_server_users(vec![server_user(1, "Alice"), server_user(2, "Carol")]);

    let names: Vec<_> = directory
        .users()
        .into_iter()
        .filter_map(|u| u.name)
        .collect();
    assert_eq!(names, vec!["Bob", "Carol"]);
}

#[test]
fn given_malformed_slot_when_hydrated_then_that_overlay_is_empty() {
    let store = TestStore::with_slot(OverlaySlot::Edited, "{not json");
    store
        .slots
        .borrow_mut()
        .insert(OverlaySlot::Deleted.key(), r#"["3"]"#.to_string());

    let directory = UserDirectory::hydrate(store);

    assert_that!(directory.overlay().edited_users, len(eq(0)));
    assert_that!(directory.overlay().deleted_ids, len(eq(1)));
}

#[test]
fn given_unreadable_store_when_hydrated_then_overlays_are_empty() {
    let store = TestStore {
        fail_reads: true,
        ..TestStore::default()
    };

    let directory = UserDirectory::hydrate(store);

    assert!(directory.overlay().is_empty());
}

// =========================================================================
// Mutations
// =========================================================================

#[test]
fn given_draft_when_added_then_local_id_assigned_and_persisted() {
    let mut directory = UserDirectory::new(TestStore::default());

    let added = directory.add_user(draft("Bob"));

    let id = added.id.clone().unwrap();
    assert!(id.is_local());
    assert_eq!(directory.overlay().added, vec![added]);

    let persisted: Vec<User> =
        serde_json::from_str(&directory.store().slot(OverlaySlot::Added).unwrap()).unwrap();
    assert_eq!(persisted[0].id, Some(id));
}

#[test]
fn given_record_with_id_when_added_then_id_is_kept() {
    let mut directory = UserDirectory::new(TestStore::default());

    let added = directory.add_user(User::with_id("local-fixed"));

    assert_eq!(added.id, Some(UserId::from("local-fixed")));
}

#[test]
fn given_two_additions_when_listed_then_newest_first() {
    let mut directory = UserDirectory::new(TestStore::default());

    directory.add_user(draft("First"));
    directory.add_user(draft("Second"));

    let names: Vec<_> = directory.users().into_iter().filter_map(|u| u.name).collect();
    assert_eq!(names, vec!["Second", "First"]);
}

#[test]
fn given_repeated_edit_when_applied_then_single_entry_remains() {
    let mut directory = UserDirectory::new(TestStore::default());
    let edit = User {
        id: Some(UserId::Numeric(1)),
        name: Some("Alicia".to_string()),
        ..User::default()
    };

    directory.edit_user(edit.clone()).unwrap();
    directory.edit_user(edit.clone()).unwrap();

    assert_eq!(directory.overlay().edited_users, vec![edit]);
}

#[test]
fn given_new_edit_when_applied_then_it_replaces_and_moves_to_front() {
    let mut directory = UserDirectory::new(TestStore::default());
    let first = User {
        id: Some(UserId::Numeric(1)),
        name: Some("One".to_string()),
        ..User::default()
    };
    let second = User {
        id: Some(UserId::Numeric(2)),
        name: Some("Two".to_string()),
        ..User::default()
    };
    let replacement = User {
        id: Some(UserId::from("1")),
        name: Some("Uno".to_string()),
        ..User::default()
    };

    directory.edit_user(first).unwrap();
    directory.edit_user(second.clone()).unwrap();
    directory.edit_user(replacement.clone()).unwrap();

    assert_eq!(directory.overlay().edited_users, vec![replacement, second]);
}

#[test]
fn given_edit_without_id_when_applied_then_missing_identifier_error() {
    let mut directory = UserDirectory::new(TestStore::default());

    let result = directory.edit_user(draft("Nobody"));

    assert!(matches!(result, Err(CoreError::MissingIdentifier { .. })));
    assert!(directory.overlay().edited_users.is_empty());
}

#[test]
fn given_repeated_delete_when_applied_then_single_tombstone() {
    let mut directory = UserDirectory::new(TestStore::default());

    assert!(directory.delete_user(&UserId::Numeric(1)));
    assert!(!directory.delete_user(&UserId::from("1")));

    assert_that!(directory.overlay().deleted_ids, len(eq(1)));
    assert_eq!(
        directory.store().slot(OverlaySlot::Deleted).as_deref(),
        Some(r#"["1"]"#)
    );
}

#[test]
fn given_failing_store_when_mutated_then_memory_state_still_updates() {
    let store = TestStore {
        fail_writes: true,
        ..TestStore::default()
    };
    let mut directory = UserDirectory::new(store);

    directory.add_user(draft("Bob"));
    directory.delete_user(&UserId::Numeric(4));

    assert_that!(directory.users(), len(eq(1)));
    assert!(directory.is_deleted(&UserId::Numeric(4)));
    assert_eq!(directory.store().writes.get(), 0);
}

#[test]
fn given_new_snapshot_when_synced_then_previous_is_replaced() {
    let mut directory = UserDirectory::new(TestStore::default());

    directory.sync_server_users(vec![server_user(1, "Alice")]);
    directory.sync_server_users(vec![server_user(2, "Carol")]);

    assert_that!(directory.find(&UserId::Numeric(1)), none());
    assert_that!(directory.find(&UserId::Numeric(2)), some(eq(&server_user(2, "Carol"))));
}

// =========================================================================
// Scenario
// =========================================================================

#[test]
fn given_add_delete_edit_sequence_when_listed_then_overlays_compose() {
    let mut directory = UserDirectory::new(TestStore::default());
    directory.sync_server_users(vec![server_user(1, "Alice")]);

    let bob = directory.add_user(draft("Bob"));
    let bob_id = bob.id.clone().unwrap();
    let ids: Vec<_> = directory.users().into_iter().filter_map(|u| u.id).collect();
    assert_eq!(ids, vec![bob_id.clone(), UserId::Numeric(1)]);

    directory.delete_user(&UserId::Numeric(1));
    assert_eq!(directory.users(), vec![bob.clone()]);

    directory
        .edit_user(User {
            id: Some(bob_id.clone()),
            name: Some("Bobby".to_string()),
            ..User::default()
        })
        .unwrap();

    let users = directory.users();
    assert_that!(users, len(eq(1)));
    assert_eq!(users[0].id, Some(bob_id));
    assert_eq!(users[0].name.as_deref(), Some("Bobby"));
    assert_eq!(users[0].email, bob.email);
    // the added overlay itself is untouched by the edit
    assert_eq!(directory.overlay().added, vec![bob]);
}

mod directory;
mod models;

use crate::{Address, Company, OverlaySlot, OverlayStore, User, UserId};

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fmt;

/// Build a server-style user with the listing fields filled in
pub(crate) fn server_user(id: u64, name: &str) -> User {
    let handle = name.to_lowercase().replace(' ', "_");
    User {
        id: Some(UserId::Numeric(id)),
        name: Some(name.to_string()),
        username: Some(handle.clone()),
        email: Some(format!("{handle}@example.com")),
        phone: Some(format!("555-010{id}")),
        website: Some(format!("{handle}.example.com")),
        address: Some(Address {
            city: Some(String::from("Gwenborough")),
            ..Address::default()
        }),
        company: Some(Company {
            name: Some(format!("{name} Holdings")),
            ..Company::default()
        }),
    }
}

/// Build a draft without identifier
pub(crate) fn draft(name: &str) -> User {
    User {
        name: Some(name.to_string()),
        username: Some(name.to_lowercase()),
        email: Some(format!("{}@example.com", name.to_lowercase())),
        ..User::default()
    }
}

#[derive(Debug)]
pub(crate) struct SlotFailure(&'static str);

impl fmt::Display for SlotFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slot failure: {}", self.0)
    }
}

impl std::error::Error for SlotFailure {}

/// In-test store recording every write
#[derive(Default)]
pub(crate) struct TestStore {
    pub(crate) slots: RefCell<HashMap<&'static str, String>>,
    pub(crate) writes: Cell<usize>,
    pub(crate) fail_reads: bool,
    pub(crate) fail_writes: bool,
}

impl TestStore {
    pub(crate) fn with_slot(slot: OverlaySlot, contents: &str) -> Self {
        let store = Self::default();
        store.slots.borrow_mut().insert(slot.key(), contents.to_string());
        store
    }

    pub(crate) fn slot(&self, slot: OverlaySlot) -> Option<String> {
        self.slots.borrow().get(slot.key()).cloned()
    }
}

impl OverlayStore for TestStore {
    type Error = SlotFailure;

    fn read_slot(&self, slot: OverlaySlot) -> Result<Option<String>, Self::Error> {
        if self.fail_reads {
            return Err(SlotFailure("read"));
        }
        Ok(self.slot(slot))
    }

    fn write_slot(&self, slot: OverlaySlot, contents: &str) -> Result<(), Self::Error> {
        if self.fail_writes {
            return Err(SlotFailure("write"));
        }
        self.writes.set(self.writes.get() + 1);
        self.slots.borrow_mut().insert(slot.key(), contents.to_string());
        Ok(())
    }
}

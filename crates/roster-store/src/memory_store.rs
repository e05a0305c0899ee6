use crate::{StoreError, StoreErrorResult};

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use roster_core::{OverlaySlot, OverlayStore};

/// Slots held in process memory. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryOverlayStore {
    slots: RefCell<HashMap<OverlaySlot, String>>,
    fail_writes: Cell<bool>,
}

impl MemoryOverlayStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with one slot
    pub fn with_slot(slot: OverlaySlot, contents: impl Into<String>) -> Self {
        let store = Self::default();
        store.slots.borrow_mut().insert(slot, contents.into());
        store
    }

    /// Make every following write fail (simulates a full or revoked store)
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// Current contents of a slot
    pub fn contents(&self, slot: OverlaySlot) -> Option<String> {
        self.slots.borrow().get(&slot).cloned()
    }
}

impl OverlayStore for MemoryOverlayStore {
    type Error = StoreError;

    fn read_slot(&self, slot: OverlaySlot) -> StoreErrorResult<Option<String>> {
        Ok(self.contents(slot))
    }

    fn write_slot(&self, slot: OverlaySlot, contents: &str) -> StoreErrorResult<()> {
        if self.fail_writes.get() {
            return Err(StoreError::unavailable(slot.key()));
        }
        self.slots.borrow_mut().insert(slot, contents.to_string());
        Ok(())
    }
}

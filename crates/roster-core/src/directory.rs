//! Session-owned user directory: overlay state, server snapshot and the
//! durable store the overlays are written through to.

use crate::{
    CoreError, OverlaySlot, OverlayState, Result as CoreErrorResult, User, UserId, reconcile,
};

use std::collections::BTreeSet;

use log::{debug, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Durable key-value storage for the overlay slots.
///
/// Each slot holds one JSON document and is always overwritten whole.
pub trait OverlayStore {
    type Error: std::error::Error;

    /// Read a slot. `Ok(None)` means the slot was never written.
    fn read_slot(&self, slot: OverlaySlot) -> Result<Option<String>, Self::Error>;

    /// Replace a slot's contents.
    fn write_slot(&self, slot: OverlaySlot, contents: &str) -> Result<(), Self::Error>;
}

/// Overlay state plus the last server snapshot, written through to a store.
pub struct UserDirectory<S: OverlayStore> {
    store: S,
    overlay: OverlayState,
    server_users: Vec<User>,
}

impl<S: OverlayStore> UserDirectory<S> {
    /// Directory with empty overlays and no snapshot. Nothing is read.
    pub fn new(store: S) -> Self {
        Self {
            store,
            overlay: OverlayState::default(),
            server_users: Vec::new(),
        }
    }

    /// Load the overlays from the store.
    ///
    /// A slot that is missing, unreadable or holds malformed JSON leaves that
    /// overlay empty; the failure is logged and otherwise ignored.
    pub fn hydrate(store: S) -> Self {
        let added: Vec<User> = load_slot(&store, OverlaySlot::Added);
        let edited_users: Vec<User> = load_slot(&store, OverlaySlot::Edited);
        let deleted_ids: BTreeSet<String> = load_slot(&store, OverlaySlot::Deleted);

        debug!(
            "Hydrated overlays: {} added, {} edited, {} deleted",
            added.len(),
            edited_users.len(),
            deleted_ids.len()
        );

        Self {
            store,
            overlay: OverlayState {
                added,
                edited_users,
                deleted_ids,
            },
            server_users: Vec::new(),
        }
    }

    /// Reconciled user list, recomputed on every call
    pub fn users(&self) -> Vec<User> {
        reconcile(&self.overlay, &self.server_users)
    }

    /// Reconciled record with the given identifier
    pub fn find(&self, id: &UserId) -> Option<User> {
        let key = id.key();
        self.users().into_iter().find(|user| user.has_key(&key))
    }

    pub fn is_deleted(&self, id: &UserId) -> bool {
        self.overlay.is_deleted(&id.key())
    }

    pub fn overlay(&self) -> &OverlayState {
        &self.overlay
    }

    pub fn server_users(&self) -> &[User] {
        &self.server_users
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Record a locally created user.
    ///
    /// A record without an identifier gets a fresh `local-` id. The record is
    /// prepended to the added overlay, which is then persisted in full.
    pub fn add_user(&mut self, mut user: User) -> User {
        if user.id.is_none() {
            user.id = Some(UserId::generate_local());
        }

        self.overlay.added.insert(0, user.clone());
        self.persist(OverlaySlot::Added);

        user
    }

    /// Record an edit. Any previous edit for the same identifier is replaced.
    pub fn edit_user(&mut self, user: User) -> CoreErrorResult<()> {
        let Some(key) = user.key() else {
            return Err(CoreError::missing_identifier());
        };

        self.overlay.edited_users.retain(|edit| !edit.has_key(&key));
        self.overlay.edited_users.insert(0, user);
        self.persist(OverlaySlot::Edited);

        Ok(())
    }

    /// Tombstone an identifier. Returns `false` if it was already deleted.
    pub fn delete_user(&mut self, id: &UserId) -> bool {
        let inserted = self.overlay.deleted_ids.insert(id.key());
        self.persist(OverlaySlot::Deleted);
        inserted
    }

    /// Replace the server snapshot wholesale
    pub fn sync_server_users(&mut self, users: Vec<User>) {
        debug!("Server snapshot replaced: {} users", users.len());
        self.server_users = users;
    }

    fn persist(&self, slot: OverlaySlot) {
        let serialized = match slot {
            OverlaySlot::Added => to_slot_json(slot, &self.overlay.added),
            OverlaySlot::Edited => to_slot_json(slot, &self.overlay.edited_users),
            OverlaySlot::Deleted => to_slot_json(slot, &self.overlay.deleted_ids),
        };

        match serialized {
            Ok(json) => {
                if let Err(e) = self.store.write_slot(slot, &json) {
                    warn!("Failed to persist overlay slot {slot}: {e}");
                }
            }
            Err(e) => warn!("{e}"),
        }
    }
}

fn to_slot_json<T: Serialize>(slot: OverlaySlot, value: &T) -> CoreErrorResult<String> {
    serde_json::to_string(value).map_err(|e| CoreError::serialization(slot.key(), e))
}

fn load_slot<S: OverlayStore, T: DeserializeOwned + Default>(store: &S, slot: OverlaySlot) -> T {
    match store.read_slot(slot) {
        Ok(Some(contents)) => serde_json::from_str(&contents).unwrap_or_else(|e| {
            warn!("Overlay slot {slot} is malformed, starting empty: {e}");
            T::default()
        }),
        Ok(None) => T::default(),
        Err(e) => {
            warn!("Failed to read overlay slot {slot}, starting empty: {e}");
            T::default()
        }
    }
}

use crate::User;

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Durable slot holding one of the three overlays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverlaySlot {
    Added,
    Edited,
    Deleted,
}

impl OverlaySlot {
    pub const ALL: [OverlaySlot; 3] = [Self::Added, Self::Edited, Self::Deleted];

    /// Storage key of the slot
    pub fn key(&self) -> &'static str {
        match self {
            Self::Added => "addedUsers",
            Self::Edited => "editedUsers",
            Self::Deleted => "deletedIds",
        }
    }
}

impl fmt::Display for OverlaySlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Local changes not confirmed by the remote store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayState {
    /// Locally created records, newest first
    pub added: Vec<User>,
    /// Latest edit per identifier, newest first
    pub edited_users: Vec<User>,
    /// Tombstoned identifiers (string-coerced)
    pub deleted_ids: BTreeSet<String>,
}

impl OverlayState {
    /// Edit overlay entry for an identifier key
    pub fn edit_for(&self, key: &str) -> Option<&User> {
        self.edited_users.iter().find(|edit| edit.has_key(key))
    }

    pub fn is_deleted(&self, key: &str) -> bool {
        self.deleted_ids.contains(key)
    }

    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.edited_users.is_empty() && self.deleted_ids.is_empty()
    }
}

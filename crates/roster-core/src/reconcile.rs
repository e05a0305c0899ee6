//! Merge of the remote snapshot with the local overlays.

use crate::{OverlayState, User};

/// Build the logical user list.
///
/// Locally added records come first (newest first), followed by the server
/// snapshot in server order. Tombstoned identifiers are dropped whatever
/// their origin, and each surviving record is shallow-merged with its edit
/// overlay entry, if one exists. Edits never move a record.
pub fn reconcile(overlay: &OverlayState, server_users: &[User]) -> Vec<User> {
    overlay
        .added
        .iter()
        .chain(server_users.iter())
        .filter(|user| !user.key().is_some_and(|key| overlay.is_deleted(&key)))
        .map(|user| match user.key().and_then(|key| overlay.edit_for(&key)) {
            Some(edit) => user.merged_with(edit),
            None => user.clone(),
        })
        .collect()
}

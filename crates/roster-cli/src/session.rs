//! One interactive session: the local user directory plus the remote API.
//!
//! Remote writes are best effort. The overlay is the source of truth for what
//! the user sees, so a failed request is logged and the local change stands.

use crate::{AppError, AppErrorResult, Client};

use log::{debug, info, warn};
use roster_core::{
    OverlayState, OverlayStore, PageLink, PageSummary, Requirement, User, UserDirectory, UserId,
    filter_users, page_count, page_links, paginate, resolve_page, validate_user,
};
use serde::Serialize;

/// A resolved page of the reconciled, filtered user list
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserListing {
    pub users: Vec<User>,
    /// Matches across all pages
    pub total: usize,
    pub summary: PageSummary,
    pub links: Vec<PageLink>,
}

pub struct Session<S: OverlayStore> {
    directory: UserDirectory<S>,
    client: Client,
}

impl<S: OverlayStore> Session<S> {
    pub fn new(directory: UserDirectory<S>, client: Client) -> Self {
        Self { directory, client }
    }

    pub fn directory(&self) -> &UserDirectory<S> {
        &self.directory
    }

    /// Fetch the server snapshot.
    ///
    /// Returns `false` if the fetch failed; the previous snapshot is kept.
    pub async fn refresh(&mut self) -> bool {
        match self.client.list_users().await {
            Ok(users) => {
                info!("Fetched {} users from {}", users.len(), self.client.base_url);
                self.directory.sync_server_users(users);

                let overlay = self.directory.overlay();
                if !overlay.is_empty() {
                    info!(
                        "Layering local changes: {} added, {} edited, {} deleted",
                        overlay.added.len(),
                        overlay.edited_users.len(),
                        overlay.deleted_ids.len()
                    );
                }
                true
            }
            Err(e) => {
                warn!("Failed to fetch users, keeping previous snapshot: {e}");
                false
            }
        }
    }

    /// Filter the reconciled list and cut out one page.
    ///
    /// A page past the end is redirected to the last page, page 0 to the first.
    pub fn list(&self, query: &str, page: usize, page_size: usize) -> UserListing {
        let filtered = filter_users(&self.directory.users(), query);
        let pages = page_count(filtered.len(), page_size);
        let page = resolve_page(page, pages);

        let window = paginate(&filtered, page, page_size);

        UserListing {
            users: window.page_items,
            total: window.total,
            summary: PageSummary::new(page, page_size, window.total),
            links: page_links(page, pages),
        }
    }

    /// Reconciled record if there is one, else whatever the server has.
    ///
    /// Deleted ids are not found even if the server still serves them.
    pub async fn show(&self, id: &UserId) -> AppErrorResult<User> {
        if self.directory.is_deleted(id) {
            return Err(AppError::not_found(id));
        }

        if let Some(user) = self.directory.find(id) {
            return Ok(user);
        }

        self.client.get_user(id).await.map_err(|e| {
            debug!("Remote lookup of user {id} failed: {e}");
            AppError::not_found(id)
        })
    }

    /// Validate and record a new user under a fresh local id
    pub async fn create(&mut self, draft: User) -> AppErrorResult<User> {
        validate_user(&draft, Requirement::Complete)?;

        match self.client.create_user(&draft).await {
            Ok(created) => debug!(
                "Server accepted new user as {}",
                created.key().unwrap_or_default()
            ),
            Err(e) => warn!("Failed to create user on server, keeping it locally: {e}"),
        }

        Ok(self.directory.add_user(User { id: None, ..draft }))
    }

    /// Shallow-merge `changes` onto the current record and record the result
    pub async fn edit(&mut self, id: &UserId, changes: User) -> AppErrorResult<User> {
        self.edit_with(id, |_| changes).await
    }

    /// Like [`Session::edit`], with the changes built from the current record
    pub async fn edit_with<F>(&mut self, id: &UserId, build: F) -> AppErrorResult<User>
    where
        F: FnOnce(&User) -> User,
    {
        let current = self
            .directory
            .find(id)
            .ok_or_else(|| AppError::not_found(id))?;

        let changes = build(&current);
        validate_user(&changes, Requirement::Partial)?;

        let updated = current.merged_with(&User {
            id: current.id.clone(),
            ..changes
        });

        if id.is_local() {
            debug!("User {id} only exists locally, not sending update");
        } else if let Err(e) = self.client.update_user(id, &updated).await {
            warn!("Failed to update user {id} on server, keeping the edit locally: {e}");
        }

        self.directory.edit_user(updated.clone())?;
        Ok(updated)
    }

    /// Tombstone a user, then tell the server.
    ///
    /// Returns `false` if the id was already deleted.
    pub async fn delete(&mut self, id: &UserId) -> bool {
        let newly_deleted = self.directory.delete_user(id);

        if id.is_local() {
            debug!("User {id} only exists locally, not sending delete");
        } else if let Err(e) = self.client.delete_user(id).await {
            warn!("Failed to delete user {id} on server, keeping the deletion locally: {e}");
        }

        newly_deleted
    }

    /// Local changes not reflected by the server
    pub fn pending(&self) -> &OverlayState {
        self.directory.overlay()
    }
}

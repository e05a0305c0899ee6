pub mod directory;
pub mod error;
pub mod models;
pub mod query;
pub mod reconcile;
pub mod validation;

#[cfg(test)]
mod tests;

pub use directory::{OverlayStore, UserDirectory};
pub use error::{CoreError, Result};
pub use models::overlay::{OverlaySlot, OverlayState};
pub use models::user::{Address, Company, Geo, User};
pub use models::user_id::{LOCAL_ID_PREFIX, UserId};
pub use query::{
    Page, PageLink, PageSummary, filter_users, page_count, page_links, paginate, resolve_page,
};
pub use reconcile::reconcile;
pub use validation::{Requirement, ValidationIssue, validate_user};

/// Page sizes offered to callers
pub const PAGE_SIZES: [usize; 6] = [5, 10, 15, 20, 25, 50];

/// Page size used when the caller does not pick one
pub const DEFAULT_PAGE_SIZE: usize = 5;

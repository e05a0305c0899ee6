//! Durable storage for the local overlays.
//!
//! [`FileOverlayStore`] keeps one JSON file per slot; [`MemoryOverlayStore`]
//! keeps slots in process memory and can be told to fail writes.

mod error;
mod file_store;
mod memory_store;


pub use error::{Result as StoreErrorResult, StoreError};
pub use file_store::FileOverlayStore;
pub use memory_store::MemoryOverlayStore;

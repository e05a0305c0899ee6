use crate::{StoreError, StoreErrorResult};

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use log::debug;
use roster_core::{OverlaySlot, OverlayStore};

/// Overlay slots as `<key>.json` files in one directory.
///
/// The directory is created on first write. Writes go through a temp file
/// that is synced and then renamed over the slot file.
#[derive(Debug, Clone)]
pub struct FileOverlayStore {
    dir: PathBuf,
}

impl FileOverlayStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the file backing a slot
    pub fn slot_path(&self, slot: OverlaySlot) -> PathBuf {
        self.dir.join(format!("{}.json", slot.key()))
    }
}

impl OverlayStore for FileOverlayStore {
    type Error = StoreError;

    fn read_slot(&self, slot: OverlaySlot) -> StoreErrorResult<Option<String>> {
        let path = self.slot_path(slot);

        if !path.exists() {
            debug!("No overlay file at {path:?}");
            return Ok(None);
        }

        fs::read_to_string(&path)
            .map(Some)
            .map_err(|e| StoreError::file_read(path, e))
    }

    fn write_slot(&self, slot: OverlaySlot, contents: &str) -> StoreErrorResult<()> {
        fs::create_dir_all(&self.dir).map_err(|e| StoreError::dir_creation(self.dir.clone(), e))?;

        let final_path = self.slot_path(slot);
        let temp_path = self
            .dir
            .join(format!("{}.json.tmp.{}", slot.key(), std::process::id()));

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;

            file.write_all(contents.as_bytes())
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &final_path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            StoreError::atomic_rename(temp_path, final_path.clone(), e)
        })?;

        debug!("Wrote overlay slot {slot} ({} bytes)", contents.len());
        Ok(())
    }
}

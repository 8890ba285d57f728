use std::fs;
use std::path::Path;
use std::time::SystemTime;

use crate::bytes::{self, SaveBytes};
use crate::challenges;
use crate::library::{SaveLibrary, SaveSlot};
use crate::offsets;
use crate::unlocks;

use super::error::{CoreError, CoreErrorCode};
use super::types::{
    ChallengeProgress, SaveStatus, Snapshot, TOTAL_CHALLENGES, UNLOCK_TOTALS, UnlockEntry,
};

#[derive(Debug, Default, Clone, Copy)]
pub struct Engine;

/// One named slot's save, with file metadata alongside the scan result.
#[derive(Debug, Clone)]
pub struct SlotReport {
    pub slot: SaveSlot,
    pub modified: Option<SystemTime>,
    pub status: SaveStatus,
}

impl Engine {
    pub fn new() -> Self {
        Self
    }

    /// Pure inspection of one save file's bytes. Deterministic: the same
    /// buffer always yields the same status.
    pub fn inspect_bytes(&self, buf: &[u8]) -> SaveStatus {
        if buf.is_empty() {
            return SaveStatus::Empty;
        }

        let counts = match unlocks::extract_unlock_counts(buf, offsets::unlock_table()) {
            Ok(counts) => counts,
            Err(_) => return SaveStatus::Unrecognized,
        };

        let unlocks = counts
            .into_iter()
            .zip(UNLOCK_TOTALS)
            .map(|(unlock, total)| UnlockEntry {
                category: unlock.category.to_string(),
                count: unlock.count,
                total,
            })
            .collect();

        SaveStatus::Ready(Snapshot {
            unlocks,
            challenges: ChallengeProgress {
                completed: challenges::count_completed_challenges(buf),
                total: TOTAL_CHALLENGES,
            },
        })
    }

    pub fn inspect_path<P: AsRef<Path>>(&self, path: P) -> SaveStatus {
        match bytes::load_bytes(path) {
            SaveBytes::Unavailable => SaveStatus::Unavailable,
            SaveBytes::Empty => SaveStatus::Empty,
            SaveBytes::Data(data) => self.inspect_bytes(&data),
        }
    }

    /// Inspect a named slot in a library: scan status plus the save
    /// file's modification time.
    pub fn inspect_slot(
        &self,
        library: &SaveLibrary,
        name: &str,
    ) -> Result<SlotReport, CoreError> {
        let slot = library
            .find_slot(name)
            .map_err(|e| CoreError::new(CoreErrorCode::Io, format!("failed to list saves: {e}")))?
            .ok_or_else(|| {
                CoreError::new(CoreErrorCode::UnknownSlot, format!("save '{name}' not found"))
            })?;

        let save_path = library.save_file_path(&slot.dir_name);
        let modified = fs::metadata(&save_path).and_then(|m| m.modified()).ok();
        let status = self.inspect_path(&save_path);

        Ok(SlotReport {
            slot,
            modified,
            status,
        })
    }
}

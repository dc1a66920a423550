//! Save-slot utilities for resuming games.

use anyhow::{Context, Result};
use std::path::Path;

use gamebook_core::PlaceId;
use gamebook_runtime::{FileStoredGameRepo, StoredGameRepository};

/// Information about a saved game.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveInfo {
    pub slot: String,
    pub place: PlaceId,
    pub score: i64,
    /// Seconds since the Unix epoch the save file was last written.
    pub modified: u64,
}

/// List the saved games in `save_dir`, most recent first.
///
/// A missing directory has no saves. Unreadable save files are skipped.
pub fn list_saves(save_dir: &Path) -> Result<Vec<SaveInfo>> {
    if !save_dir.exists() {
        return Ok(Vec::new());
    }

    let repo = FileStoredGameRepo::new(save_dir)?;
    let mut saves = Vec::new();

    for slot in repo.list_slots().context("failed to list save slots")? {
        let Ok(Some(game)) = repo.load(&slot) else {
            tracing::warn!(slot, "skipping unreadable save");
            continue;
        };
        let modified = std::fs::metadata(save_dir.join(format!("game_{slot}.bin")))
            .and_then(|meta| meta.modified())
            .ok()
            .and_then(|time| time.duration_since(std::time::UNIX_EPOCH).ok())
            .map_or(0, |elapsed| elapsed.as_secs());

        saves.push(SaveInfo {
            slot,
            place: game.place,
            score: game.score,
            modified,
        });
    }

    // Most recent first; slot name breaks ties
    saves.sort_by(|a, b| b.modified.cmp(&a.modified).then_with(|| a.slot.cmp(&b.slot)));

    Ok(saves)
}

/// Find the most recently written save.
pub fn latest_save(save_dir: &Path) -> Result<Option<SaveInfo>> {
    let saves = list_saves(save_dir)?;
    Ok(saves.into_iter().next())
}

//! File-based StoredGameRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use super::{Result, StoredGame, StoredGameRepository, validate_slot};

/// File-based implementation of StoredGameRepository.
///
/// Each slot is stored as `game_{slot}.bin` in bincode format. Writes go to a
/// temporary file first and are renamed into place.
#[derive(Debug, Clone)]
pub struct FileStoredGameRepo {
    base_dir: PathBuf,
}

impl FileStoredGameRepo {
    /// Create a repository rooted at `base_dir`, creating the directory.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn game_path(&self, slot: &str) -> Result<PathBuf> {
        validate_slot(slot)?;
        Ok(self.base_dir.join(format!("game_{slot}.bin")))
    }
}

impl StoredGameRepository for FileStoredGameRepo {
    fn save(&self, slot: &str, game: &StoredGame) -> Result<()> {
        let path = self.game_path(slot)?;
        let temp_path = path.with_extension("bin.tmp");

        fs::write(&temp_path, game.encode()?)?;
        fs::rename(&temp_path, &path)?;

        tracing::debug!("Saved game[{}] to {}", slot, path.display());
        Ok(())
    }

    fn load(&self, slot: &str) -> Result<Option<StoredGame>> {
        let path = self.game_path(slot)?;
        if !path.exists() {
            return Ok(None);
        }

        let game = StoredGame::decode(&fs::read(&path)?)?;
        tracing::debug!("Loaded game[{}] from {}", slot, path.display());
        Ok(Some(game))
    }

    fn exists(&self, slot: &str) -> bool {
        self.game_path(slot).is_ok_and(|path| path.exists())
    }

    fn delete(&self, slot: &str) -> Result<()> {
        let path = self.game_path(slot)?;
        if path.exists() {
            fs::remove_file(&path)?;
            tracing::debug!("Deleted game[{}]", slot);
        }
        Ok(())
    }

    fn list_slots(&self) -> Result<Vec<String>> {
        let mut slots = Vec::new();
        for entry in fs::read_dir(&self.base_dir)? {
            let path = entry?.path();
            let slot = path
                .file_name()
                .and_then(|name| name.to_str())
                .and_then(|name| name.strip_prefix("game_"))
                .and_then(|name| name.strip_suffix(".bin"));
            if let Some(slot) = slot {
                slots.push(slot.to_owned());
            }
        }
        slots.sort_unstable();
        Ok(slots)
    }
}

//! Repository contracts for saving and loading stored games.

use super::{RepositoryError, Result, StoredGame};

/// Repository for stored-game persistence, keyed by slot name.
pub trait StoredGameRepository: Send + Sync {
    /// Save a game into `slot`, replacing what was there
    fn save(&self, slot: &str, game: &StoredGame) -> Result<()>;

    /// Load the game in `slot`
    fn load(&self, slot: &str) -> Result<Option<StoredGame>>;

    /// Check if a slot holds a game
    fn exists(&self, slot: &str) -> bool;

    /// Delete a slot. Deleting an empty slot is not an error.
    fn delete(&self, slot: &str) -> Result<()>;

    /// List all occupied slots
    fn list_slots(&self) -> Result<Vec<String>> {
        Ok(vec![])
    }
}

/// Checks a slot name: non-empty ASCII letters, digits, `-` and `_` only.
pub fn validate_slot(slot: &str) -> Result<()> {
    let valid = !slot.is_empty()
        && slot
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(RepositoryError::InvalidSlot(slot.to_owned()))
    }
}

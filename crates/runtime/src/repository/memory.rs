//! In-memory StoredGameRepository implementation for tests and local runs.

use std::collections::HashMap;
use std::sync::RwLock;

use super::{RepositoryError, Result, StoredGame, StoredGameRepository, validate_slot};

/// In-memory implementation of StoredGameRepository.
#[derive(Debug, Default)]
pub struct InMemoryStoredGameRepo {
    games: RwLock<HashMap<String, StoredGame>>,
}

impl InMemoryStoredGameRepo {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

impl StoredGameRepository for InMemoryStoredGameRepo {
    fn save(&self, slot: &str, game: &StoredGame) -> Result<()> {
        validate_slot(slot)?;
        let mut games = self
            .games
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        games.insert(slot.to_owned(), game.clone());
        Ok(())
    }

    fn load(&self, slot: &str) -> Result<Option<StoredGame>> {
        validate_slot(slot)?;
        let games = self
            .games
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(games.get(slot).cloned())
    }

    fn exists(&self, slot: &str) -> bool {
        self.games
            .read()
            .map(|games| games.contains_key(slot))
            .unwrap_or(false)
    }

    fn delete(&self, slot: &str) -> Result<()> {
        validate_slot(slot)?;
        let mut games = self
            .games
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        games.remove(slot);
        Ok(())
    }

    fn list_slots(&self) -> Result<Vec<String>> {
        let games = self
            .games
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let mut slots: Vec<String> = games.keys().cloned().collect();
        slots.sort_unstable();
        Ok(slots)
    }
}

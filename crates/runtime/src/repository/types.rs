//! Persisted session records.

use gamebook_core::{CharacterSnapshot, PlaceId};
use serde::{Deserialize, Serialize};

use super::{RepositoryError, Result};

/// Everything needed to resume a session.
///
/// A fight in progress is not stored; resuming at a combat place starts that
/// fight over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredGame {
    pub place: PlaceId,
    /// Granted items the player has not looked at yet.
    pub pending_items: u32,
    pub score: i64,
    pub character: CharacterSnapshot,
}

impl StoredGame {
    /// Encodes the record into its opaque on-disk form.
    pub fn encode(&self) -> Result<Vec<u8>> {
        bincode::serialize(self).map_err(|e| RepositoryError::Serialization(e.to_string()))
    }

    pub fn decode(bytes: &[u8]) -> Result<Self> {
        bincode::deserialize(bytes).map_err(|e| RepositoryError::Serialization(e.to_string()))
    }
}

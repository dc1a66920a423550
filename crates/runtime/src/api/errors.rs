//! Unified error types surfaced by the runtime API.
//!
//! Wraps rule validation failures, content lookups that miss, and repository
//! failures so clients can bubble them up with consistent context.

use gamebook_core::{
    EnemyId, EquipError, ErrorSeverity, GameError, PlaceId, RestoreError, SpellError,
    SpellId,
};
use thiserror::Error;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("{0} does not exist in the loaded content")]
    PlaceNotFound(PlaceId),

    #[error("{0} does not exist in the loaded content")]
    SpellNotFound(SpellId),

    #[error("{0} does not exist in the loaded content")]
    EnemyNotFound(EnemyId),

    #[error(transparent)]
    Spell(#[from] SpellError),

    #[error(transparent)]
    Equip(#[from] EquipError),

    #[error(transparent)]
    Restore(#[from] RestoreError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("session requires content to be configured before building")]
    MissingContent,

    #[error("session requires a character or a stored game before building")]
    MissingCharacter,
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::PlaceNotFound(_)
            | Self::SpellNotFound(_)
            | Self::EnemyNotFound(_) => ErrorSeverity::Recoverable,
            Self::Spell(e) => e.severity(),
            Self::Equip(e) => e.severity(),
            Self::Restore(e) => e.severity(),
            Self::Repository(_) | Self::MissingContent | Self::MissingCharacter => {
                ErrorSeverity::Internal
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::PlaceNotFound(_) => "RUNTIME_PLACE_NOT_FOUND",
            Self::SpellNotFound(_) => "RUNTIME_SPELL_NOT_FOUND",
            Self::EnemyNotFound(_) => "RUNTIME_ENEMY_NOT_FOUND",
            Self::Spell(e) => e.error_code(),
            Self::Equip(e) => e.error_code(),
            Self::Restore(e) => e.error_code(),
            Self::Repository(_) => "RUNTIME_REPOSITORY",
            Self::MissingContent => "RUNTIME_MISSING_CONTENT",
            Self::MissingCharacter => "RUNTIME_MISSING_CHARACTER",
        }
    }
}

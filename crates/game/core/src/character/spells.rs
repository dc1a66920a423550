//! Learned spells and the active (in-effect) enhancement set.

use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::error::{ErrorSeverity, GameError};
use crate::spell::{Spell, SpellId};
use crate::stats::ModifierSet;

/// Errors raised by learning or casting spells.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SpellError {
    #[error("{spell} requires magic {required}, character has {actual}")]
    MagicTooLow {
        spell: SpellId,
        required: i32,
        actual: i32,
    },

    #[error("{0} has not been learned")]
    NotLearned(SpellId),

    #[error("{spell} costs {cost} power, character has {available}")]
    NotEnoughPower {
        spell: SpellId,
        cost: i32,
        available: i32,
    },

    #[error("{0} cannot be cast here")]
    NotCastableHere(SpellId),
}

impl GameError for SpellError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::MagicTooLow { .. } | Self::NotLearned(_) => ErrorSeverity::Validation,
            Self::NotEnoughPower { .. } | Self::NotCastableHere(_) => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MagicTooLow { .. } => "SPELL_MAGIC_TOO_LOW",
            Self::NotLearned(_) => "SPELL_NOT_LEARNED",
            Self::NotEnoughPower { .. } => "SPELL_NOT_ENOUGH_POWER",
            Self::NotCastableHere(_) => "SPELL_NOT_CASTABLE_HERE",
        }
    }
}

/// Spells a character has learned, in learning order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Spellbook {
    spells: Vec<Spell>,
}

impl Spellbook {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Adds a spell. Learning a known spell again is a no-op.
    pub fn learn(&mut self, spell: Spell) {
        if !self.knows(spell.id) {
            self.spells.push(spell);
        }
    }

    pub fn knows(&self, id: SpellId) -> bool {
        self.spells.iter().any(|spell| spell.id == id)
    }

    pub fn get(&self, id: SpellId) -> Option<&Spell> {
        self.spells.iter().find(|spell| spell.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Spell> {
        self.spells.iter()
    }

    pub fn len(&self) -> usize {
        self.spells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spells.is_empty()
    }
}

/// Enhancement spells currently in effect.
///
/// Holds at most one entry per spell id; non-enhancement spells are never
/// admitted. Additions beyond capacity are ignored.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActiveSpells {
    spells: ArrayVec<Spell, { GameConfig::MAX_ACTIVE_SPELLS }>,
}

impl ActiveSpells {
    pub fn empty() -> Self {
        Self {
            spells: ArrayVec::new(),
        }
    }

    /// Activates an enhancement spell. Returns true if the set changed.
    pub fn add(&mut self, spell: &Spell) -> bool {
        if !spell.is_enhancement() || self.contains(spell.id) || self.spells.is_full() {
            return false;
        }
        self.spells.push(spell.clone());
        true
    }

    /// Removes the entry for `id`. Returns true if one was present.
    pub fn remove(&mut self, id: SpellId) -> bool {
        match self.spells.iter().position(|spell| spell.id == id) {
            Some(index) => {
                self.spells.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, id: SpellId) -> bool {
        self.spells.iter().any(|spell| spell.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Spell> {
        self.spells.iter()
    }

    pub fn len(&self) -> usize {
        self.spells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spells.is_empty()
    }

    /// Sum of the modifiers of every active spell.
    pub fn modifiers(&self) -> ModifierSet {
        self.spells.iter().map(|spell| spell.kind.modifiers()).sum()
    }
}

//! Persistable character state.
//!
//! A snapshot references static content by id only. Restoring resolves the
//! ids against the content oracles and fails on any id they do not know.

use crate::env::{ItemOracle, SpellOracle};
use crate::error::{ErrorSeverity, GameError};
use crate::item::{EquipPosition, ItemId};
use crate::spell::SpellId;
use crate::stats::{Attributes, Race, ResourceCurrent, Skills};

use super::{ActiveSpells, Backpack, Character, EquipError, Equipment, Gender, Spellbook};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RestoreError {
    #[error("snapshot references unknown {0}")]
    UnknownItem(ItemId),

    #[error("snapshot references unknown {0}")]
    UnknownSpell(SpellId),

    #[error("snapshot equipment is invalid: {0}")]
    Equip(#[from] EquipError),
}

impl GameError for RestoreError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownItem(_) => "RESTORE_UNKNOWN_ITEM",
            Self::UnknownSpell(_) => "RESTORE_UNKNOWN_SPELL",
            Self::Equip(_) => "RESTORE_EQUIP",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterSnapshot {
    pub name: String,
    pub gender: Gender,
    pub race: Race,
    pub attributes: Attributes,
    pub skills: Skills,
    pub resources: ResourceCurrent,
    pub backpack: Vec<ItemId>,
    pub equipped: Vec<(EquipPosition, ItemId)>,
    pub learned: Vec<SpellId>,
    pub active: Vec<SpellId>,
}

#[cfg(feature = "serde")]
impl CharacterSnapshot {
    /// Encodes the snapshot into an opaque byte form.
    pub fn encode(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }
}

impl Character {
    pub fn snapshot(&self) -> CharacterSnapshot {
        CharacterSnapshot {
            name: self.name.clone(),
            gender: self.gender,
            race: self.race,
            attributes: self.attributes,
            skills: self.skills,
            resources: self.resources(),
            backpack: self.backpack.iter().map(|item| item.id).collect(),
            equipped: self
                .equipment
                .iter()
                .map(|(position, item)| (position, item.id))
                .collect(),
            learned: self.spellbook.iter().map(|spell| spell.id).collect(),
            active: self.active.iter().map(|spell| spell.id).collect(),
        }
    }

    /// Rebuilds a character from a snapshot.
    ///
    /// Learned spells are restored without re-checking their Magic
    /// requirement.
    pub fn restore<I, S>(
        snapshot: &CharacterSnapshot,
        items: &I,
        spells: &S,
    ) -> Result<Self, RestoreError>
    where
        I: ItemOracle + ?Sized,
        S: SpellOracle + ?Sized,
    {
        let item = |id: ItemId| items.item(id).cloned().ok_or(RestoreError::UnknownItem(id));
        let spell = |id: SpellId| spells.spell(id).cloned().ok_or(RestoreError::UnknownSpell(id));

        let backpack = snapshot
            .backpack
            .iter()
            .map(|&id| item(id))
            .collect::<Result<Vec<_>, _>>()?;

        let mut equipment = Equipment::empty();
        for &(position, id) in &snapshot.equipped {
            equipment.equip(item(id)?, position)?;
        }

        let mut spellbook = Spellbook::empty();
        for &id in &snapshot.learned {
            spellbook.learn(spell(id)?);
        }

        let mut active = ActiveSpells::empty();
        for &id in &snapshot.active {
            active.add(&spell(id)?);
        }

        Ok(Self {
            name: snapshot.name.clone(),
            gender: snapshot.gender,
            race: snapshot.race,
            attributes: snapshot.attributes,
            skills: snapshot.skills,
            resources: snapshot.resources,
            backpack: Backpack::new(backpack),
            equipment,
            spellbook,
            active,
        })
    }
}

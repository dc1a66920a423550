//! Spell definitions.
//!
//! Only enhancement spells (`EnhanceCombatStats`, `EnhanceSkill`) ever enter a
//! character's active-spell set; every other kind resolves immediately when
//! cast.

use std::collections::BTreeMap;
use std::fmt;

use crate::stats::{ModifierSet, ResourceDelta, SkillId};
use crate::text::LocalizedText;

/// Identifier of a spell definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SpellId(pub u32);

impl SpellId {
    /// Combat-only strength enhancement.
    pub const MIGHT: Self = Self(1);
    /// Combat-only defensive enhancement.
    pub const SHIELD: Self = Self(2);
    /// Combat-only magic enhancement.
    pub const MAGIC_RITUAL: Self = Self(3);
    /// Stealth enhancement, lasts until a stealth check is left.
    pub const EXPERTISE: Self = Self(4);

    /// Enhancements that end when the character leaves a combat place.
    pub const COMBAT_ONLY: [Self; 3] = [Self::MIGHT, Self::SHIELD, Self::MAGIC_RITUAL];
}

impl fmt::Display for SpellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "spell#{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spell {
    pub id: SpellId,
    pub name: LocalizedText,
    /// Minimum total Magic skill required to learn the spell.
    pub min_magic: i32,
    /// Power points deducted when the spell is cast.
    pub cost: i32,
    /// May be cast during combat.
    pub combat: bool,
    /// May be cast while adventuring (outside combat).
    pub adventure: bool,
    pub kind: SpellKind,
}

impl Spell {
    pub fn new(id: SpellId, name: impl Into<LocalizedText>, cost: i32, kind: SpellKind) -> Self {
        Self {
            id,
            name: name.into(),
            min_magic: 1,
            cost,
            combat: true,
            adventure: true,
            kind,
        }
    }

    #[must_use]
    pub fn with_min_magic(mut self, min_magic: i32) -> Self {
        self.min_magic = min_magic;
        self
    }

    #[must_use]
    pub fn castable(mut self, combat: bool, adventure: bool) -> Self {
        self.combat = combat;
        self.adventure = adventure;
        self
    }

    /// Returns true for spells that stay active and grant modifiers.
    pub fn is_enhancement(&self) -> bool {
        self.kind.is_enhancement()
    }
}

/// Spell type with type-specific data.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpellKind {
    /// Reveals something to the player; no mechanical effect.
    Informational,

    /// Damaging spell resolved as an attack roll on the enemy.
    Attack { damage_multiplier: f32 },

    /// Raises attack, defense and/or Magic skill while active.
    EnhanceCombatStats { attack: i32, defense: i32, magic: i32 },

    /// Raises skills while active.
    EnhanceSkill { modifiers: BTreeMap<SkillId, i32> },

    /// Restores life, power and/or luck.
    Heal(ResourceDelta),
}

impl SpellKind {
    pub fn is_enhancement(&self) -> bool {
        matches!(
            self,
            SpellKind::EnhanceCombatStats { .. } | SpellKind::EnhanceSkill { .. }
        )
    }

    /// Modifiers granted while the spell is active. Empty for non-enhancements.
    pub fn modifiers(&self) -> ModifierSet {
        match self {
            SpellKind::EnhanceCombatStats {
                attack,
                defense,
                magic,
            } => ModifierSet::new()
                .with_attack(*attack)
                .with_defense(*defense)
                .with_skill(SkillId::Magic, *magic),
            SpellKind::EnhanceSkill { modifiers } => {
                let mut set = ModifierSet::new();
                for (&skill, &amount) in modifiers {
                    set.add_skill(skill, amount);
                }
                set
            }
            _ => ModifierSet::new(),
        }
    }
}

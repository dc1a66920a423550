//! Playable races and their fixed modifiers.

use core::ops::RangeInclusive;

use super::base::{AttributeId, SkillId};
use super::modifiers::ModifierSet;

/// Character race.
///
/// Race is chosen at creation and never changes. It contributes flat
/// attribute/skill modifiers and bounds the base Magic skill.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Race {
    /// Human - balanced, no modifiers
    #[default]
    Human,
    /// Elf - agile and gifted in magic, physically frail
    Elf,
    /// Dwarf - sturdy fighters with little talent for magic
    Dwarf,
    /// Halfling - lucky and stealthy
    Halfling,
    /// Orc - strong and brutal, poor casters
    Orc,
}

impl Race {
    /// Flat modifier this race applies to an attribute.
    pub const fn attribute_modifier(self, id: AttributeId) -> i32 {
        use AttributeId::*;
        match (self, id) {
            (Race::Elf, Agility) => 1,
            (Race::Elf, Might) => -1,
            (Race::Dwarf, Might) => 1,
            (Race::Dwarf, Agility) => -1,
            (Race::Halfling, Fortune) => 1,
            (Race::Halfling, Might) => -1,
            (Race::Orc, Might) => 1,
            (Race::Orc, Intelligence) => -1,
            _ => 0,
        }
    }

    /// Flat modifier this race applies to a skill.
    pub const fn skill_modifier(self, id: SkillId) -> i32 {
        use SkillId::*;
        match (self, id) {
            (Race::Elf, Magic) => 1,
            (Race::Dwarf, Fighting) => 1,
            (Race::Dwarf, Magic) => -1,
            (Race::Halfling, Stealth) => 1,
            (Race::Orc, Fighting) => 1,
            (Race::Orc, Social) => -1,
            _ => 0,
        }
    }

    /// Inclusive range the base Magic skill must fall in at creation.
    pub const fn magic_range(self) -> RangeInclusive<i32> {
        match self {
            Race::Human => 1..=6,
            Race::Elf => 2..=8,
            Race::Dwarf => 1..=4,
            Race::Halfling => 1..=5,
            Race::Orc => 1..=3,
        }
    }

    /// All modifiers of this race as a single set.
    pub fn modifiers(self) -> ModifierSet {
        use strum::IntoEnumIterator;

        let mut set = ModifierSet::new();
        for id in AttributeId::iter() {
            set.add_attribute(id, self.attribute_modifier(id));
        }
        for id in SkillId::iter() {
            set.add_skill(id, self.skill_modifier(id));
        }
        set
    }
}

//! Base attributes and skills - the stored layer of the stat model.
//!
//! Base values are the only stats that are permanently stored. Every total
//! (attack, defense, maxima) is recomputed from them on demand.

use strum::EnumCount;

use crate::config::GameConfig;

/// The four base attributes.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AttributeId {
    /// Raw physical strength; drives maximum life.
    Might,
    /// Speed and reflexes; drives initiative.
    Agility,
    /// Reasoning; drives maximum power.
    Intelligence,
    /// Luck; drives maximum luck.
    Fortune,
}

/// The five base skills.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SkillId {
    /// Base of both attack and defense.
    Fighting,
    Knowledge,
    Stealth,
    /// Spellcasting; gates which spells can be learned.
    Magic,
    Social,
}

impl AttributeId {
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl SkillId {
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Base attribute values, indexed by [`AttributeId`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attributes {
    values: [i32; AttributeId::COUNT],
}

impl Attributes {
    pub const fn new(might: i32, agility: i32, intelligence: i32, fortune: i32) -> Self {
        Self {
            values: [might, agility, intelligence, fortune],
        }
    }

    #[inline]
    pub const fn get(&self, id: AttributeId) -> i32 {
        self.values[id.index()]
    }

    #[inline]
    pub fn set(&mut self, id: AttributeId, value: i32) {
        self.values[id.index()] = value;
    }

    /// Returns the first attribute whose value lies outside the legal base range.
    pub fn first_out_of_range(&self) -> Option<(AttributeId, i32)> {
        use strum::IntoEnumIterator;
        AttributeId::iter()
            .map(|id| (id, self.get(id)))
            .find(|(_, value)| !GameConfig::is_valid_base(*value))
    }
}

impl Default for Attributes {
    /// Default attributes: all at the minimum base value.
    fn default() -> Self {
        Self {
            values: [GameConfig::MIN_BASE_STAT; AttributeId::COUNT],
        }
    }
}

/// Base skill values, indexed by [`SkillId`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Skills {
    values: [i32; SkillId::COUNT],
}

impl Skills {
    pub const fn new(fighting: i32, knowledge: i32, stealth: i32, magic: i32, social: i32) -> Self {
        Self {
            values: [fighting, knowledge, stealth, magic, social],
        }
    }

    #[inline]
    pub const fn get(&self, id: SkillId) -> i32 {
        self.values[id.index()]
    }

    #[inline]
    pub fn set(&mut self, id: SkillId, value: i32) {
        self.values[id.index()] = value;
    }

    /// Returns the first skill whose value lies outside the legal base range.
    pub fn first_out_of_range(&self) -> Option<(SkillId, i32)> {
        use strum::IntoEnumIterator;
        SkillId::iter()
            .map(|id| (id, self.get(id)))
            .find(|(_, value)| !GameConfig::is_valid_base(*value))
    }
}

impl Default for Skills {
    /// Default skills: all at the minimum base value.
    fn default() -> Self {
        Self {
            values: [GameConfig::MIN_BASE_STAT; SkillId::COUNT],
        }
    }
}

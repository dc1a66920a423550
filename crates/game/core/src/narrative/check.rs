//! Skill and attribute dice checks.

use std::fmt;

/// Target a check roll plus the tested total must meet or exceed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Difficulty(pub i32);

impl Difficulty {
    pub const fn value(self) -> i32 {
        self.0
    }

    /// Named tier for this value, if it has one.
    pub const fn tier(self) -> Option<DifficultyTier> {
        use DifficultyTier::*;
        match self.0 {
            3 => Some(VeryEasy),
            5 => Some(Easy),
            7 => Some(Moderate),
            9 => Some(Challenging),
            11 => Some(Hard),
            13 => Some(VeryHard),
            15 => Some(Heroic),
            _ => None,
        }
    }

    /// True iff `roll + total >= difficulty`.
    pub const fn passes(self, roll: i32, total: i32) -> bool {
        roll + total >= self.0
    }
}

impl From<DifficultyTier> for Difficulty {
    fn from(tier: DifficultyTier) -> Self {
        Self(tier.value())
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.tier() {
            Some(tier) => write!(f, "{} ({})", self.0, tier),
            None => write!(f, "{}", self.0),
        }
    }
}

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
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum DifficultyTier {
    VeryEasy,
    Easy,
    Moderate,
    Challenging,
    Hard,
    VeryHard,
    Heroic,
}

impl DifficultyTier {
    pub const fn value(self) -> i32 {
        match self {
            DifficultyTier::VeryEasy => 3,
            DifficultyTier::Easy => 5,
            DifficultyTier::Moderate => 7,
            DifficultyTier::Challenging => 9,
            DifficultyTier::Hard => 11,
            DifficultyTier::VeryHard => 13,
            DifficultyTier::Heroic => 15,
        }
    }
}

/// Result of resolving a check place against a roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CheckOutcome {
    pub passed: bool,
    pub roll: i32,
    /// The character's total in the tested skill or attribute.
    pub total: i32,
    pub difficulty: Difficulty,
}

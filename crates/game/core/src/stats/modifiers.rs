//! Additive stat modifiers contributed by race, equipment and active spells.
//!
//! Every source reduces to a [`ModifierSet`]; the character sums the sets of
//! all current sources and hands the result to [`DerivedStats`]. Nothing here
//! is stored - sets are rebuilt whenever a total is read.
//!
//! [`DerivedStats`]: super::DerivedStats

use core::ops::{Add, AddAssign};

use strum::EnumCount;

use super::base::{AttributeId, SkillId};

/// Flat modifiers from one or more sources.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModifierSet {
    attributes: [i32; AttributeId::COUNT],
    skills: [i32; SkillId::COUNT],
    pub attack: i32,
    pub defense: i32,
    pub initiative: i32,
    /// Added to maximum power.
    pub power: i32,
}

impl ModifierSet {
    /// Create an empty modifier set.
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub const fn attribute(&self, id: AttributeId) -> i32 {
        self.attributes[id.index()]
    }

    #[inline]
    pub const fn skill(&self, id: SkillId) -> i32 {
        self.skills[id.index()]
    }

    pub fn add_attribute(&mut self, id: AttributeId, amount: i32) {
        self.attributes[id.index()] += amount;
    }

    pub fn add_skill(&mut self, id: SkillId, amount: i32) {
        self.skills[id.index()] += amount;
    }

    /// Builder-style attribute modifier.
    #[must_use]
    pub fn with_attribute(mut self, id: AttributeId, amount: i32) -> Self {
        self.add_attribute(id, amount);
        self
    }

    /// Builder-style skill modifier.
    #[must_use]
    pub fn with_skill(mut self, id: SkillId, amount: i32) -> Self {
        self.add_skill(id, amount);
        self
    }

    #[must_use]
    pub fn with_attack(mut self, amount: i32) -> Self {
        self.attack += amount;
        self
    }

    #[must_use]
    pub fn with_defense(mut self, amount: i32) -> Self {
        self.defense += amount;
        self
    }

    #[must_use]
    pub fn with_initiative(mut self, amount: i32) -> Self {
        self.initiative += amount;
        self
    }

    #[must_use]
    pub fn with_power(mut self, amount: i32) -> Self {
        self.power += amount;
        self
    }

    /// Returns true if no modifier is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl AddAssign for ModifierSet {
    fn add_assign(&mut self, rhs: Self) {
        for (lhs, rhs) in self.attributes.iter_mut().zip(rhs.attributes) {
            *lhs += rhs;
        }
        for (lhs, rhs) in self.skills.iter_mut().zip(rhs.skills) {
            *lhs += rhs;
        }
        self.attack += rhs.attack;
        self.defense += rhs.defense;
        self.initiative += rhs.initiative;
        self.power += rhs.power;
    }
}

impl Add for ModifierSet {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl core::iter::Sum for ModifierSet {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::new(), Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums_every_field() {
        let sword = ModifierSet::new()
            .with_attack(2)
            .with_initiative(1)
            .with_skill(SkillId::Fighting, 1);
        let ring = ModifierSet::new()
            .with_power(3)
            .with_attribute(AttributeId::Fortune, 1)
            .with_skill(SkillId::Fighting, 1);

        let total: ModifierSet = [sword, ring].into_iter().sum();

        assert_eq!(total.attack, 2);
        assert_eq!(total.initiative, 1);
        assert_eq!(total.power, 3);
        assert_eq!(total.skill(SkillId::Fighting), 2);
        assert_eq!(total.attribute(AttributeId::Fortune), 1);
        assert_eq!(total.attribute(AttributeId::Might), 0);
    }

    #[test]
    fn default_is_empty() {
        assert!(ModifierSet::new().is_empty());
        assert!(!ModifierSet::new().with_skill(SkillId::Magic, 1).is_empty());
    }
}

//! Derived stats - totals computed from base values and modifiers.
//!
//! These are NOT stored - always recomputed when needed.
//!
//! Formulas:
//! - totalAttribute(a) = base(a) + Σ modifiers(a)
//! - totalSkill(s)     = base(s) + Σ modifiers(s)
//! - attack            = totalSkill(Fighting) + Σ attack modifiers
//! - defense           = totalSkill(Fighting) + Σ defense modifiers
//! - initiative        = totalAttribute(Agility) + Σ initiative modifiers
//! - max_life          = 10 + 2 × totalAttribute(Might)
//! - max_power         = 2 × totalAttribute(Intelligence) + Σ power modifiers
//! - max_luck          = totalAttribute(Fortune)

use strum::IntoEnumIterator;

use super::base::{AttributeId, Attributes, SkillId, Skills};
use super::modifiers::ModifierSet;
use super::resources::ResourceMaximums;
use crate::config::GameConfig;

/// Every derived value of a character at one point in time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DerivedStats {
    pub attributes: Attributes,
    pub skills: Skills,
    pub attack: i32,
    pub defense: i32,
    pub initiative: i32,
    pub max: ResourceMaximums,
}

impl DerivedStats {
    /// Compute derived stats from base values and the summed modifiers of all sources.
    pub fn compute(base_attributes: &Attributes, base_skills: &Skills, mods: &ModifierSet) -> Self {
        let mut attributes = *base_attributes;
        for id in AttributeId::iter() {
            attributes.set(id, base_attributes.get(id) + mods.attribute(id));
        }

        let mut skills = *base_skills;
        for id in SkillId::iter() {
            skills.set(id, base_skills.get(id) + mods.skill(id));
        }

        let fighting = skills.get(SkillId::Fighting);

        Self {
            attributes,
            skills,
            attack: fighting + mods.attack,
            defense: fighting + mods.defense,
            initiative: attributes.get(AttributeId::Agility) + mods.initiative,
            max: Self::maximums(&attributes, mods),
        }
    }

    fn maximums(attributes: &Attributes, mods: &ModifierSet) -> ResourceMaximums {
        let life = GameConfig::LIFE_BASE
            + GameConfig::LIFE_PER_MIGHT * attributes.get(AttributeId::Might);
        let power = GameConfig::POWER_PER_INTELLIGENCE * attributes.get(AttributeId::Intelligence)
            + mods.power;
        let luck = GameConfig::LUCK_PER_FORTUNE * attributes.get(AttributeId::Fortune);

        ResourceMaximums::new(life.max(0), power.max(0), luck.max(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warrior_totals() {
        let attributes = Attributes::new(6, 4, 2, 3);
        let skills = Skills::new(7, 2, 3, 1, 2);
        let mods = ModifierSet::new()
            .with_attack(3)
            .with_defense(2)
            .with_initiative(1)
            .with_skill(SkillId::Fighting, 1)
            .with_attribute(AttributeId::Might, 1);

        let stats = DerivedStats::compute(&attributes, &skills, &mods);

        // Fighting 7 + 1 = 8
        assert_eq!(stats.skills.get(SkillId::Fighting), 8);
        assert_eq!(stats.attack, 11);
        assert_eq!(stats.defense, 10);
        // Agility 4 + 1 initiative
        assert_eq!(stats.initiative, 5);
        // Life: 10 + 2 × 7 = 24
        assert_eq!(stats.max.life, 24);
        assert_eq!(stats.max.power, 4);
        assert_eq!(stats.max.luck, 3);
    }

    #[test]
    fn maximums_never_negative() {
        let attributes = Attributes::new(1, 1, 1, 1);
        let mods = ModifierSet::new()
            .with_power(-10)
            .with_attribute(AttributeId::Fortune, -3);

        let stats = DerivedStats::compute(&attributes, &Skills::default(), &mods);

        assert_eq!(stats.max.power, 0);
        assert_eq!(stats.max.luck, 0);
    }
}

//! Item definitions.
//!
//! # Design: Base + Kind Pattern
//!
//! - [`Item`] holds the fields every item has (id, text, image)
//! - [`ItemKind`] holds the kind-specific payload (equipment modifiers,
//!   recovery effect)
//!
//! Items are static content. A character owns clones of the definitions it
//! carries; persistence stores only [`ItemId`]s.

mod slots;

pub use slots::{EquipPosition, EquipSlots};

use std::collections::BTreeMap;
use std::fmt;

use crate::stats::{AttributeId, ModifierSet, ResourceDelta, SkillId};
use crate::text::LocalizedText;

/// Identifier of an item definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item#{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub id: ItemId,
    pub name: LocalizedText,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: LocalizedText,
    /// Asset reference for the presentation layer.
    #[cfg_attr(feature = "serde", serde(default))]
    pub image: String,
    pub kind: ItemKind,
}

impl Item {
    pub fn new(id: ItemId, name: impl Into<LocalizedText>, kind: ItemKind) -> Self {
        Self {
            id,
            name: name.into(),
            description: LocalizedText::default(),
            image: String::new(),
            kind,
        }
    }

    /// A plain item with no mechanical effect (keys, letters, trinkets).
    pub fn simple(id: ItemId, name: impl Into<LocalizedText>) -> Self {
        Self::new(id, name, ItemKind::Simple)
    }

    pub fn equipable(&self) -> Option<&EquipableData> {
        match &self.kind {
            ItemKind::Equipable(data) => Some(data),
            _ => None,
        }
    }

    pub fn recovery(&self) -> Option<&RecoveryEffect> {
        match &self.kind {
            ItemKind::Usable(effect) => Some(effect),
            _ => None,
        }
    }
}

/// Item type with type-specific data.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    /// No mechanical effect.
    Simple,

    /// Worn or wielded; contributes modifiers while equipped.
    Equipable(EquipableData),

    /// Consumed on use to restore life, power and/or luck.
    Usable(RecoveryEffect),
}

/// Equipment-specific data.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EquipableData {
    pub attack: i32,
    pub defense: i32,
    pub initiative: i32,
    /// Added to maximum power while equipped.
    pub power: i32,
    pub skills: BTreeMap<SkillId, i32>,
    pub attributes: BTreeMap<AttributeId, i32>,
    /// Positions this item may be equipped to.
    pub slots: EquipSlots,
}

impl EquipableData {
    /// Modifiers this item contributes while equipped.
    pub fn modifiers(&self) -> ModifierSet {
        let mut set = ModifierSet::new()
            .with_attack(self.attack)
            .with_defense(self.defense)
            .with_initiative(self.initiative)
            .with_power(self.power);
        for (&skill, &amount) in &self.skills {
            set.add_skill(skill, amount);
        }
        for (&attribute, &amount) in &self.attributes {
            set.add_attribute(attribute, amount);
        }
        set
    }
}

/// Effect of a usable recovery item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RecoveryEffect {
    pub restore: ResourceDelta,
    /// Restore life, power and luck to their maxima, ignoring `restore`.
    pub full_restore: bool,
}

impl RecoveryEffect {
    pub const fn new(restore: ResourceDelta) -> Self {
        Self {
            restore,
            full_restore: false,
        }
    }

    pub const fn full() -> Self {
        Self {
            restore: ResourceDelta::new(0, 0, 0),
            full_restore: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equipable_modifiers_include_maps() {
        let data = EquipableData {
            attack: 2,
            defense: 1,
            skills: BTreeMap::from([(SkillId::Stealth, -1)]),
            attributes: BTreeMap::from([(AttributeId::Agility, 1)]),
            slots: EquipSlots::MAIN_HAND,
            ..EquipableData::default()
        };

        let set = data.modifiers();

        assert_eq!(set.attack, 2);
        assert_eq!(set.defense, 1);
        assert_eq!(set.skill(SkillId::Stealth), -1);
        assert_eq!(set.attribute(AttributeId::Agility), 1);
    }

    #[test]
    fn kind_accessors() {
        let potion = Item::new(
            ItemId(3),
            "Potion",
            ItemKind::Usable(RecoveryEffect::new(ResourceDelta::life(5))),
        );
        assert!(potion.equipable().is_none());
        assert_eq!(potion.recovery().map(|e| e.restore.life), Some(5));
        assert!(Item::simple(ItemId(1), "Key").recovery().is_none());
    }
}

use std::fmt;

use crate::spell::SpellId;
use crate::stats::{ResourceCurrent, ResourceKind, ResourceMaximums, clamp_resource};
use crate::text::LocalizedText;

use super::Combatant;

/// Identifier of an enemy definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct EnemyId(pub u32);

impl fmt::Display for EnemyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "enemy#{}", self.0)
    }
}

/// Static enemy data. Combat instantiates a fresh [`Enemy`] from it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyDefinition {
    pub id: EnemyId,
    pub name: LocalizedText,
    pub attack: i32,
    pub defense: i32,
    pub magic: i32,
    pub initiative: i32,
    pub life: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub power: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub luck: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub spells: Vec<SpellId>,
}

impl EnemyDefinition {
    pub fn new(id: EnemyId, name: impl Into<LocalizedText>, attack: i32, defense: i32, life: i32) -> Self {
        Self {
            id,
            name: name.into(),
            attack,
            defense,
            magic: 0,
            initiative: 0,
            life,
            power: 0,
            luck: 0,
            spells: Vec::new(),
        }
    }

    pub const fn maximums(&self) -> ResourceMaximums {
        ResourceMaximums::new(self.life, self.power, self.luck)
    }
}

/// An enemy taking part in one fight.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Enemy {
    definition: EnemyDefinition,
    current: ResourceCurrent,
}

impl Enemy {
    pub fn new(definition: EnemyDefinition) -> Self {
        let max = definition.maximums();
        Self {
            current: ResourceCurrent::new(
                clamp_resource(max.life, max.life),
                clamp_resource(max.power, max.power),
                clamp_resource(max.luck, max.luck),
            ),
            definition,
        }
    }

    pub fn definition(&self) -> &EnemyDefinition {
        &self.definition
    }

    pub fn id(&self) -> EnemyId {
        self.definition.id
    }

    pub fn attack(&self) -> i32 {
        self.definition.attack
    }

    pub fn defense(&self) -> i32 {
        self.definition.defense
    }

    pub fn magic(&self) -> i32 {
        self.definition.magic
    }

    pub fn initiative(&self) -> i32 {
        self.definition.initiative
    }

    pub fn max_life(&self) -> i32 {
        self.definition.life.max(0)
    }

    pub fn current(&self, kind: ResourceKind) -> i32 {
        self.current.get(kind)
    }

    pub fn set_current(&mut self, kind: ResourceKind, value: i32) {
        let max = self.definition.maximums().get(kind);
        self.current.set_clamped(kind, value, max);
    }

    pub fn can_cast(&self, id: SpellId) -> bool {
        self.definition.spells.contains(&id)
    }
}

impl Combatant for Enemy {
    fn current_life(&self) -> i32 {
        self.current.life
    }

    fn apply_damage(&mut self, damage: i32) {
        if damage > 0 {
            self.set_current(ResourceKind::Life, self.current.life.saturating_sub(damage));
        }
    }
}

use std::collections::BTreeMap;

use crate::combat::{EnemyDefinition, EnemyId};
use crate::error::{ErrorSeverity, GameError};
use crate::item::{Item, ItemId};
use crate::spell::{Spell, SpellId};

use super::{EnemyOracle, ItemOracle, SpellOracle};

/// A definition id appeared twice while building [`ContentTables`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DuplicateId {
    #[error("{0} is defined more than once")]
    Item(ItemId),

    #[error("{0} is defined more than once")]
    Spell(SpellId),

    #[error("{0} is defined more than once")]
    Enemy(EnemyId),
}

impl GameError for DuplicateId {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Item(_) => "DUPLICATE_ITEM",
            Self::Spell(_) => "DUPLICATE_SPELL",
            Self::Enemy(_) => "DUPLICATE_ENEMY",
        }
    }
}

/// Item, spell and enemy definitions keyed by id.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContentTables {
    items: BTreeMap<ItemId, Item>,
    spells: BTreeMap<SpellId, Spell>,
    enemies: BTreeMap<EnemyId, EnemyDefinition>,
}

impl ContentTables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_item(&mut self, item: Item) -> Result<(), DuplicateId> {
        let id = item.id;
        if self.items.insert(id, item).is_some() {
            return Err(DuplicateId::Item(id));
        }
        Ok(())
    }

    pub fn insert_spell(&mut self, spell: Spell) -> Result<(), DuplicateId> {
        let id = spell.id;
        if self.spells.insert(id, spell).is_some() {
            return Err(DuplicateId::Spell(id));
        }
        Ok(())
    }

    pub fn insert_enemy(&mut self, enemy: EnemyDefinition) -> Result<(), DuplicateId> {
        let id = enemy.id;
        if self.enemies.insert(id, enemy).is_some() {
            return Err(DuplicateId::Enemy(id));
        }
        Ok(())
    }

    pub fn with_items(mut self, items: impl IntoIterator<Item = Item>) -> Result<Self, DuplicateId> {
        for item in items {
            self.insert_item(item)?;
        }
        Ok(self)
    }

    pub fn with_spells(mut self, spells: impl IntoIterator<Item = Spell>) -> Result<Self, DuplicateId> {
        for spell in spells {
            self.insert_spell(spell)?;
        }
        Ok(self)
    }

    pub fn with_enemies(
        mut self,
        enemies: impl IntoIterator<Item = EnemyDefinition>,
    ) -> Result<Self, DuplicateId> {
        for enemy in enemies {
            self.insert_enemy(enemy)?;
        }
        Ok(self)
    }

    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    pub fn spells(&self) -> impl Iterator<Item = &Spell> {
        self.spells.values()
    }

    pub fn enemies(&self) -> impl Iterator<Item = &EnemyDefinition> {
        self.enemies.values()
    }
}

impl ItemOracle for ContentTables {
    fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.get(&id)
    }
}

impl SpellOracle for ContentTables {
    fn spell(&self, id: SpellId) -> Option<&Spell> {
        self.spells.get(&id)
    }
}

impl EnemyOracle for ContentTables {
    fn enemy(&self, id: EnemyId) -> Option<&EnemyDefinition> {
        self.enemies.get(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_items_are_rejected() {
        let err = ContentTables::new()
            .with_items([Item::simple(ItemId(1), "Key"), Item::simple(ItemId(1), "Key")])
            .unwrap_err();
        assert_eq!(err, DuplicateId::Item(ItemId(1)));
    }

    #[test]
    fn missing_lookups_are_none() {
        let tables = ContentTables::new()
            .with_items([Item::simple(ItemId(1), "Key")])
            .unwrap();
        assert!(tables.item(ItemId(1)).is_some());
        assert!(tables.item(ItemId(2)).is_none());
        assert!(tables.spell(SpellId(1)).is_none());
    }
}

//! Read-only static content.
//!
//! Oracles expose item, spell and enemy definitions by id. The
//! [`GameContent`] bundle owns every definition plus the place graph and the
//! tunables, and implements all oracles. Lookups that miss return `None`.
mod tables;

pub use tables::{ContentTables, DuplicateId};

use crate::combat::{EnemyDefinition, EnemyId};
use crate::config::GameConfig;
use crate::item::{Item, ItemId};
use crate::narrative::NarrativeGraph;
use crate::spell::{Spell, SpellId};

pub trait ItemOracle: Send + Sync {
    fn item(&self, id: ItemId) -> Option<&Item>;
}

pub trait SpellOracle: Send + Sync {
    fn spell(&self, id: SpellId) -> Option<&Spell>;
}

pub trait EnemyOracle: Send + Sync {
    fn enemy(&self, id: EnemyId) -> Option<&EnemyDefinition>;
}

/// Everything loaded once at startup and never mutated afterwards.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GameContent {
    pub config: GameConfig,
    pub tables: ContentTables,
    pub graph: NarrativeGraph,
}

impl GameContent {
    pub fn new(config: GameConfig, tables: ContentTables, graph: NarrativeGraph) -> Self {
        Self {
            config,
            tables,
            graph,
        }
    }
}

impl ItemOracle for GameContent {
    fn item(&self, id: ItemId) -> Option<&Item> {
        self.tables.item(id)
    }
}

impl SpellOracle for GameContent {
    fn spell(&self, id: SpellId) -> Option<&Spell> {
        self.tables.spell(id)
    }
}

impl EnemyOracle for GameContent {
    fn enemy(&self, id: EnemyId) -> Option<&EnemyDefinition> {
        self.tables.enemy(id)
    }
}

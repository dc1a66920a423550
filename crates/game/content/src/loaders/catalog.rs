//! RON catalog loaders for items, spells, enemies and places.

use std::path::Path;

use gamebook_core::{EnemyDefinition, Item, Place, Spell};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalog {
    pub items: Vec<Item>,
}

/// Spell catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpellCatalog {
    pub spells: Vec<Spell>,
}

/// Enemy catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyCatalog {
    pub enemies: Vec<EnemyDefinition>,
}

/// Place catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceCatalog {
    pub places: Vec<Place>,
}

fn load_ron<T: DeserializeOwned>(path: &Path, what: &str) -> LoadResult<T> {
    let content = read_file(path)?;
    ron::from_str(&content).map_err(|e| {
        anyhow::anyhow!("Failed to parse {} catalog {}: {}", what, path.display(), e)
    })
}

/// Loader for item catalog from RON files.
pub struct ItemLoader;

impl ItemLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<Item>> {
        let catalog: ItemCatalog = load_ron(path, "item")?;
        Ok(catalog.items)
    }
}

/// Loader for spell catalog from RON files.
pub struct SpellLoader;

impl SpellLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<Spell>> {
        let catalog: SpellCatalog = load_ron(path, "spell")?;
        Ok(catalog.spells)
    }
}

/// Loader for enemy definitions from RON files.
pub struct EnemyLoader;

impl EnemyLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<EnemyDefinition>> {
        let catalog: EnemyCatalog = load_ron(path, "enemy")?;
        Ok(catalog.enemies)
    }
}

/// Loader for narrative places from RON files.
pub struct PlaceLoader;

impl PlaceLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<Place>> {
        let catalog: PlaceCatalog = load_ron(path, "place")?;
        Ok(catalog.places)
    }
}

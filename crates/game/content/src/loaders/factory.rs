//! Content factory for building the content bundle from data files.

use std::path::{Path, PathBuf};

use gamebook_core::{
    ContentTables, EnemyDefinition, GameConfig, GameContent, Item, NarrativeGraph, Place, Spell,
};
use tracing::{debug, warn};

use crate::loaders::{ConfigLoader, EnemyLoader, ItemLoader, LoadResult, PlaceLoader, SpellLoader};
use crate::validate::validate;

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml   (optional)
/// ├── items.ron
/// ├── spells.ron
/// ├── enemies.ron
/// └── places.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`, or defaults if it is absent.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(GameConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load item catalog from `items.ron`.
    pub fn load_items(&self) -> LoadResult<Vec<Item>> {
        ItemLoader::load(&self.data_dir.join("items.ron"))
    }

    /// Load spell catalog from `spells.ron`.
    pub fn load_spells(&self) -> LoadResult<Vec<Spell>> {
        SpellLoader::load(&self.data_dir.join("spells.ron"))
    }

    /// Load enemy definitions from `enemies.ron`.
    pub fn load_enemies(&self) -> LoadResult<Vec<EnemyDefinition>> {
        EnemyLoader::load(&self.data_dir.join("enemies.ron"))
    }

    /// Load narrative places from `places.ron`.
    pub fn load_places(&self) -> LoadResult<Vec<Place>> {
        PlaceLoader::load(&self.data_dir.join("places.ron"))
    }

    /// Load and validate every content file into a single bundle.
    ///
    /// Fails on unreadable or malformed files, duplicate ids and references
    /// to ids that do not exist.
    pub fn load(&self) -> LoadResult<GameContent> {
        let config = self.load_config()?;

        let items = self.load_items()?;
        let spells = self.load_spells()?;
        let enemies = self.load_enemies()?;

        let tables = ContentTables::new()
            .with_items(items)
            .and_then(|tables| tables.with_spells(spells))
            .and_then(|tables| tables.with_enemies(enemies))
            .map_err(|e| anyhow::anyhow!("Invalid content in {}: {}", self.data_dir.display(), e))?;

        let graph = NarrativeGraph::new(self.load_places()?)
            .map_err(|e| anyhow::anyhow!("Invalid content in {}: {}", self.data_dir.display(), e))?;

        let content = GameContent::new(config, tables, graph);

        let issues = validate(&content);
        if let Some(first) = issues.first() {
            for issue in &issues {
                warn!(%issue, "content validation failed");
            }
            anyhow::bail!(
                "Invalid content in {}: {} broken reference(s), first: {}",
                self.data_dir.display(),
                issues.len(),
                first
            );
        }

        debug!(
            places = content.graph.len(),
            items = content.tables.items().count(),
            spells = content.tables.spells().count(),
            enemies = content.tables.enemies().count(),
            "content loaded"
        );
        Ok(content)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

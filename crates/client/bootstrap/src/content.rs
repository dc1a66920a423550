//! Content providers feeding the session builder.
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use gamebook_content::ContentFactory;
use gamebook_core::GameContent;
use tracing::info;

/// Source of the static content bundle.
pub trait ContentProvider: Send + Sync {
    fn load(&self) -> Result<Arc<GameContent>>;
}

/// Loads and validates content from a data directory.
#[derive(Debug, Clone)]
pub struct DirectoryContent {
    data_dir: PathBuf,
}

impl DirectoryContent {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

impl ContentProvider for DirectoryContent {
    fn load(&self) -> Result<Arc<GameContent>> {
        let content = ContentFactory::new(&self.data_dir)
            .load()
            .with_context(|| format!("failed to load content from {}", self.data_dir.display()))?;
        info!(
            data_dir = %self.data_dir.display(),
            places = content.graph.len(),
            "content loaded"
        );
        Ok(Arc::new(content))
    }
}

/// Content already in memory, e.g. built in code by tests or embedders.
impl ContentProvider for Arc<GameContent> {
    fn load(&self) -> Result<Arc<GameContent>> {
        Ok(Arc::clone(self))
    }
}

//! Assembles content, configuration and a game session for front-ends.
use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use gamebook_core::{Character, GameContent};
use gamebook_runtime::{
    ActionTracker, FileStoredGameRepo, GameSession, RuntimeConfig, StoredGameRepository,
};
use tracing::info;

use crate::config::BootstrapConfig;
use crate::content::{ContentProvider, DirectoryContent};

/// Builder that loads content and starts or resumes a session.
pub struct SessionBuilder {
    config: BootstrapConfig,
    content: Arc<dyn ContentProvider>,
    tracker: Option<Arc<dyn ActionTracker>>,
}

impl SessionBuilder {
    /// Content is read from `config.data_dir` unless another provider is set.
    pub fn new(config: BootstrapConfig) -> Self {
        let content = DirectoryContent::new(config.data_dir.clone());
        Self {
            config,
            content: Arc::new(content),
            tracker: None,
        }
    }

    /// Provide a custom content source.
    pub fn content_provider(mut self, provider: impl ContentProvider + 'static) -> Self {
        self.content = Arc::new(provider);
        self
    }

    pub fn tracker(mut self, tracker: Arc<dyn ActionTracker>) -> Self {
        self.tracker = Some(tracker);
        self
    }

    /// Start a new adventure with `character`.
    pub fn new_game(self, character: Character) -> Result<SessionSetup> {
        let (content, runtime_config, saves) = self.prepare()?;

        let mut builder = GameSession::builder()
            .content(Arc::clone(&content))
            .config(runtime_config)
            .character(character);
        if let Some(start) = self.config.start_place {
            builder = builder.start_at(start);
        }
        if let Some(tracker) = self.tracker {
            builder = builder.shared_tracker(tracker);
        }
        let session = builder.build().context("failed to start the adventure")?;

        Ok(SessionSetup {
            config: self.config,
            content,
            session,
            saves,
        })
    }

    /// Resume the game stored in `slot` of the save directory.
    pub fn resume(self, slot: &str) -> Result<SessionSetup> {
        let (content, runtime_config, saves) = self.prepare()?;
        let repo = saves
            .as_ref()
            .ok_or_else(|| anyhow!("no save directory configured"))?;
        let stored = repo
            .load(slot)
            .with_context(|| format!("failed to read saved game '{slot}'"))?
            .ok_or_else(|| anyhow!("no saved game in slot '{slot}'"))?;

        let mut builder = GameSession::builder()
            .content(Arc::clone(&content))
            .config(runtime_config)
            .stored_game(stored);
        if let Some(tracker) = self.tracker {
            builder = builder.shared_tracker(tracker);
        }
        let session = builder
            .build()
            .with_context(|| format!("failed to restore saved game '{slot}'"))?;

        Ok(SessionSetup {
            config: self.config,
            content,
            session,
            saves,
        })
    }

    fn prepare(&self) -> Result<(Arc<GameContent>, RuntimeConfig, Option<FileStoredGameRepo>)> {
        let content = self.content.load()?;

        let mut game_config = content.config.clone();
        if let Some(locale) = &self.config.locale {
            game_config = game_config.with_locale(locale.clone());
        }
        let runtime_config = RuntimeConfig {
            game_config,
            event_buffer_size: self.config.event_buffer,
        };

        let saves = match &self.config.save_dir {
            Some(dir) => Some(FileStoredGameRepo::new(dir).with_context(|| {
                format!("failed to open save directory {}", dir.display())
            })?),
            None => None,
        };

        Ok((content, runtime_config, saves))
    }
}

pub struct SessionSetup {
    pub config: BootstrapConfig,
    pub content: Arc<GameContent>,
    pub session: GameSession,
    /// Present when a save directory is configured.
    pub saves: Option<FileStoredGameRepo>,
}

impl SessionSetup {
    /// Save the session into `slot` of the save directory.
    pub fn save(&self, slot: &str) -> Result<()> {
        let repo = self
            .saves
            .as_ref()
            .ok_or_else(|| anyhow!("no save directory configured"))?;
        self.session
            .save(repo, slot)
            .with_context(|| format!("failed to save game into slot '{slot}'"))?;
        info!(slot, dir = %repo.base_dir().display(), "save written");
        Ok(())
    }
}

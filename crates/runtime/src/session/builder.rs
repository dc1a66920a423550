use std::sync::Arc;

use gamebook_core::{Character, GameContent, PlaceId, Transition};
use tracing::info;

use super::{GameSession, RuntimeConfig, combat_for};
use crate::api::{ActionTracker, NoopActionTracker, Result, RuntimeError};
use crate::events::EventBus;
use crate::repository::StoredGame;

/// Builder for [`GameSession`].
///
/// Content is required, plus either a fresh character or a stored game.
#[derive(Default)]
pub struct GameSessionBuilder {
    config: Option<RuntimeConfig>,
    content: Option<Arc<GameContent>>,
    tracker: Option<Arc<dyn ActionTracker>>,
    events: Option<EventBus>,
    character: Option<Character>,
    start: Option<PlaceId>,
    stored: Option<StoredGame>,
}

impl GameSessionBuilder {
    pub(super) fn new() -> Self {
        Self::default()
    }

    /// Override runtime configuration. Defaults to the content's `GameConfig`.
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set required static content
    pub fn content(mut self, content: Arc<GameContent>) -> Self {
        self.content = Some(content);
        self
    }

    /// Set the player-action tracker (optional)
    pub fn tracker(mut self, tracker: impl ActionTracker + 'static) -> Self {
        self.tracker = Some(Arc::new(tracker));
        self
    }

    /// Share a tracker the caller keeps a handle to
    pub fn shared_tracker(mut self, tracker: Arc<dyn ActionTracker>) -> Self {
        self.tracker = Some(tracker);
        self
    }

    /// Publish on an existing bus instead of creating one
    pub fn event_bus(mut self, events: EventBus) -> Self {
        self.events = Some(events);
        self
    }

    /// Start a new adventure with this character
    pub fn character(mut self, character: Character) -> Self {
        self.character = Some(character);
        self
    }

    /// First place of a new adventure. Defaults to the lowest place id.
    pub fn start_at(mut self, place: PlaceId) -> Self {
        self.start = Some(place);
        self
    }

    /// Resume a stored game. Takes precedence over `character`.
    pub fn stored_game(mut self, stored: StoredGame) -> Self {
        self.stored = Some(stored);
        self
    }

    /// Build the session
    ///
    /// A new adventure enters its first place, applying its arrival effects.
    /// A resumed game lands on its stored place without them.
    pub fn build(self) -> Result<GameSession> {
        let content = self.content.ok_or(RuntimeError::MissingContent)?;
        let config = self.config.unwrap_or_else(|| RuntimeConfig {
            game_config: content.config.clone(),
            ..RuntimeConfig::default()
        });
        let events = self
            .events
            .unwrap_or_else(|| EventBus::with_capacity(config.event_buffer_size));
        let tracker = self
            .tracker
            .unwrap_or_else(|| Arc::new(NoopActionTracker));

        if let Some(stored) = self.stored {
            let character = Character::restore(&stored.character, &*content, &*content)?;
            let place = content
                .graph
                .place(stored.place)
                .ok_or(RuntimeError::PlaceNotFound(stored.place))?;
            let combat = combat_for(&content, place)?;

            info!(place = %stored.place, score = stored.score, "session restored");
            return Ok(GameSession {
                config,
                content,
                tracker,
                events,
                character,
                place: stored.place,
                combat,
                pending_items: stored.pending_items,
                score: stored.score,
            });
        }

        let character = self.character.ok_or(RuntimeError::MissingCharacter)?;
        let start = self
            .start
            .or_else(|| content.graph.iter().next().map(|place| place.id))
            .ok_or(RuntimeError::PlaceNotFound(PlaceId::default()))?;

        let mut session = GameSession {
            config,
            content,
            tracker,
            events,
            character,
            place: start,
            combat: None,
            pending_items: 0,
            score: 0,
        };
        session.move_to(Transition::start(start))?;
        info!(place = %start, character = session.character.name(), "adventure started");
        Ok(session)
    }
}

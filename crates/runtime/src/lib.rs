//! Runtime orchestration for a gamebook adventure.
//!
//! This crate wires the rules in `gamebook-core` to the outside world: a
//! [`GameSession`] routes player intents into the narrative graph and the
//! combat state machine, publishes what happened on a topic-based
//! [`EventBus`], reports player actions to an [`ActionTracker`], and saves
//! [`StoredGame`] records through a [`StoredGameRepository`].
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the orchestrator and its builder
//! - [`api`] exposes error types and collaborator ports
//! - [`events`] provides the topic-based event bus
//! - [`repository`] persists stored games
pub mod api;
pub mod events;
pub mod repository;
pub mod session;

pub use api::{
    ActionTracker, ChannelActionTracker, InMemoryActionTracker, NoopActionTracker, Result,
    RuntimeError,
};
pub use events::{EventBus, GameEvent, Topic};
pub use repository::{
    FileStoredGameRepo, InMemoryStoredGameRepo, RepositoryError, StoredGame, StoredGameRepository,
};
pub use session::{
    CheckResolution, CombatEnding, CombatTurn, GameSession, GameSessionBuilder, RuntimeConfig,
};

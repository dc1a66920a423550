//! Topic-based event bus for session events.
//!
//! Events are published to specific topics, and consumers subscribe only to
//! the topics they need.

mod bus;
mod game_event;

pub use bus::{EventBus, Topic};
pub use game_event::GameEvent;

//! Repository layer for stored games.
//!
//! Repositories handle data that CHANGES during play. Static content
//! (items, spells, enemies, places) is served by the content oracles.

mod error;
mod file;
mod memory;
mod traits;
mod types;

pub use error::{RepositoryError, Result};
pub use file::FileStoredGameRepo;
pub use memory::InMemoryStoredGameRepo;
pub use traits::{StoredGameRepository, validate_slot};
pub use types::StoredGame;

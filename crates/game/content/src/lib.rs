//! Data-driven content definitions and loaders.
//!
//! This crate turns the data directory into the read-only
//! [`GameContent`](gamebook_core::GameContent) bundle:
//! - Item catalogs (RON)
//! - Spell catalogs (RON)
//! - Enemy definitions (RON)
//! - Places of the narrative graph (RON)
//! - Game configuration (TOML)
//!
//! Content is validated once after loading: duplicate ids and references to
//! ids that do not exist are rejected before a session can start.

pub mod validate;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use validate::{ContentIssue, validate};

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, EnemyLoader, ItemLoader, LoadResult, PlaceLoader, SpellLoader,
};

//! Public runtime API surface.
//!
//! Gathers the error types and collaborator ports exposed to consumers of the
//! runtime crate so the session module can stay focused on orchestration.

pub mod errors;
pub mod tracker;

pub use errors::{Result, RuntimeError};
pub use tracker::{ActionTracker, ChannelActionTracker, InMemoryActionTracker, NoopActionTracker};

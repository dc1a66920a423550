//! Player-action tracking port.
//!
//! Places register action ids on arrival and spells cast to open a path add
//! a synthetic one. Hosts plug in an [`ActionTracker`] to feed achievement
//! logic; the session never waits on it and ignores what it returns.

use std::collections::BTreeSet;
use std::sync::Mutex;

use gamebook_core::PlayerActionId;
use tokio::sync::mpsc;

/// Receives player action ids in the order the session emits them.
///
/// Implementations may hand the id to another thread but must not call back
/// into the session.
pub trait ActionTracker: Send + Sync {
    /// Records `action`. Returns true if it had not been recorded before.
    fn register_action(&self, action: &PlayerActionId) -> bool;
}

/// Tracker that discards every action.
/// Useful for testing or as a fallback.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopActionTracker;

impl ActionTracker for NoopActionTracker {
    fn register_action(&self, _action: &PlayerActionId) -> bool {
        false
    }
}

/// Tracker that keeps every action in memory, in arrival order.
#[derive(Debug, Default)]
pub struct InMemoryActionTracker {
    inner: Mutex<Registered>,
}

#[derive(Debug, Default)]
struct Registered {
    seen: BTreeSet<PlayerActionId>,
    log: Vec<PlayerActionId>,
}

impl InMemoryActionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every registration, duplicates included.
    pub fn actions(&self) -> Vec<PlayerActionId> {
        self.inner
            .lock()
            .map(|inner| inner.log.clone())
            .unwrap_or_default()
    }

    pub fn contains(&self, action: &PlayerActionId) -> bool {
        self.inner
            .lock()
            .map(|inner| inner.seen.contains(action))
            .unwrap_or(false)
    }
}

impl ActionTracker for InMemoryActionTracker {
    fn register_action(&self, action: &PlayerActionId) -> bool {
        match self.inner.lock() {
            Ok(mut inner) => {
                inner.log.push(action.clone());
                inner.seen.insert(action.clone())
            }
            Err(_) => {
                tracing::debug!(%action, "action tracker lock poisoned, dropping action");
                false
            }
        }
    }
}

/// Tracker that forwards every action over an unbounded channel.
///
/// The receiving side sees ids in emission order. Whether an id is new is
/// unknown here, so `register_action` reports delivery instead.
#[derive(Debug, Clone)]
pub struct ChannelActionTracker {
    tx: mpsc::UnboundedSender<PlayerActionId>,
}

impl ChannelActionTracker {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<PlayerActionId>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl ActionTracker for ChannelActionTracker {
    fn register_action(&self, action: &PlayerActionId) -> bool {
        if self.tx.send(action.clone()).is_err() {
            tracing::trace!(%action, "action receiver dropped");
            return false;
        }
        true
    }
}

//! Events emitted by a game session.
//!
//! A session publishes these after every intent so presentation and
//! achievement collaborators can react without calling back into the rules.

use gamebook_core::{CombatEvent, EnemyId, ItemId, PlaceId, Side, SpellId};
use serde::{Deserialize, Serialize};

use super::bus::Topic;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The character arrived at a place.
    PlaceEntered { place: PlaceId, score: i64 },

    /// Items were added to the backpack on arrival.
    ItemsGranted { items: Vec<ItemId>, pending: u32 },

    /// Active spells ended because their scope was left.
    SpellsExpired { spells: Vec<SpellId> },

    /// A fight left its not-started state.
    CombatStarted { enemy: EnemyId, run_away: bool },

    /// Low-level progress of the current fight.
    Combat(CombatEvent),

    /// The fight is over and the session moved on.
    CombatEnded {
        winner: Option<Side>,
        escaped: bool,
        /// The character attacked with a weapon at least once.
        used_melee: bool,
    },

    CharacterDied { place: PlaceId },
}

impl GameEvent {
    pub fn topic(&self) -> Topic {
        match self {
            GameEvent::PlaceEntered { .. } | GameEvent::ItemsGranted { .. } => Topic::Narrative,
            GameEvent::CombatStarted { .. }
            | GameEvent::Combat(_)
            | GameEvent::CombatEnded { .. } => Topic::Combat,
            GameEvent::SpellsExpired { .. } | GameEvent::CharacterDied { .. } => Topic::Character,
        }
    }
}

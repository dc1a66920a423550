//! Turn-based combat between the character and one enemy.
//!
//! The engine never rolls dice. Initiative and attack values are supplied by
//! the caller, so every fight is deterministic for a given input sequence.
//!
//! # Core Types
//!
//! - [`Combat`]: the state machine for one fight
//! - [`Combatant`]: what the engine needs from either side
//! - [`CombatEvent`]: what each call produced, returned to the caller
//! - [`calculate_damage`]: attack/defense/multiplier to damage

pub mod damage;
mod enemy;
mod engine;

pub use damage::calculate_damage;
pub use enemy::{Enemy, EnemyDefinition, EnemyId};
pub use engine::{
    Combat, CombatEvent, CombatEvents, CombatPhase, CombatState, RoundState, RunAwayState,
};

/// Either participant of a fight.
pub trait Combatant {
    fn current_life(&self) -> i32;

    /// Subtracts `damage` from life, clamping at zero. Non-positive damage is ignored.
    fn apply_damage(&mut self, damage: i32);

    fn is_defeated(&self) -> bool {
        self.current_life() <= 0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Side {
    Character,
    Enemy,
}

impl Side {
    pub const fn opponent(self) -> Self {
        match self {
            Side::Character => Side::Enemy,
            Side::Enemy => Side::Character,
        }
    }
}

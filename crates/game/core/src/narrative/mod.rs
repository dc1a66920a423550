//! The narrative graph: places, dice checks and traversal side effects.

mod action;
mod check;
mod graph;
mod place;

pub use action::PlayerActionId;
pub use check::{CheckOutcome, Difficulty, DifficultyTier};
pub use graph::{GraphError, NarrativeGraph, Transition, TransitionReport};
pub use place::{ChoiceOption, ItemUseOption, Place, PlaceId, PlaceKind, SpellUseOption};

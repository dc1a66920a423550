//! Deterministic rules for a branching-narrative gamebook.
//!
//! `gamebook-core` holds the character stat model, inventory and spell
//! activation, the combat state machine and the narrative graph. Nothing in
//! this crate performs I/O or generates random numbers: dice results are
//! supplied by the caller and every operation reports what it did through its
//! return value.
pub mod character;
pub mod combat;
pub mod config;
pub mod env;
pub mod error;
pub mod item;
pub mod narrative;
pub mod spell;
pub mod stats;
pub mod text;

pub use character::{
    ActiveSpells, Backpack, Character, CharacterBuilder, CharacterError, CharacterSnapshot,
    EquipError, Equipment, Gender, RestoreError, SpellError, Spellbook,
};
pub use combat::{
    Combat, CombatEvent, CombatEvents, CombatPhase, CombatState, Combatant, Enemy,
    EnemyDefinition, EnemyId, RoundState, RunAwayState, Side, calculate_damage,
};
pub use config::GameConfig;
pub use env::{ContentTables, DuplicateId, EnemyOracle, GameContent, ItemOracle, SpellOracle};
pub use error::{ErrorSeverity, GameError};
pub use item::{EquipPosition, EquipSlots, EquipableData, Item, ItemId, ItemKind, RecoveryEffect};
pub use narrative::{
    CheckOutcome, ChoiceOption, Difficulty, DifficultyTier, GraphError, ItemUseOption,
    NarrativeGraph, Place, PlaceId, PlaceKind, PlayerActionId, SpellUseOption, Transition,
    TransitionReport,
};
pub use spell::{Spell, SpellId, SpellKind};
pub use stats::{
    AttributeId, Attributes, DerivedStats, ModifierSet, Race, ResourceCurrent, ResourceDelta,
    ResourceKind, ResourceMaximums, SkillId, Skills,
};
pub use text::LocalizedText;

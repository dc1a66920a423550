//! Stat model - base values, modifiers and derived totals.
//!
//! # Architecture
//!
//! ```text
//! [ Base attributes / skills (stored) ]
//!      ↓
//! [ Modifiers: race + equipped items + active spells ]
//!      ↓
//! [ Derived totals: attack, defense, initiative, maxima ]
//!      ↓
//! [ Resources: current life / power / luck, clamped to maxima ]
//! ```
//!
//! Everything below the base layer is a pure function and is recomputed on
//! every read.

pub mod base;
pub mod derived;
pub mod modifiers;
pub mod race;
pub mod resources;

pub use base::{AttributeId, Attributes, SkillId, Skills};
pub use derived::DerivedStats;
pub use modifiers::ModifierSet;
pub use race::Race;
pub use resources::{
    ResourceCurrent, ResourceDelta, ResourceKind, ResourceMaximums, clamp_resource,
};

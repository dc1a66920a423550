//! Resource pools (life, power, luck).
//!
//! Resource pools are partially stored:
//! - Maximum values: derived from attributes and equipment (NOT stored)
//! - Current values: game state (MUST be stored)
//!
//! Current values are clamped to `[0, max]` both when written and when read,
//! so a maximum that shrinks (an item is unequipped) never exposes a current
//! value above it.

/// Enum representing individual resource types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ResourceKind {
    Life,
    Power,
    Luck,
}

/// Maximum resource values computed from stats.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceMaximums {
    pub life: i32,
    pub power: i32,
    pub luck: i32,
}

impl ResourceMaximums {
    pub const fn new(life: i32, power: i32, luck: i32) -> Self {
        Self { life, power, luck }
    }

    /// Get the max value for a specific resource.
    pub const fn get(&self, kind: ResourceKind) -> i32 {
        match kind {
            ResourceKind::Life => self.life,
            ResourceKind::Power => self.power,
            ResourceKind::Luck => self.luck,
        }
    }
}

/// Current resource values (game state, must be stored).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceCurrent {
    pub life: i32,
    pub power: i32,
    pub luck: i32,
}

impl ResourceCurrent {
    pub const fn new(life: i32, power: i32, luck: i32) -> Self {
        Self { life, power, luck }
    }

    /// Current resources at maximum.
    pub const fn at_max(max: &ResourceMaximums) -> Self {
        Self {
            life: max.life,
            power: max.power,
            luck: max.luck,
        }
    }

    pub const fn get(&self, kind: ResourceKind) -> i32 {
        match kind {
            ResourceKind::Life => self.life,
            ResourceKind::Power => self.power,
            ResourceKind::Luck => self.luck,
        }
    }

    /// Writes a value clamped to `[0, max]`.
    pub fn set_clamped(&mut self, kind: ResourceKind, value: i32, max: i32) {
        let value = clamp_resource(value, max);
        match kind {
            ResourceKind::Life => self.life = value,
            ResourceKind::Power => self.power = value,
            ResourceKind::Luck => self.luck = value,
        }
    }
}

/// Fixed deltas applied to life, power and luck.
///
/// Used by effect places, recovery items and healing spells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ResourceDelta {
    pub life: i32,
    pub power: i32,
    pub luck: i32,
}

impl ResourceDelta {
    pub const fn new(life: i32, power: i32, luck: i32) -> Self {
        Self { life, power, luck }
    }

    pub const fn life(amount: i32) -> Self {
        Self::new(amount, 0, 0)
    }

    pub const fn get(&self, kind: ResourceKind) -> i32 {
        match kind {
            ResourceKind::Life => self.life,
            ResourceKind::Power => self.power,
            ResourceKind::Luck => self.luck,
        }
    }
}

/// Clamp a resource value to `[0, max]`; a negative maximum counts as 0.
#[inline]
pub fn clamp_resource(value: i32, max: i32) -> i32 {
    value.clamp(0, max.max(0))
}

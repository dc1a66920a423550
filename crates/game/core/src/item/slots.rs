//! Equipment positions and allowed-position sets.

use bitflags::bitflags;

/// A single place on the body an item can be equipped to.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EquipPosition {
    Head,
    Neck,
    Body,
    MainHand,
    OffHand,
    Ring,
    Feet,
}

bitflags! {
    /// Set of positions an equipable item may occupy.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct EquipSlots: u8 {
        const HEAD      = 1 << 0;
        const NECK      = 1 << 1;
        const BODY      = 1 << 2;
        const MAIN_HAND = 1 << 3;
        const OFF_HAND  = 1 << 4;
        const RING      = 1 << 5;
        const FEET      = 1 << 6;

        const HANDS = Self::MAIN_HAND.bits() | Self::OFF_HAND.bits();
    }
}

// Flag names (`"MAIN_HAND | OFF_HAND"`) in text formats, raw bits in binary ones.
#[cfg(feature = "serde")]
impl serde::Serialize for EquipSlots {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        bitflags::serde::serialize(self, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for EquipSlots {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        bitflags::serde::deserialize(deserializer)
    }
}

impl From<EquipPosition> for EquipSlots {
    fn from(position: EquipPosition) -> Self {
        match position {
            EquipPosition::Head => Self::HEAD,
            EquipPosition::Neck => Self::NECK,
            EquipPosition::Body => Self::BODY,
            EquipPosition::MainHand => Self::MAIN_HAND,
            EquipPosition::OffHand => Self::OFF_HAND,
            EquipPosition::Ring => Self::RING,
            EquipPosition::Feet => Self::FEET,
        }
    }
}

impl EquipSlots {
    /// Returns true if `position` is in this set.
    #[inline]
    pub fn allows(self, position: EquipPosition) -> bool {
        self.contains(position.into())
    }

    /// Iterate the positions contained in this set.
    pub fn positions(self) -> impl Iterator<Item = EquipPosition> {
        use strum::IntoEnumIterator;
        EquipPosition::iter().filter(move |position| self.allows(*position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hands_allow_both_hands_only() {
        let slots = EquipSlots::HANDS;
        assert!(slots.allows(EquipPosition::MainHand));
        assert!(slots.allows(EquipPosition::OffHand));
        assert!(!slots.allows(EquipPosition::Head));
        assert_eq!(slots.positions().count(), 2);
    }

    #[test]
    fn empty_set_allows_nothing() {
        assert_eq!(EquipSlots::empty().positions().next(), None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn text_form_uses_flag_names() {
        let slots: EquipSlots = serde_json::from_str("\"MAIN_HAND | OFF_HAND\"").unwrap();
        assert_eq!(slots, EquipSlots::HANDS);
        assert_eq!(
            serde_json::to_string(&EquipSlots::RING).unwrap(),
            "\"RING\""
        );
    }
}

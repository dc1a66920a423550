//! Equipped items, one per equipment position.

use std::collections::BTreeMap;

use crate::error::{ErrorSeverity, GameError};
use crate::item::{EquipPosition, Item, ItemId};
use crate::stats::ModifierSet;

/// Errors raised when an item cannot be equipped.
///
/// A failed equip never mutates the character.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EquipError {
    #[error("{0} cannot be equipped")]
    NotEquipable(ItemId),

    #[error("{item} cannot be equipped to {position}")]
    PositionNotAllowed {
        item: ItemId,
        position: EquipPosition,
    },
}

impl GameError for EquipError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotEquipable(_) => "EQUIP_NOT_EQUIPABLE",
            Self::PositionNotAllowed { .. } => "EQUIP_POSITION_NOT_ALLOWED",
        }
    }
}

/// Equipment state for a character.
///
/// Equipping does not move items out of the backpack and unequipping does not
/// put them back; ownership transfer is the caller's responsibility.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Equipment {
    slots: BTreeMap<EquipPosition, Item>,
}

impl Equipment {
    /// Creates empty equipment.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Equips `item` at `position`, returning the previously equipped item if any.
    pub fn equip(&mut self, item: Item, position: EquipPosition) -> Result<Option<Item>, EquipError> {
        let data = item.equipable().ok_or(EquipError::NotEquipable(item.id))?;
        if !data.slots.allows(position) {
            return Err(EquipError::PositionNotAllowed {
                item: item.id,
                position,
            });
        }
        Ok(self.slots.insert(position, item))
    }

    /// Unequips the item at `position`, returning it if any was equipped.
    pub fn unequip(&mut self, position: EquipPosition) -> Option<Item> {
        self.slots.remove(&position)
    }

    /// Unequips the first equipped item with the given id.
    pub fn remove_item(&mut self, id: ItemId) -> Option<Item> {
        let position = self
            .slots
            .iter()
            .find(|(_, item)| item.id == id)
            .map(|(position, _)| *position)?;
        self.slots.remove(&position)
    }

    pub fn get(&self, position: EquipPosition) -> Option<&Item> {
        self.slots.get(&position)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.slots.values().any(|item| item.id == id)
    }

    /// Iterate equipped items in position order.
    pub fn iter(&self) -> impl Iterator<Item = (EquipPosition, &Item)> {
        self.slots.iter().map(|(position, item)| (*position, item))
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Sum of the modifiers of every equipped item.
    pub fn modifiers(&self) -> ModifierSet {
        self.slots
            .values()
            .filter_map(Item::equipable)
            .map(|data| data.modifiers())
            .sum()
    }
}

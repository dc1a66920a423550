//! Backpack: the ordered list of items a character carries but has not equipped.

use crate::item::{Item, ItemId};

/// Ordered item storage.
///
/// Index-based accessors panic on out-of-range indices; callers index only
/// positions they obtained from this backpack.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Backpack {
    items: Vec<Item>,
}

impl Backpack {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Item at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn get(&self, index: usize) -> &Item {
        &self.items[index]
    }

    /// Removes and returns the item at `index`, shifting later items down.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn take(&mut self, index: usize) -> Item {
        self.items.remove(index)
    }

    /// Removes the first item with the given id.
    pub fn remove_item(&mut self, id: ItemId) -> Option<Item> {
        let index = self.position(id)?;
        Some(self.items.remove(index))
    }

    pub fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.position(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

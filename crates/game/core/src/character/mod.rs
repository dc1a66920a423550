//! The player character: base stats, resources, items and spells.
//!
//! Every derived value (totals, maxima) is recomputed from the current
//! equipment and active spells on each read; nothing derived is cached.
mod builder;
mod equipment;
mod inventory;
mod snapshot;
mod spells;

pub use builder::{CharacterBuilder, CharacterError};
pub use equipment::{EquipError, Equipment};
pub use inventory::Backpack;
pub use snapshot::{CharacterSnapshot, RestoreError};
pub use spells::{ActiveSpells, SpellError, Spellbook};

use crate::combat::Combatant;
use crate::item::{EquipPosition, Item, ItemId, RecoveryEffect};
use crate::spell::{Spell, SpellId};
use crate::stats::{
    AttributeId, Attributes, DerivedStats, ModifierSet, Race, ResourceCurrent, ResourceDelta,
    ResourceKind, ResourceMaximums, SkillId, Skills, clamp_resource,
};

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Gender {
    #[default]
    Male,
    Female,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Character {
    name: String,
    gender: Gender,
    race: Race,
    attributes: Attributes,
    skills: Skills,
    /// Stored pools; read back clamped against the current maxima.
    resources: ResourceCurrent,
    backpack: Backpack,
    equipment: Equipment,
    spellbook: Spellbook,
    active: ActiveSpells,
}

impl Character {
    pub fn builder(name: impl Into<String>) -> CharacterBuilder {
        CharacterBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn race(&self) -> Race {
        self.race
    }

    pub fn base_attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn base_skills(&self) -> &Skills {
        &self.skills
    }

    // ========================================================================
    // Stat model
    // ========================================================================

    /// Race, equipment and active-spell modifiers combined.
    pub fn modifiers(&self) -> ModifierSet {
        self.race.modifiers() + self.equipment.modifiers() + self.active.modifiers()
    }

    pub fn stats(&self) -> DerivedStats {
        DerivedStats::compute(&self.attributes, &self.skills, &self.modifiers())
    }

    pub fn total_attribute(&self, id: AttributeId) -> i32 {
        self.attributes.get(id) + self.modifiers().attribute(id)
    }

    pub fn total_skill(&self, id: SkillId) -> i32 {
        self.skills.get(id) + self.modifiers().skill(id)
    }

    pub fn total_attack(&self) -> i32 {
        self.stats().attack
    }

    pub fn total_defense(&self) -> i32 {
        self.stats().defense
    }

    pub fn total_initiative(&self) -> i32 {
        self.stats().initiative
    }

    pub fn maximums(&self) -> ResourceMaximums {
        self.stats().max
    }

    pub fn max_life(&self) -> i32 {
        self.maximums().life
    }

    pub fn max_power(&self) -> i32 {
        self.maximums().power
    }

    pub fn max_luck(&self) -> i32 {
        self.maximums().luck
    }

    // ========================================================================
    // Resources
    // ========================================================================

    pub fn current(&self, kind: ResourceKind) -> i32 {
        clamp_resource(self.resources.get(kind), self.maximums().get(kind))
    }

    pub fn current_life(&self) -> i32 {
        self.current(ResourceKind::Life)
    }

    pub fn current_power(&self) -> i32 {
        self.current(ResourceKind::Power)
    }

    pub fn current_luck(&self) -> i32 {
        self.current(ResourceKind::Luck)
    }

    /// Current pools, each clamped to its maximum.
    pub fn resources(&self) -> ResourceCurrent {
        ResourceCurrent::new(self.current_life(), self.current_power(), self.current_luck())
    }

    /// Sets a pool, clamping to `[0, max]`.
    pub fn set_current(&mut self, kind: ResourceKind, value: i32) {
        let max = self.maximums().get(kind);
        self.resources.set_clamped(kind, value, max);
    }

    pub fn set_current_life(&mut self, value: i32) {
        self.set_current(ResourceKind::Life, value);
    }

    pub fn set_current_power(&mut self, value: i32) {
        self.set_current(ResourceKind::Power, value);
    }

    pub fn set_current_luck(&mut self, value: i32) {
        self.set_current(ResourceKind::Luck, value);
    }

    /// Subtracts `damage` from life. Non-positive damage is ignored.
    pub fn apply_damage(&mut self, damage: i32) {
        if damage > 0 {
            self.set_current_life(self.current_life().saturating_sub(damage));
        }
    }

    /// Adds each delta to its pool, clamping each pool independently.
    pub fn apply_delta(&mut self, delta: ResourceDelta) {
        for kind in [ResourceKind::Life, ResourceKind::Power, ResourceKind::Luck] {
            self.set_current(kind, self.current(kind) + delta.get(kind));
        }
    }

    /// Sets every pool to its maximum.
    pub fn restore_all(&mut self) {
        self.resources = ResourceCurrent::at_max(&self.maximums());
    }

    /// Sets every pool to zero.
    pub fn kill(&mut self) {
        self.resources = ResourceCurrent::default();
    }

    pub fn is_alive(&self) -> bool {
        self.current_life() > 0
    }

    pub fn apply_recovery(&mut self, effect: &RecoveryEffect) {
        if effect.full_restore {
            self.restore_all();
        } else {
            self.apply_delta(effect.restore);
        }
    }

    // ========================================================================
    // Inventory & equipment
    // ========================================================================

    pub fn backpack(&self) -> &Backpack {
        &self.backpack
    }

    pub fn equipment(&self) -> &Equipment {
        &self.equipment
    }

    pub fn add_item(&mut self, item: Item) {
        self.backpack.push(item);
    }

    /// Removes and returns the backpack item at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn take_item(&mut self, index: usize) -> Item {
        self.backpack.take(index)
    }

    /// True if the item is carried or equipped.
    pub fn owns(&self, id: ItemId) -> bool {
        self.backpack.contains(id) || self.equipment.contains(id)
    }

    /// Removes one copy of an item, preferring the backpack over equipment.
    /// Returns false if the character owns no such item.
    pub fn remove_item(&mut self, id: ItemId) -> bool {
        self.backpack.remove_item(id).is_some() || self.equipment.remove_item(id).is_some()
    }

    /// Equips `item` at `position`. On failure nothing changes.
    pub fn equip(&mut self, item: Item, position: EquipPosition) -> Result<Option<Item>, EquipError> {
        self.equipment.equip(item, position)
    }

    pub fn unequip(&mut self, position: EquipPosition) -> Option<Item> {
        self.equipment.unequip(position)
    }

    /// Consumes the usable item at `index` and applies its effect.
    ///
    /// Returns `None` without consuming anything if the item is not usable.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn use_item(&mut self, index: usize) -> Option<Item> {
        let effect = *self.backpack.get(index).recovery()?;
        let item = self.backpack.take(index);
        self.apply_recovery(&effect);
        Some(item)
    }

    // ========================================================================
    // Spells
    // ========================================================================

    pub fn spellbook(&self) -> &Spellbook {
        &self.spellbook
    }

    pub fn active_spells(&self) -> &ActiveSpells {
        &self.active
    }

    /// Learns a spell if the character's total Magic meets its requirement.
    pub fn learn_spell(&mut self, spell: Spell) -> Result<(), SpellError> {
        let magic = self.total_skill(SkillId::Magic);
        if magic < spell.min_magic {
            return Err(SpellError::MagicTooLow {
                spell: spell.id,
                required: spell.min_magic,
                actual: magic,
            });
        }
        self.spellbook.learn(spell);
        Ok(())
    }

    pub fn knows_spell(&self, id: SpellId) -> bool {
        self.spellbook.knows(id)
    }

    /// Learned and affordable. Does not deduct power.
    pub fn can_cast(&self, spell: &Spell) -> bool {
        self.knows_spell(spell.id) && self.current_power() >= spell.cost
    }

    /// Checks [`can_cast`](Self::can_cast) and deducts the spell's cost.
    pub fn spend_power_for(&mut self, spell: &Spell) -> Result<(), SpellError> {
        if !self.knows_spell(spell.id) {
            return Err(SpellError::NotLearned(spell.id));
        }
        let available = self.current_power();
        if available < spell.cost {
            return Err(SpellError::NotEnoughPower {
                spell: spell.id,
                cost: spell.cost,
                available,
            });
        }
        self.set_current_power(available - spell.cost);
        Ok(())
    }

    /// No-op for non-enhancements and for spells already active.
    pub fn add_active_spell(&mut self, spell: &Spell) -> bool {
        self.active.add(spell)
    }

    pub fn remove_active_spell(&mut self, id: SpellId) -> bool {
        self.active.remove(id)
    }

    pub fn is_spell_active(&self, id: SpellId) -> bool {
        self.active.contains(id)
    }
}

impl Combatant for Character {
    fn current_life(&self) -> i32 {
        Character::current_life(self)
    }

    fn apply_damage(&mut self, damage: i32) {
        Character::apply_damage(self, damage);
    }
}

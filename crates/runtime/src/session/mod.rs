//! The game session: one character playing through one adventure.
//!
//! A session owns the character, the current place and the fight in progress.
//! Player intents are routed into the narrative graph and the combat state
//! machine; the results are published on the [`EventBus`] and returned to the
//! caller. Dice are rolled by the caller and passed in.
//!
//! Intents that do not apply in the current state (choosing an option at a
//! combat place, attacking outside a turn) change nothing and return an empty
//! result. Invalid input (casting an unknown spell, equipping at a forbidden
//! position) is an error.

mod builder;
mod combat;
mod config;
mod outcome;

pub use builder::GameSessionBuilder;
pub use config::RuntimeConfig;
pub use outcome::{CheckResolution, CombatEnding, CombatTurn};

use std::sync::Arc;

use gamebook_core::{
    Character, Combat, CombatState, Enemy, EnemyOracle, EquipPosition, GameContent, ItemId,
    Place, PlaceId, Spell, SpellError, SpellId, SpellKind, SpellOracle, Transition,
    TransitionReport,
};
use tokio::sync::broadcast;
use tracing::{debug, info};

use crate::api::{ActionTracker, Result, RuntimeError};
use crate::events::{EventBus, GameEvent, Topic};
use crate::repository::{StoredGame, StoredGameRepository};

pub struct GameSession {
    config: RuntimeConfig,
    content: Arc<GameContent>,
    tracker: Arc<dyn ActionTracker>,
    events: EventBus,
    character: Character,
    place: PlaceId,
    combat: Option<Combat>,
    pending_items: u32,
    score: i64,
}

impl GameSession {
    pub fn builder() -> GameSessionBuilder {
        GameSessionBuilder::new()
    }

    /// Resumes a stored game without replaying arrival effects.
    pub fn restore(content: Arc<GameContent>, stored: StoredGame) -> Result<Self> {
        Self::builder().content(content).stored_game(stored).build()
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn content(&self) -> &Arc<GameContent> {
        &self.content
    }

    pub fn character(&self) -> &Character {
        &self.character
    }

    pub fn place_id(&self) -> PlaceId {
        self.place
    }

    pub fn place(&self) -> Result<&Place> {
        self.content
            .graph
            .place(self.place)
            .ok_or(RuntimeError::PlaceNotFound(self.place))
    }

    /// Text of the current place in the configured locale.
    pub fn place_text(&self) -> Result<&str> {
        let locale = self.config.game_config.locale.as_deref();
        Ok(self.place()?.text.resolve(locale))
    }

    /// The fight at the current place, if any.
    pub fn combat(&self) -> Option<&Combat> {
        self.combat.as_ref()
    }

    /// Number of granted items not yet acknowledged.
    pub fn pending_items(&self) -> u32 {
        self.pending_items
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    /// The character is dead or standing at an end place.
    pub fn is_over(&self) -> bool {
        !self.character.is_alive() || self.place().is_ok_and(Place::is_end)
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<GameEvent> {
        self.events.subscribe(topic)
    }

    // ========================================================================
    // Narrative intents
    // ========================================================================

    /// Takes the `option`-th choice of an option-choose place.
    pub fn choose(&mut self, option: usize) -> Result<Option<TransitionReport>> {
        let Some(target) = self.place()?.choice_target(option) else {
            debug!(place = %self.place, option, "choice ignored");
            return Ok(None);
        };
        self.move_to(Transition::new(self.place, target)).map(Some)
    }

    /// Leaves an effect place.
    pub fn continue_on(&mut self) -> Result<Option<TransitionReport>> {
        let Some(target) = self.place()?.effect_target() else {
            debug!(place = %self.place, "continue ignored");
            return Ok(None);
        };
        self.move_to(Transition::new(self.place, target)).map(Some)
    }

    /// Resolves a skill or attribute check with the caller's `roll`.
    pub fn resolve_check(&mut self, roll: i32) -> Result<Option<CheckResolution>> {
        let Some((outcome, target)) = self.place()?.resolve_check(&self.character, roll) else {
            debug!(place = %self.place, roll, "check ignored");
            return Ok(None);
        };
        let report = self.move_to(Transition::new(self.place, target))?;
        Ok(Some(CheckResolution { outcome, report }))
    }

    /// Uses a carried item to open a path at an item-use place.
    pub fn use_item_here(&mut self, item: ItemId) -> Result<Option<TransitionReport>> {
        let Some(option) = self.place()?.item_option(item).copied() else {
            debug!(place = %self.place, %item, "item not accepted here");
            return Ok(None);
        };
        if !self.character.owns(item) {
            debug!(place = %self.place, %item, "item not carried");
            return Ok(None);
        }
        let mut transition = Transition::new(self.place, option.target);
        if option.spent {
            transition = transition.with_item(item);
        }
        self.move_to(transition).map(Some)
    }

    /// Casts a spell to open a path at a spell-use place.
    ///
    /// The cost is paid before moving.
    pub fn cast_here(&mut self, spell: SpellId) -> Result<Option<TransitionReport>> {
        let Some(target) = self.place()?.spell_target(spell) else {
            debug!(place = %self.place, %spell, "spell not accepted here");
            return Ok(None);
        };
        let content = Arc::clone(&self.content);
        let definition = content
            .spell(spell)
            .ok_or(RuntimeError::SpellNotFound(spell))?;
        if !definition.adventure {
            return Err(SpellError::NotCastableHere(spell).into());
        }
        self.character.spend_power_for(definition)?;
        self.move_to(Transition::new(self.place, target).with_spell(spell))
            .map(Some)
    }

    /// Takes the way out of an item-use or spell-use place without using anything.
    pub fn decline(&mut self) -> Result<Option<TransitionReport>> {
        let Some(target) = self.place()?.fallback_target() else {
            debug!(place = %self.place, "decline ignored");
            return Ok(None);
        };
        self.move_to(Transition::new(self.place, target)).map(Some)
    }

    /// Casts an adventure spell on the character outside a fight.
    ///
    /// Returns false, spending nothing, while a fight is running.
    pub fn cast_spell(&mut self, spell: SpellId) -> Result<bool> {
        let fighting = self
            .combat
            .as_ref()
            .is_some_and(|combat| combat.combat_state() != CombatState::NotStarted);
        if fighting {
            debug!(%spell, "adventure cast ignored during a fight");
            return Ok(false);
        }
        let content = Arc::clone(&self.content);
        let definition = content
            .spell(spell)
            .ok_or(RuntimeError::SpellNotFound(spell))?;
        if !definition.adventure || matches!(definition.kind, SpellKind::Attack { .. }) {
            return Err(SpellError::NotCastableHere(spell).into());
        }
        self.character.spend_power_for(definition)?;
        self.apply_spell_effect(definition);
        Ok(true)
    }

    pub fn learn_spell(&mut self, spell: SpellId) -> Result<()> {
        let definition = self
            .content
            .spell(spell)
            .ok_or(RuntimeError::SpellNotFound(spell))?
            .clone();
        self.character.learn_spell(definition)?;
        Ok(())
    }

    // ========================================================================
    // Inventory intents
    // ========================================================================

    /// Moves the backpack item at `index` to `position`.
    ///
    /// A replaced item goes back into the backpack. On error nothing moves.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn equip(&mut self, index: usize, position: EquipPosition) -> Result<()> {
        let item = self.character.backpack().get(index).clone();
        let replaced = self.character.equip(item, position)?;
        self.character.take_item(index);
        if let Some(previous) = replaced {
            self.character.add_item(previous);
        }
        Ok(())
    }

    /// Moves the item at `position` back into the backpack.
    pub fn unequip(&mut self, position: EquipPosition) -> bool {
        match self.character.unequip(position) {
            Some(item) => {
                self.character.add_item(item);
                true
            }
            None => false,
        }
    }

    /// Clears the pending-item counter, returning its previous value.
    pub fn acknowledge_items(&mut self) -> u32 {
        std::mem::take(&mut self.pending_items)
    }

    // ========================================================================
    // Persistence
    // ========================================================================

    pub fn stored_game(&self) -> StoredGame {
        StoredGame {
            place: self.place,
            pending_items: self.pending_items,
            score: self.score,
            character: self.character.snapshot(),
        }
    }

    pub fn save(&self, repository: &dyn StoredGameRepository, slot: &str) -> Result<()> {
        repository.save(slot, &self.stored_game())?;
        info!(slot, place = %self.place, score = self.score, "game saved");
        Ok(())
    }

    // ========================================================================
    // Internals
    // ========================================================================

    /// Applies a spell's effect on the character. Attack spells do nothing here.
    fn apply_spell_effect(&mut self, spell: &Spell) {
        match &spell.kind {
            SpellKind::Heal(delta) => self.character.apply_delta(*delta),
            kind if kind.is_enhancement() => {
                self.character.add_active_spell(spell);
            }
            _ => {}
        }
    }

    /// Runs a transition and everything the session does on arrival.
    fn move_to(&mut self, transition: Transition) -> Result<TransitionReport> {
        let content = Arc::clone(&self.content);
        let to = content
            .graph
            .place(transition.to)
            .ok_or(RuntimeError::PlaceNotFound(transition.to))?;
        let combat = combat_for(&content, to)?;

        let report = content
            .graph
            .transition(transition, &mut self.character, &*content)
            .ok_or(RuntimeError::PlaceNotFound(
                transition.from.unwrap_or(transition.to),
            ))?;

        self.place = report.entered;
        self.combat = combat;
        self.score += self.config.game_config.place_score;
        let granted = u32::try_from(report.granted_items.len()).unwrap_or(u32::MAX);
        self.pending_items = self.pending_items.saturating_add(granted);

        for action in &report.actions {
            self.tracker.register_action(action);
        }

        info!(place = %report.entered, score = self.score, "place entered");
        self.events.publish(GameEvent::PlaceEntered {
            place: report.entered,
            score: self.score,
        });
        if !report.granted_items.is_empty() {
            self.events.publish(GameEvent::ItemsGranted {
                items: report.granted_items.clone(),
                pending: self.pending_items,
            });
        }
        if !report.removed_spells.is_empty() {
            debug!(spells = ?report.removed_spells, "active spells expired");
            self.events.publish(GameEvent::SpellsExpired {
                spells: report.removed_spells.clone(),
            });
        }
        if report.character_dead {
            info!(place = %report.entered, "character died");
            self.events.publish(GameEvent::CharacterDied {
                place: report.entered,
            });
        }

        Ok(report)
    }
}

/// A fresh fight for `place` if it is a combat place.
fn combat_for(content: &GameContent, place: &Place) -> Result<Option<Combat>> {
    let Some(enemy) = place.enemy() else {
        return Ok(None);
    };
    let definition = content
        .enemy(enemy)
        .ok_or(RuntimeError::EnemyNotFound(enemy))?;
    Ok(Some(Combat::new(Enemy::new(definition.clone()))))
}


//! Combat intents.
//!
//! Every intent feeds one transition into the fight, then advances it and,
//! once it is finished, moves the session to the place the result leads to.

use std::sync::Arc;

use gamebook_core::{
    Character, Combat, CombatEvent, CombatEvents, CombatState, Combatant, Item, Side, SkillId,
    SpellError, SpellId, SpellKind, SpellOracle, Transition,
};
use tracing::{debug, info};

use super::{CombatEnding, CombatTurn, GameSession};
use crate::api::{Result, RuntimeError};
use crate::events::GameEvent;

impl GameSession {
    /// Starts the fight at the current place.
    pub fn fight(&mut self) -> Result<CombatTurn> {
        self.drive(|combat, character| combat.start(character, false))
    }

    /// Sets the turn order for the round. Ties go to the character.
    pub fn roll_initiative(&mut self, character_roll: i32, enemy_roll: i32) -> Result<CombatTurn> {
        self.drive(|combat, character| {
            combat.apply_initiative_roll(character, character_roll, enemy_roll)
        })
    }

    /// Resolves the active side's weapon attack.
    ///
    /// On the character's turn the rolls are added to the character's attack
    /// and the enemy's defense; on the enemy's turn (including its free hit on
    /// a fleeing character) to the enemy's attack and the character's defense.
    pub fn attack(&mut self, attack_roll: i32, defense_roll: i32) -> Result<CombatTurn> {
        let Some(combat) = self.combat.as_ref() else {
            debug!(place = %self.place, "attack ignored outside a fight");
            return Ok(CombatTurn::default());
        };
        let enemy = combat.enemy();
        let (attack, defense, multiplier, melee) = match combat.current_turn() {
            Some(Side::Character) => (
                self.character.total_attack() + attack_roll,
                enemy.defense() + defense_roll,
                self.config.game_config.melee_damage_multiplier,
                true,
            ),
            Some(Side::Enemy) => (
                enemy.attack() + attack_roll,
                self.character.total_defense() + defense_roll,
                1.0,
                false,
            ),
            None => (0, 0, 1.0, false),
        };
        self.drive(|combat, character| {
            combat.apply_attack_roll(character, attack, defense, multiplier, melee)
        })
    }

    /// Casts a combat spell on the character's turn.
    ///
    /// Attack spells pit the character's Magic skill against the enemy's
    /// magic; any other spell takes effect and ends the turn.
    pub fn cast_in_combat(
        &mut self,
        spell: SpellId,
        attack_roll: i32,
        defense_roll: i32,
    ) -> Result<CombatTurn> {
        if !self.is_character_turn() {
            debug!(place = %self.place, %spell, "combat cast ignored outside the character's turn");
            return Ok(CombatTurn::default());
        }
        let content = Arc::clone(&self.content);
        let definition = content
            .spell(spell)
            .ok_or(RuntimeError::SpellNotFound(spell))?;
        if !definition.combat {
            return Err(SpellError::NotCastableHere(spell).into());
        }
        self.character.spend_power_for(definition)?;

        if let SpellKind::Attack { damage_multiplier } = definition.kind {
            let attack = self.character.total_skill(SkillId::Magic) + attack_roll;
            let defense = self
                .combat
                .as_ref()
                .map_or(0, |combat| combat.enemy().magic())
                + defense_roll;
            return self.drive(|combat, character| {
                combat.apply_attack_roll(character, attack, defense, damage_multiplier, false)
            });
        }

        self.apply_spell_effect(definition);
        self.drive(|combat, character| combat.pass_turn(character))
    }

    /// Uses the backpack item at `index`.
    ///
    /// Once a fight is under way, including while running away, this is only
    /// allowed on the character's turn and ends it. Returns the consumed item,
    /// or `None` if nothing was used.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn use_item(&mut self, index: usize) -> Result<Option<Item>> {
        let fighting = self.combat.as_ref().is_some_and(|combat| {
            matches!(
                combat.combat_state(),
                CombatState::Fighting | CombatState::RunAway
            )
        });
        if fighting && !self.is_character_turn() {
            debug!(place = %self.place, index, "item use ignored outside the character's turn");
            return Ok(None);
        }
        let Some(item) = self.character.use_item(index) else {
            debug!(index, "item is not usable");
            return Ok(None);
        };
        if fighting {
            self.drive(|combat, character| combat.pass_turn(character))?;
        }
        Ok(Some(item))
    }

    /// Runs away. The enemy gets one free attack, resolved with
    /// [`attack`](Self::attack), before the character escapes.
    pub fn flee(&mut self) -> Result<CombatTurn> {
        self.drive(|combat, character| combat.try_to_run_away(character))
    }

    fn is_character_turn(&self) -> bool {
        self.combat
            .as_ref()
            .is_some_and(|combat| combat.current_turn() == Some(Side::Character))
    }

    /// Applies `step`, advances the fight, publishes what happened and
    /// settles a finished fight.
    fn drive<F>(&mut self, step: F) -> Result<CombatTurn>
    where
        F: FnOnce(&mut Combat, &mut Character) -> CombatEvents,
    {
        let Some(combat) = self.combat.as_mut() else {
            debug!(place = %self.place, "combat intent ignored outside a fight");
            return Ok(CombatTurn::default());
        };

        let mut events: Vec<CombatEvent> = step(combat, &mut self.character).into_iter().collect();
        events.extend(combat.advance(&self.character));

        for event in &events {
            if let CombatEvent::Started { run_away } = *event {
                info!(enemy = %combat.enemy().id(), run_away, "combat started");
                self.events.publish(GameEvent::CombatStarted {
                    enemy: combat.enemy().id(),
                    run_away,
                });
            }
            self.events.publish(GameEvent::Combat(*event));
        }

        if !combat.is_finished() {
            return Ok(CombatTurn {
                events,
                ended: None,
            });
        }

        let ended = match self.combat.take() {
            Some(finished) => Some(self.settle_combat(finished)?),
            None => None,
        };
        Ok(CombatTurn { events, ended })
    }

    /// Leaves the combat place for the target matching the result.
    fn settle_combat(&mut self, combat: Combat) -> Result<CombatEnding> {
        let winner = combat.winner(&self.character);
        let escaped = combat.escaped();
        let used_melee = combat.used_melee();

        let target = self
            .place()?
            .combat_target(winner, escaped)
            .ok_or(RuntimeError::PlaceNotFound(self.place))?;
        if winner == Some(Side::Character) {
            self.score += self.config.game_config.victory_score;
        }

        info!(
            enemy = %combat.enemy().id(),
            ?winner,
            escaped,
            enemy_life = combat.enemy().current_life(),
            "combat finished"
        );
        self.events.publish(GameEvent::CombatEnded {
            winner,
            escaped,
            used_melee,
        });

        let report = self.move_to(Transition::new(self.place, target))?;
        Ok(CombatEnding {
            winner,
            escaped,
            used_melee,
            report,
        })
    }
}

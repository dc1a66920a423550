//! The combat state machine.
//!
//! ```text
//! NotStarted ──start(false)──▶ Fighting: RollingInitiative ─▶ FirstTurn ─▶ SecondTurn ─▶ EndRound ─┐
//!     │                              ▲                                                          │
//!     │                              └──────────────────────── advance (round + 1) ─────────────┘
//!     └──start(true) / try_to_run_away──▶ RunAway: BeforeAttackRunAway ─▶ AfterAttackRunAway ─▶ Finished
//! ```
//!
//! Every call first runs the finish check: if either side has no life left
//! the fight ends immediately, whatever the sub-state. Calls made in a
//! sub-state where they do not apply are ignored and return no events.

use arrayvec::ArrayVec;

use super::damage::calculate_damage;
use super::enemy::Enemy;
use super::{Combatant, Side};

/// Maximum number of events a single call can produce.
pub const MAX_EVENTS_PER_CALL: usize = 4;

pub type CombatEvents = ArrayVec<CombatEvent, MAX_EVENTS_PER_CALL>;

/// Top-level combat mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatState {
    NotStarted,
    Fighting,
    RunAway,
    Finished,
}

/// Round sub-state while fighting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoundState {
    RollingInitiative,
    FirstTurn,
    SecondTurn,
    EndRound,
}

/// Sub-state while running away.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RunAwayState {
    /// The enemy gets a free attack.
    BeforeAttackRunAway,
    /// The free attack has been resolved; the next advance escapes.
    AfterAttackRunAway,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatPhase {
    NotStarted,
    Fighting(RoundState),
    RunAway(RunAwayState),
    Finished,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatEvent {
    /// Combat left `NotStarted`.
    Started { run_away: bool },
    /// The character abandoned an ongoing fight.
    RunAwayStarted,
    TurnOrder { first: Side, second: Side },
    Damage {
        attacker: Side,
        target: Side,
        amount: i32,
        remaining_life: i32,
    },
    RoundAdvanced { round: u32 },
    Escaped,
    Finished { winner: Option<Side> },
}

/// One fight between the character and an enemy.
///
/// The combat owns the enemy; the character is lent to each call.
#[derive(Clone, Debug, PartialEq)]
pub struct Combat {
    enemy: Enemy,
    phase: CombatPhase,
    round: u32,
    order: Option<(Side, Side)>,
    used_melee: bool,
    escaped: bool,
}

impl Combat {
    pub fn new(enemy: Enemy) -> Self {
        Self {
            enemy,
            phase: CombatPhase::NotStarted,
            round: 0,
            order: None,
            used_melee: false,
            escaped: false,
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn enemy(&self) -> &Enemy {
        &self.enemy
    }

    pub fn enemy_mut(&mut self) -> &mut Enemy {
        &mut self.enemy
    }

    pub fn phase(&self) -> CombatPhase {
        self.phase
    }

    pub fn combat_state(&self) -> CombatState {
        match self.phase {
            CombatPhase::NotStarted => CombatState::NotStarted,
            CombatPhase::Fighting(_) => CombatState::Fighting,
            CombatPhase::RunAway(_) => CombatState::RunAway,
            CombatPhase::Finished => CombatState::Finished,
        }
    }

    pub fn round_state(&self) -> Option<RoundState> {
        match self.phase {
            CombatPhase::Fighting(state) => Some(state),
            _ => None,
        }
    }

    pub fn run_away_state(&self) -> Option<RunAwayState> {
        match self.phase {
            CombatPhase::RunAway(state) => Some(state),
            _ => None,
        }
    }

    /// Current round, starting at 1 once combat has started.
    pub fn round(&self) -> u32 {
        self.round
    }

    /// `(first, second)` for the current round, once initiative is rolled.
    pub fn turn_order(&self) -> Option<(Side, Side)> {
        self.order
    }

    /// The side owning the active sub-state.
    pub fn current_turn(&self) -> Option<Side> {
        match (self.phase, self.order) {
            (CombatPhase::Fighting(RoundState::FirstTurn), Some((first, _))) => Some(first),
            (CombatPhase::Fighting(RoundState::SecondTurn), Some((_, second))) => Some(second),
            (CombatPhase::RunAway(_), _) => Some(Side::Enemy),
            _ => None,
        }
    }

    /// True once the character has hit the enemy in melee during this fight.
    pub fn used_melee(&self) -> bool {
        self.used_melee
    }

    /// True if combat finished by a successful flight.
    pub fn escaped(&self) -> bool {
        self.escaped
    }

    pub fn is_finished(&self) -> bool {
        self.phase == CombatPhase::Finished
    }

    /// Character wins iff alive with the enemy down, and vice versa.
    /// Both alive or both down yields `None`.
    pub fn winner<C: Combatant + ?Sized>(&self, character: &C) -> Option<Side> {
        match (character.is_defeated(), self.enemy.is_defeated()) {
            (false, true) => Some(Side::Character),
            (true, false) => Some(Side::Enemy),
            _ => None,
        }
    }

    // ========================================================================
    // Transitions
    // ========================================================================

    /// Leaves `NotStarted`. With `get_away` the enemy gets one free attack
    /// before the character escapes.
    pub fn start<C: Combatant + ?Sized>(&mut self, character: &C, get_away: bool) -> CombatEvents {
        let mut events = CombatEvents::new();
        if self.finish_if_down(character, &mut events) || self.phase != CombatPhase::NotStarted {
            return events;
        }

        self.round = 1;
        self.phase = if get_away {
            CombatPhase::RunAway(RunAwayState::BeforeAttackRunAway)
        } else {
            CombatPhase::Fighting(RoundState::RollingInitiative)
        };
        events.push(CombatEvent::Started { run_away: get_away });
        events
    }

    /// Assigns turn order. The character acts first on ties.
    pub fn apply_initiative_roll<C: Combatant + ?Sized>(
        &mut self,
        character: &C,
        character_roll: i32,
        enemy_roll: i32,
    ) -> CombatEvents {
        let mut events = CombatEvents::new();
        if self.finish_if_down(character, &mut events)
            || self.phase != CombatPhase::Fighting(RoundState::RollingInitiative)
        {
            return events;
        }

        let first = if character_roll >= enemy_roll {
            Side::Character
        } else {
            Side::Enemy
        };
        let second = first.opponent();
        self.order = Some((first, second));
        self.phase = CombatPhase::Fighting(RoundState::FirstTurn);
        events.push(CombatEvent::TurnOrder { first, second });
        events
    }

    /// Resolves the active turn's attack against the other side.
    ///
    /// During `BeforeAttackRunAway` the attack is the enemy's free hit on the
    /// character.
    pub fn apply_attack_roll<C: Combatant + ?Sized>(
        &mut self,
        character: &mut C,
        attack: i32,
        defense: i32,
        damage_multiplier: f32,
        is_melee: bool,
    ) -> CombatEvents {
        let mut events = CombatEvents::new();
        if self.finish_if_down(character, &mut events) {
            return events;
        }
        let Some(attacker) = self.attacker() else {
            return events;
        };

        let amount = calculate_damage(attack, defense, damage_multiplier);
        let target = attacker.opponent();
        let remaining_life = match target {
            Side::Character => {
                character.apply_damage(amount);
                character.current_life()
            }
            Side::Enemy => {
                self.enemy.apply_damage(amount);
                self.enemy.current_life()
            }
        };
        if is_melee && attacker == Side::Character {
            self.used_melee = true;
        }

        events.push(CombatEvent::Damage {
            attacker,
            target,
            amount,
            remaining_life,
        });
        self.step();
        events
    }

    /// Ends the active turn without an attack (spell or item use).
    pub fn pass_turn<C: Combatant + ?Sized>(&mut self, character: &C) -> CombatEvents {
        let mut events = CombatEvents::new();
        if self.finish_if_down(character, &mut events) {
            return events;
        }
        if matches!(
            self.phase,
            CombatPhase::Fighting(RoundState::FirstTurn | RoundState::SecondTurn)
        ) {
            self.step();
        }
        events
    }

    /// Abandons the fight: the enemy gets one free attack, then the character escapes.
    pub fn try_to_run_away<C: Combatant + ?Sized>(&mut self, character: &C) -> CombatEvents {
        let mut events = CombatEvents::new();
        if self.finish_if_down(character, &mut events) {
            return events;
        }
        match self.phase {
            CombatPhase::NotStarted => return self.start(character, true),
            CombatPhase::Fighting(_) => {
                self.phase = CombatPhase::RunAway(RunAwayState::BeforeAttackRunAway);
                events.push(CombatEvent::RunAwayStarted);
            }
            CombatPhase::RunAway(_) | CombatPhase::Finished => {}
        }
        events
    }

    /// Bare transition: finish check, then close the round or complete the flight.
    pub fn advance<C: Combatant + ?Sized>(&mut self, character: &C) -> CombatEvents {
        let mut events = CombatEvents::new();
        if self.finish_if_down(character, &mut events) {
            return events;
        }
        match self.phase {
            CombatPhase::Fighting(RoundState::EndRound) => {
                self.round += 1;
                self.order = None;
                self.phase = CombatPhase::Fighting(RoundState::RollingInitiative);
                events.push(CombatEvent::RoundAdvanced { round: self.round });
            }
            CombatPhase::RunAway(RunAwayState::AfterAttackRunAway) => {
                self.escaped = true;
                self.phase = CombatPhase::Finished;
                events.push(CombatEvent::Escaped);
                events.push(CombatEvent::Finished {
                    winner: self.winner(character),
                });
            }
            _ => {}
        }
        events
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn attacker(&self) -> Option<Side> {
        match self.phase {
            CombatPhase::Fighting(RoundState::FirstTurn | RoundState::SecondTurn) => {
                self.current_turn()
            }
            CombatPhase::RunAway(RunAwayState::BeforeAttackRunAway) => Some(Side::Enemy),
            _ => None,
        }
    }

    fn step(&mut self) {
        self.phase = match self.phase {
            CombatPhase::Fighting(RoundState::FirstTurn) => {
                CombatPhase::Fighting(RoundState::SecondTurn)
            }
            CombatPhase::Fighting(RoundState::SecondTurn) => {
                CombatPhase::Fighting(RoundState::EndRound)
            }
            CombatPhase::RunAway(RunAwayState::BeforeAttackRunAway) => {
                CombatPhase::RunAway(RunAwayState::AfterAttackRunAway)
            }
            other => other,
        };
    }

    /// Moves to `Finished` if either side is down. Returns true if combat is
    /// (now or already) finished.
    fn finish_if_down<C: Combatant + ?Sized>(
        &mut self,
        character: &C,
        events: &mut CombatEvents,
    ) -> bool {
        if self.phase == CombatPhase::Finished {
            return true;
        }
        if character.is_defeated() || self.enemy.is_defeated() {
            self.phase = CombatPhase::Finished;
            events.push(CombatEvent::Finished {
                winner: self.winner(character),
            });
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::{EnemyDefinition, EnemyId};

    struct Dummy(i32);

    impl Combatant for Dummy {
        fn current_life(&self) -> i32 {
            self.0
        }

        fn apply_damage(&mut self, damage: i32) {
            if damage > 0 {
                self.0 = self.0.saturating_sub(damage).max(0);
            }
        }
    }

    fn goblin(life: i32) -> Combat {
        Combat::new(Enemy::new(EnemyDefinition::new(EnemyId(1), "Goblin", 4, 2, life)))
    }

    #[test]
    fn initiative_tie_favours_character() {
        let hero = Dummy(10);
        let mut combat = goblin(5);
        combat.start(&hero, false);

        let events = combat.apply_initiative_roll(&hero, 5, 5);

        assert_eq!(
            events.as_slice(),
            &[CombatEvent::TurnOrder {
                first: Side::Character,
                second: Side::Enemy
            }]
        );
        assert_eq!(combat.current_turn(), Some(Side::Character));
    }

    #[test]
    fn full_round_cycles_back_to_initiative() {
        let mut hero = Dummy(10);
        let mut combat = goblin(20);
        combat.start(&hero, false);
        combat.apply_initiative_roll(&hero, 1, 6);
        assert_eq!(combat.current_turn(), Some(Side::Enemy));

        combat.apply_attack_roll(&mut hero, 6, 4, 1.0, false);
        assert_eq!(hero.0, 8);
        assert_eq!(combat.round_state(), Some(RoundState::SecondTurn));

        combat.apply_attack_roll(&mut hero, 9, 3, 1.0, true);
        assert_eq!(combat.enemy().current_life(), 14);
        assert!(combat.used_melee());
        assert_eq!(combat.round_state(), Some(RoundState::EndRound));
        assert_eq!(combat.current_turn(), None);

        let events = combat.advance(&hero);
        assert_eq!(events.as_slice(), &[CombatEvent::RoundAdvanced { round: 2 }]);
        assert_eq!(combat.round_state(), Some(RoundState::RollingInitiative));
    }

    #[test]
    fn invalid_calls_are_ignored() {
        let mut hero = Dummy(10);
        let mut combat = goblin(5);

        assert!(combat.apply_initiative_roll(&hero, 3, 1).is_empty());
        assert!(combat.apply_attack_roll(&mut hero, 9, 0, 1.0, true).is_empty());
        assert_eq!(combat.phase(), CombatPhase::NotStarted);

        combat.start(&hero, false);
        assert!(combat.apply_attack_roll(&mut hero, 9, 0, 1.0, true).is_empty());
        assert!(combat.advance(&hero).is_empty());
        assert!(combat.start(&hero, true).is_empty());
        assert_eq!(combat.round_state(), Some(RoundState::RollingInitiative));
        assert_eq!(combat.enemy().current_life(), 5);
    }

    #[test]
    fn finish_check_dominates_any_sub_state() {
        let mut hero = Dummy(10);
        let mut combat = goblin(5);
        combat.start(&hero, false);
        combat.apply_initiative_roll(&hero, 6, 1);
        combat.enemy_mut().apply_damage(5);

        let events = combat.apply_attack_roll(&mut hero, 9, 0, 1.0, true);

        assert_eq!(
            events.as_slice(),
            &[CombatEvent::Finished {
                winner: Some(Side::Character)
            }]
        );
        assert!(combat.is_finished());
        assert!(!combat.used_melee());
        assert!(combat.advance(&hero).is_empty());
    }

    #[test]
    fn run_away_gives_enemy_a_free_attack() {
        let mut hero = Dummy(10);
        let mut combat = goblin(5);
        combat.start(&hero, false);
        combat.apply_initiative_roll(&hero, 6, 1);

        let events = combat.try_to_run_away(&hero);
        assert_eq!(events.as_slice(), &[CombatEvent::RunAwayStarted]);
        assert_eq!(combat.current_turn(), Some(Side::Enemy));

        combat.apply_attack_roll(&mut hero, 7, 4, 1.0, false);
        assert_eq!(hero.0, 7);
        assert_eq!(
            combat.run_away_state(),
            Some(RunAwayState::AfterAttackRunAway)
        );

        let events = combat.advance(&hero);
        assert_eq!(
            events.as_slice(),
            &[CombatEvent::Escaped, CombatEvent::Finished { winner: None }]
        );
        assert!(combat.escaped());
    }

    #[test]
    fn double_knockout_has_no_winner() {
        let hero = Dummy(0);
        let mut combat = goblin(5);
        combat.enemy_mut().apply_damage(5);

        assert_eq!(combat.winner(&hero), None);
        let events = combat.start(&hero, false);
        assert_eq!(events.as_slice(), &[CombatEvent::Finished { winner: None }]);
    }

    #[test]
    fn pass_turn_skips_without_damage() {
        let hero = Dummy(10);
        let mut combat = goblin(5);
        combat.start(&hero, false);
        combat.apply_initiative_roll(&hero, 2, 1);

        assert!(combat.pass_turn(&hero).is_empty());
        assert_eq!(combat.current_turn(), Some(Side::Enemy));
        combat.pass_turn(&hero);
        assert_eq!(combat.round_state(), Some(RoundState::EndRound));
        combat.pass_turn(&hero);
        assert_eq!(combat.round_state(), Some(RoundState::EndRound));
    }
}

//! Full play-throughs of a small adventure: narrative choices, item and spell
//! gates, checks, fights, flight, persistence and collaborator wiring.

use std::sync::Arc;

use gamebook_core::{
    Attributes, Character, ChoiceOption, CombatEvent, CombatState, ContentTables, Difficulty,
    EnemyDefinition, EnemyId, EquipError, EquipPosition, EquipSlots, EquipableData, GameConfig,
    GameContent, Item, ItemId, ItemKind, ItemUseOption, LocalizedText, NarrativeGraph, Place,
    PlaceId, PlaceKind, PlayerActionId, RecoveryEffect, ResourceDelta, Side, SkillId, Skills,
    Spell, SpellError, SpellId, SpellKind, SpellUseOption,
};
use gamebook_runtime::{
    ChannelActionTracker, FileStoredGameRepo, GameEvent, GameSession, InMemoryActionTracker,
    InMemoryStoredGameRepo, RepositoryError, RuntimeConfig, RuntimeError, StoredGameRepository,
    Topic,
};

// ============================================================================
// Fixtures
// ============================================================================

const KEY: ItemId = ItemId(1);
const POTION: ItemId = ItemId(2);
const SWORD: ItemId = ItemId(3);

const LIGHT: SpellId = SpellId(10);
const FIREBALL: SpellId = SpellId(11);
const HEAL: SpellId = SpellId(12);

const WOLF: EnemyId = EnemyId(1);

const CROSSROADS: PlaceId = PlaceId(1);
const GATE: PlaceId = PlaceId(2);
const COURTYARD: PlaceId = PlaceId(3);
const SENTRY: PlaceId = PlaceId(4);
const DARK_HALL: PlaceId = PlaceId(5);
const TREASURY: PlaceId = PlaceId(6);
const DEN: PlaceId = PlaceId(20);
const GRAVE: PlaceId = PlaceId(99);

fn items() -> Vec<Item> {
    vec![
        Item::simple(KEY, "Iron key"),
        Item::new(
            POTION,
            "Healing draught",
            ItemKind::Usable(RecoveryEffect::new(ResourceDelta::life(4))),
        ),
        Item::new(
            SWORD,
            "Sword",
            ItemKind::Equipable(EquipableData {
                attack: 2,
                slots: EquipSlots::HANDS,
                ..EquipableData::default()
            }),
        ),
    ]
}

fn spells() -> Vec<Spell> {
    vec![
        Spell::new(LIGHT, "Light", 2, SpellKind::Informational),
        Spell::new(
            FIREBALL,
            "Fireball",
            3,
            SpellKind::Attack {
                damage_multiplier: 2.0,
            },
        )
        .castable(true, false),
        Spell::new(
            SpellId::SHIELD,
            "Shield",
            2,
            SpellKind::EnhanceCombatStats {
                attack: 0,
                defense: 3,
                magic: 0,
            },
        ),
        Spell::new(HEAL, "Heal", 2, SpellKind::Heal(ResourceDelta::life(5))),
    ]
}

fn places() -> Vec<Place> {
    vec![
        Place::new(
            CROSSROADS,
            LocalizedText::new("You stand at a crossroads.")
                .with_translation("de", "Du stehst an einer Kreuzung."),
            PlaceKind::OptionChoose {
                options: vec![
                    ChoiceOption {
                        text: "Walk to the gate".into(),
                        target: GATE,
                    },
                    ChoiceOption {
                        text: "Enter the wolf den".into(),
                        target: DEN,
                    },
                ],
            },
        )
        .with_items([KEY])
        .with_actions([PlayerActionId::new("began_adventure")]),
        Place::new(
            GATE,
            "A locked gate.",
            PlaceKind::ItemUse {
                options: vec![ItemUseOption {
                    item: KEY,
                    target: COURTYARD,
                    spent: true,
                }],
                fallback: CROSSROADS,
            },
        ),
        Place::new(
            COURTYARD,
            "The gate scrapes your arm as it opens.",
            PlaceKind::Effect {
                effects: vec![ResourceDelta::life(-3)],
                next: SENTRY,
            },
        )
        .with_items([POTION])
        .with_actions([PlayerActionId::new("opened_gate")]),
        Place::new(
            SENTRY,
            "A sentry dozes by the door.",
            PlaceKind::SkillCheck {
                skill: SkillId::Stealth,
                difficulty: Difficulty(9),
                pass: DARK_HALL,
                fail: DEN,
            },
        ),
        Place::new(
            DARK_HALL,
            "It is pitch black.",
            PlaceKind::SpellUse {
                options: vec![SpellUseOption {
                    spell: LIGHT,
                    target: TREASURY,
                }],
                fallback: TREASURY,
            },
        ),
        Place::new(
            TREASURY,
            "Gold everywhere.",
            PlaceKind::EndAdventure { player_dead: false },
        ),
        Place::new(
            DEN,
            "A wolf bares its teeth.",
            PlaceKind::Combat {
                enemy: WOLF,
                win: TREASURY,
                lose: GRAVE,
                run_away: CROSSROADS,
            },
        ),
        Place::new(
            GRAVE,
            "Your adventure ends here.",
            PlaceKind::EndAdventure { player_dead: true },
        ),
    ]
}

fn content() -> Arc<GameContent> {
    let tables = ContentTables::new()
        .with_items(items())
        .and_then(|tables| tables.with_spells(spells()))
        .and_then(|tables| {
            tables.with_enemies([EnemyDefinition::new(WOLF, "Wolf", 3, 2, 4)])
        })
        .expect("fixture tables have unique ids");
    let graph = NarrativeGraph::new(places()).expect("fixture places have unique ids");
    Arc::new(GameContent::new(GameConfig::default(), tables, graph))
}

/// Fighting 4, Stealth 3, Magic 3; life 14, power 8.
fn hero() -> Character {
    Character::builder("Aria")
        .attributes(Attributes::new(2, 3, 4, 3))
        .skills(Skills::new(4, 2, 3, 3, 2))
        .build()
        .expect("fixture character is valid")
}

fn session(character: Character) -> GameSession {
    GameSession::builder()
        .content(content())
        .character(character)
        .start_at(CROSSROADS)
        .build()
        .expect("session should start")
}

fn drain(rx: &mut tokio::sync::broadcast::Receiver<GameEvent>) -> Vec<GameEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

// ============================================================================
// Narrative
// ============================================================================

#[test]
fn new_adventure_applies_arrival_effects_of_the_first_place() {
    let tracker = Arc::new(InMemoryActionTracker::new());
    let mut session = GameSession::builder()
        .content(content())
        .character(hero())
        .shared_tracker(tracker.clone())
        .build()
        .expect("session should start at the lowest place id");

    assert_eq!(session.place_id(), CROSSROADS);
    assert!(session.character().owns(KEY));
    assert_eq!(session.pending_items(), 1);
    assert_eq!(session.score(), GameConfig::DEFAULT_PLACE_SCORE);
    assert!(tracker.contains(&PlayerActionId::new("began_adventure")));

    assert_eq!(session.acknowledge_items(), 1);
    assert_eq!(session.pending_items(), 0);
}

#[test]
fn key_gate_effect_check_and_spell_lead_to_the_treasury() {
    let tracker = Arc::new(InMemoryActionTracker::new());
    let mut session = GameSession::builder()
        .content(content())
        .character(hero())
        .shared_tracker(tracker.clone())
        .start_at(CROSSROADS)
        .build()
        .unwrap();
    let mut narrative = session.subscribe(Topic::Narrative);

    session.choose(0).unwrap().expect("gate option exists");
    assert_eq!(session.place_id(), GATE);

    let report = session.use_item_here(KEY).unwrap().expect("key opens the gate");
    assert_eq!(report.spent_item, Some(KEY));
    assert_eq!(report.granted_items, vec![POTION]);
    assert!(!session.character().owns(KEY));
    assert_eq!(session.character().current_life(), 11);
    assert_eq!(session.pending_items(), 2);
    assert!(tracker.contains(&PlayerActionId::new("opened_gate")));

    assert_eq!(
        drain(&mut narrative),
        vec![
            GameEvent::PlaceEntered {
                place: GATE,
                score: 2
            },
            GameEvent::PlaceEntered {
                place: COURTYARD,
                score: 3
            },
            GameEvent::ItemsGranted {
                items: vec![POTION],
                pending: 2
            },
        ]
    );

    // Items are not accepted at an effect place.
    assert!(session.use_item_here(POTION).unwrap().is_none());
    session.continue_on().unwrap().expect("effect place has a next place");
    assert_eq!(session.place_id(), SENTRY);

    let check = session.resolve_check(6).unwrap().expect("sentry is a check");
    assert!(check.outcome.passed);
    assert_eq!(check.outcome.total, 3);
    assert_eq!(session.place_id(), DARK_HALL);

    session.learn_spell(LIGHT).unwrap();
    let report = session.cast_here(LIGHT).unwrap().expect("light is accepted");
    assert_eq!(report.entered, TREASURY);
    assert_eq!(session.character().current_power(), 6);
    assert!(tracker.contains(&PlayerActionId::cast_spell(LIGHT)));
    assert!(session.is_over());
    assert!(session.character().is_alive());
}

#[test]
fn failed_check_and_declined_gate_follow_their_targets() {
    let mut session = session(hero());
    session.choose(0).unwrap();
    session.decline().unwrap().expect("gate has a fallback");
    assert_eq!(session.place_id(), CROSSROADS);

    session.choose(0).unwrap();
    session.use_item_here(KEY).unwrap();
    session.continue_on().unwrap();
    let check = session.resolve_check(5).unwrap().unwrap();
    assert!(!check.outcome.passed);
    assert_eq!(session.place_id(), DEN);
    assert!(session.combat().is_some());
}

#[test]
fn intents_that_do_not_apply_change_nothing() {
    let mut session = session(hero());
    let before = session.character().snapshot();

    assert!(session.choose(7).unwrap().is_none());
    assert!(session.continue_on().unwrap().is_none());
    assert!(session.resolve_check(20).unwrap().is_none());
    assert!(session.use_item_here(KEY).unwrap().is_none());
    assert!(session.cast_here(LIGHT).unwrap().is_none());
    assert!(session.decline().unwrap().is_none());
    assert!(session.fight().unwrap().is_empty());
    assert!(session.attack(5, 5).unwrap().is_empty());
    assert!(session.flee().unwrap().is_empty());

    assert_eq!(session.place_id(), CROSSROADS);
    assert_eq!(session.character().snapshot(), before);

    // At the den, attacking before the fight has started is ignored too.
    session.choose(1).unwrap();
    assert!(session.attack(3, 3).unwrap().is_empty());
    assert!(session.roll_initiative(3, 3).unwrap().is_empty());
    assert_eq!(
        session.combat().map(|combat| combat.combat_state()),
        Some(CombatState::NotStarted)
    );
}

#[test]
fn place_text_follows_the_configured_locale() {
    let session = GameSession::builder()
        .content(content())
        .character(hero())
        .config(RuntimeConfig {
            game_config: GameConfig::new().with_locale("de"),
            ..RuntimeConfig::default()
        })
        .build()
        .unwrap();
    assert_eq!(session.place_text().unwrap(), "Du stehst an einer Kreuzung.");
}

// ============================================================================
// Combat
// ============================================================================

#[test]
fn winning_a_fight_scores_and_moves_to_the_win_target() {
    let mut session = session(hero());
    session.choose(1).unwrap();
    assert_eq!(session.place_id(), DEN);
    let mut combat_events = session.subscribe(Topic::Combat);

    let turn = session.fight().unwrap();
    assert_eq!(turn.events, vec![CombatEvent::Started { run_away: false }]);

    let turn = session.roll_initiative(5, 5).unwrap();
    assert_eq!(
        turn.events,
        vec![CombatEvent::TurnOrder {
            first: Side::Character,
            second: Side::Enemy
        }]
    );

    // Attack 4 + 4 against defense 2 + 0.
    let turn = session.attack(4, 0).unwrap();
    assert_eq!(
        turn.events,
        vec![
            CombatEvent::Damage {
                attacker: Side::Character,
                target: Side::Enemy,
                amount: 6,
                remaining_life: 0,
            },
            CombatEvent::Finished {
                winner: Some(Side::Character)
            },
        ]
    );
    let ended = turn.ended.expect("the wolf is down");
    assert_eq!(ended.winner, Some(Side::Character));
    assert!(ended.used_melee);
    assert!(!ended.escaped);
    assert_eq!(ended.report.entered, TREASURY);

    assert!(session.combat().is_none());
    assert_eq!(session.place_id(), TREASURY);
    // Three places entered plus the victory.
    assert_eq!(
        session.score(),
        3 * GameConfig::DEFAULT_PLACE_SCORE + GameConfig::DEFAULT_VICTORY_SCORE
    );

    let published = drain(&mut combat_events);
    assert_eq!(
        published.first(),
        Some(&GameEvent::CombatStarted {
            enemy: WOLF,
            run_away: false
        })
    );
    assert_eq!(
        published.last(),
        Some(&GameEvent::CombatEnded {
            winner: Some(Side::Character),
            escaped: false,
            used_melee: true
        })
    );
}

#[test]
fn losing_a_fight_kills_the_character() {
    let mut session = session(hero());
    let mut character_events = session.subscribe(Topic::Character);
    session.choose(1).unwrap();
    session.fight().unwrap();
    session.roll_initiative(1, 6).unwrap();

    // Enemy first: attack 3 + 20 against defense 4 + 0.
    let turn = session.attack(20, 0).unwrap();
    let ended = turn.ended.expect("the character is down");
    assert_eq!(ended.winner, Some(Side::Enemy));
    assert_eq!(session.place_id(), GRAVE);
    assert!(ended.report.character_dead);
    assert!(session.is_over());
    assert_eq!(session.score(), 3 * GameConfig::DEFAULT_PLACE_SCORE);

    assert_eq!(
        drain(&mut character_events),
        vec![GameEvent::CharacterDied { place: GRAVE }]
    );
}

#[test]
fn fleeing_gives_the_enemy_one_free_attack_then_escapes() {
    let mut session = session(hero());
    session.choose(1).unwrap();

    let turn = session.flee().unwrap();
    assert_eq!(turn.events, vec![CombatEvent::Started { run_away: true }]);
    assert_eq!(
        session.combat().and_then(|combat| combat.current_turn()),
        Some(Side::Enemy)
    );

    // Attack 3 + 2 against defense 4 + 1 does no damage.
    let turn = session.attack(2, 1).unwrap();
    assert_eq!(
        turn.events,
        vec![
            CombatEvent::Damage {
                attacker: Side::Enemy,
                target: Side::Character,
                amount: 0,
                remaining_life: 14,
            },
            CombatEvent::Escaped,
            CombatEvent::Finished { winner: None },
        ]
    );
    let ended = turn.ended.expect("flight completes");
    assert!(ended.escaped);
    assert_eq!(session.place_id(), CROSSROADS);
    assert_eq!(session.character().current_life(), 14);
}

#[test]
fn combat_spells_enhance_strike_and_expire_on_leaving() {
    let mut session = session(hero());
    session.learn_spell(SpellId::SHIELD).unwrap();
    session.learn_spell(FIREBALL).unwrap();
    assert!(matches!(
        session.cast_spell(FIREBALL),
        Err(RuntimeError::Spell(SpellError::NotCastableHere(FIREBALL)))
    ));

    let mut character_events = session.subscribe(Topic::Character);
    session.choose(1).unwrap();
    session.fight().unwrap();
    session.roll_initiative(6, 1).unwrap();

    session.cast_in_combat(SpellId::SHIELD, 0, 0).unwrap();
    assert!(session.character().is_spell_active(SpellId::SHIELD));
    assert_eq!(session.character().total_defense(), 7);
    assert_eq!(session.character().current_power(), 6);

    // Not the character's turn: ignored and free.
    assert!(session.cast_in_combat(FIREBALL, 9, 0).unwrap().is_empty());
    assert_eq!(session.character().current_power(), 6);

    // Attack 3 + 3 against the shielded defense 7 + 0.
    let turn = session.attack(3, 0).unwrap();
    assert_eq!(turn.events.last(), Some(&CombatEvent::RoundAdvanced { round: 2 }));
    assert_eq!(session.character().current_life(), 14);

    session.roll_initiative(6, 1).unwrap();
    // Magic 3 + 0 against the wolf's magic 0, doubled.
    let turn = session.cast_in_combat(FIREBALL, 0, 0).unwrap();
    let ended = turn.ended.expect("fireball kills the wolf");
    assert_eq!(ended.winner, Some(Side::Character));
    assert!(!ended.used_melee);
    assert_eq!(ended.report.removed_spells, vec![SpellId::SHIELD]);
    assert!(!session.character().is_spell_active(SpellId::SHIELD));
    assert_eq!(session.character().current_power(), 3);

    assert_eq!(
        drain(&mut character_events),
        vec![GameEvent::SpellsExpired {
            spells: vec![SpellId::SHIELD]
        }]
    );
}

#[test]
fn using_an_item_in_combat_spends_the_turn() {
    let mut character = hero();
    character.add_item(items().remove(1));
    character.add_item(items().remove(1));
    character.set_current_life(5);
    let mut session = session(character);
    session.choose(1).unwrap();
    session.fight().unwrap();
    session.roll_initiative(6, 1).unwrap();

    let index = session.character().backpack().position(POTION).unwrap();
    let used = session.use_item(index).unwrap().expect("potion is usable");
    assert_eq!(used.id, POTION);
    assert_eq!(session.character().current_life(), 9);
    assert_eq!(
        session.combat().and_then(|combat| combat.current_turn()),
        Some(Side::Enemy)
    );

    // The enemy acts now, so the second potion stays in the backpack.
    let index = session.character().backpack().position(POTION).unwrap();
    assert!(session.use_item(index).unwrap().is_none());
    assert!(session.character().owns(POTION));
    assert_eq!(session.character().current_life(), 9);
    assert_eq!(
        session.combat().and_then(|combat| combat.current_turn()),
        Some(Side::Enemy)
    );
}

#[test]
fn items_cannot_be_used_while_running_away() {
    let mut character = hero();
    character.add_item(items().remove(1));
    character.set_current_life(5);
    let mut session = session(character);
    session.choose(1).unwrap();
    session.flee().unwrap();

    let index = session.character().backpack().position(POTION).unwrap();
    assert!(session.use_item(index).unwrap().is_none());
    assert!(session.character().owns(POTION));
    assert_eq!(session.character().current_life(), 5);
    assert_eq!(
        session.combat().map(|combat| combat.combat_state()),
        Some(CombatState::RunAway)
    );
    assert_eq!(
        session.combat().and_then(|combat| combat.current_turn()),
        Some(Side::Enemy)
    );
}

#[test]
fn items_can_be_used_before_the_fight_starts() {
    let mut character = hero();
    character.add_item(items().remove(1));
    character.set_current_life(5);
    let mut session = session(character);
    session.choose(1).unwrap();

    let index = session.character().backpack().position(POTION).unwrap();
    let used = session.use_item(index).unwrap().expect("no fight is running yet");
    assert_eq!(used.id, POTION);
    assert_eq!(session.character().current_life(), 9);
    assert_eq!(
        session.combat().map(|combat| combat.combat_state()),
        Some(CombatState::NotStarted)
    );
}

#[test]
fn spells_need_enough_power() {
    let mut character = hero();
    character.set_current_power(1);
    let mut session = session(character);
    session.learn_spell(HEAL).unwrap();

    assert!(matches!(
        session.cast_spell(HEAL),
        Err(RuntimeError::Spell(SpellError::NotEnoughPower {
            cost: 2,
            available: 1,
            ..
        }))
    ));
    assert_eq!(session.character().current_power(), 1);
}

// ============================================================================
// Inventory
// ============================================================================

#[test]
fn equip_and_unequip_move_items_between_backpack_and_equipment() {
    let mut character = hero();
    character.add_item(items().remove(2));
    let mut session = session(character);

    let index = session.character().backpack().position(SWORD).unwrap();
    session.equip(index, EquipPosition::MainHand).unwrap();
    assert_eq!(session.character().total_attack(), 6);
    assert!(!session.character().backpack().contains(SWORD));

    let index = session.character().backpack().position(KEY).unwrap();
    let err = session.equip(index, EquipPosition::Head).unwrap_err();
    assert!(matches!(err, RuntimeError::Equip(EquipError::NotEquipable(KEY))));
    assert!(session.character().backpack().contains(KEY));

    assert!(session.unequip(EquipPosition::MainHand));
    assert!(!session.unequip(EquipPosition::MainHand));
    assert!(session.character().backpack().contains(SWORD));
    assert_eq!(session.character().total_attack(), 4);
}

// ============================================================================
// Persistence & collaborators
// ============================================================================

#[test]
fn stored_games_round_trip_through_both_repositories() {
    let mut session = session(hero());
    session.choose(0).unwrap();
    session.use_item_here(KEY).unwrap();
    let stored = session.stored_game();
    assert_eq!(stored.place, COURTYARD);
    assert_eq!(stored.pending_items, 2);

    let memory = InMemoryStoredGameRepo::new();
    memory.save("autosave", &stored).unwrap();
    assert!(memory.exists("autosave"));
    assert_eq!(memory.load("autosave").unwrap(), Some(stored.clone()));

    let dir = tempfile::tempdir().unwrap();
    let files = FileStoredGameRepo::new(dir.path()).unwrap();
    session.save(&files, "autosave").unwrap();
    assert_eq!(files.list_slots().unwrap(), vec!["autosave".to_owned()]);
    let loaded = files.load("autosave").unwrap().expect("slot was written");
    assert_eq!(loaded, stored);
    for bad in ["../escape", "", "two words"] {
        assert!(matches!(
            files.save(bad, &stored),
            Err(RepositoryError::InvalidSlot(_))
        ));
        assert!(matches!(
            memory.save(bad, &stored),
            Err(RepositoryError::InvalidSlot(_))
        ));
        assert!(matches!(memory.load(bad), Err(RepositoryError::InvalidSlot(_))));
        assert!(!memory.exists(bad));
    }
    assert_eq!(memory.list_slots().unwrap(), vec!["autosave".to_owned()]);

    let restored = GameSession::restore(content(), loaded).unwrap();
    assert_eq!(restored.place_id(), COURTYARD);
    assert_eq!(restored.score(), session.score());
    assert_eq!(restored.pending_items(), 2);
    assert_eq!(restored.character().stats(), session.character().stats());
    // Arrival effects are not replayed.
    assert_eq!(restored.character().current_life(), 11);

    files.delete("autosave").unwrap();
    assert!(!files.exists("autosave"));
}

#[test]
fn restoring_at_a_combat_place_starts_the_fight_over() {
    let mut session = session(hero());
    session.choose(1).unwrap();
    session.fight().unwrap();
    session.roll_initiative(6, 1).unwrap();

    let restored = GameSession::restore(content(), session.stored_game()).unwrap();
    assert_eq!(
        restored.combat().map(|combat| combat.combat_state()),
        Some(CombatState::NotStarted)
    );
}

#[test]
fn builder_reports_missing_pieces() {
    assert!(matches!(
        GameSession::builder().build(),
        Err(RuntimeError::MissingContent)
    ));
    assert!(matches!(
        GameSession::builder().content(content()).build(),
        Err(RuntimeError::MissingCharacter)
    ));
    assert!(matches!(
        GameSession::builder()
            .content(content())
            .character(hero())
            .start_at(PlaceId(500))
            .build(),
        Err(RuntimeError::PlaceNotFound(PlaceId(500)))
    ));
}

#[tokio::test]
async fn channel_tracker_delivers_actions_in_emission_order() {
    let (tracker, mut rx) = ChannelActionTracker::new();
    let mut session = GameSession::builder()
        .content(content())
        .character(hero())
        .tracker(tracker)
        .build()
        .unwrap();
    session.choose(0).unwrap();
    session.use_item_here(KEY).unwrap();

    assert_eq!(rx.recv().await.unwrap().as_str(), "began_adventure");
    assert_eq!(rx.recv().await.unwrap().as_str(), "opened_gate");
}

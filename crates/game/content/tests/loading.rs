use std::fs;
use std::path::Path;

use gamebook_content::ContentFactory;
use gamebook_core::{
    EnemyId, EnemyOracle, EquipPosition, ItemId, ItemOracle, PlaceId, PlaceKind, SpellId,
    SpellKind, SpellOracle,
};
use tempfile::TempDir;

const ITEMS: &str = r#"(
    items: [
        (id: 1, name: (text: "Rusty key"), kind: Simple),
        (
            id: 2,
            name: (text: "Short sword", translations: {"es": "Espada corta"}),
            kind: Equipable((attack: 2, slots: "MAIN_HAND | OFF_HAND")),
        ),
        (id: 3, name: (text: "Healing draught"), kind: Usable((restore: (life: 5)))),
    ],
)"#;

const SPELLS: &str = r#"(
    spells: [
        (
            id: 2,
            name: (text: "Shield"),
            min_magic: 1,
            cost: 2,
            combat: true,
            adventure: false,
            kind: EnhanceCombatStats(attack: 0, defense: 2, magic: 0),
        ),
        (
            id: 10,
            name: (text: "Fireball"),
            min_magic: 3,
            cost: 3,
            combat: true,
            adventure: false,
            kind: Attack(damage_multiplier: 1.5),
        ),
        (
            id: 11,
            name: (text: "Mend"),
            min_magic: 1,
            cost: 2,
            combat: true,
            adventure: true,
            kind: Heal((life: 4)),
        ),
    ],
)"#;

const ENEMIES: &str = r#"(
    enemies: [
        (id: 1, name: (text: "Bandit"), attack: 5, defense: 2, magic: 1, initiative: 3, life: 8),
    ],
)"#;

const PLACES: &str = r#"(
    places: [
        (
            id: 1,
            text: (text: "A crossroads."),
            kind: OptionChoose(options: [
                (text: (text: "North"), target: 2),
                (text: (text: "East"), target: 3),
            ]),
        ),
        (
            id: 2,
            text: (text: "A locked gate."),
            kind: ItemUse(options: [(item: 1, target: 4, spent: true)], fallback: 1),
        ),
        (
            id: 3,
            text: (text: "Bandits!"),
            kind: Combat(enemy: 1, win: 4, lose: 5, run_away: 1),
        ),
        (
            id: 4,
            text: (text: "Treasure."),
            items: [3],
            actions: ["found_treasure"],
            kind: EndAdventure(player_dead: false),
        ),
        (id: 5, text: (text: "You fall."), kind: EndAdventure(player_dead: true)),
    ],
)"#;

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).expect("write fixture file");
}

fn data_dir() -> TempDir {
    let dir = tempfile::tempdir().expect("create temp dir");
    write(dir.path(), "items.ron", ITEMS);
    write(dir.path(), "spells.ron", SPELLS);
    write(dir.path(), "enemies.ron", ENEMIES);
    write(dir.path(), "places.ron", PLACES);
    write(dir.path(), "config.toml", "victory_score = 50\nlocale = \"es\"\n");
    dir
}

#[test]
fn loads_a_complete_data_directory() {
    let dir = data_dir();

    let content = ContentFactory::new(dir.path()).load().expect("content loads");

    assert_eq!(content.config.victory_score, 50);
    assert_eq!(content.config.locale.as_deref(), Some("es"));
    assert_eq!(content.graph.len(), 5);

    let sword = content.item(ItemId(2)).expect("sword is loaded");
    assert_eq!(sword.name.resolve(Some("es")), "Espada corta");
    let data = sword.equipable().expect("sword is equipable");
    assert!(data.slots.allows(EquipPosition::OffHand));
    assert!(!data.slots.allows(EquipPosition::Head));

    assert!(matches!(
        content.spell(SpellId(10)).map(|s| &s.kind),
        Some(SpellKind::Attack { .. })
    ));
    assert_eq!(content.enemy(EnemyId(1)).map(|e| e.life), Some(8));

    let treasure = content.graph.place(PlaceId(4)).expect("place 4 exists");
    assert_eq!(treasure.items, vec![ItemId(3)]);
    assert_eq!(treasure.actions[0].as_str(), "found_treasure");
    assert!(matches!(
        content.graph.place(PlaceId(3)).map(|p| &p.kind),
        Some(PlaceKind::Combat { .. })
    ));
}

#[test]
fn missing_config_falls_back_to_defaults() {
    let dir = data_dir();
    fs::remove_file(dir.path().join("config.toml")).unwrap();

    let content = ContentFactory::new(dir.path()).load().expect("content loads");

    assert_eq!(content.config, gamebook_core::GameConfig::default());
}

#[test]
fn malformed_catalog_names_the_file() {
    let dir = data_dir();
    write(dir.path(), "spells.ron", "(spells: [ (id: 2, ");

    let err = ContentFactory::new(dir.path()).load().unwrap_err();

    assert!(err.to_string().contains("spells.ron"), "{err}");
}

#[test]
fn missing_catalog_is_an_error() {
    let dir = data_dir();
    fs::remove_file(dir.path().join("enemies.ron")).unwrap();

    let err = ContentFactory::new(dir.path()).load().unwrap_err();

    assert!(err.to_string().contains("enemies.ron"), "{err}");
}

#[test]
fn duplicate_ids_are_rejected() {
    let dir = data_dir();
    write(
        dir.path(),
        "items.ron",
        r#"(items: [(id: 1, name: (text: "Key"), kind: Simple), (id: 1, name: (text: "Key"), kind: Simple)])"#,
    );

    let err = ContentFactory::new(dir.path()).load().unwrap_err();

    assert!(err.to_string().contains("more than once"), "{err}");
}

#[test]
fn broken_references_are_rejected() {
    let dir = data_dir();
    write(
        dir.path(),
        "places.ron",
        r#"(places: [(id: 1, text: (text: "Nowhere"), kind: Effect(effects: [(life: -1)], next: 99))])"#,
    );

    let err = ContentFactory::new(dir.path()).load().unwrap_err();

    let message = err.to_string();
    assert!(message.contains("broken reference"), "{message}");
    assert!(message.contains("place#99"), "{message}");
}

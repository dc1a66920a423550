#![cfg(feature = "serde")]

use gamebook_core::{Attributes, Character, CharacterSnapshot, Race, Skills};

#[test]
fn snapshot_survives_byte_encoding() {
    let hero = Character::builder("Tamsin")
        .race(Race::Halfling)
        .attributes(Attributes::new(2, 5, 3, 4))
        .skills(Skills::new(2, 3, 6, 2, 3))
        .build()
        .unwrap();
    let snapshot = hero.snapshot();

    let bytes = snapshot.encode().expect("snapshot encodes");
    let decoded = CharacterSnapshot::decode(&bytes).expect("snapshot decodes");

    assert_eq!(decoded, snapshot);
}

#[test]
fn snapshot_is_plain_json_for_inspection() {
    let hero = Character::builder("Tamsin").build().unwrap();
    let json = serde_json::to_value(hero.snapshot()).unwrap();
    assert_eq!(json["name"], "Tamsin");
    assert_eq!(json["race"], "Human");
}

//! Cross-reference checks over a loaded content bundle.

use gamebook_core::{
    EnemyId, EnemyOracle, GameContent, ItemId, ItemOracle, PlaceId, PlaceKind, SpellId,
    SpellOracle,
};

/// A reference in the content that names nothing.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ContentIssue {
    #[error("{place} leads to missing {target}")]
    DanglingTarget { place: PlaceId, target: PlaceId },

    #[error("{place} references missing {item}")]
    UnknownItem { place: PlaceId, item: ItemId },

    #[error("{place} references missing {spell}")]
    UnknownSpell { place: PlaceId, spell: SpellId },

    #[error("{place} references missing {enemy}")]
    UnknownEnemy { place: PlaceId, enemy: EnemyId },

    #[error("{enemy} casts missing {spell}")]
    UnknownEnemySpell { enemy: EnemyId, spell: SpellId },
}

/// Lists every broken reference in `content`, in place order.
pub fn validate(content: &GameContent) -> Vec<ContentIssue> {
    let mut issues: Vec<ContentIssue> = content
        .graph
        .dangling_targets()
        .into_iter()
        .map(|(place, target)| ContentIssue::DanglingTarget { place, target })
        .collect();

    for place in content.graph.iter() {
        let mut items: Vec<ItemId> = place.items.clone();
        let mut spells: Vec<SpellId> = Vec::new();
        match &place.kind {
            PlaceKind::ItemUse { options, .. } => items.extend(options.iter().map(|o| o.item)),
            PlaceKind::SpellUse { options, .. } => spells.extend(options.iter().map(|o| o.spell)),
            PlaceKind::Combat { enemy, .. } => {
                if content.enemy(*enemy).is_none() {
                    issues.push(ContentIssue::UnknownEnemy {
                        place: place.id,
                        enemy: *enemy,
                    });
                }
            }
            _ => {}
        }

        issues.extend(
            items
                .into_iter()
                .filter(|&item| content.item(item).is_none())
                .map(|item| ContentIssue::UnknownItem {
                    place: place.id,
                    item,
                }),
        );
        issues.extend(
            spells
                .into_iter()
                .filter(|&spell| content.spell(spell).is_none())
                .map(|spell| ContentIssue::UnknownSpell {
                    place: place.id,
                    spell,
                }),
        );
    }

    for enemy in content.tables.enemies() {
        issues.extend(
            enemy
                .spells
                .iter()
                .filter(|&&spell| content.spell(spell).is_none())
                .map(|&spell| ContentIssue::UnknownEnemySpell {
                    enemy: enemy.id,
                    spell,
                }),
        );
    }

    issues
}

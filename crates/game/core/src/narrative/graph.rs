//! The place graph and the side effects of moving through it.

use std::collections::BTreeMap;

use crate::character::Character;
use crate::env::ItemOracle;
use crate::error::{ErrorSeverity, GameError};
use crate::item::ItemId;
use crate::spell::SpellId;
use crate::stats::ResourceDelta;

use super::action::PlayerActionId;
use super::place::{Place, PlaceId, PlaceKind};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("{0} is defined more than once")]
    DuplicatePlace(PlaceId),
}

impl GameError for GraphError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicatePlace(_) => "GRAPH_DUPLICATE_PLACE",
        }
    }
}

/// A requested move from one place to another.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    /// `None` when entering the first place of an adventure.
    pub from: Option<PlaceId>,
    pub to: PlaceId,
    /// Item explicitly used to open this path.
    pub item: Option<ItemId>,
    /// Spell cast to open this path.
    pub spell: Option<SpellId>,
}

impl Transition {
    pub const fn new(from: PlaceId, to: PlaceId) -> Self {
        Self {
            from: Some(from),
            to,
            item: None,
            spell: None,
        }
    }

    pub const fn start(to: PlaceId) -> Self {
        Self {
            from: None,
            to,
            item: None,
            spell: None,
        }
    }

    #[must_use]
    pub const fn with_item(mut self, item: ItemId) -> Self {
        self.item = Some(item);
        self
    }

    #[must_use]
    pub const fn with_spell(mut self, spell: SpellId) -> Self {
        self.spell = Some(spell);
        self
    }
}

/// Everything a transition did to the character.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransitionReport {
    pub entered: PlaceId,
    /// Active spells that ended because their scope was left.
    pub removed_spells: Vec<SpellId>,
    pub spent_item: Option<ItemId>,
    pub granted_items: Vec<ItemId>,
    pub applied_effects: Vec<ResourceDelta>,
    /// Actions to hand to the action tracker, in order.
    pub actions: Vec<PlayerActionId>,
    /// The character has no life left after the transition.
    pub character_dead: bool,
}

/// Immutable place graph keyed by id.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NarrativeGraph {
    places: BTreeMap<PlaceId, Place>,
}

impl NarrativeGraph {
    pub fn new(places: impl IntoIterator<Item = Place>) -> Result<Self, GraphError> {
        let mut map = BTreeMap::new();
        for place in places {
            let id = place.id;
            if map.insert(id, place).is_some() {
                return Err(GraphError::DuplicatePlace(id));
            }
        }
        Ok(Self { places: map })
    }

    pub fn place(&self, id: PlaceId) -> Option<&Place> {
        self.places.get(&id)
    }

    pub fn contains(&self, id: PlaceId) -> bool {
        self.places.contains_key(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Place> {
        self.places.values()
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    /// `(source, target)` pairs whose target names no place.
    pub fn dangling_targets(&self) -> Vec<(PlaceId, PlaceId)> {
        self.places
            .values()
            .flat_map(|place| place.targets().into_iter().map(move |target| (place.id, target)))
            .filter(|(_, target)| !self.contains(*target))
            .collect()
    }

    /// Applies the side effects of moving and reports them.
    ///
    /// Returns `None`, touching nothing, if either place id is unknown.
    /// Granted item ids the oracle does not know are skipped.
    pub fn transition<I: ItemOracle + ?Sized>(
        &self,
        transition: Transition,
        character: &mut Character,
        items: &I,
    ) -> Option<TransitionReport> {
        let from = match transition.from {
            Some(id) => Some(self.place(id)?),
            None => None,
        };
        let to = self.place(transition.to)?;
        let mut report = TransitionReport {
            entered: to.id,
            ..TransitionReport::default()
        };

        if let Some(from) = from {
            if from.is_combat() {
                for id in SpellId::COMBAT_ONLY {
                    if character.remove_active_spell(id) {
                        report.removed_spells.push(id);
                    }
                }
            }
            if from.is_stealth_check() && character.remove_active_spell(SpellId::EXPERTISE) {
                report.removed_spells.push(SpellId::EXPERTISE);
            }
        }

        let spent = transition.item.or_else(|| {
            let PlaceKind::ItemUse { options, .. } = &from?.kind else {
                return None;
            };
            options
                .iter()
                .find(|option| option.target == to.id && option.spent)
                .map(|option| option.item)
        });
        if let Some(id) = spent {
            if character.remove_item(id) {
                report.spent_item = Some(id);
            }
        }

        for &id in &to.items {
            if let Some(item) = items.item(id) {
                character.add_item(item.clone());
                report.granted_items.push(id);
            }
        }

        match &to.kind {
            PlaceKind::EndAdventure { player_dead: true } => character.kill(),
            PlaceKind::Effect { effects, .. } => {
                for &effect in effects {
                    character.apply_delta(effect);
                    report.applied_effects.push(effect);
                }
            }
            _ => {}
        }

        report.actions.extend(to.actions.iter().cloned());
        if let Some(spell) = transition.spell {
            report.actions.push(PlayerActionId::cast_spell(spell));
        }

        report.character_dead = !character.is_alive();
        Some(report)
    }
}

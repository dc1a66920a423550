//! Place definitions.
//!
//! Each [`PlaceKind`] variant carries the target ids its choices lead to.
//! Choosing a target is the caller's job; [`NarrativeGraph`](super::NarrativeGraph)
//! only applies the side effects of moving.

use std::fmt;

use crate::character::Character;
use crate::combat::{EnemyId, Side};
use crate::item::ItemId;
use crate::spell::SpellId;
use crate::stats::{AttributeId, ResourceDelta, SkillId};
use crate::text::LocalizedText;

use super::action::PlayerActionId;
use super::check::{CheckOutcome, Difficulty};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PlaceId(pub u32);

impl fmt::Display for PlaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "place#{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Place {
    pub id: PlaceId,
    pub text: LocalizedText,
    /// Items granted to the character on arrival, in order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub items: Vec<ItemId>,
    /// Player actions registered on arrival, in order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub actions: Vec<PlayerActionId>,
    pub kind: PlaceKind,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlaceKind {
    OptionChoose {
        options: Vec<ChoiceOption>,
    },
    Combat {
        enemy: EnemyId,
        win: PlaceId,
        lose: PlaceId,
        run_away: PlaceId,
    },
    SkillCheck {
        skill: SkillId,
        difficulty: Difficulty,
        pass: PlaceId,
        fail: PlaceId,
    },
    AttributeCheck {
        attribute: AttributeId,
        difficulty: Difficulty,
        pass: PlaceId,
        fail: PlaceId,
    },
    ItemUse {
        options: Vec<ItemUseOption>,
        /// Where the player goes without using any item.
        fallback: PlaceId,
    },
    SpellUse {
        options: Vec<SpellUseOption>,
        /// Where the player goes without casting.
        fallback: PlaceId,
    },
    Effect {
        /// Applied in order, each clamped independently.
        effects: Vec<ResourceDelta>,
        next: PlaceId,
    },
    EndAdventure {
        player_dead: bool,
    },
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChoiceOption {
    pub text: LocalizedText,
    pub target: PlaceId,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemUseOption {
    pub item: ItemId,
    pub target: PlaceId,
    /// The item is removed from the character when this option is taken.
    #[cfg_attr(feature = "serde", serde(default))]
    pub spent: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpellUseOption {
    pub spell: SpellId,
    pub target: PlaceId,
}

impl Place {
    pub fn new(id: PlaceId, text: impl Into<LocalizedText>, kind: PlaceKind) -> Self {
        Self {
            id,
            text: text.into(),
            items: Vec::new(),
            actions: Vec::new(),
            kind,
        }
    }

    #[must_use]
    pub fn with_items(mut self, items: impl IntoIterator<Item = ItemId>) -> Self {
        self.items = items.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_actions(mut self, actions: impl IntoIterator<Item = PlayerActionId>) -> Self {
        self.actions = actions.into_iter().collect();
        self
    }

    /// Every place id this place can lead to.
    pub fn targets(&self) -> Vec<PlaceId> {
        match &self.kind {
            PlaceKind::OptionChoose { options } => options.iter().map(|o| o.target).collect(),
            PlaceKind::Combat {
                win,
                lose,
                run_away,
                ..
            } => vec![*win, *lose, *run_away],
            PlaceKind::SkillCheck { pass, fail, .. }
            | PlaceKind::AttributeCheck { pass, fail, .. } => vec![*pass, *fail],
            PlaceKind::ItemUse { options, fallback } => options
                .iter()
                .map(|o| o.target)
                .chain(std::iter::once(*fallback))
                .collect(),
            PlaceKind::SpellUse { options, fallback } => options
                .iter()
                .map(|o| o.target)
                .chain(std::iter::once(*fallback))
                .collect(),
            PlaceKind::Effect { next, .. } => vec![*next],
            PlaceKind::EndAdventure { .. } => Vec::new(),
        }
    }

    pub fn is_combat(&self) -> bool {
        matches!(self.kind, PlaceKind::Combat { .. })
    }

    pub fn enemy(&self) -> Option<EnemyId> {
        match self.kind {
            PlaceKind::Combat { enemy, .. } => Some(enemy),
            _ => None,
        }
    }

    pub fn is_end(&self) -> bool {
        matches!(self.kind, PlaceKind::EndAdventure { .. })
    }

    /// Target of the `index`-th option of an option-choose place.
    pub fn choice_target(&self, index: usize) -> Option<PlaceId> {
        match &self.kind {
            PlaceKind::OptionChoose { options } => options.get(index).map(|o| o.target),
            _ => None,
        }
    }

    /// Next place of an effect place.
    pub fn effect_target(&self) -> Option<PlaceId> {
        match self.kind {
            PlaceKind::Effect { next, .. } => Some(next),
            _ => None,
        }
    }

    /// Option of an item-use place for `item`.
    pub fn item_option(&self, item: ItemId) -> Option<&ItemUseOption> {
        match &self.kind {
            PlaceKind::ItemUse { options, .. } => options.iter().find(|o| o.item == item),
            _ => None,
        }
    }

    /// Target of a spell-use place for `spell`.
    pub fn spell_target(&self, spell: SpellId) -> Option<PlaceId> {
        match &self.kind {
            PlaceKind::SpellUse { options, .. } => {
                options.iter().find(|o| o.spell == spell).map(|o| o.target)
            }
            _ => None,
        }
    }

    /// Fallback target of an item-use or spell-use place.
    pub fn fallback_target(&self) -> Option<PlaceId> {
        match self.kind {
            PlaceKind::ItemUse { fallback, .. } | PlaceKind::SpellUse { fallback, .. } => {
                Some(fallback)
            }
            _ => None,
        }
    }

    /// Target of a combat place for the given result.
    ///
    /// An escape leads to `run_away`; a character win to `win`; anything
    /// else, including a double knockout, to `lose`.
    pub fn combat_target(&self, winner: Option<Side>, escaped: bool) -> Option<PlaceId> {
        match self.kind {
            PlaceKind::Combat { run_away, .. } if escaped => Some(run_away),
            PlaceKind::Combat { win, .. } if winner == Some(Side::Character) => Some(win),
            PlaceKind::Combat { lose, .. } => Some(lose),
            _ => None,
        }
    }

    /// Resolves a skill or attribute check for `character` with `roll`.
    pub fn resolve_check(&self, character: &Character, roll: i32) -> Option<(CheckOutcome, PlaceId)> {
        let (total, difficulty, pass, fail) = match self.kind {
            PlaceKind::SkillCheck {
                skill,
                difficulty,
                pass,
                fail,
            } => (character.total_skill(skill), difficulty, pass, fail),
            PlaceKind::AttributeCheck {
                attribute,
                difficulty,
                pass,
                fail,
            } => (character.total_attribute(attribute), difficulty, pass, fail),
            _ => return None,
        };
        let passed = difficulty.passes(roll, total);
        let outcome = CheckOutcome {
            passed,
            roll,
            total,
            difficulty,
        };
        Some((outcome, if passed { pass } else { fail }))
    }

    /// True for skill checks on Stealth, whose boost ends when the place is left.
    pub fn is_stealth_check(&self) -> bool {
        matches!(
            self.kind,
            PlaceKind::SkillCheck {
                skill: SkillId::Stealth,
                ..
            }
        )
    }
}

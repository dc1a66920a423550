use crate::error::{ErrorSeverity, GameError};
use crate::stats::{AttributeId, Attributes, Race, ResourceCurrent, SkillId, Skills};

use super::{ActiveSpells, Backpack, Character, Equipment, Gender, Spellbook};

/// Errors raised when a new character fails validation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CharacterError {
    #[error("character name must not be empty")]
    EmptyName,

    #[error("attribute {attribute} has base value {value}, outside 1..=8")]
    AttributeOutOfRange { attribute: AttributeId, value: i32 },

    #[error("skill {skill} has base value {value}, outside 1..=8")]
    SkillOutOfRange { skill: SkillId, value: i32 },

    #[error("{race} magic must be within {min}..={max}, got {value}")]
    MagicOutsideRaceRange {
        race: Race,
        value: i32,
        min: i32,
        max: i32,
    },
}

impl GameError for CharacterError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyName => "CHARACTER_EMPTY_NAME",
            Self::AttributeOutOfRange { .. } => "CHARACTER_ATTRIBUTE_OUT_OF_RANGE",
            Self::SkillOutOfRange { .. } => "CHARACTER_SKILL_OUT_OF_RANGE",
            Self::MagicOutsideRaceRange { .. } => "CHARACTER_MAGIC_OUTSIDE_RACE_RANGE",
        }
    }
}

/// Builder for new characters.
///
/// Starts with every base value at the minimum, no items and no spells.
/// `build` validates the base values and fills life, power and luck to their
/// maxima.
#[derive(Clone, Debug)]
pub struct CharacterBuilder {
    name: String,
    gender: Gender,
    race: Race,
    attributes: Attributes,
    skills: Skills,
}

impl CharacterBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            gender: Gender::default(),
            race: Race::default(),
            attributes: Attributes::default(),
            skills: Skills::default(),
        }
    }

    pub fn gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    pub fn race(mut self, race: Race) -> Self {
        self.race = race;
        self
    }

    pub fn attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn skills(mut self, skills: Skills) -> Self {
        self.skills = skills;
        self
    }

    pub fn build(self) -> Result<Character, CharacterError> {
        if self.name.trim().is_empty() {
            return Err(CharacterError::EmptyName);
        }
        if let Some((attribute, value)) = self.attributes.first_out_of_range() {
            return Err(CharacterError::AttributeOutOfRange { attribute, value });
        }
        if let Some((skill, value)) = self.skills.first_out_of_range() {
            return Err(CharacterError::SkillOutOfRange { skill, value });
        }

        let magic = self.skills.get(SkillId::Magic);
        let range = self.race.magic_range();
        if !range.contains(&magic) {
            return Err(CharacterError::MagicOutsideRaceRange {
                race: self.race,
                value: magic,
                min: *range.start(),
                max: *range.end(),
            });
        }

        let mut character = Character {
            name: self.name,
            gender: self.gender,
            race: self.race,
            attributes: self.attributes,
            skills: self.skills,
            resources: ResourceCurrent::default(),
            backpack: Backpack::empty(),
            equipment: Equipment::empty(),
            spellbook: Spellbook::empty(),
            active: ActiveSpells::empty(),
        };
        character.restore_all();
        Ok(character)
    }
}

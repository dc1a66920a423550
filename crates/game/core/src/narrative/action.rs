use std::fmt;

use crate::spell::SpellId;

/// Identifier handed to the player-action tracker when a place is entered.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PlayerActionId(String);

impl PlayerActionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Synthetic action registered when a spell opens a path.
    pub fn cast_spell(spell: SpellId) -> Self {
        Self(format!("cast_spell_{}", spell.0))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerActionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synthetic_spell_action() {
        assert_eq!(PlayerActionId::cast_spell(SpellId(12)).as_str(), "cast_spell_12");
    }
}

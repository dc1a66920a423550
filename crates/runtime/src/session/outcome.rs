use gamebook_core::{CheckOutcome, CombatEvent, Side, TransitionReport};

/// Result of resolving a skill or attribute check.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckResolution {
    pub outcome: CheckOutcome,
    pub report: TransitionReport,
}

/// What one combat intent did.
///
/// An intent that does not apply in the current state yields an empty turn.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CombatTurn {
    pub events: Vec<CombatEvent>,
    /// Set when the fight ended and the session left the combat place.
    pub ended: Option<CombatEnding>,
}

impl CombatTurn {
    pub fn is_empty(&self) -> bool {
        self.events.is_empty() && self.ended.is_none()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CombatEnding {
    pub winner: Option<Side>,
    pub escaped: bool,
    pub used_melee: bool,
    pub report: TransitionReport,
}

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Damage multiplier applied to plain weapon attacks.
    pub melee_damage_multiplier: f32,

    /// Score awarded when the character wins a fight.
    pub victory_score: i64,

    /// Score awarded for every place entered.
    pub place_score: i64,

    /// Preferred locale for place and item text. `None` uses the default text.
    pub locale: Option<String>,
}

impl GameConfig {
    // ===== compile-time constants =====
    /// Lowest base value for an attribute or skill.
    pub const MIN_BASE_STAT: i32 = 1;
    /// Highest base value for an attribute or skill.
    pub const MAX_BASE_STAT: i32 = 8;
    /// Capacity of a character's active-spell set.
    pub const MAX_ACTIVE_SPELLS: usize = 8;

    /// `max_life = LIFE_BASE + LIFE_PER_MIGHT × Might`
    pub const LIFE_BASE: i32 = 10;
    pub const LIFE_PER_MIGHT: i32 = 2;
    /// `max_power = POWER_PER_INTELLIGENCE × Intelligence + item power`
    pub const POWER_PER_INTELLIGENCE: i32 = 2;
    /// `max_luck = LUCK_PER_FORTUNE × Fortune`
    pub const LUCK_PER_FORTUNE: i32 = 1;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MELEE_DAMAGE_MULTIPLIER: f32 = 1.0;
    pub const DEFAULT_VICTORY_SCORE: i64 = 10;
    pub const DEFAULT_PLACE_SCORE: i64 = 1;

    pub fn new() -> Self {
        Self {
            melee_damage_multiplier: Self::DEFAULT_MELEE_DAMAGE_MULTIPLIER,
            victory_score: Self::DEFAULT_VICTORY_SCORE,
            place_score: Self::DEFAULT_PLACE_SCORE,
            locale: None,
        }
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Returns true if `value` is a legal base attribute/skill value.
    pub const fn is_valid_base(value: i32) -> bool {
        value >= Self::MIN_BASE_STAT && value <= Self::MAX_BASE_STAT
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

use gamebook_core::GameConfig;

/// Runtime configuration shared by a session and its event bus.
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeConfig {
    pub game_config: GameConfig,
    /// Capacity of each topic channel on the event bus.
    pub event_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game_config: GameConfig::default(),
            event_buffer_size: 100,
        }
    }
}

//! Bootstrap configuration read from the process environment.
use std::env;
use std::path::PathBuf;

use gamebook_core::PlaceId;
use gamebook_runtime::RuntimeConfig;

/// Configuration required to load content and start a session.
#[derive(Clone, Debug)]
pub struct BootstrapConfig {
    /// Directory holding `items.ron`, `spells.ron`, `enemies.ron`,
    /// `places.ron` and an optional `config.toml`.
    pub data_dir: PathBuf,
    /// Directory for saved games. Saving is disabled when unset.
    pub save_dir: Option<PathBuf>,
    /// First place of a new adventure. Defaults to the lowest place id.
    pub start_place: Option<PlaceId>,
    pub event_buffer: usize,
    /// Overrides the locale from the content's `config.toml`.
    pub locale: Option<String>,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(Self::DEFAULT_DATA_DIR),
            save_dir: None,
            start_place: None,
            event_buffer: RuntimeConfig::default().event_buffer_size,
            locale: None,
        }
    }
}

impl BootstrapConfig {
    pub const DEFAULT_DATA_DIR: &'static str = "data";

    /// Construct configuration from process environment variables, loading a
    /// `.env` file first if one exists.
    ///
    /// Environment variables:
    /// - `GAMEBOOK_DATA_DIR` - Content data directory (default: `data`)
    /// - `GAMEBOOK_SAVE_DIR` - Directory for saved games (default: none)
    /// - `GAMEBOOK_START_PLACE` - Id of the first place (default: lowest id)
    /// - `GAMEBOOK_EVENT_BUFFER` - Event channel capacity (default: 100)
    /// - `GAMEBOOK_LOCALE` - Display locale (default: from content)
    ///
    /// Values that do not parse are ignored.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Construct configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(dir) = lookup("GAMEBOOK_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        config.save_dir = lookup("GAMEBOOK_SAVE_DIR").map(PathBuf::from);
        config.start_place = parse(&lookup, "GAMEBOOK_START_PLACE").map(PlaceId);
        if let Some(capacity) = parse::<usize>(&lookup, "GAMEBOOK_EVENT_BUFFER") {
            config.event_buffer = capacity.max(1);
        }
        config.locale = lookup("GAMEBOOK_LOCALE").filter(|locale| !locale.is_empty());

        config
    }
}

fn parse<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let config = BootstrapConfig::from_lookup(lookup(&[]));

        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.save_dir, None);
        assert_eq!(config.start_place, None);
        assert_eq!(config.event_buffer, 100);
        assert_eq!(config.locale, None);
    }

    #[test]
    fn reads_every_variable() {
        let config = BootstrapConfig::from_lookup(lookup(&[
            ("GAMEBOOK_DATA_DIR", "/srv/book"),
            ("GAMEBOOK_SAVE_DIR", "/srv/saves"),
            ("GAMEBOOK_START_PLACE", " 7 "),
            ("GAMEBOOK_EVENT_BUFFER", "16"),
            ("GAMEBOOK_LOCALE", "es"),
        ]));

        assert_eq!(config.data_dir, PathBuf::from("/srv/book"));
        assert_eq!(config.save_dir, Some(PathBuf::from("/srv/saves")));
        assert_eq!(config.start_place, Some(PlaceId(7)));
        assert_eq!(config.event_buffer, 16);
        assert_eq!(config.locale.as_deref(), Some("es"));
    }

    #[test]
    fn bad_values_fall_back() {
        let config = BootstrapConfig::from_lookup(lookup(&[
            ("GAMEBOOK_START_PLACE", "north"),
            ("GAMEBOOK_EVENT_BUFFER", "0"),
            ("GAMEBOOK_LOCALE", ""),
        ]));

        assert_eq!(config.start_place, None);
        assert_eq!(config.event_buffer, 1);
        assert_eq!(config.locale, None);
    }
}

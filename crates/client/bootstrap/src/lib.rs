//! Shared bootstrap utilities for gamebook front-ends.
//!
//! Provides environment configuration, logging setup, content loading and
//! session assembly that a CLI, UI or test harness can reuse.
pub mod builder;
pub mod config;
pub mod content;
pub mod logging;
pub mod saves;

pub use builder::{SessionBuilder, SessionSetup};
pub use config::BootstrapConfig;
pub use content::{ContentProvider, DirectoryContent};
pub use logging::init_logging;
pub use saves::{SaveInfo, latest_save, list_saves};

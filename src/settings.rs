//! Runtime settings
//!
//! Read once from the environment at startup. There are no command-line flags.

use std::io::IsTerminal;
use std::path::PathBuf;

use crate::consts::HIGHSCORE_FILE;

/// Game settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Where the highscore table lives
    pub highscore_path: PathBuf,
    /// Clear the terminal between menu screens
    pub clear_screen: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            highscore_path: PathBuf::from(HIGHSCORE_FILE),
            clear_screen: true,
        }
    }
}

impl Settings {
    /// Overrides the highscore file location
    pub const HIGHSCORE_FILE_VAR: &'static str = "GUESS_HIGHSCORE_FILE";
    /// Disables screen clearing when set to anything
    pub const NO_CLEAR_VAR: &'static str = "GUESS_NO_CLEAR";

    /// Load settings from the process environment
    pub fn from_env() -> Self {
        let mut settings = Self::from_vars(|key| std::env::var(key).ok());
        if settings.clear_screen && !std::io::stdout().is_terminal() {
            settings.clear_screen = false;
        }
        log::debug!("Using settings: {:?}", settings);
        settings
    }

    /// Build settings from a variable lookup
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut settings = Self::default();
        if let Some(path) = lookup(Self::HIGHSCORE_FILE_VAR).filter(|p| !p.trim().is_empty()) {
            settings.highscore_path = PathBuf::from(path);
        }
        if lookup(Self::NO_CLEAR_VAR).is_some() {
            settings.clear_screen = false;
        }
        settings
    }
}

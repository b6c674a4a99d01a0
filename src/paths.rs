//! Platform-aware default locations for the persisted record files.
//!
//! On **Linux**, follows the XDG Base Directory Specification:
//! `$XDG_CONFIG_HOME/focusboard` or `~/.config/focusboard`.
//!
//! On **macOS**, uses Apple conventions with the XDG env var as override:
//! `$XDG_CONFIG_HOME/focusboard` or `~/Library/Application Support/focusboard`.

use std::path::PathBuf;

const APP_NAME: &str = "focusboard";

/// Returns the directory holding both record files.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/focusboard` (if the env var is set, any platform)
/// 2. Platform default:
///    - Linux: `~/.config/focusboard`
///    - macOS: `~/Library/Application Support/focusboard`
pub fn config_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg).join(APP_NAME);
    }
    platform_config_dir().join(APP_NAME)
}

/// Platform-native config base directory (without the XDG override).
fn platform_config_dir() -> PathBuf {
    #[cfg(target_os = "macos")]
    {
        // ~/Library/Application Support
        dirs::config_dir().expect("could not determine config directory")
    }
    #[cfg(not(target_os = "macos"))]
    {
        // ~/.config (XDG default on Linux)
        dirs::home_dir()
            .expect("could not determine home directory")
            .join(".config")
    }
}

/// Default path of the configuration record (file A).
pub fn config_path() -> PathBuf {
    config_dir().join("config.json")
}

/// Default path of the application state record (file B).
pub fn state_path() -> PathBuf {
    config_dir().join("state.json")
}

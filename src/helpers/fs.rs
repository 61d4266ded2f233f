//! File System Utilities
//!
//! Configuration and log directory management.

use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "cyenx", "mail-composer").ok_or_else(|| Error::Invalid {
        message: "Could not determine project directories".to_string(),
    })
}

/// Get or create the application's configuration directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/mail-composer/` or `$XDG_CONFIG_HOME/mail-composer/`
/// - **macOS**: `~/Library/Application Support/com.cyenx.mail-composer/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\cyenx\mail-composer\config\`
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    let project_dirs = project_dirs()?;
    let config_dir = project_dirs.config_dir();

    if !config_dir.exists() {
        fs::create_dir_all(config_dir)?;
    }

    Ok(config_dir.to_path_buf())
}

/// Get or create the directory that holds rolling log files
///
/// Platform-specific locations:
/// - **Linux**: `~/.local/share/mail-composer/logs/`
/// - **macOS**: `~/Library/Application Support/com.cyenx.mail-composer/logs/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\cyenx\mail-composer\data\logs\`
pub fn get_or_create_log_dir() -> Result<PathBuf> {
    let project_dirs = project_dirs()?;
    let log_dir = project_dirs.data_dir().join("logs");

    if !log_dir.exists() {
        fs::create_dir_all(&log_dir)?;
    }

    Ok(log_dir)
}

/// Check if running in development mode
pub fn is_development() -> bool {
    cfg!(debug_assertions)
}

//! Path utilities for ConnectTo
//!
//! Provides centralized path management for the application data directory
//! and the files inside it.

use std::path::PathBuf;

/// Overrides the settings file location
pub const SETTINGS_ENV: &str = "CONNECTTO_SETTINGS";

const APP_DIR_NAME: &str = "ConnectTo";

/// Gets the ConnectTo application data directory.
///
/// # Returns
/// * `Ok(PathBuf)` - Path to `%APPDATA%\ConnectTo`
/// * `Err(String)` - If APPDATA environment variable is not set
///
/// # Side Effects
/// - Creates the ConnectTo directory if it doesn't exist
///
/// # Failure Modes
/// - APPDATA not set (services and some scheduled-task accounts)
/// - Permission denied when creating directory
pub fn get_app_dir() -> Result<PathBuf, String> {
    let appdata_dir =
        std::env::var("APPDATA").map_err(|_| "Failed to get APPDATA directory".to_string())?;
    let app_dir = PathBuf::from(appdata_dir).join(APP_DIR_NAME);
    std::fs::create_dir_all(&app_dir)
        .map_err(|e| format!("Failed to create ConnectTo directory: {}", e))?;
    Ok(app_dir)
}

/// Gets the full path to the settings file.
///
/// `CONNECTTO_SETTINGS` wins when set; otherwise `%APPDATA%\ConnectTo\settings.json`.
/// Unlike `get_app_dir` this never creates directories: a missing settings
/// file just means defaults.
pub fn get_settings_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(SETTINGS_ENV).filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }
    std::env::var_os("APPDATA")
        .map(|appdata| PathBuf::from(appdata).join(APP_DIR_NAME).join("settings.json"))
}

/// Directory for the debug log file, falling back to the current directory
pub fn get_log_dir() -> PathBuf {
    get_app_dir().unwrap_or_else(|_| PathBuf::from("."))
}

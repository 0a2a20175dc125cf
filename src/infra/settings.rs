//! Tuning settings
//!
//! Every field has a default, so an absent or partial `settings.json` is
//! fine. Values are sanitized in `Settings::sanitized`; the rest of the
//! program only sees usable numbers.

use crate::core::{DriveRange, RetryPolicy};
use crate::AppError;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, warn};

/// Contents of settings.json
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub share_attempts: u32,
    pub share_delay_secs: u64,
    pub printer_attempts: u32,
    pub printer_delay_secs: u64,
    pub first_drive: char,
    pub last_drive: char,
    /// Application event log source name
    pub event_source: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            share_attempts: RetryPolicy::SHARE.max_attempts,
            share_delay_secs: RetryPolicy::SHARE.delay.as_secs(),
            printer_attempts: RetryPolicy::PRINTER.max_attempts,
            printer_delay_secs: RetryPolicy::PRINTER.delay.as_secs(),
            first_drive: DriveRange::DEFAULT.first,
            last_drive: DriveRange::DEFAULT.last,
            event_source: "ConnectTo".to_string(),
        }
    }
}

impl Settings {
    /// Reads settings from `path`
    ///
    /// # Returns
    /// * `Ok(Settings::default())` - If the file does not exist
    /// * `Ok(settings)` - Parsed and sanitized settings
    /// * `Err(AppError)` - If the file exists but cannot be read or parsed
    pub fn load_from(path: &Path) -> Result<Self, AppError> {
        if !path.exists() {
            debug!(path = %path.display(), "No settings file, using defaults");
            return Ok(Settings::default());
        }

        let json = std::fs::read_to_string(path).map_err(|e| AppError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;
        let settings: Settings = serde_json::from_str(&json).map_err(|e| AppError::SettingsError {
            path: path.display().to_string(),
            source: e,
        })?;

        Ok(settings.sanitized())
    }

    /// Loads from `path` when given, falling back to defaults on any error
    ///
    /// A broken tuning file must not stop a login script from mapping drives.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Settings::default();
        };

        match Settings::load_from(path) {
            Ok(settings) => settings,
            Err(e) => {
                warn!(error = %e, "{}", e.user_message());
                Settings::default()
            }
        }
    }

    /// Clamps attempts to at least one and repairs an unusable drive range
    pub fn sanitized(mut self) -> Self {
        self.share_attempts = self.share_attempts.max(1);
        self.printer_attempts = self.printer_attempts.max(1);

        if DriveRange::new(self.first_drive, self.last_drive).is_none() {
            warn!(
                first = %self.first_drive,
                last = %self.last_drive,
                "Invalid drive range in settings, using {}",
                DriveRange::DEFAULT
            );
            self.first_drive = DriveRange::DEFAULT.first;
            self.last_drive = DriveRange::DEFAULT.last;
        }

        if self.event_source.trim().is_empty() {
            self.event_source = Settings::default().event_source;
        }

        self
    }

    pub fn drive_range(&self) -> DriveRange {
        DriveRange::new(self.first_drive, self.last_drive).unwrap_or_default()
    }

    pub fn share_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.share_attempts,
            delay: Duration::from_secs(self.share_delay_secs),
        }
    }

    pub fn printer_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.printer_attempts,
            delay: Duration::from_secs(self.printer_delay_secs),
        }
    }
}

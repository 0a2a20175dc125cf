//! Core domain types for ConnectTo

use crate::core::StatusCode;
use crate::AppError;
use std::fmt;
use std::time::Duration;

/// Inclusive range of drive letters the tool is allowed to touch
///
/// A..C are left out by default: they belong to floppy and system drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriveRange {
    pub first: char,
    pub last: char,
}

impl DriveRange {
    pub const DEFAULT: DriveRange = DriveRange { first: 'D', last: 'Z' };

    /// Builds a range from configured bounds, rejecting non-letters and inverted ranges
    pub fn new(first: char, last: char) -> Option<Self> {
        let first = first.to_ascii_uppercase();
        let last = last.to_ascii_uppercase();
        if first.is_ascii_uppercase() && last.is_ascii_uppercase() && first <= last {
            Some(DriveRange { first, last })
        } else {
            None
        }
    }

    pub fn contains(&self, letter: char) -> bool {
        (self.first..=self.last).contains(&letter)
    }
}

impl Default for DriveRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for DriveRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.first, self.last)
    }
}

/// A validated, upper-case drive letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriveLetter(char);

impl DriveLetter {
    /// Normalizes a command-line drive argument and checks it against `range`
    ///
    /// Only the first character counts, so `f`, `F` and `F:` all mean `F`.
    pub fn parse(raw: &str, range: &DriveRange) -> Result<Self, AppError> {
        let letter = match raw.chars().next() {
            Some(c) => c.to_ascii_uppercase(),
            None => {
                return Err(AppError::InvalidDriveLetter {
                    letter: raw.to_string(),
                    reason: "drive letter is empty".to_string(),
                })
            }
        };

        if !range.contains(letter) {
            return Err(AppError::InvalidDriveLetter {
                letter: letter.to_string(),
                reason: format!("must be within {}", range),
            });
        }

        Ok(DriveLetter(letter))
    }

    pub fn letter(self) -> char {
        self.0
    }

    /// Device name as the WNet functions expect it (`F:`)
    pub fn local_name(self) -> String {
        format!("{}:", self.0)
    }
}

impl fmt::Display for DriveLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.0)
    }
}

/// Desired state for one drive letter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriveMapping {
    pub drive: DriveLetter,
    pub remote_path: String,
}

impl DriveMapping {
    /// Pairs a drive with a remote path, dropping one trailing `\`
    ///
    /// A trailing separator makes WNetAddConnection2 fail, and the OS
    /// reports mapped paths without it.
    pub fn new(drive: DriveLetter, remote_path: &str) -> Result<Self, AppError> {
        let trimmed = remote_path.strip_suffix('\\').unwrap_or(remote_path);
        if trimmed.is_empty() {
            return Err(AppError::InvalidResource {
                resource: remote_path.to_string(),
                reason: "share path is empty".to_string(),
            });
        }

        Ok(DriveMapping {
            drive,
            remote_path: trimmed.to_string(),
        })
    }
}

/// What the OS reports a drive letter is currently connected to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObservedState {
    /// Connected to this remote path
    Mapped(String),
    /// No connection exists for the letter
    Unmapped,
    /// A remembered connection exists but its server is not reachable right now
    Unavailable(String),
    /// Any other status; the reconciler does not act on it
    Other(StatusCode),
}

impl ObservedState {
    /// Classifies a QueryResource result
    pub fn from_query(status: StatusCode, remote: String) -> Self {
        match status {
            StatusCode::SUCCESS => ObservedState::Mapped(remote),
            StatusCode::NOT_CONNECTED => ObservedState::Unmapped,
            StatusCode::CONNECTION_UNAVAILABLE => ObservedState::Unavailable(remote),
            other => ObservedState::Other(other),
        }
    }
}

/// Step the reconciler decided on for one iteration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorrectiveAction {
    /// Observed path already equals the desired one
    AlreadyMapped,
    /// Re-establish the remembered connection so it can be altered later
    Restore { remote: String },
    Connect { remote: String },
    /// Forced cancel of a connection to the wrong path
    Cancel,
    None,
}

/// One pass through the reconciliation loop, kept only for logging
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconciliationAttempt {
    pub index: u32,
    pub query_status: StatusCode,
    pub observed: ObservedState,
    pub action: CorrectiveAction,
    pub action_status: Option<StatusCode>,
}

/// Final result of a reconciliation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReconcileOutcome {
    /// Last query status, or the reason the mapping never matched
    pub status: StatusCode,
    pub attempts: u32,
    /// A query reported the desired path
    pub matched: bool,
}

impl ReconcileOutcome {
    pub fn is_success(&self) -> bool {
        self.matched
    }
}

/// Printer to connect, and whether it should become the default
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrinterConnectionRequest {
    pub printer_path: String,
    pub make_default: bool,
}

impl PrinterConnectionRequest {
    pub fn new(printer_path: &str, make_default: bool) -> Result<Self, AppError> {
        if printer_path.trim().is_empty() {
            return Err(AppError::InvalidResource {
                resource: printer_path.to_string(),
                reason: "printer name is empty".to_string(),
            });
        }

        Ok(PrinterConnectionRequest {
            printer_path: printer_path.to_string(),
            make_default,
        })
    }
}

/// Friendly display name for a mapped share
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLabel {
    pub remote_path: String,
    pub label: String,
}

impl ShareLabel {
    pub fn new(remote_path: &str, label: &str) -> Self {
        ShareLabel {
            remote_path: remote_path.to_string(),
            label: label.to_string(),
        }
    }

    /// Registry-safe form of the remote path (`\\srv\data` -> `##srv#data`)
    pub fn key(&self) -> String {
        self.remote_path.replace('\\', "#")
    }
}

/// Bound and pacing of a retry loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub delay: Duration,
}

impl RetryPolicy {
    pub const SHARE: RetryPolicy = RetryPolicy {
        max_attempts: 10,
        delay: Duration::from_secs(5),
    };

    pub const PRINTER: RetryPolicy = RetryPolicy {
        max_attempts: 3,
        delay: Duration::from_secs(5),
    };
}

//! Error types for ConnectTo
//!
//! This module defines a unified error type for the whole tool. Every failure
//! ends up here before it is turned into a process exit code at the outermost
//! boundary (`run()`), which is the only error channel a login script sees.

use crate::core::StatusCode;
use std::io;
use thiserror::Error;

/// Main error type for ConnectTo
///
/// # Architecture Notes
/// - Uses thiserror for automatic Display and Error trait implementations
/// - Each variant includes contextual information for the operational log
/// - #[source] attribute enables error chain traversal
/// - `exit_code()` is the single place where errors become process exit statuses
#[derive(Debug, Error)]
pub enum AppError {
    /// The argument vector matched none of the supported command shapes
    #[error("Invalid command line")]
    Usage,

    /// Drive letter missing or outside the configured range
    #[error("Invalid drive letter '{letter}': {reason}")]
    InvalidDriveLetter {
        letter: String,
        reason: String,
    },

    /// Empty printer name or share path
    #[error("Invalid resource '{resource}': {reason}")]
    InvalidResource {
        resource: String,
        reason: String,
    },

    /// Every printer connection attempt failed
    #[error("Failed to connect printer '{printer}' after {attempts} attempts ({status})")]
    PrinterConnectionFailed {
        printer: String,
        attempts: u32,
        status: StatusCode,
    },

    /// The reconciler gave up before the drive pointed at the desired path
    #[error("Failed to map {drive}: to '{remote}' ({status})")]
    ShareMappingFailed {
        drive: char,
        remote: String,
        status: StatusCode,
    },

    /// Windows Registry operation failed
    #[error("Registry operation failed: {operation}")]
    RegistryError {
        operation: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// settings.json exists but could not be parsed
    #[error("Invalid settings file: {path}")]
    SettingsError {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// File I/O error
    #[error("File I/O error: {path}")]
    IoError {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Generic error with context
    #[error("{message}")]
    Other {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },
}

impl AppError {
    /// Returns an error code for categorization
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Usage => "USAGE",
            AppError::InvalidDriveLetter { .. } => "INVALID_DRIVE",
            AppError::InvalidResource { .. } => "INVALID_RESOURCE",
            AppError::PrinterConnectionFailed { .. } => "PRINTER_CONNECT",
            AppError::ShareMappingFailed { .. } => "SHARE_MAP",
            AppError::RegistryError { .. } => "REGISTRY",
            AppError::SettingsError { .. } => "SETTINGS",
            AppError::IoError { .. } => "IO_ERROR",
            AppError::Other { .. } => "GENERAL",
        }
    }

    /// Returns a user-friendly error message suitable for the operational log
    pub fn user_message(&self) -> String {
        match self {
            AppError::Usage => "Unrecognized command line".to_string(),
            AppError::InvalidDriveLetter { letter, reason } => {
                format!("Drive letter '{}' rejected: {}", letter, reason)
            }
            AppError::InvalidResource { resource, reason } => {
                format!("Resource '{}' rejected: {}", resource, reason)
            }
            AppError::PrinterConnectionFailed { printer, attempts, status } => {
                format!(
                    "Could not connect to printer '{}' after {} attempts. Last error: {}",
                    printer,
                    attempts,
                    status.message()
                )
            }
            AppError::ShareMappingFailed { drive, remote, status } => {
                format!(
                    "Could not map drive {}: to '{}'. Last status: {}",
                    drive,
                    remote,
                    status.message()
                )
            }
            AppError::RegistryError { operation, .. } => {
                format!("Registry operation failed: {}", operation)
            }
            AppError::SettingsError { path, .. } => {
                format!("Settings file '{}' is not valid JSON", path)
            }
            AppError::IoError { path, .. } => {
                format!("Failed to access file: {}", path)
            }
            AppError::Other { message, .. } => message.clone(),
        }
    }

    /// Returns optional remediation steps for the error
    pub fn remediation(&self) -> Option<String> {
        match self {
            AppError::InvalidDriveLetter { .. } => {
                Some("Use a single drive letter inside the configured range (D-Z by default).".to_string())
            }
            AppError::PrinterConnectionFailed { .. } => {
                Some("Verify the print server is reachable and the printer share name is correct.".to_string())
            }
            AppError::ShareMappingFailed { .. } => {
                Some("Verify the file server is reachable and you have access to the share.".to_string())
            }
            AppError::SettingsError { .. } => {
                Some("Fix or delete settings.json; built-in defaults are used meanwhile.".to_string())
            }
            _ => None,
        }
    }

    /// Returns the category for error logging
    pub fn category(&self) -> &'static str {
        match self {
            AppError::Usage => "CLI",

            AppError::InvalidDriveLetter { .. } |
            AppError::InvalidResource { .. } => "VALIDATION",

            AppError::PrinterConnectionFailed { .. } => "PRINTER",

            AppError::ShareMappingFailed { .. } => "SHARE",

            AppError::RegistryError { .. } => "REGISTRY",

            AppError::SettingsError { .. } |
            AppError::IoError { .. } => "FILE_SYSTEM",

            AppError::Other { .. } => "GENERAL",
        }
    }

    /// Process exit status for this error
    ///
    /// Share failures reuse the Win32 status code directly so that calling
    /// scripts can branch on it; everything else exits with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::ShareMappingFailed { status, .. } => status.as_exit_code(),
            _ => 1,
        }
    }
}

// Convenience conversions from common error types
impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        AppError::Other {
            message: format!("I/O error: {}", err),
            source: Some(err.into()),
        }
    }
}

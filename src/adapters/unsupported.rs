//! Collaborators for hosts without the Win32 networking and spooler APIs
//!
//! Every call answers `ERROR_NOT_SUPPORTED`, so the commands still run their
//! retry loops and exit with a meaningful status instead of refusing to start.

use crate::adapters::{NetworkResources, PrinterSpooler, RegistryAdapter};
use crate::core::StatusCode;
use crate::errors::AppError;

#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedPlatform;

impl NetworkResources for UnsupportedPlatform {
    fn connect(&self, _local_name: &str, _remote_name: &str, _persistent: bool) -> StatusCode {
        StatusCode::NOT_SUPPORTED
    }

    fn disconnect(&self, _local_name: &str, _force: bool) -> StatusCode {
        StatusCode::NOT_SUPPORTED
    }

    fn query(&self, _local_name: &str) -> (StatusCode, String) {
        (StatusCode::NOT_SUPPORTED, String::new())
    }
}

impl PrinterSpooler for UnsupportedPlatform {
    fn add_connection(&self, _printer_path: &str) -> Result<(), StatusCode> {
        Err(StatusCode::NOT_SUPPORTED)
    }

    fn set_default(&self, _printer_path: &str) -> Result<(), StatusCode> {
        Err(StatusCode::NOT_SUPPORTED)
    }
}

impl RegistryAdapter for UnsupportedPlatform {
    fn write_string(&self, key_path: &str, value_name: &str, _value: &str) -> Result<(), AppError> {
        Err(unsupported(key_path, value_name))
    }

    fn write_dword(&self, key_path: &str, value_name: &str, _value: u32) -> Result<(), AppError> {
        Err(unsupported(key_path, value_name))
    }
}

fn unsupported(key_path: &str, value_name: &str) -> AppError {
    AppError::RegistryError {
        operation: format!("write registry value '{}\\{}'", key_path, value_name),
        source: Some(anyhow::anyhow!("registry is not available on this platform")),
    }
}

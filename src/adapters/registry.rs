//! Registry collaborator
//!
//! Write-only view of HKEY_CURRENT_USER. Keys are created when missing.

use crate::errors::AppError;

/// Trait for registry operations
///
/// This trait abstracts registry access to enable:
/// - Testing with mock implementations
/// - Running on non-Windows hosts
pub trait RegistryAdapter: Send + Sync {
    /// Writes a REG_SZ value
    ///
    /// # Arguments
    /// * `key_path` - Path below HKEY_CURRENT_USER (e.g., "Software\\ConnectTo")
    /// * `value_name` - Name of the value to write
    /// * `value` - String value to write
    fn write_string(&self, key_path: &str, value_name: &str, value: &str) -> Result<(), AppError>;

    /// Writes a REG_DWORD value
    fn write_dword(&self, key_path: &str, value_name: &str, value: u32) -> Result<(), AppError>;
}

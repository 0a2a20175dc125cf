//! Windows Registry adapter
//!
//! Provides a safe Rust interface to the Windows Registry API.
//! This module isolates all unsafe Windows API calls for registry operations.

use super::{to_wide, Win32Status};
use crate::adapters::RegistryAdapter;
use crate::core::StatusCode;
use crate::errors::AppError;
use windows::core::PCWSTR;
use windows::Win32::System::Registry::{
    RegCloseKey, RegCreateKeyExW, RegSetValueExW, HKEY, HKEY_CURRENT_USER, KEY_WRITE, REG_DWORD,
    REG_OPTION_NON_VOLATILE, REG_SZ, REG_VALUE_TYPE,
};

/// Windows implementation of RegistryAdapter
pub struct WindowsRegistry;

impl WindowsRegistry {
    /// Creates a new Windows registry adapter instance
    pub fn new() -> Self {
        WindowsRegistry
    }

    /// Opens `key_path` under HKEY_CURRENT_USER for writing, creating it if needed
    fn create_key(&self, key_path: &str) -> Result<HKEY, AppError> {
        let key_path_wide = to_wide(key_path);
        let mut hkey = HKEY::default();

        let status = unsafe {
            RegCreateKeyExW(
                HKEY_CURRENT_USER,
                PCWSTR::from_raw(key_path_wide.as_ptr()),
                0,  // Reserved, must be 0
                PCWSTR::null(),  // No class
                REG_OPTION_NON_VOLATILE,
                KEY_WRITE,
                None,  // Default security
                &mut hkey,  // Receives handle to the key
                None,  // Disposition not needed
            )
            .status()
        };

        if status.is_success() {
            Ok(hkey)
        } else {
            Err(registry_error(format!("create registry key '{}'", key_path), status))
        }
    }

    fn set_value(
        &self,
        key_path: &str,
        value_name: &str,
        value_type: REG_VALUE_TYPE,
        data: &[u8],
    ) -> Result<(), AppError> {
        let hkey = self.create_key(key_path)?;
        let value_name_wide = to_wide(value_name);

        let status = unsafe {
            RegSetValueExW(
                hkey,
                PCWSTR::from_raw(value_name_wide.as_ptr()),
                0,  // Reserved, must be 0
                value_type,
                Some(data),
            )
            .status()
        };

        // CRITICAL: Always close registry handles to prevent resource leaks
        unsafe {
            let _ = RegCloseKey(hkey);
        }

        if status.is_success() {
            Ok(())
        } else {
            Err(registry_error(
                format!("write registry value '{}\\{}'", key_path, value_name),
                status,
            ))
        }
    }
}

impl Default for WindowsRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistryAdapter for WindowsRegistry {
    fn write_string(&self, key_path: &str, value_name: &str, value: &str) -> Result<(), AppError> {
        // REG_SZ stores null-terminated UTF-16, little-endian
        let value_bytes: Vec<u8> = to_wide(value)
            .iter()
            .flat_map(|&word| word.to_le_bytes())
            .collect();

        self.set_value(key_path, value_name, REG_SZ, &value_bytes)
    }

    fn write_dword(&self, key_path: &str, value_name: &str, value: u32) -> Result<(), AppError> {
        self.set_value(key_path, value_name, REG_DWORD, &value.to_le_bytes())
    }
}

fn registry_error(operation: String, status: StatusCode) -> AppError {
    AppError::RegistryError {
        operation,
        source: Some(anyhow::anyhow!("{} ({})", status.message(), status)),
    }
}

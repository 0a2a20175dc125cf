//! Per-user registry values written by the commands
//!
//! Both writes go to HKEY_CURRENT_USER. Neither value is read back by this tool.

use crate::adapters::RegistryAdapter;
use crate::core::ShareLabel;
use crate::AppError;

/// Key holding the user's printer preferences
pub const WINDOWS_NT_KEY: &str = "Software\\Microsoft\\Windows NT\\CurrentVersion\\Windows";
/// Without this set to 1, Windows 10+ may replace a default printer set by software
pub const LEGACY_DEFAULT_PRINTER_VALUE: &str = "LegacyDefaultPrinterMode";

/// Explorer's per-share settings, one subkey per share
pub const MOUNT_POINTS_KEY: &str = "Software\\Microsoft\\Windows\\CurrentVersion\\Explorer\\MountPoints2";
/// Display name Explorer shows for the mapped drive
pub const LABEL_VALUE: &str = "_LabelFromReg";

/// Turns on legacy default printer mode for the current user
pub fn enable_legacy_default_printer(registry: &dyn RegistryAdapter) -> Result<(), AppError> {
    registry.write_dword(WINDOWS_NT_KEY, LEGACY_DEFAULT_PRINTER_VALUE, 1)
}

/// Stores the friendly label for a share under its sanitized key
pub fn persist_share_label(
    registry: &dyn RegistryAdapter,
    label: &ShareLabel,
) -> Result<(), AppError> {
    let key_path = format!("{}\\{}", MOUNT_POINTS_KEY, label.key());
    registry.write_string(&key_path, LABEL_VALUE, &label.label)
}

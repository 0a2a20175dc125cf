//! Printer collaborator

use crate::core::StatusCode;

/// Trait for printer connection operations
///
/// Both calls return the thread's last-error code on failure.
pub trait PrinterSpooler: Send + Sync {
    /// Adds a per-user connection to a shared printer (e.g. `\\printserver\LaserJet`)
    fn add_connection(&self, printer_path: &str) -> Result<(), StatusCode>;

    /// Makes `printer_path` the current user's default printer
    fn set_default(&self, printer_path: &str) -> Result<(), StatusCode>;
}

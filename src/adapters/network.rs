//! Network connection collaborator
//!
//! Mirrors the three mpr.dll calls the share reconciler needs. Implementations
//! report raw Win32 status codes; interpreting them is the reconciler's job.

use crate::core::StatusCode;

/// Trait for network resource (drive mapping) operations
///
/// This trait abstracts the WNet API to enable:
/// - Testing the reconciler with scripted connection states
/// - Running on hosts without the API (every call answers `ERROR_NOT_SUPPORTED`)
pub trait NetworkResources: Send + Sync {
    /// Connects `local_name` (e.g. "F:") to `remote_name`
    ///
    /// # Arguments
    /// * `persistent` - Remember the connection in the user profile
    fn connect(&self, local_name: &str, remote_name: &str, persistent: bool) -> StatusCode;

    /// Cancels the connection bound to `local_name`
    ///
    /// # Arguments
    /// * `force` - Disconnect even if files are open
    fn disconnect(&self, local_name: &str, force: bool) -> StatusCode;

    /// Returns the remote name bound to `local_name`
    ///
    /// The remote name is also filled in for `ERROR_CONNECTION_UNAVAIL`, where
    /// it holds the remembered path. Empty for other statuses.
    fn query(&self, local_name: &str) -> (StatusCode, String);
}

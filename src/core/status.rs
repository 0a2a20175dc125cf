//! Win32 status codes returned by the network, printer and registry APIs
//!
//! The codes are kept as raw numbers because they double as process exit
//! codes. Messages come from a fixed table; unknown codes are shown as their
//! number rather than guessed at.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

/// A Win32 status code (`NO_ERROR`, `ERROR_*`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusCode(pub u32);

impl StatusCode {
    pub const SUCCESS: StatusCode = StatusCode(0);
    pub const ACCESS_DENIED: StatusCode = StatusCode(5);
    pub const NOT_SUPPORTED: StatusCode = StatusCode(50);
    pub const BAD_NETPATH: StatusCode = StatusCode(53);
    pub const BAD_NET_NAME: StatusCode = StatusCode(67);
    pub const ALREADY_ASSIGNED: StatusCode = StatusCode(85);
    pub const INVALID_PASSWORD: StatusCode = StatusCode(86);
    pub const INVALID_PARAMETER: StatusCode = StatusCode(87);
    pub const MORE_DATA: StatusCode = StatusCode(234);
    pub const BAD_DEVICE: StatusCode = StatusCode(1200);
    pub const CONNECTION_UNAVAILABLE: StatusCode = StatusCode(1201);
    pub const DEVICE_ALREADY_REMEMBERED: StatusCode = StatusCode(1202);
    pub const NO_NET_OR_BAD_PATH: StatusCode = StatusCode(1203);
    pub const BAD_PROVIDER: StatusCode = StatusCode(1204);
    pub const CANNOT_OPEN_PROFILE: StatusCode = StatusCode(1205);
    pub const BAD_PROFILE: StatusCode = StatusCode(1206);
    pub const EXTENDED_ERROR: StatusCode = StatusCode(1208);
    pub const SESSION_CREDENTIAL_CONFLICT: StatusCode = StatusCode(1219);
    pub const NO_NETWORK: StatusCode = StatusCode(1222);
    pub const CANCELLED: StatusCode = StatusCode(1223);
    pub const LOGON_FAILURE: StatusCode = StatusCode(1326);
    pub const RPC_SERVER_UNAVAILABLE: StatusCode = StatusCode(1722);
    pub const UNKNOWN_PRINTER_DRIVER: StatusCode = StatusCode(1797);
    pub const INVALID_PRINTER_NAME: StatusCode = StatusCode(1801);
    pub const NOT_CONNECTED: StatusCode = StatusCode(2250);
    pub const OPEN_FILES: StatusCode = StatusCode(2401);
    pub const DEVICE_IN_USE: StatusCode = StatusCode(2404);

    pub fn is_success(self) -> bool {
        self == StatusCode::SUCCESS
    }

    /// Symbolic name from the table, if the code is known
    pub fn name(self) -> Option<&'static str> {
        STATUS_TABLE.get(&self.0).map(|(name, _)| *name)
    }

    /// Human-readable message, falling back to the raw number
    pub fn message(self) -> String {
        match STATUS_TABLE.get(&self.0) {
            Some((_, message)) => (*message).to_string(),
            None => self.0.to_string(),
        }
    }

    pub fn as_exit_code(self) -> i32 {
        self.0 as i32
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{} {}", self.0, name),
            None => write!(f, "{}", self.0),
        }
    }
}

static STATUS_TABLE: Lazy<HashMap<u32, (&'static str, &'static str)>> = Lazy::new(|| {
    HashMap::from([
        (0, ("NO_ERROR", "The operation completed successfully.")),
        (5, ("ERROR_ACCESS_DENIED", "Access is denied.")),
        (50, ("ERROR_NOT_SUPPORTED", "The request is not supported.")),
        (53, ("ERROR_BAD_NETPATH", "The network path was not found.")),
        (67, ("ERROR_BAD_NET_NAME", "The network name cannot be found.")),
        (85, ("ERROR_ALREADY_ASSIGNED", "The local device name is already in use.")),
        (86, ("ERROR_INVALID_PASSWORD", "The specified network password is not correct.")),
        (87, ("ERROR_INVALID_PARAMETER", "The parameter is incorrect.")),
        (234, ("ERROR_MORE_DATA", "More data is available.")),
        (1200, ("ERROR_BAD_DEVICE", "The specified device name is invalid.")),
        (1201, ("ERROR_CONNECTION_UNAVAIL", "The device is not currently connected but it is a remembered connection.")),
        (1202, ("ERROR_DEVICE_ALREADY_REMEMBERED", "The local device name has a remembered connection to another network resource.")),
        (1203, ("ERROR_NO_NET_OR_BAD_PATH", "The network path was either typed incorrectly, does not exist, or the network provider is not currently available.")),
        (1204, ("ERROR_BAD_PROVIDER", "The specified network provider name is invalid.")),
        (1205, ("ERROR_CANNOT_OPEN_PROFILE", "Unable to open the network connection profile.")),
        (1206, ("ERROR_BAD_PROFILE", "The network connection profile is corrupted.")),
        (1208, ("ERROR_EXTENDED_ERROR", "An extended error has occurred.")),
        (1219, ("ERROR_SESSION_CREDENTIAL_CONFLICT", "Multiple connections to a server or shared resource by the same user, using more than one user name, are not allowed.")),
        (1222, ("ERROR_NO_NETWORK", "The network is not present or not started.")),
        (1223, ("ERROR_CANCELLED", "The operation was canceled by the user.")),
        (1326, ("ERROR_LOGON_FAILURE", "The user name or password is incorrect.")),
        (1722, ("RPC_S_SERVER_UNAVAILABLE", "The RPC server is unavailable.")),
        (1797, ("ERROR_UNKNOWN_PRINTER_DRIVER", "The printer driver is unknown.")),
        (1801, ("ERROR_INVALID_PRINTER_NAME", "The printer name is invalid.")),
        (2250, ("ERROR_NOT_CONNECTED", "This network connection does not exist.")),
        (2401, ("ERROR_OPEN_FILES", "This network connection has files open or requests pending.")),
        (2404, ("ERROR_DEVICE_IN_USE", "The device is in use by an active process and cannot be disconnected.")),
    ])
});

//! WNet (mpr.dll) adapter for drive mappings

use super::{to_wide, Win32Status};
use crate::adapters::NetworkResources;
use crate::core::StatusCode;
use windows::core::{PCWSTR, PWSTR};
use windows::Win32::Foundation::BOOL;
use windows::Win32::NetworkManagement::WNet::{
    WNetAddConnection2W, WNetCancelConnection2W, WNetGetConnectionW, CONNECT_UPDATE_PROFILE,
    NETRESOURCEW, RESOURCETYPE_DISK,
};

/// Initial buffer for WNetGetConnectionW, in UTF-16 units
const REMOTE_NAME_CAPACITY: usize = 260;

/// Windows implementation of NetworkResources
#[derive(Debug, Default)]
pub struct WindowsNetwork;

impl WindowsNetwork {
    pub fn new() -> Self {
        WindowsNetwork
    }
}

impl NetworkResources for WindowsNetwork {
    fn connect(&self, local_name: &str, remote_name: &str, persistent: bool) -> StatusCode {
        let mut local_wide = to_wide(local_name);
        let mut remote_wide = to_wide(remote_name);

        let resource = NETRESOURCEW {
            dwType: RESOURCETYPE_DISK,
            lpLocalName: PWSTR(local_wide.as_mut_ptr()),
            lpRemoteName: PWSTR(remote_wide.as_mut_ptr()),
            ..Default::default()
        };

        // CONNECT_UPDATE_PROFILE makes the mapping survive logoff
        let flags = if persistent {
            CONNECT_UPDATE_PROFILE
        } else {
            Default::default()
        };

        // Null user and password: connect with the caller's logon credentials
        unsafe {
            WNetAddConnection2W(&resource, PCWSTR::null(), PCWSTR::null(), flags).status()
        }
    }

    fn disconnect(&self, local_name: &str, force: bool) -> StatusCode {
        let local_wide = to_wide(local_name);

        unsafe {
            WNetCancelConnection2W(
                PCWSTR::from_raw(local_wide.as_ptr()),
                Default::default(),
                BOOL::from(force),
            )
            .status()
        }
    }

    fn query(&self, local_name: &str) -> (StatusCode, String) {
        let local_wide = to_wide(local_name);
        let mut buffer = vec![0u16; REMOTE_NAME_CAPACITY];

        // One retry with the size the API asked for
        for _ in 0..2 {
            let mut length = buffer.len() as u32;
            let status = unsafe {
                WNetGetConnectionW(
                    PCWSTR::from_raw(local_wide.as_ptr()),
                    PWSTR(buffer.as_mut_ptr()),
                    &mut length,
                )
                .status()
            };

            match status {
                StatusCode::MORE_DATA => buffer = vec![0u16; length as usize],
                StatusCode::SUCCESS | StatusCode::CONNECTION_UNAVAILABLE => {
                    let end = buffer.iter().position(|&c| c == 0).unwrap_or(buffer.len());
                    return (status, String::from_utf16_lossy(&buffer[..end]));
                }
                other => return (other, String::new()),
            }
        }

        (StatusCode::MORE_DATA, String::new())
    }
}

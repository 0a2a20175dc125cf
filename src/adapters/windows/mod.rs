//! Windows-specific adapters
//!
//! This module contains the Win32 implementations of the collaborator traits.
//! All unsafe Windows API calls are isolated here.

pub mod event_log;
pub mod network;
pub mod printing;
pub mod registry;

pub use event_log::WindowsEventLog;
pub use network::WindowsNetwork;
pub use printing::WindowsPrinters;
pub use registry::WindowsRegistry;

use crate::core::StatusCode;
use std::ffi::OsStr;
use std::os::windows::ffi::OsStrExt;
use windows::Win32::Foundation::{BOOL, WIN32_ERROR};

/// Null-terminated UTF-16 copy of `value` for the wide Win32 entry points
pub(crate) fn to_wide(value: &str) -> Vec<u16> {
    OsStr::new(value)
        .encode_wide()
        .chain(std::iter::once(0))
        .collect()
}

/// Collapses the return shapes the bindings use into a Win32 status code
///
/// Depending on the function, the bindings hand back a `WIN32_ERROR`, a
/// `BOOL` with the code in the thread's last error, or a `Result` wrapping
/// an HRESULT built from the Win32 code.
pub(crate) trait Win32Status {
    fn status(self) -> StatusCode;
}

impl Win32Status for WIN32_ERROR {
    fn status(self) -> StatusCode {
        StatusCode(self.0)
    }
}

impl Win32Status for BOOL {
    fn status(self) -> StatusCode {
        if self.as_bool() {
            StatusCode::SUCCESS
        } else {
            status_from_error(&windows::core::Error::from_win32())
        }
    }
}

impl Win32Status for windows::core::Result<()> {
    fn status(self) -> StatusCode {
        match self {
            Ok(()) => StatusCode::SUCCESS,
            Err(e) => status_from_error(&e),
        }
    }
}

/// Recovers the Win32 code from an HRESULT of the form 0x8007xxxx
pub(crate) fn status_from_error(error: &windows::core::Error) -> StatusCode {
    let hresult = error.code().0 as u32;
    if hresult & 0xFFFF_0000 == 0x8007_0000 {
        StatusCode(hresult & 0xFFFF)
    } else {
        StatusCode(hresult)
    }
}

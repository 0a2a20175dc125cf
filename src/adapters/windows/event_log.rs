//! Windows Application event log sink

use super::{status_from_error, to_wide};
use crate::adapters::{LogLevel, OperationLog};
use crate::core::StatusCode;
use windows::core::PCWSTR;
use windows::Win32::Foundation::{HANDLE, PSID};
use windows::Win32::System::EventLog::{
    DeregisterEventSource, RegisterEventSourceW, ReportEventW, EVENTLOG_ERROR_TYPE,
    EVENTLOG_INFORMATION_TYPE,
};

/// Event id used for every entry; the message text carries the detail
const EVENT_ID: u32 = 1000;

/// Writes operational entries to the Application log under a named source
pub struct WindowsEventLog {
    handle: HANDLE,
}

impl WindowsEventLog {
    /// Registers `source` on the local machine
    pub fn open(source: &str) -> Result<Self, StatusCode> {
        let source_wide = to_wide(source);
        let handle = unsafe {
            RegisterEventSourceW(PCWSTR::null(), PCWSTR::from_raw(source_wide.as_ptr()))
        }
        .map_err(|e| status_from_error(&e))?;

        Ok(WindowsEventLog { handle })
    }
}

impl OperationLog for WindowsEventLog {
    fn write(&self, level: LogLevel, message: &str) {
        let event_type = match level {
            LogLevel::Info => EVENTLOG_INFORMATION_TYPE,
            LogLevel::Error => EVENTLOG_ERROR_TYPE,
        };
        let message_wide = to_wide(message);
        let strings = [PCWSTR::from_raw(message_wide.as_ptr())];

        // Fire-and-forget
        unsafe {
            let _ = ReportEventW(
                self.handle,
                event_type,
                0,
                EVENT_ID,
                PSID::default(),
                0,
                Some(&strings),
                None,
            );
        }
    }
}

impl Drop for WindowsEventLog {
    fn drop(&mut self) {
        unsafe {
            let _ = DeregisterEventSource(self.handle);
        }
    }
}

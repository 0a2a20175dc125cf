//! Print spooler (winspool) adapter

use super::{to_wide, Win32Status};
use crate::adapters::PrinterSpooler;
use crate::core::StatusCode;
use windows::core::PCWSTR;
use windows::Win32::Graphics::Printing::{AddPrinterConnectionW, SetDefaultPrinterW};

/// Windows implementation of PrinterSpooler
#[derive(Debug, Default)]
pub struct WindowsPrinters;

impl WindowsPrinters {
    pub fn new() -> Self {
        WindowsPrinters
    }
}

impl PrinterSpooler for WindowsPrinters {
    fn add_connection(&self, printer_path: &str) -> Result<(), StatusCode> {
        let name = to_wide(printer_path);
        let status = unsafe { AddPrinterConnectionW(PCWSTR::from_raw(name.as_ptr())).status() };
        if status.is_success() {
            Ok(())
        } else {
            Err(status)
        }
    }

    fn set_default(&self, printer_path: &str) -> Result<(), StatusCode> {
        let name = to_wide(printer_path);
        let status = unsafe { SetDefaultPrinterW(PCWSTR::from_raw(name.as_ptr())).status() };
        if status.is_success() {
            Ok(())
        } else {
            Err(status)
        }
    }
}

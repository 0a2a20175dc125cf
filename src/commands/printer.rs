//! Printer commands (`-printer`, `-defaultprinter`)

use super::Context;
use crate::core::{connect_printer, PrinterConnectionRequest};
use crate::AppError;

/// Connects to `printer`, making it the default when asked
///
/// # Returns
/// * `Ok(attempts)` - Connected (and defaulted) after this many attempts
/// * `Err(AppError)` - Empty printer name or every attempt failed
pub fn connect_to_printer(
    printer: &str,
    make_default: bool,
    ctx: &Context,
) -> Result<u32, AppError> {
    let request = PrinterConnectionRequest::new(printer, make_default)?;

    let attempts = connect_printer(
        &request,
        &ctx.settings.printer_policy(),
        ctx.printers,
        ctx.registry,
        ctx.log,
        ctx.sleeper,
    )?;

    let message = if make_default {
        format!("Connected printer {} and set it as default", printer)
    } else {
        format!("Connected printer {}", printer)
    };
    ctx.log.info(&message);

    Ok(attempts)
}

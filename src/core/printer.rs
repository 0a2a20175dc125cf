//! Printer connector
//!
//! Adds a printer connection and optionally makes it the default, retrying the
//! whole attempt up to `policy.max_attempts` times. An attempt only counts as
//! successful when every requested step succeeded: a connection that could
//! not be made default is retried like a failed connection.

use crate::adapters::{OperationLog, PrinterSpooler, RegistryAdapter, Sleeper};
use crate::core::profile::enable_legacy_default_printer;
use crate::core::{level_for, log_operation, PrinterConnectionRequest, RetryPolicy, StatusCode};
use crate::AppError;
use tracing::{info, warn};

/// Connects the printer described by `request`
///
/// # Returns
/// * `Ok(attempts)` - Number of attempts it took
/// * `Err(AppError::PrinterConnectionFailed)` - Every attempt failed
///
/// # Side Effects
/// - Sleeps `policy.delay` between failed attempts (not before the first)
/// - Writes LegacyDefaultPrinterMode when a default printer is requested
pub fn connect_printer(
    request: &PrinterConnectionRequest,
    policy: &RetryPolicy,
    spooler: &dyn PrinterSpooler,
    registry: &dyn RegistryAdapter,
    log: &dyn OperationLog,
    sleeper: &dyn Sleeper,
) -> Result<u32, AppError> {
    let max_attempts = policy.max_attempts.max(1);
    let mut last_status = StatusCode::SUCCESS;

    info!(
        printer = %request.printer_path,
        make_default = request.make_default,
        "Connecting printer"
    );

    for attempt in 1..=max_attempts {
        match attempt_connection(request, spooler, registry, log) {
            Ok(()) => {
                info!(printer = %request.printer_path, attempt, "Printer connected");
                return Ok(attempt);
            }
            Err(status) => {
                last_status = status;
                log.error(&format!(
                    "Attempt {} of {} to connect printer {} failed",
                    attempt, max_attempts, request.printer_path
                ));
                if attempt < max_attempts {
                    sleeper.sleep(policy.delay);
                }
            }
        }
    }

    Err(AppError::PrinterConnectionFailed {
        printer: request.printer_path.clone(),
        attempts: max_attempts,
        status: last_status,
    })
}

fn attempt_connection(
    request: &PrinterConnectionRequest,
    spooler: &dyn PrinterSpooler,
    registry: &dyn RegistryAdapter,
    log: &dyn OperationLog,
) -> Result<(), StatusCode> {
    let printer = request.printer_path.as_str();

    let added = spooler.add_connection(printer);
    log_operation(
        log,
        level_for(status_of(&added)),
        &format!("AddPrinterConnection {}", printer),
        status_of(&added),
    );
    added?;

    if !request.make_default {
        return Ok(());
    }

    // Not fatal: SetDefaultPrinter is still tried; it may stick anyway
    if let Err(e) = enable_legacy_default_printer(registry) {
        warn!(error = %e, "Could not enable legacy default printer mode");
        log.error(&e.user_message());
    }

    let defaulted = spooler.set_default(printer);
    log_operation(
        log,
        level_for(status_of(&defaulted)),
        &format!("SetDefaultPrinter {}", printer),
        status_of(&defaulted),
    );
    defaulted
}

fn status_of(result: &Result<(), StatusCode>) -> StatusCode {
    match result {
        Ok(()) => StatusCode::SUCCESS,
        Err(status) => *status,
    }
}

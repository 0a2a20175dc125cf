//! Core module - domain types and the two retry loops

pub mod printer;
pub mod profile;
pub mod share;
pub mod status;
pub mod types;

pub use printer::connect_printer;
pub use share::reconcile_share;
pub use status::StatusCode;
pub use types::*;

use crate::adapters::{LogLevel, OperationLog};

/// Info for a successful call, error otherwise
pub(crate) fn level_for(status: StatusCode) -> LogLevel {
    if status.is_success() {
        LogLevel::Info
    } else {
        LogLevel::Error
    }
}

/// Logs an OS call as "<operation> -> <code> <message>"
pub(crate) fn log_operation(
    log: &dyn OperationLog,
    level: LogLevel,
    operation: &str,
    status: StatusCode,
) {
    log.write(level, &format!("{} -> {} {}", operation, status.0, status.message()));
}

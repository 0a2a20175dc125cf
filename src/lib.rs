//! # ConnectTo Library
//!
//! Backend for ConnectTo, a small command-line tool that login scripts and
//! scheduled tasks use to map network shares to drive letters and to connect
//! network printers on Windows workstations.
//!
//! ## Architecture
//!
//! The library is organized into modular components:
//!
//! - **core**: Domain types, the share reconciler and the printer connector
//! - **adapters**: Traits for the OS collaborators and their Win32 implementations
//! - **commands**: Exact argument dispatch and thin command handlers
//! - **errors**: Unified error handling with AppError
//! - **infra**: Infrastructure concerns (logging, paths, settings)
//!
//! ## Modules
pub mod adapters;
pub mod commands;
pub mod core;
mod errors;
pub mod infra;

// Re-export commonly used types
pub use crate::core::*;
pub use errors::AppError;
pub use infra::Settings;

// ## Exit codes
//
// The exit code is the contract with the calling script:
// - 0: success
// - 1: usage error, invalid drive letter or resource, printer failure
// - any other value: the Win32 status the share reconciler last observed
//
// ## Testing
//
// Run tests with: `cargo test`

use adapters::Platform;
use commands::Context;

/// Entry point used by the `ConnectTo` binary; returns the process exit code
pub fn run() -> i32 {
    let debug_enabled = infra::is_debug_enabled();

    // Keep the guard alive for the whole run so the debug file gets flushed
    let _log_guard = match infra::init_tracing(debug_enabled) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("[ConnectTo] {}", e);
            None
        }
    };

    let settings = Settings::load_or_default(infra::get_settings_path().as_deref());
    tracing::debug!(?settings, "Settings loaded");

    let args: Vec<String> = std::env::args().skip(1).collect();
    tracing::debug!(?args, "Command line arguments");

    let platform = Platform::native(&settings.event_source);
    let ctx = Context::new(&platform, &settings);

    let code = commands::run_cli(&args, &ctx, &mut std::io::stdout());
    tracing::debug!(exit_code = code, "Finished");
    code
}

// ============================================================================
// Unit Tests
// ============================================================================

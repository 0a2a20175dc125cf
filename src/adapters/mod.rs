//! OS collaborator adapters
//!
//! The traits describe the narrow slice of the OS the commands need. Win32
//! implementations live in `windows`; other hosts get stand-ins that report
//! `ERROR_NOT_SUPPORTED`.

pub mod event_log;
pub mod network;
pub mod printing;
pub mod registry;
pub mod timing;

#[cfg(not(target_os = "windows"))]
pub mod unsupported;
#[cfg(target_os = "windows")]
pub mod windows;

pub use event_log::{CompositeLog, LogLevel, OperationLog, TracingLog};
pub use network::NetworkResources;
pub use printing::PrinterSpooler;
pub use registry::RegistryAdapter;
pub use timing::{Sleeper, ThreadSleeper};

#[cfg(not(target_os = "windows"))]
pub use unsupported::UnsupportedPlatform;
#[cfg(target_os = "windows")]
pub use self::windows::{WindowsEventLog, WindowsNetwork, WindowsPrinters, WindowsRegistry};

/// The collaborators a real invocation runs against
pub struct Platform {
    pub network: Box<dyn NetworkResources>,
    pub printers: Box<dyn PrinterSpooler>,
    pub registry: Box<dyn RegistryAdapter>,
    pub log: Box<dyn OperationLog>,
    pub sleeper: Box<dyn Sleeper>,
}

impl Platform {
    /// Win32 collaborators; operational entries go to tracing and the Application event log
    #[cfg(target_os = "windows")]
    pub fn native(event_source: &str) -> Self {
        let mut log = CompositeLog::new().with(Box::new(TracingLog));
        match WindowsEventLog::open(event_source) {
            Ok(event_log) => log = log.with(Box::new(event_log)),
            Err(status) => tracing::warn!(
                source = event_source,
                %status,
                "Could not open event log source, logging to tracing only"
            ),
        }

        Platform {
            network: Box::new(WindowsNetwork::new()),
            printers: Box::new(WindowsPrinters::new()),
            registry: Box::new(WindowsRegistry::new()),
            log: Box::new(log),
            sleeper: Box::new(ThreadSleeper),
        }
    }

    /// Stand-ins that answer ERROR_NOT_SUPPORTED; operational entries go to tracing
    #[cfg(not(target_os = "windows"))]
    pub fn native(event_source: &str) -> Self {
        tracing::debug!(source = event_source, "No event log on this platform");

        Platform {
            network: Box::new(UnsupportedPlatform),
            printers: Box::new(UnsupportedPlatform),
            registry: Box::new(UnsupportedPlatform),
            log: Box::new(TracingLog),
            sleeper: Box::new(ThreadSleeper),
        }
    }
}

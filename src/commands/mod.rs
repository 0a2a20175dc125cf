//! Command layer
//!
//! Exact argument dispatch plus thin handlers. Handlers validate their input
//! and delegate the work to core; the only place errors turn into exit codes
//! is `run_cli`.

pub mod printer;
pub mod share;

pub use printer::connect_to_printer;
pub use share::map_share;

use crate::adapters::{NetworkResources, OperationLog, Platform, PrinterSpooler, RegistryAdapter, Sleeper};
use crate::infra::Settings;
use crate::AppError;
use std::io::Write;
use tracing::error;

pub const USAGE: &str = "Usage: ConnectTo -printer <printer>
       ConnectTo -defaultprinter <printer>
       ConnectTo -share <letter> [label] <path>";

/// A parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Printer {
        printer: String,
        make_default: bool,
    },
    Share {
        drive: String,
        label: Option<String>,
        path: String,
    },
}

impl Command {
    /// Parses the arguments after the program name
    ///
    /// The first token and the argument count must match exactly; anything
    /// else is `AppError::Usage`.
    pub fn parse(args: &[String]) -> Result<Self, AppError> {
        let args: Vec<&str> = args.iter().map(String::as_str).collect();

        match args.as_slice() {
            ["-printer", printer] => Ok(Command::Printer {
                printer: printer.to_string(),
                make_default: false,
            }),
            ["-defaultprinter", printer] => Ok(Command::Printer {
                printer: printer.to_string(),
                make_default: true,
            }),
            ["-share", drive, path] => Ok(Command::Share {
                drive: drive.to_string(),
                label: None,
                path: path.to_string(),
            }),
            ["-share", drive, label, path] => Ok(Command::Share {
                drive: drive.to_string(),
                label: Some(label.to_string()),
                path: path.to_string(),
            }),
            _ => Err(AppError::Usage),
        }
    }
}

/// Collaborators and settings a command runs against
pub struct Context<'a> {
    pub network: &'a dyn NetworkResources,
    pub printers: &'a dyn PrinterSpooler,
    pub registry: &'a dyn RegistryAdapter,
    pub log: &'a dyn OperationLog,
    pub sleeper: &'a dyn Sleeper,
    pub settings: &'a Settings,
}

impl<'a> Context<'a> {
    pub fn new(platform: &'a Platform, settings: &'a Settings) -> Self {
        Context {
            network: platform.network.as_ref(),
            printers: platform.printers.as_ref(),
            registry: platform.registry.as_ref(),
            log: platform.log.as_ref(),
            sleeper: platform.sleeper.as_ref(),
            settings,
        }
    }
}

/// Runs the handler for `command`
pub fn execute(command: &Command, ctx: &Context) -> Result<(), AppError> {
    match command {
        Command::Printer { printer, make_default } => {
            connect_to_printer(printer, *make_default, ctx).map(|_| ())
        }
        Command::Share { drive, label, path } => {
            map_share(drive, label.as_deref(), path, ctx).map(|_| ())
        }
    }
}

/// Parses, executes and returns the process exit code
///
/// The usage text goes to `out`; failures go to the operational log.
pub fn run_cli(args: &[String], ctx: &Context, out: &mut dyn Write) -> i32 {
    let command = match Command::parse(args) {
        Ok(command) => command,
        Err(e) => {
            let _ = writeln!(out, "{}", USAGE);
            return e.exit_code();
        }
    };

    match execute(&command, ctx) {
        Ok(()) => 0,
        Err(e) => {
            error!(code = e.code(), category = e.category(), "{}", e);
            ctx.log.error(&e.user_message());
            if let Some(remediation) = e.remediation() {
                tracing::info!("{}", remediation);
            }
            e.exit_code()
        }
    }
}

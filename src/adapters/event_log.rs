//! Operational log collaborator
//!
//! The operational log is what an administrator reads after a login script
//! ran: one entry per OS call with its status code and message. It is
//! append-only and fire-and-forget; a failing sink never fails the command.

/// Severity of an operational log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Error,
}

/// Trait for writing operational log entries
pub trait OperationLog: Send + Sync {
    fn write(&self, level: LogLevel, message: &str);

    fn info(&self, message: &str) {
        self.write(LogLevel::Info, message);
    }

    fn error(&self, message: &str) {
        self.write(LogLevel::Error, message);
    }
}

/// Re-emits operational entries as tracing events
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLog;

impl OperationLog for TracingLog {
    fn write(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Info => tracing::info!(target: "connectto::oplog", "{}", message),
            LogLevel::Error => tracing::error!(target: "connectto::oplog", "{}", message),
        }
    }
}

/// Fans every entry out to several sinks
#[derive(Default)]
pub struct CompositeLog {
    sinks: Vec<Box<dyn OperationLog>>,
}

impl CompositeLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, sink: Box<dyn OperationLog>) -> Self {
        self.sinks.push(sink);
        self
    }
}

impl OperationLog for CompositeLog {
    fn write(&self, level: LogLevel, message: &str) {
        for sink in &self.sinks {
            sink.write(level, message);
        }
    }
}

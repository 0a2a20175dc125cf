//! Share reconciler
//!
//! Drives what a drive letter is connected to toward a desired remote path.
//! Each iteration re-queries the OS, takes at most one corrective step, then
//! waits. The loop stops on the first observation that matches, or after
//! `policy.max_attempts` iterations.
//!
//! # Corrective steps
//! - not connected: connect to the desired path
//! - connection unavailable (remembered, server unreachable): reconnect to the
//!   remembered path first. Cancelling an unavailable persistent connection
//!   fails with the same error, so reachability has to come back before the
//!   mapping can be changed
//! - connected elsewhere: forced cancel; the connect happens on a later
//!   iteration, after the state has been observed again
//! - anything else: logged and left alone
//!
//! Paths are compared with exact, case-sensitive equality.

use crate::adapters::{LogLevel, NetworkResources, OperationLog, Sleeper};
use crate::core::{
    level_for, log_operation, CorrectiveAction, DriveMapping, ObservedState, ReconcileOutcome,
    ReconciliationAttempt, RetryPolicy, StatusCode,
};
use tracing::{debug, info};

/// Runs the reconciliation loop for `mapping`
///
/// The outcome is matched only when a query reported the desired path. A run
/// that gives up carries the last failing query status. When the last query
/// succeeded (the drive still points elsewhere) it carries the last failed
/// corrective status instead, or `ERROR_ALREADY_ASSIGNED` if none failed.
pub fn reconcile_share(
    mapping: &DriveMapping,
    policy: &RetryPolicy,
    network: &dyn NetworkResources,
    log: &dyn OperationLog,
    sleeper: &dyn Sleeper,
) -> ReconcileOutcome {
    let local_name = mapping.drive.local_name();
    let desired = mapping.remote_path.as_str();
    let max_attempts = policy.max_attempts.max(1);

    info!(drive = %local_name, remote = desired, "Reconciling drive mapping");

    let mut index = 0;
    let mut last_corrective_failure = None;
    loop {
        index += 1;

        let (query_status, observed_path) = network.query(&local_name);
        let observed = ObservedState::from_query(query_status, observed_path);
        let query_level = match observed {
            ObservedState::Other(_) => LogLevel::Error,
            _ => LogLevel::Info,
        };
        log_operation(
            log,
            query_level,
            &format!("WNetGetConnection {}", local_name),
            query_status,
        );

        let (action, action_status) = match &observed {
            ObservedState::Mapped(current) if current == desired => {
                (CorrectiveAction::AlreadyMapped, None)
            }
            ObservedState::Unavailable(remembered) => {
                let status = network.connect(&local_name, remembered, true);
                log_operation(
                    log,
                    level_for(status),
                    &format!("WNetAddConnection2 {} {} (restore)", local_name, remembered),
                    status,
                );
                (
                    CorrectiveAction::Restore {
                        remote: remembered.clone(),
                    },
                    Some(status),
                )
            }
            ObservedState::Unmapped => {
                let status = network.connect(&local_name, desired, true);
                log_operation(
                    log,
                    level_for(status),
                    &format!("WNetAddConnection2 {} {}", local_name, desired),
                    status,
                );
                (
                    CorrectiveAction::Connect {
                        remote: desired.to_string(),
                    },
                    Some(status),
                )
            }
            ObservedState::Mapped(current) => {
                let status = network.disconnect(&local_name, true);
                log_operation(
                    log,
                    level_for(status),
                    &format!("WNetCancelConnection2 {} (was {})", local_name, current),
                    status,
                );
                (CorrectiveAction::Cancel, Some(status))
            }
            ObservedState::Other(status) => {
                log.error(&format!(
                    "{} is in an unexpected state ({}); no action taken",
                    local_name, status
                ));
                (CorrectiveAction::None, None)
            }
        };

        let attempt = ReconciliationAttempt {
            index,
            query_status,
            observed,
            action,
            action_status,
        };
        debug!(?attempt, "Reconciliation attempt");

        if attempt.action == CorrectiveAction::AlreadyMapped {
            info!(drive = %local_name, attempts = index, "Drive mapping matches");
            return ReconcileOutcome {
                status: query_status,
                attempts: index,
                matched: true,
            };
        }
        if let Some(status) = attempt.action_status.filter(|s| !s.is_success()) {
            last_corrective_failure = Some(status);
        }

        sleeper.sleep(policy.delay);

        if index >= max_attempts {
            let status = if query_status.is_success() {
                last_corrective_failure.unwrap_or(StatusCode::ALREADY_ASSIGNED)
            } else {
                query_status
            };
            return ReconcileOutcome {
                status,
                attempts: index,
                matched: false,
            };
        }
    }
}

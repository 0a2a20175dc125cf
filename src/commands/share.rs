//! Share command (`-share`)

use super::Context;
use crate::core::profile::persist_share_label;
use crate::core::{reconcile_share, DriveLetter, DriveMapping, ReconcileOutcome, ShareLabel};
use crate::AppError;
use tracing::warn;

/// Maps `drive` to `path` and stores the optional friendly label
///
/// # Returns
/// * `Ok(outcome)` - The drive points at the path
/// * `Err(AppError::InvalidDriveLetter)` - Rejected before any network call
/// * `Err(AppError::ShareMappingFailed)` - Reconciliation gave up; carries the last status
///
/// # Side Effects
/// - Label is written only after a successful mapping. A failed write is
///   logged and does not change the result.
pub fn map_share(
    drive: &str,
    label: Option<&str>,
    path: &str,
    ctx: &Context,
) -> Result<ReconcileOutcome, AppError> {
    let drive = DriveLetter::parse(drive, &ctx.settings.drive_range())?;
    let mapping = DriveMapping::new(drive, path)?;

    let outcome = reconcile_share(
        &mapping,
        &ctx.settings.share_policy(),
        ctx.network,
        ctx.log,
        ctx.sleeper,
    );

    if !outcome.is_success() {
        return Err(AppError::ShareMappingFailed {
            drive: drive.letter(),
            remote: mapping.remote_path.clone(),
            status: outcome.status,
        });
    }

    ctx.log.info(&format!("Mapped {} to {}", drive, mapping.remote_path));

    if let Some(label) = label.filter(|l| !l.trim().is_empty()) {
        let share_label = ShareLabel::new(&mapping.remote_path, label);
        match persist_share_label(ctx.registry, &share_label) {
            Ok(()) => ctx.log.info(&format!(
                "Set label '{}' for {}",
                share_label.label, mapping.remote_path
            )),
            Err(e) => {
                warn!(error = %e, key = %share_label.key(), "Could not store share label");
                ctx.log.error(&e.user_message());
            }
        }
    }

    Ok(outcome)
}

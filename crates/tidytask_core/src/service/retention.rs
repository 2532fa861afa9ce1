//! Retention sweeper for the recycle bin.
//!
//! # Responsibility
//! - Purge recycle-bin entries older than the retention window, across all
//!   users in one pass.
//!
//! # Invariants
//! - The window is one global constant; it is not configurable per user.
//! - Sweeping is idempotent; a pass with no expirations changes nothing.

use crate::repo::bin_repo::RecycleBinRepository;
use crate::repo::task_repo::RepoResult;
use crate::service::now_epoch_ms;
use log::info;

/// How long a deleted task stays recoverable: 10 days, in milliseconds.
pub const RETENTION_WINDOW_MS: i64 = 10 * 24 * 60 * 60 * 1000;

/// Purges entries whose deletion time is strictly older than
/// `now - RETENTION_WINDOW_MS`. Intended to run once at startup; a deployed
/// variant may also run it on a schedule.
pub fn sweep_expired<B: RecycleBinRepository>(bin: &B) -> RepoResult<usize> {
    sweep_expired_before(bin, now_epoch_ms() - RETENTION_WINDOW_MS)
}

/// Purges entries strictly older than an explicit cutoff.
///
/// Split out from [`sweep_expired`] so tests and backfill jobs can supply
/// their own clock.
pub fn sweep_expired_before<B: RecycleBinRepository>(bin: &B, cutoff_ms: i64) -> RepoResult<usize> {
    let purged = bin.purge_expired(cutoff_ms)?;
    info!("event=retention_sweep module=service status=ok cutoff_ms={cutoff_ms} purged={purged}");
    Ok(purged)
}

//! Startup catch-up: re-drive the persisted frame log through the live
//! pipeline before the transport starts delivering.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{info, warn};

use crate::crypto::ChannelKeys;
use crate::framelog::{FrameLogError, FrameLogReader};
use crate::pipeline;
use crate::store::MeshState;

/// Coarse progress cadence while catching up.
pub const REPLAY_PROGRESS_INTERVAL: u64 = 10_000;

/// Replay every persisted frame, in original write order, through the same
/// decode/dispatch path live traffic takes. Per-frame logging is suppressed;
/// progress is reported every [`REPLAY_PROGRESS_INTERVAL`] frames.
///
/// Unreadable records are logged and skipped. The cancellation flag is
/// polled between records; a cancelled catch-up returns the count so far and
/// leaves the stores partially populated — there is no rollback.
pub fn catch_up(
    state: &MeshState,
    keys: &ChannelKeys,
    path: &Path,
    cancel: &AtomicBool,
) -> Result<u64, FrameLogError> {
    if !path.exists() {
        info!(path = %path.display(), "no frame log to catch up from");
        return Ok(0);
    }

    let reader = FrameLogReader::open(path)?;
    let mut replayed: u64 = 0;
    let mut skipped: u64 = 0;

    for item in reader {
        if cancel.load(Ordering::Relaxed) {
            info!(replayed, "catch-up cancelled");
            break;
        }

        match item {
            Ok(record) => {
                pipeline::handle_raw_payload_quiet(state, keys, &record.payload);
                replayed += 1;
                if replayed % REPLAY_PROGRESS_INTERVAL == 0 {
                    info!(replayed, "catching up");
                }
            }
            Err(err) => {
                skipped += 1;
                warn!(error = %err, "skipping unreadable frame record");
            }
        }
    }

    info!(replayed, skipped, "catch-up finished");
    Ok(replayed)
}

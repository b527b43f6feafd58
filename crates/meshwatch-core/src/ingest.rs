//! Live-ingestion glue: the transport delivery callback.
//!
//! The MQTT client itself lives outside this crate; whatever drives the
//! subscription calls [`Ingestor::handle_message`] per delivered message,
//! possibly from several delivery contexts at once.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::crypto::ChannelKeys;
use crate::framelog::FrameLog;
use crate::pipeline;
use crate::store::MeshState;

#[derive(Clone)]
pub struct Ingestor {
    state: Arc<MeshState>,
    keys: ChannelKeys,
    raw_log: Arc<FrameLog>,
    /// Some uplinks mirror traffic on `.../json/...` topics; those are
    /// archived for later inspection but never parsed.
    json_log: Option<Arc<FrameLog>>,
}

impl Ingestor {
    pub fn new(
        state: Arc<MeshState>,
        keys: ChannelKeys,
        raw_log: Arc<FrameLog>,
        json_log: Option<Arc<FrameLog>>,
    ) -> Self {
        Self {
            state,
            keys,
            raw_log,
            json_log,
        }
    }

    pub fn state(&self) -> &MeshState {
        &self.state
    }

    /// Handle one delivered transport message: archive the raw frame, then
    /// run it through the decode/dispatch pipeline. Never fails outward; an
    /// archive failure is logged and does not block parsing.
    pub fn handle_message(&self, topic: &str, payload: &[u8]) {
        if topic.contains("/json/") {
            debug!(topic, "received json mirror message");
            if let Some(json_log) = &self.json_log {
                if let Err(err) = json_log.append(topic, payload) {
                    warn!(error = %err, topic, "failed to archive json mirror message");
                }
            }
            return;
        }

        if let Err(err) = self.raw_log.append(topic, payload) {
            warn!(error = %err, topic, "failed to archive raw frame");
        }

        pipeline::handle_raw_payload(&self.state, &self.keys, payload);
    }
}

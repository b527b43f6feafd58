use std::path::PathBuf;

use crate::crypto::DEFAULT_CHANNEL_KEY;
use crate::store::DEFAULT_RETENTION_LIMIT;

/// Core settings. How these get populated (files, env, flags) is the
/// embedding application's concern; the core only consumes the struct.
#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// Per-store history bound.
    pub retention_limit: usize,
    /// Base64 channel key material, standard or URL-safe alphabet.
    pub channel_key: String,
    /// Append-only archive of raw frames, replayed on startup.
    pub raw_log_path: PathBuf,
    /// Sidecar archive for json mirror topics.
    pub json_log_path: PathBuf,
}

impl CoreConfig {
    /// Production deployments keep a separate frame log so a dev instance
    /// can run against the same directory without mixing archives.
    pub fn production() -> Self {
        Self {
            raw_log_path: PathBuf::from("log_prod.b64lines"),
            ..Self::default()
        }
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            retention_limit: DEFAULT_RETENTION_LIMIT,
            channel_key: DEFAULT_CHANNEL_KEY.to_string(),
            raw_log_path: PathBuf::from("log.b64lines"),
            json_log_path: PathBuf::from("log_json.b64lines"),
        }
    }
}

use crate::models::Summary;
use crate::proto::{NeighborInfo, Position, RouteDiscovery, Telemetry, User};
use crate::store::History;

/// One history per record kind. Created once at process start and passed by
/// reference to ingestion and the query surface; there is no global.
pub struct MeshState {
    pub users: History<User>,
    pub telemetry: History<Telemetry>,
    pub chats: History<String>,
    /// Payload lengths of packets the channel key could not decrypt.
    pub non_decryptable: History<usize>,
    /// One summary per packet that survived envelope decode, all ports.
    pub all_messages: History<Summary>,
    pub neighbors: History<NeighborInfo>,
    pub positions: History<Position>,
    pub traceroutes: History<RouteDiscovery>,
}

impl MeshState {
    pub fn new(retention_limit: usize) -> Self {
        Self {
            users: History::new(retention_limit),
            telemetry: History::new(retention_limit),
            chats: History::new(retention_limit),
            non_decryptable: History::new(retention_limit),
            all_messages: History::new(retention_limit),
            neighbors: History::new(retention_limit),
            positions: History::new(retention_limit),
            traceroutes: History::new(retention_limit),
        }
    }
}

impl Default for MeshState {
    fn default() -> Self {
        Self::new(crate::store::DEFAULT_RETENTION_LIMIT)
    }
}

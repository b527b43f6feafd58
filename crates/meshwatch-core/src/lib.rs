pub mod config;
pub mod crypto;
pub mod framelog;
pub mod ingest;
pub mod models;
pub mod pipeline;
pub mod proto;
pub mod replay;
pub mod store;

// Re-export the types the embedding application touches most.
pub use config::CoreConfig;
pub use crypto::{ChannelKeys, DEFAULT_CHANNEL_KEY};
pub use framelog::{FrameLog, FrameLogReader, FrameRecord};
pub use ingest::Ingestor;
pub use models::{FieldLookup, Observation, PacketMeta, Summary};
pub use pipeline::handle_raw_payload;
pub use replay::catch_up;
pub use store::{History, MeshState, DEFAULT_RETENTION_LIMIT};

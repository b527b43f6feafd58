mod history;
mod state;

pub use history::{History, DEFAULT_RETENTION_LIMIT};
pub use state::MeshState;

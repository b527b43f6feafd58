//! Hand-written prost definitions for the subset of the Meshtastic wire
//! format the pipeline touches. Field tags match the upstream protobufs so
//! frames captured from a real mesh decode unchanged; fields we never read
//! are left out and skipped by prost during decode.

mod mesh;
mod metrics;

pub use mesh::{
    mesh_packet, routing, Data, MapReport, MeshPacket, Neighbor, NeighborInfo, PortNum, Position,
    Priority, RouteDiscovery, Routing, ServiceEnvelope, User,
};
pub use metrics::{
    telemetry, AirQualityMetrics, DeviceMetrics, EnvironmentMetrics, HealthMetrics, LocalStats,
    PowerMetrics, Telemetry,
};

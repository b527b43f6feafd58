//! Envelope, packet and record payload messages (mqtt.proto / mesh.proto).

/// Outer container published to the MQTT uplink topics.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ServiceEnvelope {
    #[prost(message, optional, tag = "1")]
    pub packet: Option<MeshPacket>,
    #[prost(string, tag = "2")]
    pub channel_id: String,
    #[prost(string, tag = "3")]
    pub gateway_id: String,
}

/// An addressed packet as it travels over the mesh.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MeshPacket {
    #[prost(fixed32, tag = "1")]
    pub from: u32,
    #[prost(fixed32, tag = "2")]
    pub to: u32,
    #[prost(uint32, tag = "3")]
    pub channel: u32,
    #[prost(oneof = "mesh_packet::PayloadVariant", tags = "4, 5")]
    pub payload_variant: Option<mesh_packet::PayloadVariant>,
    #[prost(fixed32, tag = "6")]
    pub id: u32,
    #[prost(fixed32, tag = "7")]
    pub rx_time: u32,
    #[prost(float, tag = "8")]
    pub rx_snr: f32,
    #[prost(uint32, tag = "9")]
    pub hop_limit: u32,
    #[prost(bool, tag = "10")]
    pub want_ack: bool,
    #[prost(enumeration = "Priority", tag = "11")]
    pub priority: i32,
    #[prost(int32, tag = "12")]
    pub rx_rssi: i32,
    #[prost(bool, tag = "14")]
    pub via_mqtt: bool,
    #[prost(uint32, tag = "15")]
    pub hop_start: u32,
    #[prost(bytes = "vec", tag = "16")]
    pub public_key: Vec<u8>,
    #[prost(bool, tag = "17")]
    pub pki_encrypted: bool,
}

pub mod mesh_packet {
    /// Either an opaque encrypted application payload or a packet some
    /// gateway already decoded before publishing.
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum PayloadVariant {
        #[prost(message, tag = "4")]
        Decoded(super::Data),
        #[prost(bytes = "vec", tag = "5")]
        Encrypted(Vec<u8>),
    }
}

/// The decrypted application payload: a port selector plus opaque bytes.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Data {
    #[prost(enumeration = "PortNum", tag = "1")]
    pub portnum: i32,
    #[prost(bytes = "vec", tag = "2")]
    pub payload: Vec<u8>,
    #[prost(bool, tag = "3")]
    pub want_response: bool,
    #[prost(fixed32, tag = "4")]
    pub dest: u32,
    #[prost(fixed32, tag = "5")]
    pub source: u32,
    #[prost(fixed32, tag = "6")]
    pub request_id: u32,
    #[prost(fixed32, tag = "7")]
    pub reply_id: u32,
    #[prost(fixed32, tag = "8")]
    pub emoji: u32,
    #[prost(uint32, optional, tag = "9")]
    pub bitfield: Option<u32>,
}

/// Application port numbers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum PortNum {
    UnknownApp = 0,
    TextMessageApp = 1,
    RemoteHardwareApp = 2,
    PositionApp = 3,
    NodeinfoApp = 4,
    RoutingApp = 5,
    AdminApp = 6,
    TextMessageCompressedApp = 7,
    WaypointApp = 8,
    AudioApp = 9,
    DetectionSensorApp = 10,
    AlertApp = 11,
    ReplyApp = 32,
    IpTunnelApp = 33,
    PaxcounterApp = 34,
    SerialApp = 64,
    StoreForwardApp = 65,
    RangeTestApp = 66,
    TelemetryApp = 67,
    ZpsApp = 68,
    SimulatorApp = 69,
    TracerouteApp = 70,
    NeighborinfoApp = 71,
    AtakPlugin = 72,
    MapReportApp = 73,
    PowerstressApp = 74,
    PrivateApp = 256,
    AtakForwarder = 257,
    Max = 511,
}

impl PortNum {
    /// Upstream enum spelling, used for the summary feed.
    pub fn name(self) -> &'static str {
        match self {
            PortNum::UnknownApp => "UNKNOWN_APP",
            PortNum::TextMessageApp => "TEXT_MESSAGE_APP",
            PortNum::RemoteHardwareApp => "REMOTE_HARDWARE_APP",
            PortNum::PositionApp => "POSITION_APP",
            PortNum::NodeinfoApp => "NODEINFO_APP",
            PortNum::RoutingApp => "ROUTING_APP",
            PortNum::AdminApp => "ADMIN_APP",
            PortNum::TextMessageCompressedApp => "TEXT_MESSAGE_COMPRESSED_APP",
            PortNum::WaypointApp => "WAYPOINT_APP",
            PortNum::AudioApp => "AUDIO_APP",
            PortNum::DetectionSensorApp => "DETECTION_SENSOR_APP",
            PortNum::AlertApp => "ALERT_APP",
            PortNum::ReplyApp => "REPLY_APP",
            PortNum::IpTunnelApp => "IP_TUNNEL_APP",
            PortNum::PaxcounterApp => "PAXCOUNTER_APP",
            PortNum::SerialApp => "SERIAL_APP",
            PortNum::StoreForwardApp => "STORE_FORWARD_APP",
            PortNum::RangeTestApp => "RANGE_TEST_APP",
            PortNum::TelemetryApp => "TELEMETRY_APP",
            PortNum::ZpsApp => "ZPS_APP",
            PortNum::SimulatorApp => "SIMULATOR_APP",
            PortNum::TracerouteApp => "TRACEROUTE_APP",
            PortNum::NeighborinfoApp => "NEIGHBORINFO_APP",
            PortNum::AtakPlugin => "ATAK_PLUGIN",
            PortNum::MapReportApp => "MAP_REPORT_APP",
            PortNum::PowerstressApp => "POWERSTRESS_APP",
            PortNum::PrivateApp => "PRIVATE_APP",
            PortNum::AtakForwarder => "ATAK_FORWARDER",
            PortNum::Max => "MAX",
        }
    }
}

/// Delivery priority carried in the packet header.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum Priority {
    Unset = 0,
    Min = 1,
    Background = 10,
    Default = 64,
    Reliable = 70,
    Response = 80,
    High = 100,
    Alert = 110,
    Ack = 120,
    Max = 127,
}

/// Node identity broadcast (NODEINFO_APP).
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub long_name: String,
    #[prost(string, tag = "3")]
    pub short_name: String,
    #[prost(bytes = "vec", tag = "4")]
    #[serde(skip_serializing)]
    pub macaddr: Vec<u8>,
    #[prost(int32, tag = "5")]
    pub hw_model: i32,
    #[prost(bool, tag = "6")]
    pub is_licensed: bool,
    #[prost(int32, tag = "7")]
    pub role: i32,
    #[prost(bytes = "vec", tag = "8")]
    #[serde(skip_serializing)]
    pub public_key: Vec<u8>,
}

/// GPS fix broadcast (POSITION_APP). Coordinates are degrees * 1e7.
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    #[prost(sfixed32, optional, tag = "1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude_i: Option<i32>,
    #[prost(sfixed32, optional, tag = "2")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude_i: Option<i32>,
    #[prost(int32, optional, tag = "3")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub altitude: Option<i32>,
    #[prost(fixed32, tag = "4")]
    pub time: u32,
    #[prost(int32, tag = "5")]
    pub location_source: i32,
    #[prost(int32, tag = "6")]
    pub altitude_source: i32,
    #[prost(fixed32, tag = "7")]
    pub timestamp: u32,
    #[prost(int32, tag = "8")]
    pub timestamp_millis_adjust: i32,
    #[prost(sint32, optional, tag = "9")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub altitude_hae: Option<i32>,
    #[prost(sint32, optional, tag = "10")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub altitude_geoidal_separation: Option<i32>,
    #[prost(uint32, tag = "11")]
    pub pdop: u32,
    #[prost(uint32, tag = "12")]
    pub hdop: u32,
    #[prost(uint32, tag = "13")]
    pub vdop: u32,
    #[prost(uint32, tag = "14")]
    pub gps_accuracy: u32,
    #[prost(uint32, optional, tag = "15")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ground_speed: Option<u32>,
    #[prost(uint32, optional, tag = "16")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ground_track: Option<u32>,
    #[prost(uint32, tag = "17")]
    pub fix_quality: u32,
    #[prost(uint32, tag = "18")]
    pub fix_type: u32,
    #[prost(uint32, tag = "19")]
    pub sats_in_view: u32,
    #[prost(uint32, tag = "20")]
    pub sensor_id: u32,
    #[prost(uint32, tag = "21")]
    pub next_update: u32,
    #[prost(uint32, tag = "22")]
    pub seq_number: u32,
    #[prost(uint32, tag = "23")]
    pub precision_bits: u32,
}

/// Link quality report for the nodes a sender can hear (NEIGHBORINFO_APP).
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NeighborInfo {
    #[prost(uint32, tag = "1")]
    pub node_id: u32,
    #[prost(uint32, tag = "2")]
    pub last_sent_by_id: u32,
    #[prost(uint32, tag = "3")]
    pub node_broadcast_interval_secs: u32,
    #[prost(message, repeated, tag = "4")]
    pub neighbors: Vec<Neighbor>,
}

#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Neighbor {
    #[prost(uint32, tag = "1")]
    pub node_id: u32,
    #[prost(float, tag = "2")]
    pub snr: f32,
    #[prost(fixed32, tag = "3")]
    pub last_rx_time: u32,
    #[prost(uint32, tag = "4")]
    pub node_broadcast_interval_secs: u32,
}

/// Hop-by-hop route probe result (TRACEROUTE_APP).
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteDiscovery {
    #[prost(fixed32, repeated, tag = "1")]
    pub route: Vec<u32>,
    #[prost(int32, repeated, tag = "2")]
    pub snr_towards: Vec<i32>,
    #[prost(fixed32, repeated, tag = "3")]
    pub route_back: Vec<u32>,
    #[prost(int32, repeated, tag = "4")]
    pub snr_back: Vec<i32>,
}

/// Routing control traffic (ROUTING_APP). Summarized, never stored.
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Routing {
    #[prost(oneof = "routing::Variant", tags = "1, 2, 3")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<routing::Variant>,
}

pub mod routing {
    #[derive(Clone, PartialEq, ::prost::Oneof, serde::Serialize)]
    #[serde(rename_all = "camelCase")]
    pub enum Variant {
        #[prost(message, tag = "1")]
        RouteRequest(super::RouteDiscovery),
        #[prost(message, tag = "2")]
        RouteReply(super::RouteDiscovery),
        #[prost(int32, tag = "3")]
        ErrorReason(i32),
    }
}

/// Periodic self-report published by map-enabled nodes (MAP_REPORT_APP).
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapReport {
    #[prost(string, tag = "1")]
    pub long_name: String,
    #[prost(string, tag = "2")]
    pub short_name: String,
    #[prost(int32, tag = "3")]
    pub role: i32,
    #[prost(int32, tag = "4")]
    pub hw_model: i32,
    #[prost(string, tag = "5")]
    pub firmware_version: String,
    #[prost(int32, tag = "6")]
    pub region: i32,
    #[prost(int32, tag = "7")]
    pub modem_preset: i32,
    #[prost(bool, tag = "8")]
    pub has_default_channel: bool,
    #[prost(sfixed32, tag = "9")]
    pub latitude_i: i32,
    #[prost(sfixed32, tag = "10")]
    pub longitude_i: i32,
    #[prost(int32, tag = "11")]
    pub altitude: i32,
    #[prost(uint32, tag = "12")]
    pub position_precision: u32,
    #[prost(uint32, tag = "13")]
    pub num_online_local_nodes: u32,
}

//! Telemetry payloads (telemetry.proto): one wrapper, six metric variants.

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Telemetry {
    #[prost(fixed32, tag = "1")]
    pub time: u32,
    #[prost(oneof = "telemetry::Variant", tags = "2, 3, 4, 5, 6, 7")]
    pub variant: Option<telemetry::Variant>,
}

pub mod telemetry {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Variant {
        #[prost(message, tag = "2")]
        DeviceMetrics(super::DeviceMetrics),
        #[prost(message, tag = "3")]
        EnvironmentMetrics(super::EnvironmentMetrics),
        #[prost(message, tag = "4")]
        AirQualityMetrics(super::AirQualityMetrics),
        #[prost(message, tag = "5")]
        PowerMetrics(super::PowerMetrics),
        #[prost(message, tag = "6")]
        LocalStats(super::LocalStats),
        #[prost(message, tag = "7")]
        HealthMetrics(super::HealthMetrics),
    }
}

/// Battery, utilization and uptime of the radio itself.
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceMetrics {
    #[prost(uint32, optional, tag = "1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub battery_level: Option<u32>,
    #[prost(float, optional, tag = "2")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voltage: Option<f32>,
    #[prost(float, optional, tag = "3")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_utilization: Option<f32>,
    #[prost(float, optional, tag = "4")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub air_util_tx: Option<f32>,
    #[prost(uint32, optional, tag = "5")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uptime_seconds: Option<u32>,
}

#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentMetrics {
    #[prost(float, optional, tag = "1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[prost(float, optional, tag = "2")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relative_humidity: Option<f32>,
    #[prost(float, optional, tag = "3")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barometric_pressure: Option<f32>,
    #[prost(float, optional, tag = "4")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_resistance: Option<f32>,
    #[prost(float, optional, tag = "5")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voltage: Option<f32>,
    #[prost(float, optional, tag = "6")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<f32>,
    #[prost(uint32, optional, tag = "7")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iaq: Option<u32>,
    #[prost(float, optional, tag = "8")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f32>,
    #[prost(float, optional, tag = "9")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lux: Option<f32>,
    #[prost(float, optional, tag = "10")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub white_lux: Option<f32>,
    #[prost(float, optional, tag = "11")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ir_lux: Option<f32>,
    #[prost(float, optional, tag = "12")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uv_lux: Option<f32>,
    #[prost(uint32, optional, tag = "13")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wind_direction: Option<u32>,
    #[prost(float, optional, tag = "14")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wind_speed: Option<f32>,
    #[prost(float, optional, tag = "15")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f32>,
    #[prost(float, optional, tag = "16")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wind_gust: Option<f32>,
    #[prost(float, optional, tag = "17")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wind_lull: Option<f32>,
}

#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AirQualityMetrics {
    #[prost(uint32, optional, tag = "1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pm10_standard: Option<u32>,
    #[prost(uint32, optional, tag = "2")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pm25_standard: Option<u32>,
    #[prost(uint32, optional, tag = "3")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pm100_standard: Option<u32>,
    #[prost(uint32, optional, tag = "4")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pm10_environmental: Option<u32>,
    #[prost(uint32, optional, tag = "5")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pm25_environmental: Option<u32>,
    #[prost(uint32, optional, tag = "6")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pm100_environmental: Option<u32>,
    #[prost(uint32, optional, tag = "7")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub particles_03um: Option<u32>,
    #[prost(uint32, optional, tag = "8")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub particles_05um: Option<u32>,
    #[prost(uint32, optional, tag = "9")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub particles_10um: Option<u32>,
    #[prost(uint32, optional, tag = "10")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub particles_25um: Option<u32>,
    #[prost(uint32, optional, tag = "11")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub particles_50um: Option<u32>,
    #[prost(uint32, optional, tag = "12")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub particles_100um: Option<u32>,
    #[prost(uint32, optional, tag = "13")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub co2: Option<u32>,
}

#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PowerMetrics {
    #[prost(float, optional, tag = "1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ch1_voltage: Option<f32>,
    #[prost(float, optional, tag = "2")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ch1_current: Option<f32>,
    #[prost(float, optional, tag = "3")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ch2_voltage: Option<f32>,
    #[prost(float, optional, tag = "4")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ch2_current: Option<f32>,
    #[prost(float, optional, tag = "5")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ch3_voltage: Option<f32>,
    #[prost(float, optional, tag = "6")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ch3_current: Option<f32>,
}

/// Mesh-wide counters a node accumulates about its own channel view.
#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalStats {
    #[prost(uint32, tag = "1")]
    pub uptime_seconds: u32,
    #[prost(float, tag = "2")]
    pub channel_utilization: f32,
    #[prost(float, tag = "3")]
    pub air_util_tx: f32,
    #[prost(uint32, tag = "4")]
    pub num_packets_tx: u32,
    #[prost(uint32, tag = "5")]
    pub num_packets_rx: u32,
    #[prost(uint32, tag = "6")]
    pub num_packets_rx_bad: u32,
    #[prost(uint32, tag = "7")]
    pub num_online_nodes: u32,
    #[prost(uint32, tag = "8")]
    pub num_total_nodes: u32,
    #[prost(uint32, tag = "9")]
    pub num_rx_dupe: u32,
    #[prost(uint32, tag = "10")]
    pub num_tx_relay: u32,
    #[prost(uint32, tag = "11")]
    pub num_tx_relay_canceled: u32,
}

#[derive(Clone, PartialEq, ::prost::Message, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthMetrics {
    #[prost(uint32, optional, tag = "1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heart_bpm: Option<u32>,
    #[prost(uint32, optional, tag = "2")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sp_o2: Option<u32>,
    #[prost(float, optional, tag = "3")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

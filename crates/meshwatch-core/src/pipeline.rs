//! Decode/dispatch pipeline: service envelope -> decrypt -> port dispatch
//! -> store inserts.
//!
//! `handle_raw_payload` is the single entry point for both live delivery and
//! replay. It never fails outward; every failure is a logged, terminal,
//! per-frame outcome visible only through the stores.

use prost::Message;
use tracing::{error, info};

use crate::crypto::{self, ChannelKeys};
use crate::models::{Observation, PacketMeta, Summary};
use crate::proto::{
    mesh_packet, telemetry, Data, MapReport, NeighborInfo, PortNum, Position, RouteDiscovery,
    Routing, ServiceEnvelope, Telemetry, User,
};
use crate::store::MeshState;

/// Handle one raw frame as delivered by the transport.
pub fn handle_raw_payload(state: &MeshState, keys: &ChannelKeys, payload: &[u8]) {
    process(state, keys, payload, false);
}

/// Replay variant: identical semantics, per-frame logging suppressed so a
/// multi-million-frame catch-up doesn't drown the log.
pub(crate) fn handle_raw_payload_quiet(state: &MeshState, keys: &ChannelKeys, payload: &[u8]) {
    process(state, keys, payload, true);
}

fn process(state: &MeshState, keys: &ChannelKeys, payload: &[u8], quiet: bool) {
    let envelope = match ServiceEnvelope::decode(payload) {
        Ok(envelope) => envelope,
        Err(err) => {
            if !quiet {
                error!(error = %err, "error decoding service envelope");
            }
            return;
        }
    };
    let Some(packet) = envelope.packet else {
        if !quiet {
            error!("service envelope missing packet");
        }
        return;
    };

    let meta = PacketMeta::from_packet(&packet);
    let mut summary = Summary::default();

    let data = match packet.payload_variant {
        Some(mesh_packet::PayloadVariant::Encrypted(ciphertext)) => {
            summary.length = ciphertext.len();

            let nonce = crypto::packet_nonce(packet.id, packet.from);
            let plaintext = crypto::decrypt(keys.key_for(packet.channel), &nonce, &ciphertext);
            match Data::decode(plaintext.as_slice()) {
                Ok(data) => {
                    summary.encrypted = 0;
                    data
                }
                Err(_) => {
                    // Wrong key and foreign key are indistinguishable here;
                    // either way the frame is recorded as non-decryptable.
                    if !quiet {
                        error!(
                            from = packet.from,
                            to = packet.to,
                            channel = packet.channel,
                            length = ciphertext.len(),
                            "error decrypting message"
                        );
                    }
                    state
                        .non_decryptable
                        .add(Observation::new(ciphertext.len(), meta.clone()), &[]);
                    summary.encrypted = 1;
                    state.all_messages.add(Observation::new(summary, meta), &[]);
                    return;
                }
            }
        }
        // Gateways occasionally publish pre-decoded packets, but they are
        // duplicated from (and noisier than) the encrypted stream, so they
        // are dropped without leaving any record.
        Some(mesh_packet::PayloadVariant::Decoded(_)) | None => {
            if !quiet {
                error!("no usable message payload");
            }
            return;
        }
    };

    summary.port_num = data.portnum as u32;
    summary.port_name = port_name(data.portnum);

    // Inner decode failures below drop the packet without a summary entry;
    // only frames whose port payload parsed (or whose port is unknown) reach
    // the all-messages feed.
    match PortNum::try_from(data.portnum) {
        Ok(PortNum::TelemetryApp) => {
            let record = match Telemetry::decode(data.payload.as_slice()) {
                Ok(record) => record,
                Err(err) => {
                    if !quiet {
                        error!(error = %err, "error decoding telemetry payload");
                    }
                    return;
                }
            };
            match &record.variant {
                Some(telemetry::Variant::DeviceMetrics(m)) => {
                    if !quiet {
                        info!(from = meta.from, "received device metrics telemetry");
                    }
                    summary.rendered = render_json(m);
                }
                Some(telemetry::Variant::EnvironmentMetrics(m)) => {
                    if !quiet {
                        info!(from = meta.from, "received environment metrics telemetry");
                    }
                    summary.rendered = render_json(m);
                }
                Some(telemetry::Variant::AirQualityMetrics(m)) => {
                    if !quiet {
                        info!(from = meta.from, "received air quality telemetry");
                    }
                    summary.rendered = render_json(m);
                }
                Some(telemetry::Variant::PowerMetrics(m)) => {
                    if !quiet {
                        info!(from = meta.from, "received power metrics telemetry");
                    }
                    summary.rendered = render_json(m);
                }
                Some(telemetry::Variant::LocalStats(m)) => {
                    if !quiet {
                        info!(from = meta.from, "received local stats telemetry");
                    }
                    summary.rendered = render_json(m);
                }
                Some(telemetry::Variant::HealthMetrics(m)) => {
                    if !quiet {
                        info!(from = meta.from, "received health metrics telemetry");
                    }
                    summary.rendered = render_json(m);
                }
                None => {
                    if !quiet {
                        error!(from = meta.from, "unknown telemetry variant");
                    }
                }
            }
            let key = meta.from.to_string();
            state
                .telemetry
                .add(Observation::new(record, meta.clone()), &[&key]);
        }
        Ok(PortNum::NeighborinfoApp) => {
            let record = match NeighborInfo::decode(data.payload.as_slice()) {
                Ok(record) => record,
                Err(err) => {
                    if !quiet {
                        error!(error = %err, "error decoding neighbor info payload");
                    }
                    return;
                }
            };
            if !quiet {
                info!(node_id = record.node_id, "received neighbor info");
            }
            summary.rendered = render_json(&record);
            let key = record.node_id.to_string();
            state
                .neighbors
                .add(Observation::new(record, meta.clone()), &[&key]);
        }
        Ok(PortNum::NodeinfoApp) => {
            let record = match User::decode(data.payload.as_slice()) {
                Ok(record) => record,
                Err(err) => {
                    if !quiet {
                        error!(error = %err, "error decoding node info payload");
                    }
                    return;
                }
            };
            if !quiet {
                info!(id = %record.id, short_name = %record.short_name, "received node info");
            }
            summary.rendered = render_json(&record);
            let from_key = meta.from.to_string();
            let id_key = record.id.clone();
            let short_key = record.short_name.clone();
            state.users.add(
                Observation::new(record, meta.clone()),
                &[&from_key, &id_key, &short_key],
            );
        }
        Ok(PortNum::PositionApp) => {
            let record = match Position::decode(data.payload.as_slice()) {
                Ok(record) => record,
                Err(err) => {
                    if !quiet {
                        error!(error = %err, "error decoding position payload");
                    }
                    return;
                }
            };
            if !quiet {
                info!(from = meta.from, "received position");
            }
            summary.rendered = render_json(&record);
            let key = meta.from.to_string();
            state
                .positions
                .add(Observation::new(record, meta.clone()), &[&key]);
        }
        Ok(PortNum::TextMessageApp) => {
            let text = String::from_utf8_lossy(&data.payload).into_owned();
            if !quiet {
                info!(from = meta.from, text = %text, "received text message");
            }
            summary.rendered = text.clone();
            // A single "last" key: the chats page only ever shows the most
            // recent message regardless of sender.
            state
                .chats
                .add(Observation::new(text, meta.clone()), &["last"]);
        }
        Ok(PortNum::TracerouteApp) => {
            let record = match RouteDiscovery::decode(data.payload.as_slice()) {
                Ok(record) => record,
                Err(err) => {
                    if !quiet {
                        error!(error = %err, "error decoding traceroute payload");
                    }
                    return;
                }
            };
            if !quiet {
                info!(from = meta.from, hops = record.route.len(), "received traceroute");
            }
            summary.rendered = render_json(&record);
            let key = meta.from.to_string();
            state
                .traceroutes
                .add(Observation::new(record, meta.clone()), &[&key]);
        }
        Ok(PortNum::MapReportApp) => {
            // Summarized only; map reports have no history store of their own.
            let record = match MapReport::decode(data.payload.as_slice()) {
                Ok(record) => record,
                Err(err) => {
                    if !quiet {
                        error!(error = %err, "error decoding map report payload");
                    }
                    return;
                }
            };
            if !quiet {
                info!(long_name = %record.long_name, "received map report");
            }
            summary.rendered = render_json(&record);
        }
        Ok(PortNum::RoutingApp) => {
            // Summarized only, like map reports.
            let record = match Routing::decode(data.payload.as_slice()) {
                Ok(record) => record,
                Err(err) => {
                    if !quiet {
                        error!(error = %err, "error decoding routing payload");
                    }
                    return;
                }
            };
            if !quiet {
                info!(from = meta.from, "received routing message");
            }
            summary.rendered = render_json(&record);
        }
        _ => {
            if !quiet {
                error!(portnum = data.portnum, "unknown port number");
            }
        }
    }

    state.all_messages.add(Observation::new(summary, meta), &[]);
}

/// Upstream enum spelling for known ports, the raw number otherwise.
fn port_name(portnum: i32) -> String {
    match PortNum::try_from(portnum) {
        Ok(port) => port.name().to_string(),
        Err(_) => portnum.to_string(),
    }
}

fn render_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}

mod common;

use common::{envelope_with_plaintext, envelope_with_port, Frame};
use meshwatch_core::proto::{
    mesh_packet, telemetry, Data, DeviceMetrics, MapReport, MeshPacket, NeighborInfo, PortNum,
    Position, RouteDiscovery, Routing, ServiceEnvelope, Telemetry, User,
};
use meshwatch_core::{handle_raw_payload, ChannelKeys, MeshState};
use prost::Message;

fn counts(state: &MeshState) -> [usize; 8] {
    [
        state.users.len(),
        state.telemetry.len(),
        state.chats.len(),
        state.non_decryptable.len(),
        state.all_messages.len(),
        state.neighbors.len(),
        state.positions.len(),
        state.traceroutes.len(),
    ]
}

#[test]
fn telemetry_frame_lands_in_the_telemetry_store_keyed_by_sender() {
    let state = MeshState::default();
    let keys = ChannelKeys::default();

    let record = Telemetry {
        time: 1_700_000_100,
        variant: Some(telemetry::Variant::DeviceMetrics(DeviceMetrics {
            battery_level: Some(87),
            voltage: Some(3.91),
            ..Default::default()
        })),
    };
    let frame = Frame::new(101, 3_123_456_789);
    handle_raw_payload(
        &state,
        &keys,
        &envelope_with_port(&frame, PortNum::TelemetryApp as i32, &record.encode_to_vec()),
    );

    assert_eq!(state.telemetry.len(), 1);
    let stored = state.telemetry.last_by("3123456789").unwrap();
    assert_eq!(stored.record.time, 1_700_000_100);
    assert_eq!(stored.meta.from, 3_123_456_789);
    assert_eq!(stored.meta.rx_time, frame.rx_time);

    assert_eq!(state.all_messages.len(), 1);
    let summary = &state.all_messages.all()[0].record;
    assert_eq!(summary.port_name, "TELEMETRY_APP");
    assert_eq!(summary.port_num, PortNum::TelemetryApp as u32);
    assert_eq!(summary.encrypted, 0);
    assert!(summary.length > 0);
    assert!(summary.rendered.contains("batteryLevel"));
}

#[test]
fn telemetry_with_unknown_variant_still_records_wrapper_and_summary() {
    let state = MeshState::default();
    let keys = ChannelKeys::default();

    // Just the time field, no metric variant at all.
    let record = Telemetry {
        time: 42,
        variant: None,
    };
    handle_raw_payload(
        &state,
        &keys,
        &envelope_with_port(
            &Frame::new(7, 55),
            PortNum::TelemetryApp as i32,
            &record.encode_to_vec(),
        ),
    );

    assert_eq!(state.telemetry.len(), 1);
    assert_eq!(state.all_messages.len(), 1);
    assert!(state.all_messages.all()[0].record.rendered.is_empty());
}

#[test]
fn node_info_registers_sender_id_and_short_name_keys() {
    let state = MeshState::default();
    let keys = ChannelKeys::default();

    let user = User {
        id: "!a1b2c3d4".to_string(),
        long_name: "Hilltop Repeater".to_string(),
        short_name: "HILL".to_string(),
        ..Default::default()
    };
    handle_raw_payload(
        &state,
        &keys,
        &envelope_with_port(
            &Frame::new(5, 2_712_847_316),
            PortNum::NodeinfoApp as i32,
            &user.encode_to_vec(),
        ),
    );

    assert_eq!(state.users.len(), 1);
    for key in ["2712847316", "!a1b2c3d4", "HILL"] {
        let stored = state.users.last_by(key).unwrap();
        assert_eq!(stored.record.long_name, "Hilltop Repeater");
    }
    assert!(state.all_messages.all()[0]
        .record
        .rendered
        .contains("Hilltop Repeater"));
}

#[test]
fn text_message_keeps_only_a_single_last_key() {
    let state = MeshState::default();
    let keys = ChannelKeys::default();

    for (i, body) in ["first", "second", "third"].iter().enumerate() {
        handle_raw_payload(
            &state,
            &keys,
            &envelope_with_port(
                &Frame::new(i as u32 + 1, 100 + i as u32),
                PortNum::TextMessageApp as i32,
                body.as_bytes(),
            ),
        );
    }

    assert_eq!(state.chats.len(), 3);
    // One "last" key regardless of sender.
    assert_eq!(state.chats.last_by("last").unwrap().record, "third");
    assert!(state.chats.last_by("100").is_none());

    let bodies: Vec<String> = state.chats.all().iter().map(|o| o.record.clone()).collect();
    assert_eq!(bodies, ["third", "second", "first"]);
}

#[test]
fn position_and_traceroute_key_by_sender_address() {
    let state = MeshState::default();
    let keys = ChannelKeys::default();

    let position = Position {
        latitude_i: Some(520_000_000),
        longitude_i: Some(48_000_000),
        altitude: Some(23),
        ..Default::default()
    };
    handle_raw_payload(
        &state,
        &keys,
        &envelope_with_port(
            &Frame::new(11, 900),
            PortNum::PositionApp as i32,
            &position.encode_to_vec(),
        ),
    );

    let route = RouteDiscovery {
        route: vec![900, 901, 902],
        snr_towards: vec![-8, -12],
        ..Default::default()
    };
    handle_raw_payload(
        &state,
        &keys,
        &envelope_with_port(
            &Frame::new(12, 900),
            PortNum::TracerouteApp as i32,
            &route.encode_to_vec(),
        ),
    );

    assert_eq!(
        state.positions.last_by("900").unwrap().record.altitude,
        Some(23)
    );
    assert_eq!(
        state.traceroutes.last_by("900").unwrap().record.route,
        [900, 901, 902]
    );
    assert_eq!(state.all_messages.len(), 2);
}

#[test]
fn neighbor_info_keys_by_reporting_node_id_not_sender() {
    let state = MeshState::default();
    let keys = ChannelKeys::default();

    let info = NeighborInfo {
        node_id: 4242,
        ..Default::default()
    };
    // Relayed: the mesh sender differs from the reporting node.
    handle_raw_payload(
        &state,
        &keys,
        &envelope_with_port(
            &Frame::new(21, 7777),
            PortNum::NeighborinfoApp as i32,
            &info.encode_to_vec(),
        ),
    );

    assert!(state.neighbors.last_by("4242").is_some());
    assert!(state.neighbors.last_by("7777").is_none());
}

#[test]
fn map_report_and_routing_are_summary_only() {
    let state = MeshState::default();
    let keys = ChannelKeys::default();

    let report = MapReport {
        long_name: "Water Tower".to_string(),
        short_name: "WTWR".to_string(),
        ..Default::default()
    };
    handle_raw_payload(
        &state,
        &keys,
        &envelope_with_port(
            &Frame::new(31, 500),
            PortNum::MapReportApp as i32,
            &report.encode_to_vec(),
        ),
    );

    let routing = Routing { variant: None };
    handle_raw_payload(
        &state,
        &keys,
        &envelope_with_port(
            &Frame::new(32, 500),
            PortNum::RoutingApp as i32,
            &routing.encode_to_vec(),
        ),
    );

    assert_eq!(state.all_messages.len(), 2);
    assert_eq!(counts(&state), [0, 0, 0, 0, 2, 0, 0, 0]);
    assert!(state.all_messages.all()[1].record.rendered.contains("Water Tower"));
}

#[test]
fn undecryptable_payload_records_exactly_one_length_and_one_summary() {
    let state = MeshState::default();
    let keys = ChannelKeys::default();

    // Plaintext that can never be valid protobuf (wire type 7 tags), so the
    // post-decrypt structural decode fails deterministically.
    let frame = Frame::new(77, 1234);
    let envelope = envelope_with_plaintext(&frame, &[0xFF; 16]);
    handle_raw_payload(&state, &keys, &envelope);

    assert_eq!(counts(&state), [0, 0, 0, 1, 1, 0, 0, 0]);

    let non_dec = &state.non_decryptable.all()[0];
    assert_eq!(non_dec.record, 16);
    assert_eq!(non_dec.meta.from, 1234);

    let summary = &state.all_messages.all()[0].record;
    assert_eq!(summary.encrypted, 1);
    assert_eq!(summary.port_num, 0);
    assert_eq!(summary.port_name, "unknown");
    assert_eq!(summary.length, 16);
    assert!(summary.rendered.is_empty());
}

#[test]
fn pre_decoded_payload_variant_never_touches_any_store() {
    let state = MeshState::default();
    let keys = ChannelKeys::default();

    let data = Data {
        portnum: PortNum::TextMessageApp as i32,
        payload: b"already decoded".to_vec(),
        ..Default::default()
    };
    let packet = MeshPacket {
        from: 42,
        to: 0xFFFF_FFFF,
        id: 9,
        payload_variant: Some(mesh_packet::PayloadVariant::Decoded(data)),
        ..Default::default()
    };
    let envelope = ServiceEnvelope {
        packet: Some(packet),
        channel_id: "LongFast".to_string(),
        gateway_id: "!deadbeef".to_string(),
    }
    .encode_to_vec();

    handle_raw_payload(&state, &keys, &envelope);
    assert_eq!(counts(&state), [0; 8]);
}

#[test]
fn malformed_envelope_and_missing_packet_leave_no_trace() {
    let state = MeshState::default();
    let keys = ChannelKeys::default();

    handle_raw_payload(&state, &keys, &[0xFF, 0xFF, 0xFF]);

    let empty_envelope = ServiceEnvelope {
        packet: None,
        channel_id: "LongFast".to_string(),
        gateway_id: "!deadbeef".to_string(),
    }
    .encode_to_vec();
    handle_raw_payload(&state, &keys, &empty_envelope);

    assert_eq!(counts(&state), [0; 8]);
}

#[test]
fn inner_parse_failure_drops_the_packet_without_a_summary() {
    let state = MeshState::default();
    let keys = ChannelKeys::default();

    // 0x08 opens a varint field but the value byte is missing.
    handle_raw_payload(
        &state,
        &keys,
        &envelope_with_port(&Frame::new(66, 321), PortNum::PositionApp as i32, &[0x08]),
    );

    // Unlike decrypt failures, nothing is recorded anywhere.
    assert_eq!(counts(&state), [0; 8]);
}

#[test]
fn unknown_port_still_produces_a_summary_with_the_raw_number() {
    let state = MeshState::default();
    let keys = ChannelKeys::default();

    handle_raw_payload(
        &state,
        &keys,
        &envelope_with_port(&Frame::new(88, 654), PortNum::AdminApp as i32, &[]),
    );
    handle_raw_payload(
        &state,
        &keys,
        &envelope_with_port(&Frame::new(89, 654), 200, &[]),
    );

    assert_eq!(counts(&state), [0, 0, 0, 0, 2, 0, 0, 0]);
    let all = state.all_messages.all();
    assert_eq!(all[1].record.port_name, "ADMIN_APP");
    assert_eq!(all[0].record.port_name, "200");
    assert!(all[0].record.rendered.is_empty());
}

#[test]
fn summary_feed_supports_sender_queries_across_ports() {
    let state = MeshState::default();
    let keys = ChannelKeys::default();

    for (id, from, text) in [(1, 100, "from-100-a"), (2, 200, "from-200"), (3, 100, "from-100-b")] {
        handle_raw_payload(
            &state,
            &keys,
            &envelope_with_port(
                &Frame::new(id, from),
                PortNum::TextMessageApp as i32,
                text.as_bytes(),
            ),
        );
    }

    let from_100 = state.all_messages.filtered_by_field("from", "100");
    assert_eq!(from_100.len(), 2);
    assert_eq!(from_100[0].record.rendered, "from-100-b");

    let latest = state.all_messages.last_by_field("from", "100").unwrap();
    assert_eq!(latest.record.rendered, "from-100-b");

    let per_sender = state.all_messages.latest_per_field("from");
    assert_eq!(per_sender.len(), 2);
}

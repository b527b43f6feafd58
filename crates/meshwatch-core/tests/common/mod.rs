//! Frame builders shared by the integration tests: encode a record, wrap it
//! in a Data payload, encrypt it the way the firmware does, and seal it in a
//! service envelope.

#![allow(dead_code)]

use meshwatch_core::crypto;
use meshwatch_core::proto::{mesh_packet, Data, MeshPacket, ServiceEnvelope};
use prost::Message;

pub struct Frame {
    pub id: u32,
    pub from: u32,
    pub to: u32,
    pub channel: u32,
    pub rx_time: u32,
}

impl Frame {
    pub fn new(id: u32, from: u32) -> Self {
        Self {
            id,
            from,
            to: 0xFFFF_FFFF,
            channel: 0,
            rx_time: 1_700_000_000,
        }
    }
}

pub fn default_key() -> [u8; 16] {
    crypto::channel_key(meshwatch_core::DEFAULT_CHANNEL_KEY).unwrap()
}

/// CTR is symmetric, so "decrypt" with the packet nonce encrypts too.
pub fn encrypt(frame: &Frame, plaintext: &[u8]) -> Vec<u8> {
    crypto::decrypt(
        &default_key(),
        &crypto::packet_nonce(frame.id, frame.from),
        plaintext,
    )
}

/// Envelope around an already-encoded plaintext, encrypted with the default
/// channel key.
pub fn envelope_with_plaintext(frame: &Frame, plaintext: &[u8]) -> Vec<u8> {
    let packet = MeshPacket {
        from: frame.from,
        to: frame.to,
        channel: frame.channel,
        id: frame.id,
        rx_time: frame.rx_time,
        hop_limit: 3,
        hop_start: 3,
        payload_variant: Some(mesh_packet::PayloadVariant::Encrypted(encrypt(
            frame, plaintext,
        ))),
        ..Default::default()
    };
    ServiceEnvelope {
        packet: Some(packet),
        channel_id: "LongFast".to_string(),
        gateway_id: "!deadbeef".to_string(),
    }
    .encode_to_vec()
}

/// Envelope around a port-tagged application payload.
pub fn envelope_with_port(frame: &Frame, portnum: i32, inner: &[u8]) -> Vec<u8> {
    let data = Data {
        portnum,
        payload: inner.to_vec(),
        ..Default::default()
    };
    envelope_with_plaintext(frame, &data.encode_to_vec())
}

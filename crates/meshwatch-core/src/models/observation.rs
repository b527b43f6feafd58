use crate::proto::MeshPacket;

/// Packet header metadata shared by every record decoded from a packet.
#[derive(Debug, Clone, Default)]
pub struct PacketMeta {
    pub id: u32,
    pub rx_time: u32,
    pub from: u32,
    pub to: u32,
    pub channel: u32,
    pub rx_snr: f32,
    pub hop_limit: u32,
    pub hop_start: u32,
    /// Raw `Priority` discriminant as carried on the wire.
    pub priority: i32,
    pub want_ack: bool,
    pub public_key: Vec<u8>,
    pub pki_encrypted: bool,
}

impl PacketMeta {
    pub fn from_packet(packet: &MeshPacket) -> Self {
        Self {
            id: packet.id,
            rx_time: packet.rx_time,
            from: packet.from,
            to: packet.to,
            channel: packet.channel,
            rx_snr: packet.rx_snr,
            hop_limit: packet.hop_limit,
            hop_start: packet.hop_start,
            priority: packet.priority,
            want_ack: packet.want_ack,
            public_key: packet.public_key.clone(),
            pki_encrypted: packet.pki_encrypted,
        }
    }
}

/// A decoded record plus the header metadata of the packet it arrived in.
#[derive(Debug, Clone)]
pub struct Observation<T> {
    pub record: T,
    pub meta: PacketMeta,
}

impl<T> Observation<T> {
    pub fn new(record: T, meta: PacketMeta) -> Self {
        Self { record, meta }
    }
}

/// Named-field access for the ad-hoc store queries.
///
/// The monitoring surface filters history by field name across many record
/// kinds, so each stored type exposes its fields through this table instead
/// of the query layer special-casing every kind. Numeric fields stringify in
/// decimal; unknown names yield `None` and never match anything.
pub trait FieldLookup {
    fn field(&self, name: &str) -> Option<String>;
}

impl FieldLookup for PacketMeta {
    fn field(&self, name: &str) -> Option<String> {
        match name {
            "id" => Some(self.id.to_string()),
            "rx_time" => Some(self.rx_time.to_string()),
            "from" => Some(self.from.to_string()),
            "to" => Some(self.to.to_string()),
            "channel" => Some(self.channel.to_string()),
            "rx_snr" => Some(self.rx_snr.to_string()),
            "hop_limit" => Some(self.hop_limit.to_string()),
            "hop_start" => Some(self.hop_start.to_string()),
            "priority" => Some(self.priority.to_string()),
            "want_ack" => Some(self.want_ack.to_string()),
            "public_key" => Some(hex::encode(&self.public_key)),
            "pki_encrypted" => Some(self.pki_encrypted.to_string()),
            _ => None,
        }
    }
}

/// Chat records are bare strings.
impl FieldLookup for String {
    fn field(&self, _name: &str) -> Option<String> {
        None
    }
}

/// Non-decryptable records carry only the ciphertext length.
impl FieldLookup for usize {
    fn field(&self, name: &str) -> Option<String> {
        match name {
            "length" => Some(self.to_string()),
            _ => None,
        }
    }
}

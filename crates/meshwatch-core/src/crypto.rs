//! Channel-key handling and packet decryption.
//!
//! Meshtastic encrypts application payloads with AES-128-CTR. The nonce is
//! derived from the packet header: 4 bytes little-endian packet id, 4 zero
//! bytes, 4 bytes little-endian sender address, 4 zero bytes. CTR is a pure
//! keystream XOR, so there is no integrity tag; a wrong key produces garbage
//! that only fails once the plaintext is structurally decoded.

use aes::Aes128;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use ctr::cipher::{KeyIvInit, StreamCipher};

// Go's cipher.NewCTR increments the full 16-byte block as a big-endian
// counter, which is Ctr128BE in RustCrypto terms.
type Aes128Ctr = ctr::Ctr128BE<Aes128>;

/// The well-known default channel key ("AQ==" expanded), shared by every
/// default-configured mesh.
pub const DEFAULT_CHANNEL_KEY: &str = "1PG7OiApB1nwvP+rz05pAQ==";

#[derive(Debug, thiserror::Error)]
pub enum KeyError {
    #[error("invalid base64 key material: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("channel key must be 16 bytes, got {0}")]
    BadLength(usize),
}

/// Decode base64 key material into a channel key.
///
/// Accepts the URL-safe alphabet and missing padding, since keys get pasted
/// out of QR codes and channel URLs in both spellings.
pub fn channel_key(material: &str) -> Result<[u8; 16], KeyError> {
    let mut normalized = material.replace('-', "+").replace('_', "/");
    while normalized.len() % 4 != 0 {
        normalized.push('=');
    }

    let bytes = BASE64.decode(normalized.as_bytes())?;
    let len = bytes.len();
    bytes.try_into().map_err(|_| KeyError::BadLength(len))
}

/// Per-packet CTR nonce: packet id and sender address, each little-endian
/// in the low 4 bytes of an 8-byte half. This exact layout is what the
/// firmware uses; anything else decrypts to noise.
pub fn packet_nonce(packet_id: u32, from: u32) -> [u8; 16] {
    let mut nonce = [0u8; 16];
    nonce[0..4].copy_from_slice(&packet_id.to_le_bytes());
    nonce[8..12].copy_from_slice(&from.to_le_bytes());
    nonce
}

/// Apply the AES-128-CTR keystream. Length-preserving; encryption and
/// decryption are the same operation.
pub fn decrypt(key: &[u8; 16], nonce: &[u8; 16], ciphertext: &[u8]) -> Vec<u8> {
    let mut buf = ciphertext.to_vec();
    let mut cipher = Aes128Ctr::new(key.into(), nonce.into());
    cipher.apply_keystream(&mut buf);
    buf
}

/// Key selection for inbound packets.
///
/// Every observed mesh uses the single default key on all channels, so that
/// is the only built-in behavior; `key_for` is the seam where per-channel
/// material would go.
#[derive(Debug, Clone)]
pub struct ChannelKeys {
    default_key: [u8; 16],
}

impl ChannelKeys {
    pub fn new(material: &str) -> Result<Self, KeyError> {
        Ok(Self {
            default_key: channel_key(material)?,
        })
    }

    pub fn key_for(&self, _channel: u32) -> &[u8; 16] {
        &self.default_key
    }
}

impl Default for ChannelKeys {
    fn default() -> Self {
        Self {
            default_key: channel_key(DEFAULT_CHANNEL_KEY)
                .expect("default channel key constant is valid"),
        }
    }
}

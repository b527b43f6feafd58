use super::FieldLookup;

/// Normalized record of every packet that made it past envelope decode,
/// whatever its port. Backs the all-messages feed.
#[derive(Debug, Clone)]
pub struct Summary {
    pub port_num: u32,
    pub port_name: String,
    /// Ciphertext length of the encrypted variant, 0 otherwise.
    pub length: usize,
    /// 1 when decryption produced undecodable bytes, 0 on success.
    pub encrypted: i32,
    /// Human-readable rendering of the decoded record, empty when nothing
    /// decoded (unknown port, undecryptable payload).
    pub rendered: String,
}

impl Default for Summary {
    fn default() -> Self {
        Self {
            port_num: 0,
            port_name: "unknown".to_string(),
            length: 0,
            encrypted: 0,
            rendered: String::new(),
        }
    }
}

impl FieldLookup for Summary {
    fn field(&self, name: &str) -> Option<String> {
        match name {
            "port_num" => Some(self.port_num.to_string()),
            "port_name" => Some(self.port_name.clone()),
            "length" => Some(self.length.to_string()),
            "encrypted" => Some(self.encrypted.to_string()),
            "rendered" => Some(self.rendered.clone()),
            _ => None,
        }
    }
}

//! `FieldLookup` tables for the wire record types. Only fields the
//! monitoring surface actually queries by name need an entry; everything
//! else resolves to `None` and never matches.

use super::FieldLookup;
use crate::proto::{MapReport, NeighborInfo, Position, RouteDiscovery, Routing, Telemetry, User};

impl FieldLookup for User {
    fn field(&self, name: &str) -> Option<String> {
        match name {
            "id" => Some(self.id.clone()),
            "long_name" => Some(self.long_name.clone()),
            "short_name" => Some(self.short_name.clone()),
            "hw_model" => Some(self.hw_model.to_string()),
            "is_licensed" => Some(self.is_licensed.to_string()),
            "role" => Some(self.role.to_string()),
            _ => None,
        }
    }
}

impl FieldLookup for Position {
    fn field(&self, name: &str) -> Option<String> {
        match name {
            "latitude_i" => self.latitude_i.map(|v| v.to_string()),
            "longitude_i" => self.longitude_i.map(|v| v.to_string()),
            "altitude" => self.altitude.map(|v| v.to_string()),
            "time" => Some(self.time.to_string()),
            "precision_bits" => Some(self.precision_bits.to_string()),
            "sats_in_view" => Some(self.sats_in_view.to_string()),
            _ => None,
        }
    }
}

impl FieldLookup for NeighborInfo {
    fn field(&self, name: &str) -> Option<String> {
        match name {
            "node_id" => Some(self.node_id.to_string()),
            "last_sent_by_id" => Some(self.last_sent_by_id.to_string()),
            "node_broadcast_interval_secs" => {
                Some(self.node_broadcast_interval_secs.to_string())
            }
            _ => None,
        }
    }
}

impl FieldLookup for Telemetry {
    fn field(&self, name: &str) -> Option<String> {
        match name {
            "time" => Some(self.time.to_string()),
            _ => None,
        }
    }
}

impl FieldLookup for RouteDiscovery {
    fn field(&self, _name: &str) -> Option<String> {
        None
    }
}

impl FieldLookup for Routing {
    fn field(&self, _name: &str) -> Option<String> {
        None
    }
}

impl FieldLookup for MapReport {
    fn field(&self, name: &str) -> Option<String> {
        match name {
            "long_name" => Some(self.long_name.clone()),
            "short_name" => Some(self.short_name.clone()),
            "firmware_version" => Some(self.firmware_version.clone()),
            _ => None,
        }
    }
}

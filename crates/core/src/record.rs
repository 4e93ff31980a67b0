//! The fixed set of record types served by the API.

use std::fmt;

/// One of the four record types the service stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Alert,
    PersonalData,
    VehicularIncident,
    Camera,
}

impl RecordKind {
    /// Every record kind, in bootstrap order.
    pub const ALL: [RecordKind; 4] = [
        RecordKind::Alert,
        RecordKind::PersonalData,
        RecordKind::VehicularIncident,
        RecordKind::Camera,
    ];

    /// Human-readable entity name used in logs.
    pub fn entity(self) -> &'static str {
        match self {
            RecordKind::Alert => "alert",
            RecordKind::PersonalData => "personal data record",
            RecordKind::VehicularIncident => "vehicular incident",
            RecordKind::Camera => "camera",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.entity())
    }
}

//! Device-level findings captured for a rack during a walkthrough.
//!
//! Each device kind (PSU, PDU, RDHX) has its own closed set of observed
//! statuses. A `DeviceFinding` is serialized with a `kind` tag so the stored
//! `ReportData` blob stays self-describing.

use crate::model::incident::Severity;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The three device kinds a technician can flag on a rack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceKind {
    Psu,
    Pdu,
    Rdhx,
}

impl DeviceKind {
    pub fn label(self) -> &'static str {
        match self {
            DeviceKind::Psu => "PSU",
            DeviceKind::Pdu => "PDU",
            DeviceKind::Rdhx => "RDHX",
        }
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Observed state of a power supply unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PsuStatus {
    #[serde(rename = "Amber")]
    Amber,
    #[serde(rename = "Powered-Off")]
    PoweredOff,
    #[serde(rename = "Missing")]
    Missing,
}

impl PsuStatus {
    pub const ALL: [PsuStatus; 3] = [
        PsuStatus::Amber,
        PsuStatus::PoweredOff,
        PsuStatus::Missing,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PsuStatus::Amber => "Amber",
            PsuStatus::PoweredOff => "Powered-Off",
            PsuStatus::Missing => "Missing",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }
}

/// Observed state of a power distribution unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PduStatus {
    #[serde(rename = "Alarm")]
    Alarm,
    #[serde(rename = "Powered-Off")]
    PoweredOff,
    #[serde(rename = "Breaker Tripped")]
    BreakerTripped,
}

impl PduStatus {
    pub const ALL: [PduStatus; 3] = [
        PduStatus::Alarm,
        PduStatus::PoweredOff,
        PduStatus::BreakerTripped,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PduStatus::Alarm => "Alarm",
            PduStatus::PoweredOff => "Powered-Off",
            PduStatus::BreakerTripped => "Breaker Tripped",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }
}

/// Observed state of a rear door heat exchanger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RdhxStatus {
    #[serde(rename = "Alarm")]
    Alarm,
    #[serde(rename = "Water Leak")]
    WaterLeak,
    #[serde(rename = "Door Open")]
    DoorOpen,
}

impl RdhxStatus {
    pub const ALL: [RdhxStatus; 3] = [
        RdhxStatus::Alarm,
        RdhxStatus::WaterLeak,
        RdhxStatus::DoorOpen,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RdhxStatus::Alarm => "Alarm",
            RdhxStatus::WaterLeak => "Water Leak",
            RdhxStatus::DoorOpen => "Door Open",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }
}

/// One problem observed on one device of a rack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DeviceFinding {
    #[serde(rename_all = "camelCase")]
    Psu {
        psu_id: String,
        u_height: u32,
        status: PsuStatus,
    },
    #[serde(rename_all = "camelCase")]
    Pdu { pdu_id: String, status: PduStatus },
    Rdhx { status: RdhxStatus },
}

impl DeviceFinding {
    pub fn kind(&self) -> DeviceKind {
        match self {
            DeviceFinding::Psu { .. } => DeviceKind::Psu,
            DeviceFinding::Pdu { .. } => DeviceKind::Pdu,
            DeviceFinding::Rdhx { .. } => DeviceKind::Rdhx,
        }
    }

    /// Severity an incident raised for this finding alone would carry.
    ///
    /// Powered-off PDU and RDHX water leak are critical, powered-off PSU is
    /// high, everything else is medium.
    pub fn severity(&self) -> Severity {
        match self {
            DeviceFinding::Pdu {
                status: PduStatus::PoweredOff,
                ..
            } => Severity::Critical,
            DeviceFinding::Rdhx {
                status: RdhxStatus::WaterLeak,
            } => Severity::Critical,
            DeviceFinding::Psu {
                status: PsuStatus::PoweredOff,
                ..
            } => Severity::High,
            _ => Severity::Medium,
        }
    }

    /// Short human-readable summary, e.g. `PSU 2 at U14: Powered-Off`.
    pub fn summary(&self) -> String {
        match self {
            DeviceFinding::Psu {
                psu_id,
                u_height,
                status,
            } => format!("PSU {} at U{}: {}", psu_id, u_height, status.label()),
            DeviceFinding::Pdu { pdu_id, status } => format!("PDU {}: {}", pdu_id, status.label()),
            DeviceFinding::Rdhx { status } => format!("RDHX: {}", status.label()),
        }
    }
}

//! The inspection record and its typed payload.
//!
//! `InspectionRecord` mirrors the `AuditReports` row: the outer keys use the
//! column names (`Id`, `UserEmail`, `Timestamp`, `ReportData`) and the
//! payload uses camelCase keys as submitted by the frontend.

use crate::model::device::DeviceFinding;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Submitter identity stored when a request carries no email.
pub const UNKNOWN_SUBMITTER: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InspectionRecord {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "UserEmail")]
    pub user_email: String,
    #[serde(rename = "Timestamp")]
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "ReportData")]
    pub report_data: ReportData,
}

/// Everything a technician records about one data hall walkthrough.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default)]
    pub datahall: String,
    #[serde(default)]
    pub status: String,
    #[serde(
        default,
        deserialize_with = "reading",
        skip_serializing_if = "Option::is_none"
    )]
    pub temperature_reading: Option<String>,
    #[serde(
        default,
        deserialize_with = "reading",
        skip_serializing_if = "Option::is_none"
    )]
    pub humidity_reading: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    #[serde(default, deserialize_with = "flag")]
    pub is_urgent: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_passed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooling_system_check: Option<bool>,
    #[serde(default, deserialize_with = "flag")]
    pub has_issues: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub racks: Vec<RackFinding>,
    #[serde(
        default,
        rename = "walkThroughNumber",
        skip_serializing_if = "Option::is_none"
    )]
    pub walkthrough_number: Option<u32>,
    /// Keys the form sends that have no typed field; stored and returned as is.
    #[serde(flatten, default)]
    pub extra: Map<String, Value>,
}

impl ReportData {
    /// `true` when both `datahall` and `status` carry text.
    pub fn has_required_fields(&self) -> bool {
        !self.datahall.trim().is_empty() && !self.status.trim().is_empty()
    }
}

/// Findings for a single rack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RackFinding {
    pub location: String,
    #[serde(default)]
    pub findings: Vec<DeviceFinding>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawReading {
    Text(String),
    Number(f64),
}

// Readings arrive as strings from form inputs but some clients send numbers.
fn reading<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        Option::<RawReading>::deserialize(deserializer)?.map(|raw| match raw {
            RawReading::Text(text) => text,
            RawReading::Number(n) => n.to_string(),
        }),
    )
}

// `null` flags count as unset.
fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn record_uses_column_names() {
        let record = InspectionRecord {
            id: "abc".into(),
            user_email: "a@b.com".into(),
            timestamp: "2024-05-01T10:00:00Z".parse().unwrap(),
            report_data: ReportData {
                datahall: "Hall A".into(),
                status: "Operational".into(),
                ..ReportData::default()
            },
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["Id"], "abc");
        assert_eq!(value["UserEmail"], "a@b.com");
        assert_eq!(value["ReportData"]["datahall"], "Hall A");
        assert_eq!(value["ReportData"]["isUrgent"], false);
        assert!(value["ReportData"].get("racks").is_none());
    }

    #[test]
    fn readings_accept_strings_and_numbers() {
        let data: ReportData = serde_json::from_value(json!({
            "datahall": "Hall A",
            "status": "Operational",
            "temperatureReading": "22.5",
            "humidityReading": 45
        }))
        .unwrap();
        assert_eq!(data.temperature_reading.as_deref(), Some("22.5"));
        assert_eq!(data.humidity_reading.as_deref(), Some("45"));
    }

    #[test]
    fn unknown_keys_survive_a_round_trip() {
        let data: ReportData = serde_json::from_value(json!({
            "datahall": "Hall B",
            "status": "Alert",
            "timestamp": "2024-01-01",
            "rackNotes": { "R1": "loose cable" }
        }))
        .unwrap();
        assert_eq!(data.datahall, "Hall B");
        assert_eq!(data.extra["timestamp"], "2024-01-01");

        let value = serde_json::to_value(&data).unwrap();
        assert_eq!(value["rackNotes"]["R1"], "loose cable");
        assert_eq!(value["timestamp"], "2024-01-01");
        let again: ReportData = serde_json::from_value(value).unwrap();
        assert_eq!(again, data);
    }

    #[test]
    fn null_flags_read_as_false() {
        let data: ReportData = serde_json::from_value(json!({
            "datahall": "Hall B",
            "status": "Alert",
            "isUrgent": null,
            "hasIssues": null
        }))
        .unwrap();
        assert!(!data.is_urgent);
        assert!(!data.has_issues);
        assert!(data.extra.is_empty());
    }

    #[test]
    fn required_fields_ignore_whitespace() {
        let mut data = ReportData {
            datahall: "  ".into(),
            status: "Operational".into(),
            ..ReportData::default()
        };
        assert!(!data.has_required_fields());
        data.datahall = "Hall C".into();
        assert!(data.has_required_fields());
    }
}

//! Incidents raised from a walkthrough that reported rack problems.
//!
//! Incidents are written next to the inspection record, one per problematic
//! rack. They carry no reference to the inspection itself: the only link is
//! the shared location, data hall and creation time.

use crate::model::inspection::{RackFinding, ReportData};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "low" => Some(Severity::Low),
            "medium" => Some(Severity::Medium),
            "high" => Some(Severity::High),
            "critical" => Some(Severity::Critical),
            _ => None,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IncidentStatus {
    Open,
    InProgress,
    Resolved,
}

impl IncidentStatus {
    pub const ALL: [IncidentStatus; 3] = [
        IncidentStatus::Open,
        IncidentStatus::InProgress,
        IncidentStatus::Resolved,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            IncidentStatus::Open => "open",
            IncidentStatus::InProgress => "in-progress",
            IncidentStatus::Resolved => "resolved",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

impl fmt::Display for IncidentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A persisted incident row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Incident {
    pub id: String,
    pub location: String,
    pub datahall: String,
    pub description: String,
    pub severity: Severity,
    pub status: IncidentStatus,
    pub user_email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An incident that has not been stored yet; the store assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewIncident {
    pub location: String,
    pub datahall: String,
    pub description: String,
    pub severity: Severity,
    pub user_email: String,
    pub created_at: DateTime<Utc>,
}

/// Highest severity among the rack's findings, `Medium` when it has none.
pub fn determine_severity(rack: &RackFinding) -> Severity {
    rack.findings
        .iter()
        .map(|f| f.severity())
        .max()
        .unwrap_or(Severity::Medium)
}

/// `Rack <location> issues: <finding>; <finding>`
pub fn describe_rack(rack: &RackFinding) -> String {
    let issues: Vec<String> = rack.findings.iter().map(|f| f.summary()).collect();
    format!("Rack {} issues: {}", rack.location, issues.join("; "))
}

/// Incidents to raise for a submitted walkthrough.
///
/// Empty unless the report flags issues. The incident location falls back
/// to the data hall when the report carries no location.
pub fn incidents_for(
    report: &ReportData,
    user_email: &str,
    at: DateTime<Utc>,
) -> Vec<NewIncident> {
    if !report.has_issues {
        return Vec::new();
    }
    let location = report
        .location
        .clone()
        .unwrap_or_else(|| report.datahall.clone());

    report
        .racks
        .iter()
        .map(|rack| NewIncident {
            location: location.clone(),
            datahall: report.datahall.clone(),
            description: describe_rack(rack),
            severity: determine_severity(rack),
            user_email: user_email.to_string(),
            created_at: at,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::device::{DeviceFinding, PduStatus, PsuStatus, RdhxStatus};

    fn rack(findings: Vec<DeviceFinding>) -> RackFinding {
        RackFinding {
            location: "R12".into(),
            findings,
            comments: None,
        }
    }

    #[test]
    fn severity_takes_the_worst_finding() {
        let r = rack(vec![
            DeviceFinding::Psu {
                psu_id: "1".into(),
                u_height: 20,
                status: PsuStatus::PoweredOff,
            },
            DeviceFinding::Rdhx {
                status: RdhxStatus::WaterLeak,
            },
        ]);
        assert_eq!(determine_severity(&r), Severity::Critical);
        assert_eq!(determine_severity(&rack(vec![])), Severity::Medium);
    }

    #[test]
    fn description_lists_each_finding() {
        let r = rack(vec![
            DeviceFinding::Psu {
                psu_id: "2".into(),
                u_height: 14,
                status: PsuStatus::Amber,
            },
            DeviceFinding::Pdu {
                pdu_id: "B".into(),
                status: PduStatus::Alarm,
            },
        ]);
        assert_eq!(
            describe_rack(&r),
            "Rack R12 issues: PSU 2 at U14: Amber; PDU B: Alarm"
        );
    }

    #[test]
    fn no_incidents_without_flagged_issues() {
        let mut report = ReportData {
            datahall: "Hall A".into(),
            status: "Operational".into(),
            racks: vec![rack(vec![DeviceFinding::Rdhx {
                status: RdhxStatus::Alarm,
            }])],
            ..ReportData::default()
        };
        assert!(incidents_for(&report, "a@b.com", Utc::now()).is_empty());

        report.has_issues = true;
        let incidents = incidents_for(&report, "a@b.com", Utc::now());
        assert_eq!(incidents.len(), 1);
        assert_eq!(incidents[0].location, "Hall A");
        assert_eq!(incidents[0].severity, Severity::Medium);
    }

    #[test]
    fn status_strings() {
        assert_eq!(IncidentStatus::parse("in-progress"), Some(IncidentStatus::InProgress));
        assert_eq!(
            serde_json::to_value(IncidentStatus::InProgress).unwrap(),
            serde_json::json!("in-progress")
        );
        assert_eq!(Severity::parse("critical"), Some(Severity::Critical));
        assert_eq!(Severity::parse("severe"), None);
    }
}

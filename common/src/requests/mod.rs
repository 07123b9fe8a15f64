//! Bodies exchanged over the `/api` endpoints.

use crate::model::inspection::{InspectionRecord, ReportData, UNKNOWN_SUBMITTER};
use serde::{Deserialize, Serialize};

/// Message returned when `datahall` or `status` is missing.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Data hall and status are required";

/// Message returned when a flagged rack carries no device finding.
pub const EMPTY_RACK_MESSAGE: &str = "Each flagged rack needs at least one finding";

/// Message returned when `GenerateReport` is called without an id.
pub const REPORT_ID_REQUIRED_MESSAGE: &str = "Report ID is required";

/// Request payload for `POST /api/SubmitInspection`.
///
/// `userEmail` sits next to the payload fields; everything else is the
/// report itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitInspectionRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
    #[serde(flatten)]
    pub report: ReportData,
}

impl SubmitInspectionRequest {
    /// Submitter email, or `"unknown"` when absent or blank.
    pub fn submitter(&self) -> String {
        match self.user_email.as_deref().map(str::trim) {
            Some(email) if !email.is_empty() => email.to_string(),
            _ => UNKNOWN_SUBMITTER.to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.report.has_required_fields() {
            return Err(REQUIRED_FIELDS_MESSAGE);
        }
        if self.report.has_issues && self.report.racks.iter().any(|r| r.findings.is_empty()) {
            return Err(EMPTY_RACK_MESSAGE);
        }
        Ok(())
    }
}

/// Query string of `GET /api/GenerateReport`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ReportQuery {
    #[serde(default)]
    pub id: Option<String>,
}

impl ReportQuery {
    /// The trimmed id, `None` when missing or blank.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref().map(str::trim).filter(|id| !id.is_empty())
    }
}

/// Response body of `GET /api/GenerateReport`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateReportResponse {
    pub message: String,
    pub data: InspectionRecord,
    #[serde(rename = "reportUrl")]
    pub report_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn email_is_split_from_the_payload() {
        let req: SubmitInspectionRequest = serde_json::from_value(json!({
            "userEmail": "a@b.com",
            "datahall": "Hall A",
            "status": "Operational",
            "temperatureReading": "22.5",
            "humidityReading": "45"
        }))
        .unwrap();
        assert_eq!(req.submitter(), "a@b.com");
        assert_eq!(req.report.datahall, "Hall A");
        assert_eq!(req.report.humidity_reading.as_deref(), Some("45"));
        assert!(req.validate().is_ok());

        let stored = serde_json::to_value(&req.report).unwrap();
        assert!(stored.get("userEmail").is_none());
    }

    #[test]
    fn missing_email_falls_back_to_sentinel() {
        let req: SubmitInspectionRequest =
            serde_json::from_value(json!({"datahall": "Hall A", "status": "Alert"})).unwrap();
        assert_eq!(req.submitter(), UNKNOWN_SUBMITTER);

        let blank = SubmitInspectionRequest {
            user_email: Some("   ".into()),
            ..req
        };
        assert_eq!(blank.submitter(), UNKNOWN_SUBMITTER);
    }

    #[test]
    fn missing_status_fails_validation() {
        let req: SubmitInspectionRequest =
            serde_json::from_value(json!({"datahall": "Hall A"})).unwrap();
        assert_eq!(req.validate(), Err(REQUIRED_FIELDS_MESSAGE));
    }

    #[test]
    fn flagged_rack_without_findings_fails_validation() {
        let mut req: SubmitInspectionRequest = serde_json::from_value(json!({
            "datahall": "Hall A",
            "status": "Alert",
            "hasIssues": true,
            "racks": [{ "location": "R1", "findings": [] }]
        }))
        .unwrap();
        assert_eq!(req.validate(), Err(EMPTY_RACK_MESSAGE));

        req.report.has_issues = false;
        assert!(req.validate().is_ok());
    }

    #[test]
    fn extra_keys_stay_with_the_payload() {
        let req: SubmitInspectionRequest = serde_json::from_value(json!({
            "userEmail": "a@b.com",
            "datahall": "Hall A",
            "status": "Operational",
            "rackNotes": "x"
        }))
        .unwrap();
        assert_eq!(req.report.extra.len(), 1);
        assert_eq!(req.report.extra["rackNotes"], "x");
    }

    #[test]
    fn blank_report_id_is_missing() {
        let query = ReportQuery {
            id: Some(" ".into()),
        };
        assert_eq!(query.id(), None);
        let query = ReportQuery {
            id: Some("42".into()),
        };
        assert_eq!(query.id(), Some("42"));
    }
}

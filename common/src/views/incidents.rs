//! Filtering the incidents list.

use super::contains_ci;
use crate::model::incident::{Incident, IncidentStatus, Severity};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct IncidentFilter {
    pub search: String,
    pub status: Option<IncidentStatus>,
}

impl IncidentFilter {
    /// Matches the search text against location, description and data hall.
    pub fn matches(&self, incident: &Incident) -> bool {
        if self.status.is_some_and(|s| s != incident.status) {
            return false;
        }
        let needle = self.search.trim().to_lowercase();
        contains_ci(&incident.location, &needle)
            || contains_ci(&incident.description, &needle)
            || contains_ci(&incident.datahall, &needle)
    }

    pub fn apply<'a>(&self, incidents: &'a [Incident]) -> Vec<&'a Incident> {
        incidents.iter().filter(|i| self.matches(i)).collect()
    }
}

/// CSS modifier used by the severity badge.
pub fn severity_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "badge-critical",
        Severity::High => "badge-high",
        Severity::Medium => "badge-medium",
        Severity::Low => "badge-low",
    }
}

/// CSS modifier used by the status badge.
pub fn status_class(status: IncidentStatus) -> &'static str {
    match status {
        IncidentStatus::Open => "badge-open",
        IncidentStatus::InProgress => "badge-in-progress",
        IncidentStatus::Resolved => "badge-resolved",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn incident(id: &str, description: &str, status: IncidentStatus) -> Incident {
        Incident {
            id: id.into(),
            location: "Data Center A".into(),
            datahall: "Hall C".into(),
            description: description.into(),
            severity: Severity::Medium,
            status,
            user_email: "a@b.com".into(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn filters_by_text_and_status() {
        let incidents = vec![
            incident("1", "Rack R1 issues: PDU A: Alarm", IncidentStatus::Open),
            incident("2", "Rack R2 issues: RDHX: Water Leak", IncidentStatus::Resolved),
        ];
        let leak = IncidentFilter {
            search: "water".into(),
            status: None,
        };
        assert_eq!(leak.apply(&incidents)[0].id, "2");

        let open_in_hall = IncidentFilter {
            search: "hall c".into(),
            status: Some(IncidentStatus::Open),
        };
        let hits = open_in_hall.apply(&incidents);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "1");
    }
}

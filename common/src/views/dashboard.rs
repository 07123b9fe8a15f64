//! Dashboard summary over the latest inspections.

use crate::model::inspection::InspectionRecord;
use crate::model::status::StatusCategory;

/// Number of inspections shown in the "recent" panel.
pub const RECENT_COUNT: usize = 5;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StatusCounts {
    pub operational: usize,
    pub maintenance: usize,
    pub alert: usize,
    pub offline: usize,
}

impl StatusCounts {
    pub fn get(&self, category: StatusCategory) -> usize {
        match category {
            StatusCategory::Operational => self.operational,
            StatusCategory::Maintenance => self.maintenance,
            StatusCategory::Alert => self.alert,
            StatusCategory::Offline => self.offline,
            StatusCategory::Unknown => 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary<'a> {
    pub total: usize,
    pub counts: StatusCounts,
    pub urgent: Vec<&'a InspectionRecord>,
    pub recent: Vec<&'a InspectionRecord>,
}

impl<'a> DashboardSummary<'a> {
    pub fn from_records(records: &'a [InspectionRecord]) -> Self {
        let mut counts = StatusCounts::default();
        for record in records {
            match StatusCategory::from_status(&record.report_data.status) {
                StatusCategory::Operational => counts.operational += 1,
                StatusCategory::Maintenance => counts.maintenance += 1,
                StatusCategory::Alert => counts.alert += 1,
                StatusCategory::Offline => counts.offline += 1,
                StatusCategory::Unknown => {}
            }
        }

        let urgent = records.iter().filter(|r| r.report_data.is_urgent).collect();

        let mut recent: Vec<&InspectionRecord> = records.iter().collect();
        recent.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        recent.truncate(RECENT_COUNT);

        Self {
            total: records.len(),
            counts,
            urgent,
            recent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::inspection::ReportData;
    use chrono::{Duration, TimeZone, Utc};

    fn record(n: i64, status: &str, urgent: bool) -> InspectionRecord {
        InspectionRecord {
            id: n.to_string(),
            user_email: "a@b.com".into(),
            timestamp: Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap() + Duration::minutes(n),
            report_data: ReportData {
                datahall: "Hall A".into(),
                status: status.into(),
                is_urgent: urgent,
                ..ReportData::default()
            },
        }
    }

    #[test]
    fn counts_statuses_case_insensitively() {
        let records = vec![
            record(1, "Operational", false),
            record(2, "operational", false),
            record(3, "ALERT", true),
            record(4, "Healthy", false),
        ];
        let summary = DashboardSummary::from_records(&records);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.counts.operational, 2);
        assert_eq!(summary.counts.get(StatusCategory::Alert), 1);
        assert_eq!(summary.counts.offline, 0);
        assert_eq!(summary.urgent.len(), 1);
        assert_eq!(summary.urgent[0].id, "3");
    }

    #[test]
    fn recent_is_newest_first_and_capped() {
        let records: Vec<_> = (0..8).map(|n| record(n, "Operational", false)).collect();
        let summary = DashboardSummary::from_records(&records);
        let ids: Vec<&str> = summary.recent.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["7", "6", "5", "4", "3"]);
    }
}

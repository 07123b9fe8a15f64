//! Searching and paging the inspections list.

use super::contains_ci;
use crate::model::inspection::InspectionRecord;
use crate::model::status::StatusCategory;

pub const PAGE_SIZE: usize = 10;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct InspectionFilter {
    pub search: String,
    pub status: Option<StatusCategory>,
}

impl InspectionFilter {
    /// Matches the search text against data hall, location, status and
    /// submitter.
    pub fn matches(&self, record: &InspectionRecord) -> bool {
        let data = &record.report_data;
        if let Some(status) = self.status {
            if StatusCategory::from_status(&data.status) != status {
                return false;
            }
        }
        let needle = self.search.trim().to_lowercase();
        contains_ci(&data.datahall, &needle)
            || data
                .location
                .as_deref()
                .is_some_and(|loc| contains_ci(loc, &needle))
            || contains_ci(&data.status, &needle)
            || contains_ci(&record.user_email, &needle)
    }

    pub fn apply<'a>(&self, records: &'a [InspectionRecord]) -> Vec<&'a InspectionRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}

/// Number of pages needed for `len` items; always at least one.
pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    len.div_ceil(page_size).max(1)
}

/// Items of the 1-based `page`; empty when the page is out of range.
pub fn page<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = (start + page_size).min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::inspection::ReportData;
    use chrono::Utc;

    fn record(id: &str, hall: &str, status: &str, email: &str) -> InspectionRecord {
        InspectionRecord {
            id: id.into(),
            user_email: email.into(),
            timestamp: Utc::now(),
            report_data: ReportData {
                location: Some("Data Center A".into()),
                datahall: hall.into(),
                status: status.into(),
                ..ReportData::default()
            },
        }
    }

    #[test]
    fn search_and_status_filter_combine() {
        let records = vec![
            record("1", "Hall A", "Operational", "ana@example.com"),
            record("2", "Hall B", "Alert", "ben@example.com"),
            record("3", "Hall B", "Operational", "cy@example.com"),
        ];
        let filter = InspectionFilter {
            search: "hall b".into(),
            status: None,
        };
        assert_eq!(filter.apply(&records).len(), 2);

        let filter = InspectionFilter {
            search: "HALL B".into(),
            status: Some(StatusCategory::Operational),
        };
        let hits = filter.apply(&records);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "3");

        let by_email = InspectionFilter {
            search: "ben@".into(),
            status: None,
        };
        assert_eq!(by_email.apply(&records)[0].id, "2");
        assert_eq!(InspectionFilter::default().apply(&records).len(), 3);
    }

    #[test]
    fn paging() {
        let items: Vec<u32> = (1..=23).collect();
        assert_eq!(page_count(items.len(), PAGE_SIZE), 3);
        assert_eq!(page_count(0, PAGE_SIZE), 1);
        assert_eq!(page(&items, 1, PAGE_SIZE).len(), 10);
        assert_eq!(page(&items, 3, PAGE_SIZE), &[21, 22, 23]);
        assert!(page(&items, 4, PAGE_SIZE).is_empty());
        assert!(page(&items, 0, PAGE_SIZE).is_empty());
    }
}

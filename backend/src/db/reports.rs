use super::{format_timestamp, parse_timestamp, Store, StoreError};
use chrono::{SubsecRound, Utc};
use common::model::inspection::{InspectionRecord, ReportData};
use rusqlite::{params, Row};
use uuid::Uuid;

const SELECT_REPORT: &str = "SELECT Id, UserEmail, Timestamp, ReportData FROM AuditReports";

struct ReportRow {
    id: String,
    user_email: String,
    timestamp: String,
    report_data: String,
}

impl ReportRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            user_email: row.get(1)?,
            timestamp: row.get(2)?,
            report_data: row.get(3)?,
        })
    }

    fn into_record(self) -> Result<InspectionRecord, StoreError> {
        Ok(InspectionRecord {
            id: self.id,
            user_email: self.user_email,
            timestamp: parse_timestamp(&self.timestamp)?,
            report_data: serde_json::from_str(&self.report_data)?,
        })
    }
}

impl Store {
    /// Inserts a new report with a fresh id and the current time.
    pub async fn insert_report(
        &self,
        user_email: String,
        report: ReportData,
    ) -> Result<InspectionRecord, StoreError> {
        let record = InspectionRecord {
            id: Uuid::new_v4().to_string(),
            user_email,
            timestamp: Utc::now().trunc_subsecs(6),
            report_data: report,
        };
        self.run(move |conn| {
            conn.execute(
                "INSERT INTO AuditReports (Id, UserEmail, Timestamp, ReportData)
                 VALUES (?1, ?2, ?3, ?4)",
                params![
                    record.id,
                    record.user_email,
                    format_timestamp(&record.timestamp),
                    serde_json::to_string(&record.report_data)?,
                ],
            )?;
            Ok(record)
        })
        .await
    }

    /// Up to `limit` reports, newest first.
    pub async fn recent_reports(&self, limit: usize) -> Result<Vec<InspectionRecord>, StoreError> {
        self.run(move |conn| {
            let mut stmt = conn.prepare(&format!(
                "{SELECT_REPORT} ORDER BY Timestamp DESC, rowid DESC LIMIT ?1"
            ))?;
            let rows = stmt
                .query_map(params![limit as i64], ReportRow::from_row)?
                .collect::<Result<Vec<_>, _>>()?;
            rows.into_iter().map(ReportRow::into_record).collect()
        })
        .await
    }

    /// The report with `id`, or `StoreError::NotFound`.
    pub async fn report_by_id(&self, id: String) -> Result<InspectionRecord, StoreError> {
        self.run(move |conn| {
            let row = conn
                .query_row(
                    &format!("{SELECT_REPORT} WHERE Id = ?1"),
                    params![id],
                    ReportRow::from_row,
                )
                .map_err(|e| match e {
                    rusqlite::Error::QueryReturnedNoRows => StoreError::NotFound,
                    other => StoreError::Sqlite(other),
                })?;
            row.into_record()
        })
        .await
    }
}

//! # Report Generation Service
//!
//! `GET /api/GenerateReport?id=<id>` looks up a single walkthrough and
//! answers with the record plus the URL where a spreadsheet export would
//! live. No spreadsheet is produced.
//!
//! - missing or blank `id`: `400 Report ID is required`
//! - unknown `id`: `404 Report not found`
//! - store failure: `500 Error generating report: <detail>`

use crate::db::StoreError;
use crate::error::ApiError;
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use common::requests::{GenerateReportResponse, ReportQuery, REPORT_ID_REQUIRED_MESSAGE};
use log::{error, info};

pub const REPORT_NOT_FOUND_MESSAGE: &str = "Report not found";
pub const REPORT_SUCCESS_MESSAGE: &str = "Report generation successful";

pub async fn process(
    state: web::Data<AppState>,
    query: web::Query<ReportQuery>,
) -> Result<HttpResponse, ApiError> {
    let id = query
        .id()
        .ok_or_else(|| ApiError::Validation(REPORT_ID_REQUIRED_MESSAGE.to_string()))?;
    let response = generate_report(&state, id).await?;
    Ok(HttpResponse::Ok().json(response))
}

pub async fn generate_report(
    state: &AppState,
    id: &str,
) -> Result<GenerateReportResponse, ApiError> {
    let record = state
        .store
        .report_by_id(id.to_string())
        .await
        .map_err(|e| match e {
            StoreError::NotFound => ApiError::NotFound(REPORT_NOT_FOUND_MESSAGE.to_string()),
            other => {
                error!("failed to generate report {}: {}", id, other);
                ApiError::persistence("Error generating report", other)
            }
        })?;

    info!("generated report for inspection {}", record.id);
    Ok(GenerateReportResponse {
        message: REPORT_SUCCESS_MESSAGE.to_string(),
        report_url: state.report_url(&record.id),
        data: record,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Store;

    #[actix_web::test]
    async fn corrupt_record_is_a_server_error() {
        let state = AppState::new(Store::open_in_memory().unwrap(), "https://reports.test");
        state
            .store
            .with_conn(|conn| {
                conn.execute(
                    "INSERT INTO AuditReports VALUES ('bad', 'a@b.com', 'yesterday', '{}')",
                    [],
                )?;
                Ok(())
            })
            .unwrap();

        let err = generate_report(&state, "bad").await.unwrap_err();
        assert!(matches!(err, ApiError::Persistence(_)));
        assert!(err.to_string().starts_with("Error generating report: "));
    }

    #[actix_web::test]
    async fn report_url_uses_the_record_id() {
        let state = AppState::new(Store::open_in_memory().unwrap(), "https://reports.test");
        let saved = state
            .store
            .insert_report(
                "a@b.com".into(),
                common::model::inspection::ReportData {
                    datahall: "Hall B".into(),
                    status: "Maintenance".into(),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let report = generate_report(&state, &saved.id).await.unwrap();
        assert_eq!(report.report_url, format!("https://reports.test/{}.xlsx", saved.id));
        assert_eq!(report.message, "Report generation successful");
        assert_eq!(report.data, saved);
    }
}

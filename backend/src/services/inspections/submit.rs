//! # Inspection Submission Service
//!
//! Backend logic for `POST /api/SubmitInspection`.
//!
//! ## Workflow
//!
//! 1.  **Validation**: `datahall` and `status` must be non-blank; otherwise
//!     the request is rejected with `400` and nothing is written.
//!
//! 2.  **Report Insert**: the payload is stored in `AuditReports` under a new
//!     UUID and the current UTC time. The submitter defaults to `"unknown"`.
//!
//! 3.  **Incidents**: when the payload flags issues, one incident per rack is
//!     written to `Incidents`. These writes are not atomic with the report
//!     insert; a failure here is logged and the stored record is still
//!     returned.
//!
//! 4.  **HTTP Response**: `200 OK` with the stored `InspectionRecord`.

use crate::error::ApiError;
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use common::model::incident::incidents_for;
use common::model::inspection::InspectionRecord;
use common::requests::SubmitInspectionRequest;
use log::{error, info, warn};

pub async fn process(
    state: web::Data<AppState>,
    body: web::Json<SubmitInspectionRequest>,
) -> Result<HttpResponse, ApiError> {
    let record = submit_inspection(&state, body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(record))
}

/// Validates, stores and raises incidents for one walkthrough.
pub async fn submit_inspection(
    state: &AppState,
    request: SubmitInspectionRequest,
) -> Result<InspectionRecord, ApiError> {
    if let Err(message) = request.validate() {
        warn!("rejected inspection: {}", message);
        return Err(ApiError::Validation(message.to_string()));
    }

    let submitter = request.submitter();
    let record = state
        .store
        .insert_report(submitter, request.report)
        .await
        .map_err(|e| {
            error!("failed to store inspection: {}", e);
            ApiError::persistence("Error storing inspection", e)
        })?;

    let incidents = incidents_for(&record.report_data, &record.user_email, record.timestamp);
    let expected = incidents.len();
    if expected > 0 {
        match state.store.insert_incidents(incidents).await {
            Ok(raised) => info!("inspection {} raised {} incident(s)", record.id, raised.len()),
            Err(e) => {
                error!("failed to raise incidents for {}: {}", record.id, e);
                warn!(
                    "inspection {} stored without its {} incident(s)",
                    record.id, expected
                );
            }
        }
    }

    info!(
        "stored inspection {} for {} ({})",
        record.id, record.report_data.datahall, record.user_email
    );
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Store;
    use common::model::inspection::ReportData;

    fn request(hall: &str, status: &str) -> SubmitInspectionRequest {
        SubmitInspectionRequest {
            user_email: Some("tech@example.com".into()),
            report: ReportData {
                datahall: hall.into(),
                status: status.into(),
                ..ReportData::default()
            },
        }
    }

    fn state() -> AppState {
        AppState::new(Store::open_in_memory().unwrap(), "https://reports.test")
    }

    #[actix_web::test]
    async fn blank_status_is_rejected_before_storage() {
        let state = state();
        let err = submit_inspection(&state, request("Hall A", "  "))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
        assert!(state.store.recent_reports(50).await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn storage_failure_is_reported_with_context() {
        let state = state();
        state
            .store
            .with_conn(|conn| Ok(conn.execute_batch("DROP TABLE AuditReports")?))
            .unwrap();

        let err = submit_inspection(&state, request("Hall A", "Operational"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Persistence(_)));
        assert!(err.to_string().starts_with("Error storing inspection: "));
    }

    #[actix_web::test]
    async fn incident_failure_does_not_lose_the_report() {
        let state = state();
        state
            .store
            .with_conn(|conn| Ok(conn.execute_batch("DROP TABLE Incidents")?))
            .unwrap();

        let mut req = request("Hall A", "Alert");
        req.report.has_issues = true;
        req.report.racks = vec![common::model::inspection::RackFinding {
            location: "R1".into(),
            findings: vec![common::model::device::DeviceFinding::Rdhx {
                status: common::model::device::RdhxStatus::WaterLeak,
            }],
            comments: None,
        }];

        let record = submit_inspection(&state, req).await.unwrap();
        let stored = state.store.report_by_id(record.id.clone()).await.unwrap();
        assert_eq!(stored, record);
    }
}

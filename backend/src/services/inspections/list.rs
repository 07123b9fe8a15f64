//! # Inspection Listing Service
//!
//! `GET /api/GetInspections` returns the latest walkthroughs, newest first.
//! The list is capped; there is no paging on the server.

use crate::error::ApiError;
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use log::error;

/// Maximum number of records returned.
pub const MAX_INSPECTIONS: usize = 50;

pub async fn process(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let records = state
        .store
        .recent_reports(MAX_INSPECTIONS)
        .await
        .map_err(|e| {
            error!("failed to fetch inspections: {}", e);
            ApiError::persistence("Error fetching inspections", e)
        })?;
    Ok(HttpResponse::Ok().json(records))
}

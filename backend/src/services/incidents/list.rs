use crate::error::ApiError;
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use log::error;

pub const MAX_INCIDENTS: usize = 20;

pub async fn process(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let incidents = state
        .store
        .recent_incidents(MAX_INCIDENTS)
        .await
        .map_err(|e| {
            error!("failed to fetch incidents: {}", e);
            ApiError::persistence("Error fetching incidents", e)
        })?;
    Ok(HttpResponse::Ok().json(incidents))
}

//! # API Routes
//!
//! Every endpoint lives under a single `/api` scope; each feature module adds
//! its routes through `configure` so the scope is never registered twice.
//!
//! - `GET  /api`                  health check
//! - `POST /api/SubmitInspection` store a walkthrough
//! - `GET  /api/GetInspections`   latest 50 walkthroughs
//! - `GET  /api/GenerateReport`   one walkthrough plus its mock report URL
//! - `GET  /api/incidents`        latest 20 incidents

mod health;
mod incidents;
mod inspections;
pub mod spa;

use actix_web::web::{get, scope};
use actix_web::Scope;

/// The base path for every API endpoint.
const API_PATH: &str = "/api";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(health::process))
        .configure(inspections::configure)
        .configure(incidents::configure)
}

//! # Inspection Service Module
//!
//! Routes for storing and reading walkthrough records.
//!
//! ## Sub-modules:
//! - `submit`: validates and stores a walkthrough, raising incidents for
//!   flagged racks.
//! - `list`: returns the most recent walkthroughs.
//! - `report`: returns one walkthrough together with its mock report URL.

mod list;
mod report;
mod submit;

use actix_web::web::{get, post, ServiceConfig};

/// Adds the inspection routes to the `/api` scope.
///
/// # Registered Routes:
///
/// *   **`POST /SubmitInspection`**:
///     - **Handler**: `submit::process`
///     - **Description**: Stores the JSON walkthrough payload under a fresh id
///       and returns the stored record.
///
/// *   **`GET /GetInspections`**:
///     - **Handler**: `list::process`
///     - **Description**: Returns at most 50 records, newest first.
///
/// *   **`GET /GenerateReport?id=<id>`**:
///     - **Handler**: `report::process`
///     - **Description**: Returns the record with `id` and a spreadsheet URL
///       derived from it. No file is produced.
pub fn configure(cfg: &mut ServiceConfig) {
    cfg.route("/SubmitInspection", post().to(submit::process))
        .route("/GetInspections", get().to(list::process))
        .route("/GenerateReport", get().to(report::process));
}

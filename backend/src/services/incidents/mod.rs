//! # Incident Service Module
//!
//! Read access to incidents raised by flagged walkthroughs.

mod list;

use actix_web::web::{get, ServiceConfig};

/// Registers `GET /incidents` (latest 20, newest first).
pub fn configure(cfg: &mut ServiceConfig) {
    cfg.route("/incidents", get().to(list::process));
}

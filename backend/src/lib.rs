//! # Walkthrough Backend
//!
//! HTTP API behind the datacenter walkthrough app. `main.rs` reads the
//! configuration, opens the store and hands both to [`configure_app`], which
//! the integration tests reuse against an in-memory database.

pub mod config;
pub mod db;
pub mod error;
pub mod services;
pub mod state;

use crate::error::ApiError;
use crate::state::AppState;
use actix_web::web;

/// Largest accepted JSON body.
pub const JSON_LIMIT: usize = 10 * 1024 * 1024; // 10 MB

/// Registers shared state, the JSON extractor settings and every `/api` route.
pub fn configure_app(state: AppState) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        let json = web::JsonConfig::default()
            .limit(JSON_LIMIT)
            .error_handler(|err, _req| {
                log::warn!("rejected inspection payload: {}", err);
                ApiError::Validation(format!("Invalid inspection payload: {}", err)).into()
            });

        cfg.app_data(json)
            .app_data(web::Data::new(state))
            .service(services::configure_routes());
    }
}

//! Types and logic shared by the walkthrough backend and frontend.
//!
//! - `model`: persisted records, the typed inspection payload, incidents and the site catalog
//! - `requests`: HTTP request/response bodies
//! - `flow`: the inspection flow state machine driven by the frontend
//! - `views`: filtering, counting and classification used by the read views

pub mod flow;
pub mod model;
pub mod requests;
pub mod views;

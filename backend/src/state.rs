//! Application state injected into every handler.

use crate::db::Store;

/// Cloned into each Actix worker as `web::Data<AppState>`.
#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub report_base_url: String,
}

impl AppState {
    pub fn new(store: Store, report_base_url: impl Into<String>) -> Self {
        Self {
            store,
            report_base_url: report_base_url.into(),
        }
    }

    /// Mock spreadsheet location for a report; nothing is generated there.
    pub fn report_url(&self, id: &str) -> String {
        format!("{}/{}.xlsx", self.report_base_url, id)
    }
}

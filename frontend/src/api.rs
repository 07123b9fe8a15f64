//! Thin wrappers around the `/api` endpoints.
//!
//! Every call resolves to `Err(message)` on transport failure or non-2xx
//! status; for the latter the message is the plain-text body the backend
//! returned.

use common::model::incident::Incident;
use common::model::inspection::InspectionRecord;
use common::requests::{GenerateReportResponse, SubmitInspectionRequest};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

pub async fn fetch_inspections() -> Result<Vec<InspectionRecord>, String> {
    let resp = Request::get("/api/GetInspections")
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(resp).await
}

pub async fn submit_inspection(
    request: &SubmitInspectionRequest,
) -> Result<InspectionRecord, String> {
    let resp = Request::post("/api/SubmitInspection")
        .json(request)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(resp).await
}

pub async fn generate_report(id: &str) -> Result<GenerateReportResponse, String> {
    let resp = Request::get("/api/GenerateReport")
        .query([("id", id)])
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(resp).await
}

pub async fn fetch_incidents() -> Result<Vec<Incident>, String> {
    let resp = Request::get("/api/incidents")
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(resp).await
}

async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, String> {
    if resp.ok() {
        return resp.json::<T>().await.map_err(|e| e.to_string());
    }
    let status = resp.status();
    match resp.text().await {
        Ok(body) if !body.trim().is_empty() => Err(body),
        _ => Err(format!("Request failed with status {}", status)),
    }
}

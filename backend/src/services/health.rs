use actix_web::HttpResponse;

/// `GET /api`: liveness probe.
pub async fn process() -> HttpResponse {
    HttpResponse::Ok().body("API is running")
}

//! # Static SPA Service
//!
//! Serves the compiled frontend. Unknown paths fall back to `index.html` so
//! client-side routes survive a page reload. Registered after the `/api`
//! scope, so API routes always win.

use actix_files::{Files, NamedFile};
use actix_web::dev::{fn_service, ServiceRequest, ServiceResponse};
use std::path::Path;

/// A `Files` service rooted at `dir`, or `None` when `dir` holds no `index.html`.
pub fn static_files(dir: &Path) -> Option<Files> {
    let index = dir.join("index.html");
    if !index.is_file() {
        return None;
    }

    Some(
        Files::new("/", dir)
            .index_file("index.html")
            .default_handler(fn_service(move |req: ServiceRequest| {
                let index = index.clone();
                async move {
                    let (req, _) = req.into_parts();
                    let file = NamedFile::open_async(&index).await?;
                    let res = file.into_response(&req);
                    Ok(ServiceResponse::new(req, res))
                }
            })),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{body, test, App};

    #[actix_web::test]
    async fn missing_build_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        assert!(static_files(dir.path()).is_none());
    }

    #[actix_web::test]
    async fn unknown_paths_fall_back_to_index() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html>walkthrough</html>").unwrap();
        std::fs::write(dir.path().join("app.js"), "console.log(1)").unwrap();

        let files = static_files(dir.path()).unwrap();
        let app = test::init_service(App::new().service(files)).await;

        let req = test::TestRequest::get().uri("/app.js").to_request();
        let res = test::call_service(&app, req).await;
        assert!(res.status().is_success());
        let bytes = body::to_bytes(res.into_body()).await.unwrap();
        assert_eq!(&bytes[..], b"console.log(1)");

        let res = test::call_service(
            &app,
            test::TestRequest::get().uri("/inspections/42").to_request(),
        )
        .await;
        assert!(res.status().is_success());
        let bytes = body::to_bytes(res.into_body()).await.unwrap();
        assert_eq!(&bytes[..], b"<html>walkthrough</html>");
    }
}

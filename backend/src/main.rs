use actix_web::middleware::Logger;
use actix_web::{App, HttpServer};
use env_logger::Env;
use log::{error, info, warn};
use walkthrough_backend::config::ServerConfig;
use walkthrough_backend::db::Store;
use walkthrough_backend::services::spa;
use walkthrough_backend::state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let store = Store::open(&config.database).map_err(std::io::Error::other)?;
    info!("database ready at {}", config.database);

    let state = AppState::new(store, config.report_base_url.clone());
    let static_dir = config.static_dir.clone();
    if spa::static_files(&static_dir).is_some() {
        info!("serving frontend from {}", static_dir.display());
    } else {
        warn!(
            "no frontend build in {}, serving the API only",
            static_dir.display()
        );
    }

    info!("Server running at http://{}", config.addr);

    HttpServer::new(move || {
        let app = App::new()
            .wrap(Logger::default())
            .configure(walkthrough_backend::configure_app(state.clone()));
        match spa::static_files(&static_dir) {
            Some(files) => app.service(files),
            None => app,
        }
    })
    .bind(config.addr)?
    .run()
    .await
}

mod config;
mod services;

use crate::config::ServerConfig;
use crate::services::generate::{RecordSource, UpstreamGenerator};
use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::{info, warn};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(err) = dotenvy::dotenv() {
        if !err.not_found() {
            eprintln!("Ignoring unreadable .env file: {}", err);
        }
    }
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = ServerConfig::from_env().map_err(std::io::Error::other)?;
    let url = config.public_url();

    if config.open_browser {
        let url_clone = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(err) = webbrowser::open(&url_clone) {
                warn!("Could not open a browser at {}: {}", url_clone, err);
            }
        });
    }

    let source: Arc<dyn RecordSource> = Arc::new(UpstreamGenerator::new(config.generator_url.clone()));
    let source = web::Data::from(source);
    let allowed_origin = config.allowed_origin.clone();

    info!("Forwarding generation requests to {}", config.generator_url);
    info!("Server running at {}", url);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&allowed_origin)
            .allow_any_method()
            .allow_any_header();

        App::new()
            .wrap(cors)
            .app_data(source.clone())
            .service(services::generate::configure_routes())
            .default_service(web::route().to(services::assets::serve_embedded))
    })
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}

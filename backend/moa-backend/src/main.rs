use actix_web::{web, App, HttpServer};
use std::io;
use tracing::info;

use moa_backend::config::Config;
use moa_backend::logging::{self, LogFormat};
use moa_backend::metadata::ApiMetadata;
use moa_backend::{openapi, routes};

#[actix_web::main]
async fn main() -> io::Result<()> {
    logging::init(LogFormat::from_env());

    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Configuration loading failed: {}", e);
            eprintln!("ERROR: Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    info!(
        "Starting {} v{}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );
    info!("Environment: {}", config.app.env);

    let metadata = ApiMetadata::resolve(&config.openapi);
    info!(
        title = %metadata.title,
        version = %metadata.version,
        servers = metadata.servers.len(),
        "API documentation metadata ready"
    );

    let doc = web::Data::new(openapi::doc(&metadata));
    let bind_addr = config.app.bind_addr();

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(tracing_actix_web::TracingLogger::default())
            .configure(|cfg| routes::configure(cfg, doc.clone()))
    });
    if let Some(workers) = config.app.workers {
        server = server.workers(workers);
    }

    info!("HTTP server listening on {}", bind_addr);
    server.bind(bind_addr.as_str())?.run().await
}

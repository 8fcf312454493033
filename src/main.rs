mod config;
mod db;
mod entity;
mod error;
mod repository;
mod response;
mod routes;
#[cfg(test)]
mod test_util;

use actix_web::{middleware, web, App, HttpServer};
use config::AppConfig;
use db::{connect_db, seed_catalog, Catalog};
use log::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();
    let config = AppConfig::from_env();

    let db = connect_db(&config).await.map_err(|e| {
        error!("db connect failed: {}", e);
        std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
    })?;

    if let Some(path) = &config.seed_path {
        let seeded = match Catalog::from_path(path) {
            Ok(catalog) => seed_catalog(&db, &catalog).await,
            Err(e) => Err(e),
        };
        if let Err(e) = seeded {
            error!("catalog import from {} failed: {}", path, e);
        }
    }

    let server_port = config.server_port;
    let bind_addr = config.bind_addr.clone();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(db.clone()))
            .wrap(middleware::Logger::default())
            .wrap(actix_web::middleware::from_fn(routes::cors::cors_handler))
            .configure(routes::configure)
    })
    .bind((bind_addr.as_str(), server_port))?;
    info!("server started at http://{}:{}", bind_addr, server_port);
    server.run().await
}

use actix_web::{middleware, web, App, HttpServer};
use associates_manager::config::Settings;
use associates_manager::service::AssociateService;
use associates_manager::store::PgStore;
use associates_manager::{db, handlers};
use log::{error, info};
use std::sync::Arc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let settings = Settings::from_env().map_err(|err| {
        error!("{}", err);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, err.to_string())
    })?;

    // Initialize the database pool
    let pool = db::create_pool(&settings).await.map_err(|err| {
        error!("{}", err);
        std::io::Error::new(std::io::ErrorKind::ConnectionRefused, err.to_string())
    })?;
    db::init_schema(&pool).await.map_err(|err| {
        error!("{}", err);
        std::io::Error::new(std::io::ErrorKind::Other, err.to_string())
    })?;

    let service = web::Data::new(AssociateService::new(Arc::new(PgStore::new(pool.clone()))));

    info!("Starting server at {}", settings.bind_address);

    // Start the HTTP server
    let result = HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(service.clone())
            .configure(handlers::configure)
    })
    .bind(&settings.bind_address)?
    .run()
    .await;

    info!("Server stopped, closing database pool");
    pool.close().await;
    result
}

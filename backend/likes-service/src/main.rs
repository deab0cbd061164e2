use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{http::header, web, App, HttpServer};
use anyhow::{Context, Result};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use likes_service::routes::configure_routes;
use likes_service::store::MemoryLikeStore;
use likes_service::{AppState, Config};

#[actix_web::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=debug,likes_service=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting likes-service");

    let config = Config::from_env()
        .map_err(anyhow::Error::msg)
        .context("Failed to load configuration")?;

    let store = Arc::new(MemoryLikeStore::new());
    let state = AppState::new(config.clone(), store);

    let bind_addr = (config.app.host.clone(), config.app.port);
    tracing::info!("Binding to {}:{}", bind_addr.0, bind_addr.1);

    let allowed_origins = config.allowed_origin_list();

    HttpServer::new(move || {
        let mut cors = Cors::default()
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec![header::CONTENT_TYPE])
            .max_age(3600);
        for origin in &allowed_origins {
            cors = cors.allowed_origin(origin);
        }

        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(TracingLogger::default())
            .wrap(cors)
            .configure(configure_routes)
    })
    .bind(bind_addr)
    .context("Failed to bind HTTP listener")?
    .run()
    .await
    .context("HTTP server terminated abnormally")
}

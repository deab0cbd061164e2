//! Route configuration
//!
//! Centralized route setup extracted from main.rs.

use actix_web::web;

use crate::handlers;

/// Configure all routes for the application
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(handlers::health_check))
        .service(
            web::scope("/api")
                .route("/likes", web::get().to(handlers::get_likes))
                .route("/likes", web::post().to(handlers::increment_likes)),
        );
}

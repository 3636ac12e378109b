//! # ul-api
//!
//! The JSON routing layer in front of the recommendation store.

pub mod error;
pub mod handlers;
pub mod middleware;

use actix_web::web;

pub use handlers::AppState;
pub use middleware::Viewer;

/// Configures the routes for the store API.
///
/// # Developer Note
/// The binary mounts this at the root; everything store-related lives under `/api`.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(handlers::health)).service(
        web::scope("/api")
            .route("/categories", web::get().to(handlers::list_categories))
            .route("/services", web::get().to(handlers::list_services))
            .route("/profile", web::get().to(handlers::profile))
            .route("/users/{name}/recommendations", web::get().to(handlers::user_recommendations))
            .service(
                web::scope("/recommendations")
                    .route("", web::get().to(handlers::list_recommendations))
                    .route("", web::post().to(handlers::create_recommendation))
                    // Fixed segments before the "{id}" catch-all
                    .route("/feed", web::get().to(handlers::feed))
                    .route("/liked", web::get().to(handlers::liked))
                    .route("/{id}", web::get().to(handlers::get_recommendation))
                    .route("/{id}", web::patch().to(handlers::update_recommendation))
                    .route("/{id}", web::delete().to(handlers::delete_recommendation))
                    .route("/{id}/like", web::post().to(handlers::toggle_like))
                    .route("/{id}/view", web::post().to(handlers::mark_viewed))
                    .route("/{id}/comments", web::get().to(handlers::list_comments))
                    .route("/{id}/comments", web::post().to(handlers::add_comment)),
            ),
    );
}

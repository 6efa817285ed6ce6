use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::{handlers, state::AppState};

pub fn create_router(state: AppState) -> Router {
    // The frontend may be served from a different origin during development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Public read surface
        .route("/api/projects", get(handlers::list_projects))
        .route("/api/ongoing-projects", get(handlers::list_ongoing_projects))
        .route("/api/reviews", get(handlers::list_reviews))
        .route("/api/sections/:id/status", get(handlers::section_status))
        // Admin: auth + dashboard
        .route("/api/admin/auth/check", get(handlers::auth_check))
        .route("/api/admin/stats", get(handlers::dashboard_stats))
        // Admin CRUD, one trio per resource
        .route(
            "/api/admin/projects",
            post(handlers::create_project).put(handlers::update_project),
        )
        .route("/api/admin/projects/:id", delete(handlers::delete_project))
        .route(
            "/api/admin/ongoing-projects",
            post(handlers::create_ongoing_project).put(handlers::update_ongoing_project),
        )
        .route(
            "/api/admin/ongoing-projects/:id",
            delete(handlers::delete_ongoing_project),
        )
        .route(
            "/api/admin/reviews",
            post(handlers::create_review).put(handlers::update_review),
        )
        .route("/api/admin/reviews/:id", delete(handlers::delete_review))
        .with_state(state)
        .layer(cors)
}

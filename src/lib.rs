use axum::{
    routing::get,
    Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod init;
pub mod models;

/// Shared application state — cheap to clone (the pool is Arc internally).
/// Handlers never reach the store except through this pool.
#[derive(Clone)]
pub struct AppState {
    pub db: sqlx::PgPool,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // ── Health ──────────────────────────────────────────────────────────
        .route("/health", get(handlers::health))

        // ── Products CRUD ───────────────────────────────────────────────────
        .route(
            "/api/products",
            get(handlers::products::list_products).post(handlers::products::create_product),
        )
        .route(
            "/api/products/:id",
            get(handlers::products::get_product)
                .put(handlers::products::update_product)
                .delete(handlers::products::delete_product),
        )

        // ── Stats ───────────────────────────────────────────────────────────
        .route("/api/stats", get(handlers::stats::get_stats))

        // ── Bundled front-end assets ────────────────────────────────────────
        .fallback_service(ServeDir::new("public"))

        // ── Middleware ──────────────────────────────────────────────────────
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

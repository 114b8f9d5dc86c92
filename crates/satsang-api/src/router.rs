//! Route definitions for the Satsang admin HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor.

use axum::extract::DefaultBodyLimit;
use axum::routing::{delete, get, post, put};
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use satsang_entity::bhajan::Bhajan;
use satsang_entity::book::Book;
use satsang_entity::event::CalendarEvent;
use satsang_entity::slide::PromoSlide;
use satsang_entity::user::AdminUser;
use satsang_entity::wallpaper::Wallpaper;

use crate::handlers;
use crate::state::{AppState, CatalogEntity};

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_body = state.config.server.max_body_size_bytes;

    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(tree_routes())
        .merge(catalog_routes::<Book>("/books"))
        .merge(catalog_routes::<Bhajan>("/bhajans"))
        .merge(catalog_routes::<Wallpaper>("/wallpapers"))
        .merge(catalog_routes::<CalendarEvent>("/events"))
        .merge(catalog_routes::<PromoSlide>("/slides"))
        .merge(catalog_routes::<AdminUser>("/admin-users"))
        .merge(media_routes())
        .merge(dashboard_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state);

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(max_body))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Auth endpoints: login, logout, me
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/logout", post(handlers::auth::logout))
        .route("/auth/me", get(handlers::auth::me))
}

/// AI-audio content tree endpoints
fn tree_routes() -> Router<AppState> {
    Router::new()
        .route("/audio/categories", get(handlers::tree::list_categories))
        .route("/audio/categories", post(handlers::tree::create_category))
        .route(
            "/audio/categories/full",
            get(handlers::tree::list_categories_full),
        )
        .route(
            "/audio/categories/{id}",
            put(handlers::tree::update_category),
        )
        .route(
            "/audio/categories/{id}",
            delete(handlers::tree::delete_category),
        )
        .route(
            "/audio/categories/{id}/full",
            get(handlers::tree::get_category_full),
        )
        .route(
            "/audio/categories/{id}/chapters",
            get(handlers::tree::list_chapters),
        )
        .route("/audio/chapters", post(handlers::tree::create_chapter))
        .route("/audio/chapters/{id}", put(handlers::tree::update_chapter))
        .route(
            "/audio/chapters/{id}",
            delete(handlers::tree::delete_chapter),
        )
        .route(
            "/audio/chapters/{id}/items",
            get(handlers::tree::list_items),
        )
        .route("/audio/items", post(handlers::tree::create_item))
        .route("/audio/items/{id}", get(handlers::tree::get_item))
        .route("/audio/items/{id}", put(handlers::tree::update_item))
        .route("/audio/items/{id}", delete(handlers::tree::delete_item))
}

/// CRUD endpoints for one flat catalog collection
fn catalog_routes<T>(prefix: &str) -> Router<AppState>
where
    T: CatalogEntity,
    T::Create: serde::de::DeserializeOwned,
    T::Patch: serde::de::DeserializeOwned,
{
    let id_path = format!("{prefix}/{{id}}");
    Router::new()
        .route(prefix, get(handlers::catalog::list::<T>))
        .route(prefix, post(handlers::catalog::create::<T>))
        .route(&id_path, get(handlers::catalog::get::<T>))
        .route(&id_path, put(handlers::catalog::update::<T>))
        .route(&id_path, delete(handlers::catalog::delete::<T>))
}

/// Media upload endpoints
fn media_routes() -> Router<AppState> {
    Router::new().route("/media/upload", post(handlers::media::upload))
}

/// Dashboard endpoints
fn dashboard_routes() -> Router<AppState> {
    Router::new().route("/dashboard", get(handlers::dashboard::summary))
}

/// Health check endpoints (no auth required)
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health_check))
}

/// Build CORS layer from configuration
fn build_cors_layer(state: &AppState) -> CorsLayer {
    use tower_http::cors::Any;

    let cors_config = &state.config.server.cors;

    if cors_config.allowed_origins.contains(&"*".to_string()) {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<axum::http::HeaderValue> = cors_config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

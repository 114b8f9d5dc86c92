//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use satsang_auth::AuthGate;
use satsang_core::config::AppConfig;
use satsang_core::traits::{DocumentStore, MediaResolver};
use satsang_entity::bhajan::Bhajan;
use satsang_entity::book::Book;
use satsang_entity::event::CalendarEvent;
use satsang_entity::slide::PromoSlide;
use satsang_entity::user::AdminUser;
use satsang_entity::wallpaper::Wallpaper;
use satsang_entity::Persisted;
use satsang_service::{CatalogService, ContentTreeService, DashboardService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Remote document store backend.
    pub store: Arc<dyn DocumentStore>,
    /// Media CDN resolver.
    pub media: Arc<dyn MediaResolver>,
    /// Session gate over the identity provider.
    pub auth: AuthGate,
    /// AI-audio content tree service.
    pub tree_service: Arc<ContentTreeService>,
    /// Dashboard aggregation service.
    pub dashboard_service: Arc<DashboardService>,
    /// Book catalog service.
    pub book_service: Arc<CatalogService<Book>>,
    /// Bhajan catalog service.
    pub bhajan_service: Arc<CatalogService<Bhajan>>,
    /// Wallpaper catalog service.
    pub wallpaper_service: Arc<CatalogService<Wallpaper>>,
    /// Calendar event catalog service.
    pub event_service: Arc<CatalogService<CalendarEvent>>,
    /// Promo slide catalog service.
    pub slide_service: Arc<CatalogService<PromoSlide>>,
    /// Admin user catalog service.
    pub admin_user_service: Arc<CatalogService<AdminUser>>,
}

/// Ties a persisted catalog entity to its service in [`AppState`], so
/// one set of generic handlers covers every flat collection.
pub trait CatalogEntity: Persisted + Serialize + DeserializeOwned + Clone {
    /// The entity's catalog service on the shared state.
    fn service(state: &AppState) -> &Arc<CatalogService<Self>>;
}

impl CatalogEntity for Book {
    fn service(state: &AppState) -> &Arc<CatalogService<Self>> {
        &state.book_service
    }
}

impl CatalogEntity for Bhajan {
    fn service(state: &AppState) -> &Arc<CatalogService<Self>> {
        &state.bhajan_service
    }
}

impl CatalogEntity for Wallpaper {
    fn service(state: &AppState) -> &Arc<CatalogService<Self>> {
        &state.wallpaper_service
    }
}

impl CatalogEntity for CalendarEvent {
    fn service(state: &AppState) -> &Arc<CatalogService<Self>> {
        &state.event_service
    }
}

impl CatalogEntity for PromoSlide {
    fn service(state: &AppState) -> &Arc<CatalogService<Self>> {
        &state.slide_service
    }
}

impl CatalogEntity for AdminUser {
    fn service(state: &AppState) -> &Arc<CatalogService<Self>> {
        &state.admin_user_service
    }
}

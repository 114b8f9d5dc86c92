//! Application builder. Wires providers, repositories, services, and
//! the router into a runnable Axum app.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;

use satsang_auth::AuthGate;
use satsang_core::config::AppConfig;
use satsang_core::error::AppError;
use satsang_core::result::AppResult;
use satsang_service::{CatalogService, ContentTreeService, DashboardService};
use satsang_store::repositories::{
    CatalogRepository, CategoryRepository, ChapterRepository, ItemRepository,
};

use crate::router::build_router;
use crate::state::AppState;

/// Construct the full application state from configuration.
pub fn build_state(config: AppConfig) -> AppResult<AppState> {
    let store = satsang_store::providers::from_config(&config.store)?;
    let media = satsang_media::from_config(&config.media)?;
    let identity = satsang_auth::from_config(&config.auth)?;
    let auth = AuthGate::new(identity);

    tracing::info!(
        store = store.provider_type(),
        media = media.provider_type(),
        "Backends initialized"
    );

    let category_repo = Arc::new(CategoryRepository::new(Arc::clone(&store)));
    let chapter_repo = Arc::new(ChapterRepository::new(Arc::clone(&store)));
    let item_repo = Arc::new(ItemRepository::new(Arc::clone(&store)));

    let tree_service = Arc::new(ContentTreeService::new(
        category_repo,
        chapter_repo,
        item_repo,
        Arc::clone(&media),
    ));
    let dashboard_service = Arc::new(DashboardService::new(Arc::clone(&store)));

    Ok(AppState {
        book_service: catalog_service(&store, &media),
        bhajan_service: catalog_service(&store, &media),
        wallpaper_service: catalog_service(&store, &media),
        event_service: catalog_service(&store, &media),
        slide_service: catalog_service(&store, &media),
        admin_user_service: catalog_service(&store, &media),
        config: Arc::new(config),
        store,
        media,
        auth,
        tree_service,
        dashboard_service,
    })
}

fn catalog_service<T: satsang_entity::Persisted>(
    store: &Arc<dyn satsang_core::traits::DocumentStore>,
    media: &Arc<dyn satsang_core::traits::MediaResolver>,
) -> Arc<CatalogService<T>> {
    Arc::new(CatalogService::new(
        Arc::new(CatalogRepository::new(Arc::clone(store))),
        Arc::clone(media),
    ))
}

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Runs the admin server with the given configuration.
///
/// After a shutdown signal, in-flight connections get
/// `server.shutdown_grace_seconds` to drain before being dropped.
pub async fn run_server(config: AppConfig) -> AppResult<()> {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);
    let state = build_state(config)?;
    let app = build_app(state);

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!(%addr, "Satsang admin server listening");

    let (drained_tx, drained_rx) = tokio::sync::oneshot::channel::<()>();
    let server = std::future::IntoFuture::into_future(
        axum::serve(listener, app).with_graceful_shutdown(async move {
            shutdown_signal().await;
            let _ = drained_tx.send(());
        }),
    );
    tokio::pin!(server);

    tokio::select! {
        result = &mut server => {
            result.map_err(|e| AppError::internal(format!("Server error: {e}")))
        }
        _ = async {
            let _ = drained_rx.await;
            tokio::time::sleep(grace).await;
        } => {
            tracing::warn!(
                grace_seconds = grace.as_secs(),
                "Shutdown grace period elapsed, dropping open connections"
            );
            Ok(())
        }
    }
}

/// Resolves when the process receives SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!(error = %e, "Failed to install SIGTERM handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections");
}

//! Reverse proxy shielding the dashboard from cross-origin restrictions.
//!
//! The proxy forwards every request under `/api/proxy/` to the configured
//! backend origin and, when the backend fails and the mock flag is on,
//! answers from a fixture dataset instead so the dashboard stays usable
//! without a live backend. A raw streaming passthrough lives under
//! `/api/raw/` for callers that want transparent forwarding with no
//! fallback at all.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::{any, get},
    Router,
};
use tokio::net::TcpListener;
use tokio::signal::{
    ctrl_c,
    unix::{signal, SignalKind},
};
use tower_http::cors::CorsLayer;
use tracing::info;

pub mod config;
pub mod handler;
pub mod mock;


pub use config::ProxyConfig;
pub use handler::AppState;
pub use mock::{MockStore, StaticMockStore, MOCK_PAGE_SIZE};

use crate::error::Result;
use handler::{connection_status_handler, passthrough_handler, proxy_handler};

/// Build the proxy router for the given state.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/api/proxy/connection-status", get(connection_status_handler))
        .route("/api/proxy/*path", any(proxy_handler))
        .route("/api/raw/*path", any(passthrough_handler))
        .layer(cors)
        .with_state(state)
}

/// Bind and serve until ctrl-c or SIGTERM.
pub async fn serve(config: ProxyConfig, mock: Arc<dyn MockStore>) -> Result<()> {
    let address = format!("0.0.0.0:{}", config.port);
    let app = router(AppState::new(config, mock));

    let listener = TcpListener::bind(&address).await?;
    info!("Proxy listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Proxy shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

//! Legal.AI demo host
//!
//! Serves the Leptos frontend bundle. All chat and account state lives in the
//! browser's local storage, so the server only hands out files and reports
//! its health.

mod handlers;
mod state;

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::handlers::health_check;
use crate::state::{AppState, ServerConfig};

/// Build the router: API routes first, then the static bundle with
/// client-side routes falling back to `index.html`
fn router(config: ServerConfig) -> Router {
    let assets = ServeDir::new(&config.static_dir).fallback(ServeFile::new(config.index_file()));
    let state = AppState {
        config: Arc::new(config),
    };

    Router::new()
        .route("/health", get(health_check))
        .fallback_service(assets)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();

    if tokio::fs::try_exists(config.index_file()).await.unwrap_or(false) {
        tracing::info!("✓ Frontend bundle found in {}", config.static_dir.display());
    } else {
        tracing::warn!("⚠ No index.html in {} - only /health will work", config.static_dir.display());
        tracing::warn!("  Build the frontend: trunk build --release --dist static crates/legal-web/index.html");
    }

    let addr = config.bind_addr.clone();
    let app = router(config);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("🚀 Legal.AI demo running on http://{}", addr);
    tracing::info!("  GET  /health  - Health check");
    tracing::info!("  GET  /*       - Frontend (SPA fallback to index.html)");

    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn config_for(dir: &std::path::Path) -> ServerConfig {
        ServerConfig {
            static_dir: dir.to_path_buf(),
            ..Default::default()
        }
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health_reports_missing_frontend() {
        let dir = tempfile::TempDir::new().unwrap();
        let (status, body) = get(router(config_for(dir.path())), "/health").await;

        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["frontend_built"], false);
    }

    #[tokio::test]
    async fn test_client_routes_fall_back_to_index() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join("index.html"), "<title>Legal.AI</title>").unwrap();

        let (status, body) = get(router(config_for(dir.path())), "/dashboard").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Legal.AI"));

        let (_, health) = get(router(config_for(dir.path())), "/health").await;
        assert!(health.contains("\"frontend_built\":true"));
    }
}

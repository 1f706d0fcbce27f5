//! # HTTP Server for Record Rendering
//!
//! Renders part records, timelines and inventory reports over HTTP for the
//! web app and the mail worker.
//!
//! ## Usage
//!
//! ```bash
//! hangar-docs serve --listen 0.0.0.0:8080
//! ```
//!
//! | Route | Body | Response |
//! |-------|------|----------|
//! | `GET /health` | | `ok` |
//! | `POST /api/render/part?mode=&qr=&base_url=` | part | HTML, or email JSON |
//! | `POST /api/render/timeline?qr=&base_url=` | part | HTML |
//! | `POST /api/reports/preview?type=` | report request | HTML page |
//! | `POST /api/reports/csv?type=` | report request | CSV download |
//! | `POST /api/reports/email?type=&token=&base_url=` | report request | HTML |

mod handlers;
mod state;

pub use state::AppState;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::error::{DocsError, Result};

/// Part bodies carry photos and signatures as data URIs.
const BODY_LIMIT: usize = 25 * 1024 * 1024;

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        // Records
        .route("/api/render/part", post(handlers::render::part))
        .route("/api/render/timeline", post(handlers::render::timeline))
        // Reports
        .route("/api/reports/preview", post(handlers::reports::preview))
        .route("/api/reports/csv", post(handlers::reports::csv))
        .route("/api/reports/email", post(handlers::reports::email))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::max(BODY_LIMIT)),
        )
        .with_state(state)
}

/// Start the HTTP server.
///
/// ## Example
///
/// ```no_run
/// use hangar_docs::{Config, server::serve};
///
/// # async fn example() -> hangar_docs::Result<()> {
/// serve(Config::load()?).await
/// # }
/// ```
pub async fn serve(config: Config) -> Result<()> {
    let listen_addr = config.server.listen_addr.clone();
    let state = Arc::new(AppState::new(config));
    let app = router(state.clone());

    let listener = tokio::net::TcpListener::bind(&listen_addr)
        .await
        .map_err(|e| {
            DocsError::Io(std::io::Error::new(
                e.kind(),
                format!("failed to bind to {}: {}", listen_addr, e),
            ))
        })?;

    info!(
        addr = %listen_addr,
        company = %state.assembler.branding().company_name,
        public_base_url = state.config.server.public_base_url.as_deref().unwrap_or("-"),
        "hangar-docs server listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}

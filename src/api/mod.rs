//! REST API over a computed design.
//!
//! Provides three GET endpoints:
//! - `/results` — full sizing results
//! - `/loads` — appliance list with the energy breakdown
//! - `/report` — the plain-text design report
//!
//! The state is computed once before serving; every endpoint is read-only.

mod handlers;
mod types;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::get;

use crate::config::SystemConfig;
use crate::loads::ApplianceLoad;
use crate::sizing::SizingResults;

/// Immutable application state shared across all request handlers.
///
/// Constructed once after the sizing run completes and wrapped in `Arc` —
/// no locks needed since all data is read-only.
pub struct AppState {
    /// System parameters used for this design.
    pub params: SystemConfig,
    /// Appliance loads the design was sized for.
    pub loads: Vec<ApplianceLoad>,
    /// Computed sizing results.
    pub results: SizingResults,
}

/// Builds the axum router with all API routes.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/results", get(handlers::get_results))
        .route("/loads", get(handlers::get_loads))
        .route("/report", get(handlers::get_report))
        .with_state(state)
}

/// Binds to the given address and serves the API.
///
/// # Panics
///
/// Panics if the TCP listener cannot bind to `addr`.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind to {addr}: {e}"));
    eprintln!("API server listening on http://{addr}");
    axum::serve(listener, app)
        .await
        .unwrap_or_else(|e| panic!("server error: {e}"));
}

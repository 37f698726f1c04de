//! Top-level router configuration.
//!
//! # Route Structure
//!
//! There is a single catch-all: every method on every path (`/`, `/*`) is
//! answered by [`redirect_handler`]. No paths are reserved, because the
//! incoming path is forwarded to the target verbatim.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging

use crate::api::handlers::redirect_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;

/// Constructs the application router.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .fallback(redirect_handler)
        .with_state(state)
        .layer(tracing::layer())
}

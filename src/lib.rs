//! # Domain Park
//!
//! A parked-domain service built with Axum: every request is answered from a
//! static JSON table keyed by hostname.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Rule table, settings merge, hostname normalization
//! - **Application Layer** ([`application`]) - Host resolution service
//! - **API Layer** ([`api`]) - Catch-all handler and middleware
//! - **Web Layer** ([`web`]) - "For sale" interstitial page
//!
//! ## Features
//!
//! - `www.` normalization so `www.example.com` and `example.com` share one rule
//! - Defaults with per-domain overrides (`false` and `0` overrides are honored)
//! - 301 redirects that keep the incoming path and query
//! - Non-cacheable, non-indexable interstitial page with an optional countdown
//!
//! ## Quick Start
//!
//! ```bash
//! cat > redirects.config.json <<'JSON'
//! { "redirects": { "example.com": "https://shop.example" },
//!   "defaultRedirect": "https://fallback.example" }
//! JSON
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Process settings are loaded from environment variables via [`config::Config`];
//! domain rules via [`domain::entities::RedirectTable`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::{AppError, ConfigError};
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{Resolution, ResolutionService};
    pub use crate::domain::entities::{DomainSettings, RedirectTable, ResponseMode};
    pub use crate::error::{AppError, ConfigError};
    pub use crate::routes::app_router;
    pub use crate::state::AppState;
}

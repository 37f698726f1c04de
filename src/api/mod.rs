//! HTTP layer for the catch-all request handler.
//!
//! # Modules
//!
//! - [`handlers`] - The catch-all redirect/interstitial handler
//! - [`middleware`] - Request processing middleware

pub mod handlers;
pub mod middleware;

//! Web layer for browser-facing pages.
//!
//! Renders the parked-domain interstitial with Askama templates.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering and response headers
pub mod handlers;

//! Domain layer: the rule table and the pure logic that resolves it.
//!
//! Nothing in this layer touches HTTP or the process environment.
//!
//! # Architecture
//!
//! - [`entities`] - Configuration shapes, per-domain settings and their merge
//! - [`hostname`] - `www.` normalization of lookup keys
//! - [`location`] - Redirect target construction
//!
//! # Resolution Flow
//!
//! 1. HTTP handler extracts the request host (see [`crate::utils::extract_domain`])
//! 2. [`hostname::normalize_hostname`] strips a leading `www.`
//! 3. [`entities::RedirectTable::resolve`] merges overrides over defaults
//! 4. The handler renders the page or builds the `Location` via [`location::redirect_location`]

pub mod entities;
pub mod hostname;
pub mod location;

//! Request-level helper functions.
//!
//! - [`extract_domain`] - Host extraction from HTTP headers and URI

pub mod extract_domain;

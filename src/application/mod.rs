//! Application layer services implementing business logic.
//!
//! Services wrap the domain table and give HTTP handlers and the admin CLI
//! one entry point for resolving a host.
//!
//! # Available Services
//!
//! - [`services::resolution_service::ResolutionService`] - Host normalization and settings resolution

pub mod services;

//! Core domain entities representing the configuration data model.
//!
//! # Entity Types
//!
//! - [`RedirectTable`] - The whole rule set loaded at startup
//! - [`DomainSettings`] - Fully resolved settings for one request
//! - [`SettingsOverride`] - Partial settings as written in the file
//! - [`ResponseMode`] - Redirect or interstitial page

pub mod redirect_table;
pub mod settings;

pub use redirect_table::{RedirectTable, ResponseMode};
pub use settings::{DomainSettings, SettingsOverride};

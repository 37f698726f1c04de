//! The domain table loaded from the JSON configuration file.
//!
//! Two file shapes are accepted:
//!
//! - **Simple** — a hostname → target map plus a fallback target:
//!
//!   ```json
//!   { "redirects": { "example.com": "https://shop.example" },
//!     "defaultRedirect": "https://fallback.example" }
//!   ```
//!
//! - **Rich** — defaults plus per-domain partial overrides, served either as
//!   an interstitial page or as plain redirects:
//!
//!   ```json
//!   { "mode": "interstitial",
//!     "defaults": { "targetUrl": "https://buy.example", "delaySeconds": 5 },
//!     "domains": { "park.test": { "showCountdown": false } } }
//!   ```
//!
//! The shape is detected from the top-level keys; fields from both shapes in
//! one file are rejected.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use super::settings::{DomainSettings, SettingsOverride};
use crate::domain::hostname::is_shadowed_key;
use crate::error::ConfigError;

const SIMPLE_KEYS: [&str; 2] = ["redirects", "defaultRedirect"];
const RICH_KEYS: [&str; 3] = ["mode", "defaults", "domains"];

/// How a resolved domain is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseMode {
    /// `200 OK` with the for-sale page and a client-side redirect.
    #[default]
    Interstitial,
    /// `301 Moved Permanently` to the target with path and query appended.
    Redirect,
}

impl ResponseMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseMode::Interstitial => "interstitial",
            ResponseMode::Redirect => "redirect",
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct SimpleFile {
    #[serde(default)]
    redirects: HashMap<String, String>,
    default_redirect: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RichFile {
    #[serde(default)]
    mode: ResponseMode,
    defaults: SettingsOverride,
    #[serde(default)]
    domains: HashMap<String, SettingsOverride>,
}

/// Immutable rule set shared by every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectTable {
    /// Hostname → target map. Always answered with redirects.
    Simple {
        redirects: HashMap<String, String>,
        default_redirect: String,
    },
    /// Defaults merged with per-domain overrides.
    Rich {
        mode: ResponseMode,
        defaults: DomainSettings,
        domains: HashMap<String, SettingsOverride>,
    },
}

impl RedirectTable {
    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file can't be read, otherwise any
    /// error of [`RedirectTable::from_json`].
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&raw)
    }

    /// Parses a configuration document.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::Parse`] for malformed JSON, unknown fields or wrong types
    /// - [`ConfigError::UnknownShape`] if the document matches neither shape
    /// - [`ConfigError::MixedShape`] if it carries keys of both shapes
    /// - [`ConfigError::MissingDefaultTarget`] if the fallback target is empty
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let value: Value = serde_json::from_str(raw)?;
        let object = value.as_object().ok_or(ConfigError::UnknownShape)?;

        let is_simple = SIMPLE_KEYS.iter().any(|k| object.contains_key(*k));
        let is_rich = RICH_KEYS.iter().any(|k| object.contains_key(*k));

        match (is_simple, is_rich) {
            (true, true) => Err(ConfigError::MixedShape),
            (true, false) => {
                let file: SimpleFile = serde_json::from_value(value)?;
                if file.default_redirect.is_empty() {
                    return Err(ConfigError::MissingDefaultTarget);
                }
                Ok(Self::Simple {
                    redirects: file.redirects,
                    default_redirect: file.default_redirect,
                })
            }
            (false, true) => {
                let file: RichFile = serde_json::from_value(value)?;
                Ok(Self::Rich {
                    mode: file.mode,
                    defaults: DomainSettings::from_defaults(file.defaults)?,
                    domains: file.domains,
                })
            }
            (false, false) => Err(ConfigError::UnknownShape),
        }
    }

    /// Response policy for every domain in this table.
    pub fn mode(&self) -> ResponseMode {
        match self {
            Self::Simple { .. } => ResponseMode::Redirect,
            Self::Rich { mode, .. } => *mode,
        }
    }

    /// Resolves the effective settings for an already normalized hostname.
    ///
    /// Unknown hosts resolve to the defaults unchanged.
    pub fn resolve(&self, host: &str) -> DomainSettings {
        match self {
            Self::Simple {
                redirects,
                default_redirect,
            } => DomainSettings::with_target(
                redirects.get(host).unwrap_or(default_redirect).as_str(),
            ),
            Self::Rich {
                defaults, domains, ..
            } => match domains.get(host) {
                Some(overrides) => defaults.merged_with(overrides),
                None => defaults.clone(),
            },
        }
    }

    /// Number of per-domain entries.
    pub fn domain_count(&self) -> usize {
        match self {
            Self::Simple { redirects, .. } => redirects.len(),
            Self::Rich { domains, .. } => domains.len(),
        }
    }

    /// Configured hostnames, sorted.
    pub fn hostnames(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = match self {
            Self::Simple { redirects, .. } => redirects.keys().map(String::as_str).collect(),
            Self::Rich { domains, .. } => domains.keys().map(String::as_str).collect(),
        };
        keys.sort_unstable();
        keys
    }

    /// Keys that requests to `x` or `www.x` can never match.
    pub fn shadowed_keys(&self) -> Vec<&str> {
        self.hostnames()
            .into_iter()
            .filter(|k| is_shadowed_key(k))
            .collect()
    }

    /// Every target URL in the table, default first.
    pub fn targets(&self) -> Vec<(&str, &str)> {
        match self {
            Self::Simple {
                redirects,
                default_redirect,
            } => {
                let mut targets = vec![("default", default_redirect.as_str())];
                let mut entries: Vec<_> = redirects
                    .iter()
                    .map(|(k, v)| (k.as_str(), v.as_str()))
                    .collect();
                entries.sort_unstable();
                targets.extend(entries);
                targets
            }
            Self::Rich {
                defaults, domains, ..
            } => {
                let mut targets = vec![("default", defaults.target_url.as_str())];
                let mut entries: Vec<_> = domains
                    .iter()
                    .filter_map(|(k, o)| o.target_url.as_deref().map(|t| (k.as_str(), t)))
                    .collect();
                entries.sort_unstable();
                targets.extend(entries);
                targets
            }
        }
    }
}

//! Host → response policy resolution.

use std::sync::Arc;

use crate::domain::entities::{DomainSettings, RedirectTable, ResponseMode};
use crate::domain::hostname::normalize_hostname;
use crate::domain::location::redirect_location;

/// The outcome of resolving one request host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Host after `www.` normalization; shown on the interstitial page.
    pub domain: String,
    pub settings: DomainSettings,
    pub mode: ResponseMode,
}

impl Resolution {
    /// `Location` value for the redirect policy.
    pub fn location(&self, path: &str, query: Option<&str>) -> String {
        redirect_location(&self.settings.target_url, path, query)
    }
}

/// Service resolving request hosts against the immutable rule table.
///
/// Cheap to share: the table is behind an [`Arc`] and never mutated.
pub struct ResolutionService {
    table: Arc<RedirectTable>,
}

impl ResolutionService {
    /// Creates a new resolution service.
    pub fn new(table: Arc<RedirectTable>) -> Self {
        Self { table }
    }

    /// Resolves a raw request host.
    ///
    /// The host is expected without port and already lowercased. Unknown
    /// and empty hosts resolve to the table defaults; this never fails.
    pub fn resolve(&self, host: &str) -> Resolution {
        let domain = normalize_hostname(host);

        Resolution {
            domain: domain.to_string(),
            settings: self.table.resolve(domain),
            mode: self.table.mode(),
        }
    }
}

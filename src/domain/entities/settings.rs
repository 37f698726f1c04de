//! Per-domain display and redirect settings.

use serde::Deserialize;

use crate::error::ConfigError;

/// Countdown length used when neither defaults nor overrides set `delaySeconds`.
pub const DEFAULT_DELAY_SECONDS: u64 = 5;
pub const DEFAULT_MESSAGE: &str = "This domain is for sale";
pub const DEFAULT_SUB_MESSAGE: &str = "You will be redirected shortly.";

/// Fully resolved settings for one request.
///
/// Every field is populated: this is the result of merging a
/// [`SettingsOverride`] over the configured defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainSettings {
    pub target_url: String,
    pub delay_seconds: u64,
    pub message: String,
    pub sub_message: String,
    pub contact_email: String,
    pub show_countdown: bool,
}

/// A partial settings record as written in the configuration file.
///
/// Used both for the `defaults` block and for each entry of `domains`.
/// A field that is `Some` is present in the file and always wins during a
/// merge, including `Some(false)` and `Some(0)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SettingsOverride {
    pub target_url: Option<String>,
    pub delay_seconds: Option<u64>,
    pub message: Option<String>,
    pub sub_message: Option<String>,
    pub contact_email: Option<String>,
    pub show_countdown: Option<bool>,
}

impl DomainSettings {
    /// Builds settings that carry only a target, with built-in values for
    /// everything else.
    pub fn with_target(target_url: impl Into<String>) -> Self {
        Self {
            target_url: target_url.into(),
            delay_seconds: DEFAULT_DELAY_SECONDS,
            message: DEFAULT_MESSAGE.to_string(),
            sub_message: DEFAULT_SUB_MESSAGE.to_string(),
            contact_email: String::new(),
            show_countdown: true,
        }
    }

    /// Turns the `defaults` block of a configuration file into complete settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingDefaultTarget`] if `targetUrl` is absent
    /// or empty.
    pub fn from_defaults(defaults: SettingsOverride) -> Result<Self, ConfigError> {
        let target_url = defaults
            .target_url
            .clone()
            .filter(|t| !t.is_empty())
            .ok_or(ConfigError::MissingDefaultTarget)?;

        Ok(Self::with_target(target_url).merged_with(&defaults))
    }

    /// Returns a copy of `self` with every present override field applied.
    pub fn merged_with(&self, overrides: &SettingsOverride) -> Self {
        Self {
            target_url: overrides
                .target_url
                .clone()
                .unwrap_or_else(|| self.target_url.clone()),
            delay_seconds: overrides.delay_seconds.unwrap_or(self.delay_seconds),
            message: overrides
                .message
                .clone()
                .unwrap_or_else(|| self.message.clone()),
            sub_message: overrides
                .sub_message
                .clone()
                .unwrap_or_else(|| self.sub_message.clone()),
            contact_email: overrides
                .contact_email
                .clone()
                .unwrap_or_else(|| self.contact_email.clone()),
            show_countdown: overrides.show_countdown.unwrap_or(self.show_countdown),
        }
    }
}

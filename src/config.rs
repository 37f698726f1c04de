//! Process configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//! The domain rules themselves live in a JSON file whose path is read from here
//! (see [`crate::domain::entities::RedirectTable`]).
//!
//! ```bash
//! export REDIRECT_CONFIG="/etc/domain-park/redirects.config.json"
//! export LISTEN="0.0.0.0:8080"
//! ```
//!
//! ## Optional Variables
//!
//! - `REDIRECT_CONFIG` - Path to the domain rules file (default: `redirects.config.json`)
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::Result;
use std::env;
use std::path::PathBuf;

/// Rules file used when `REDIRECT_CONFIG` is not set.
pub const DEFAULT_REDIRECT_CONFIG: &str = "redirects.config.json";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the JSON domain rules file.
    pub redirect_config_path: PathBuf,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Every variable has a default, so this never fails; use
    /// [`Config::validate`] to check the values.
    pub fn from_env() -> Self {
        let redirect_config_path = redirect_config_path_from_env();
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Self {
            redirect_config_path,
            listen_addr,
            log_level,
            log_format,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `redirect_config_path` is empty
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.redirect_config_path.as_os_str().is_empty() {
            anyhow::bail!("REDIRECT_CONFIG must not be empty");
        }

        Ok(())
    }

    /// Returns whether log lines are emitted as JSON.
    pub fn is_json_logging(&self) -> bool {
        self.log_format == "json"
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Domain rules: {}", self.redirect_config_path.display());
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Resolves the rules file path from `REDIRECT_CONFIG`, falling back to
/// [`DEFAULT_REDIRECT_CONFIG`].
pub fn redirect_config_path_from_env() -> PathBuf {
    env::var_os("REDIRECT_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_REDIRECT_CONFIG))
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn valid_config() -> Config {
        Config {
            redirect_config_path: PathBuf::from("redirects.config.json"),
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = valid_config();
        assert!(config.validate().is_ok());

        // Test invalid log format
        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());
        assert!(config.is_json_logging());

        // Test invalid listen address
        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "0.0.0.0:3000".to_string();

        // Test empty rules path
        config.redirect_config_path = PathBuf::new();
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_defaults_when_unset() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("REDIRECT_CONFIG");
            env::remove_var("LISTEN");
            env::remove_var("LOG_FORMAT");
        }

        let config = Config::from_env();

        assert_eq!(
            config.redirect_config_path,
            PathBuf::from(DEFAULT_REDIRECT_CONFIG)
        );
        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.log_format, "text");
    }

    #[test]
    #[serial]
    fn test_values_from_env() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("REDIRECT_CONFIG", "/etc/park/rules.json");
            env::set_var("LISTEN", "127.0.0.1:8080");
            env::set_var("LOG_FORMAT", "json");
        }

        let config = load_from_env().unwrap();

        assert_eq!(
            config.redirect_config_path,
            PathBuf::from("/etc/park/rules.json")
        );
        assert_eq!(config.listen_addr, "127.0.0.1:8080");
        assert!(config.is_json_logging());

        // Cleanup
        unsafe {
            env::remove_var("REDIRECT_CONFIG");
            env::remove_var("LISTEN");
            env::remove_var("LOG_FORMAT");
        }
    }

    #[test]
    #[serial]
    fn test_invalid_log_format_from_env() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("LOG_FORMAT", "yaml");
        }

        assert!(load_from_env().is_err());

        // Cleanup
        unsafe {
            env::remove_var("LOG_FORMAT");
        }
    }
}

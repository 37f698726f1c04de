//! CLI administration tool for domain-park.
//!
//! Works on the domain rules file directly, without a running server.
//!
//! # Usage
//!
//! ```bash
//! # Validate the rules file
//! cargo run --bin admin -- check
//!
//! # Show how a URL would be answered
//! cargo run --bin admin -- resolve "https://www.example.com/sale?ref=x"
//!
//! # Use another rules file
//! cargo run --bin admin -- --config staging.json check
//! ```
//!
//! # Environment Variables
//!
//! - `REDIRECT_CONFIG` (optional): rules file used when `--config` is not given

use domain_park::application::services::ResolutionService;
use domain_park::config::redirect_config_path_from_env;
use domain_park::domain::entities::{RedirectTable, ResponseMode};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use url::Url;

/// CLI tool for managing domain-park rules.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the domain rules file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Validate the rules file and report suspicious entries
    Check,

    /// Show the response a URL would receive
    Resolve {
        /// Full request URL (e.g., "https://www.example.com/sale?ref=x")
        url: String,
    },
}

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let path = cli.config.unwrap_or_else(redirect_config_path_from_env);

    let result = match cli.command {
        Commands::Check => check(&path),
        Commands::Resolve { url } => resolve(&path, &url),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn load(path: &Path) -> Result<RedirectTable> {
    RedirectTable::load(path).with_context(|| format!("Failed to load {}", path.display()))
}

/// Loads the rules file and prints warnings for entries the service will
/// accept but that are probably mistakes.
///
/// # Checks
///
/// - Targets that don't parse as absolute `http`/`https` URLs
/// - Keys starting with `www.` (never matched by `x` or `www.x`)
/// - Keys containing uppercase letters (hosts are matched lowercased)
///
/// Warnings don't change the exit code; load failures do.
fn check(path: &Path) -> Result<ExitCode> {
    let table = load(path)?;

    println!("{}", "Domain rules".bright_blue().bold());
    println!();
    println!("  File:    {}", path.display().to_string().cyan());
    println!("  Mode:    {}", table.mode().as_str().cyan());
    println!("  Domains: {}", table.domain_count().to_string().cyan());
    println!();

    let mut warnings = Vec::new();

    for (key, target) in table.targets() {
        if let Some(problem) = target_problem(target) {
            warnings.push(format!("{key}: target '{target}' {problem}"));
        }
    }

    for key in table.shadowed_keys() {
        warnings.push(format!(
            "{key}: starts with 'www.' and only matches 'www.{key}' requests"
        ));
    }

    for key in table.hostnames() {
        if key.chars().any(|c| c.is_ascii_uppercase()) {
            warnings.push(format!(
                "{key}: contains uppercase letters and will never match"
            ));
        }
    }

    if warnings.is_empty() {
        println!("{}", "OK: no problems found".green());
    } else {
        for warning in &warnings {
            println!("{} {}", "warning:".yellow().bold(), warning);
        }
        println!();
        println!(
            "{}",
            format!("{} warning(s); the service will still start", warnings.len()).yellow()
        );
    }

    Ok(ExitCode::SUCCESS)
}

/// Describes why a target is likely broken, or `None` if it looks fine.
fn target_problem(target: &str) -> Option<String> {
    match Url::parse(target) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {
            if url.query().is_some() {
                Some("has a query; incoming queries will add a second '?'".to_string())
            } else {
                None
            }
        }
        Ok(url) => Some(format!("uses unsupported scheme '{}'", url.scheme())),
        Err(e) => Some(format!("is not an absolute URL ({e})")),
    }
}

/// Resolves a URL against the rules file and prints the outcome.
fn resolve(path: &Path, raw_url: &str) -> Result<ExitCode> {
    let table = load(path)?;
    let url = Url::parse(raw_url).with_context(|| format!("Invalid URL '{raw_url}'"))?;
    let host = url.host_str().unwrap_or_default();

    let service = ResolutionService::new(Arc::new(table));
    let resolution = service.resolve(host);
    let settings = &resolution.settings;

    println!("{}", "Resolution".bright_blue().bold());
    println!();
    println!("  Host:        {}", host);
    println!("  Rule key:    {}", resolution.domain.cyan());
    println!("  Mode:        {}", resolution.mode.as_str().cyan());
    println!("  Target:      {}", settings.target_url);

    match resolution.mode {
        ResponseMode::Redirect => {
            let location = resolution.location(url.path(), url.query());
            println!();
            println!("{} {}", "301 Moved Permanently".green().bold(), location);
        }
        ResponseMode::Interstitial => {
            println!("  Delay:       {}s", settings.delay_seconds);
            println!("  Countdown:   {}", settings.show_countdown);
            println!("  Message:     {}", settings.message);
            println!("  Sub-message: {}", settings.sub_message);
            if !settings.contact_email.is_empty() {
                println!("  Contact:     {}", settings.contact_email);
            }
            println!();
            println!(
                "{} interstitial page, then {}",
                "200 OK".green().bold(),
                settings.target_url
            );
        }
    }

    Ok(ExitCode::SUCCESS)
}

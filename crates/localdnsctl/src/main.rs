// # localdnsctl - Local DNS Console
//
// This binary is a THIN presentation layer:
// - DO NOT add joining, caching or validation logic here
// - All console logic lives in localdns-core
// - Configuration is via environment variables and global flags ONLY
//
// The binary is responsible for:
// 1. Reading configuration from environment variables
// 2. Initializing logging and the runtime
// 3. Building the Dashboard client and console
// 4. Running one command, or the interactive shell
//
// ## Configuration
//
// - `MK_CSM_KEY`: Dashboard API key (required)
// - `LOCALDNS_BASE_URL`: API base URL (default `https://api.meraki.com/api/v1`)
// - `LOCALDNS_HTTP_TIMEOUT_SECS`: Per-request timeout, 1 to 300 (default 30)
// - `LOCALDNS_NETWORK_CACHE_TTL_SECS`: Network cache lifetime (default: never expires)
// - `LOCALDNS_ORG_ID`: Organization to select (same as `--org`)
// - `LOCALDNS_LOG_LEVEL`: trace, debug, info, warn, error (default info)
//
// Logs go to stderr; tables and JSON go to stdout.
//
// ## Example
//
// ```bash
// export MK_CSM_KEY=your_api_key
//
// localdnsctl orgs
// localdnsctl --org 111 profiles create Staging
// localdnsctl --org 111 assignments create --network N_1 --profile 5
// localdnsctl shell
// ```

mod cli;
mod commands;
mod render;
mod shell;

use anyhow::Result;
use clap::Parser;
use localdns_core::{ConsoleConfig, DISCLAIMER_MESSAGE, LocalDnsConsole, Session};
use localdns_provider_meraki::MerakiClient;
use std::env;
use std::process::ExitCode;
use tracing::{Level, debug, error};
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Command};

/// Exit codes for different termination scenarios
///
/// - 0: Command completed
/// - 1: Configuration or startup error
/// - 2: Runtime error (remote failure, invalid input)
#[derive(Debug, Clone, Copy)]
enum CtlExitCode {
    /// Command completed (normal exit)
    Success = 0,
    /// Configuration error or startup failure
    ConfigError = 1,
    /// Runtime error
    RuntimeError = 2,
}

impl From<CtlExitCode> for ExitCode {
    fn from(code: CtlExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

/// Application configuration
#[derive(Debug)]
struct Config {
    console: ConsoleConfig,
    log_level: String,
}

impl Config {
    /// Load configuration from environment variables
    fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = lookup("MK_CSM_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "MK_CSM_KEY is required. \
                    Set it via: export MK_CSM_KEY=your_api_key"
                )
            })?;

        let mut console = ConsoleConfig::new(api_key);
        if let Some(base_url) = lookup("LOCALDNS_BASE_URL") {
            console = console.with_base_url(base_url);
        }
        if let Some(secs) = lookup("LOCALDNS_HTTP_TIMEOUT_SECS") {
            let secs = parse_secs("LOCALDNS_HTTP_TIMEOUT_SECS", &secs)?;
            console = console.with_http_timeout_secs(secs);
        }
        if let Some(secs) = lookup("LOCALDNS_NETWORK_CACHE_TTL_SECS") {
            let secs = parse_secs("LOCALDNS_NETWORK_CACHE_TTL_SECS", &secs)?;
            console = console.with_network_cache_ttl_secs(Some(secs));
        }

        Ok(Self {
            console,
            log_level: lookup("LOCALDNS_LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
        })
    }

    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        self.console.validate()?;

        if self.console.base_url.starts_with("http://") {
            eprintln!(
                "WARNING: LOCALDNS_BASE_URL uses HTTP (not HTTPS). \
                The API key will be sent in clear text."
            );
        }

        self.level()?;
        Ok(())
    }

    fn level(&self) -> Result<Level> {
        match self.log_level.to_lowercase().as_str() {
            "trace" => Ok(Level::TRACE),
            "debug" => Ok(Level::DEBUG),
            "info" => Ok(Level::INFO),
            "warn" => Ok(Level::WARN),
            "error" => Ok(Level::ERROR),
            _ => anyhow::bail!(
                "LOCALDNS_LOG_LEVEL '{}' is not valid. \
                Valid levels: trace, debug, info, warn, error",
                self.log_level
            ),
        }
    }
}

fn parse_secs(name: &str, value: &str) -> Result<u64> {
    value
        .trim()
        .parse()
        .map_err(|_| anyhow::anyhow!("{} must be a whole number of seconds. Got: {}", name, value))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // The disclaimer needs neither credentials nor network
    if cli.command == Command::Disclaimer {
        println!("{}", DISCLAIMER_MESSAGE);
        return CtlExitCode::Success.into();
    }

    // Load configuration from environment
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return CtlExitCode::ConfigError.into();
        }
    };

    if let Err(e) = config.validate() {
        eprintln!("Configuration validation error: {}", e);
        return CtlExitCode::ConfigError.into();
    }

    // Initialize tracing
    let log_level = config.level().unwrap_or(Level::INFO);
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
        return CtlExitCode::ConfigError.into();
    }

    let client = match MerakiClient::from_config(&config.console) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return CtlExitCode::ConfigError.into();
        }
    };
    debug!("Using {:?}", client);

    let rt = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("Failed to create tokio runtime: {}", e);
            return CtlExitCode::RuntimeError.into();
        }
    };

    let console = LocalDnsConsole::from_client(client);
    let result = rt.block_on(run(console, &config, cli));

    match result {
        Ok(()) => CtlExitCode::Success.into(),
        Err(e) => {
            eprintln!("{}", e);
            CtlExitCode::RuntimeError.into()
        }
    }
}

/// Run the selected command
async fn run(console: LocalDnsConsole, config: &Config, cli: Cli) -> Result<()> {
    let mut session = Session::with_network_ttl(config.console.network_cache_ttl());
    if let Some(org_id) = cli.org.as_deref().map(str::trim).filter(|id| !id.is_empty()) {
        session.set_organization(org_id).await;
    }

    match cli.command {
        Command::Disclaimer => {
            println!("{}", DISCLAIMER_MESSAGE);
            Ok(())
        }
        Command::Shell => shell::run(&console, &mut session, cli.json).await,
        Command::Console(command) => {
            let mut stdout = std::io::stdout();
            commands::execute(&console, &session, command, cli.json, &mut stdout).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_missing_api_key_is_config_error() {
        let err = config_from(&[]).unwrap_err();
        assert!(err.to_string().contains("MK_CSM_KEY"));

        assert!(config_from(&[("MK_CSM_KEY", "  ")]).is_err());
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[("MK_CSM_KEY", "abc")]).unwrap();

        assert_eq!(config.console.base_url, "https://api.meraki.com/api/v1");
        assert_eq!(config.console.http_timeout_secs, 30);
        assert_eq!(config.console.network_cache_ttl_secs, None);
        assert_eq!(config.level().unwrap(), Level::INFO);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("MK_CSM_KEY", "abc"),
            ("LOCALDNS_BASE_URL", "https://dashboard.example.test/api/v1/"),
            ("LOCALDNS_HTTP_TIMEOUT_SECS", "10"),
            ("LOCALDNS_NETWORK_CACHE_TTL_SECS", "600"),
            ("LOCALDNS_LOG_LEVEL", "DEBUG"),
        ])
        .unwrap();

        assert_eq!(config.console.base_url, "https://dashboard.example.test/api/v1");
        assert_eq!(config.console.http_timeout_secs, 10);
        assert_eq!(config.console.network_cache_ttl_secs, Some(600));
        assert_eq!(config.level().unwrap(), Level::DEBUG);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(config_from(&[("MK_CSM_KEY", "abc"), ("LOCALDNS_HTTP_TIMEOUT_SECS", "soon")]).is_err());

        let config =
            config_from(&[("MK_CSM_KEY", "abc"), ("LOCALDNS_HTTP_TIMEOUT_SECS", "0")]).unwrap();
        assert!(config.validate().is_err());

        let config = config_from(&[("MK_CSM_KEY", "abc"), ("LOCALDNS_LOG_LEVEL", "loud")]).unwrap();
        assert!(config.validate().is_err());

        let config =
            config_from(&[("MK_CSM_KEY", "abc"), ("LOCALDNS_BASE_URL", "ftp://example.test")])
                .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_debug_does_not_expose_api_key() {
        let config = config_from(&[("MK_CSM_KEY", "secret_key_12345")]).unwrap();
        assert!(!format!("{:?}", config).contains("secret_key_12345"));
    }
}

// ⚙️ Configuration - defaults → optional config file → SYMBOL_SEARCH_* environment

use ::config::{Config, Environment, File};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

/// Environment prefix, e.g. `SYMBOL_SEARCH_PORT=8080`
pub const ENV_PREFIX: &str = "SYMBOL_SEARCH";

/// Config file (any supported extension) picked up from the working directory
pub const DEFAULT_CONFIG_FILE: &str = "symbol-search";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Company database file (id,symbol,name)
    #[serde(default = "default_catalog_path")]
    pub catalog_path: PathBuf,

    /// Server bind address
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Fallback log filter when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            catalog_path: default_catalog_path(),
            bind_addr: default_bind_addr(),
            port: default_port(),
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the file named by `SYMBOL_SEARCH_CONFIG`
    /// (or `symbol-search.*` if present), then environment overrides.
    pub fn load() -> Result<Self> {
        let explicit = Config::builder()
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()
            .context("Failed to read environment")?
            .get_string("config")
            .ok();

        AppConfig::from_sources(explicit.as_deref(), Environment::with_prefix(ENV_PREFIX))
    }

    /// Load configuration from one file only; missing keys take defaults
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_string_lossy();
        let no_env = Environment::with_prefix(ENV_PREFIX).source(Some(::config::Map::new()));

        AppConfig::from_sources(Some(&*path), no_env)
    }

    /// Layer a file source (required when named, optional otherwise) under an
    /// environment source
    pub fn from_sources(file: Option<&str>, env: Environment) -> Result<Self> {
        let file_source = match file {
            Some(path) => File::with_name(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let config: AppConfig = Config::builder()
            // Load from file if exists
            .add_source(file_source)
            // Override with environment variables
            .add_source(env)
            .build()
            .context("Failed to load configuration")?
            .try_deserialize()
            .context("Invalid configuration")?;

        debug!(?config, "configuration resolved");
        Ok(config)
    }

    /// Socket address for the HTTP server
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let addr = format!("{}:{}", self.bind_addr, self.port);
        addr.parse::<SocketAddr>()
            .with_context(|| format!("Invalid bind address: {}", addr))
    }
}

/// Where log lines go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogOutput {
    Stderr,
    /// Full-screen UI owns the terminal; drop log lines
    Discard,
}

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` wins; otherwise the configured level is used.
pub fn init_tracing(log_level: &str, output: LogOutput) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    let writer = match output {
        LogOutput::Stderr => BoxMakeWriter::new(std::io::stderr),
        LogOutput::Discard => BoxMakeWriter::new(std::io::sink),
    };

    // A second call (tests, embedding hosts) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(writer)
        .try_init();
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("companies.csv")
}

fn default_bind_addr() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

// ============================================================================
// TESTS
// ============================================================================

//! Configuration management for the arXiv scraper.
//!
//! This module handles loading and parsing configuration from TOML files,
//! with sensible defaults for all settings. The loaded value is treated as
//! immutable and handed to the client, the query validation and the
//! scraper when they are constructed.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

/// Physics archives, queried through `classification-physics_archives`.
const PHYSICS_CATEGORIES: [&str; 13] = [
    "astro-ph", "cond-mat", "gr-qc", "hep-ex", "hep-lat", "hep-ph", "hep-th", "math-ph", "nlin",
    "nucl-ex", "nucl-th", "physics", "quant-ph",
];

/// Non-physics codes and the classification name arXiv uses for them.
const NAMED_CATEGORIES: [(&str, &str); 7] = [
    ("math", "mathematics"),
    ("cs", "computer-science"),
    ("q-bio", "q_biology"),
    ("q-fin", "q_finance"),
    ("stat", "statistics"),
    ("eess", "eess"),
    ("econ", "economics"),
];

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,

    /// arXiv search settings
    #[serde(default)]
    pub arxiv: ArxivConfig,

    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log directory path
    pub log_dir: String,

    /// Default log level (trace, debug, info, warn, error)
    pub default_level: String,

    /// Enable console output
    pub console: bool,

    /// Enable file output
    pub file: bool,

    /// Enable JSON formatting for file logs
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_dir: "logs".to_string(),
            default_level: "info".to_string(),
            console: true,
            file: false,
            json_format: false,
        }
    }
}

/// arXiv search configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ArxivConfig {
    /// Site root, without the search path
    pub base_url: String,

    /// Pause between two page requests, in seconds
    pub page_delay_secs: u64,

    /// Per-request timeout in seconds (None = transport default)
    pub request_timeout_secs: Option<u64>,

    /// Identifying headers sent with every request
    pub headers: RequestHeaders,

    /// Known category vocabulary
    pub categories: CategoryTable,
}

impl Default for ArxivConfig {
    fn default() -> Self {
        Self {
            base_url: "https://arxiv.org".to_string(),
            page_delay_secs: 15,
            request_timeout_secs: None,
            headers: RequestHeaders::default(),
            categories: CategoryTable::default(),
        }
    }
}

/// Fixed header set for outbound requests
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RequestHeaders {
    /// `User-Agent` header
    pub user_agent: String,

    /// `From` header (contact address)
    pub from: String,

    /// `Accept-Language` header
    pub accept_language: String,
}

impl Default for RequestHeaders {
    fn default() -> Self {
        Self {
            user_agent: "UOC Data Science scrapper bot.".to_string(),
            from: "acanojo@uoc.edu".to_string(),
            accept_language: "en, es-ES;q=0.9".to_string(),
        }
    }
}

/// Category vocabulary split into physics archives and named classifications
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CategoryTable {
    /// Codes that are physics sub-archives
    pub physics: BTreeSet<String>,

    /// Non-physics code -> classification name
    pub named: BTreeMap<String, String>,
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self {
            physics: PHYSICS_CATEGORIES.iter().map(|c| c.to_string()).collect(),
            named: NAMED_CATEGORIES
                .iter()
                .map(|(code, name)| (code.to_string(), name.to_string()))
                .collect(),
        }
    }
}

impl CategoryTable {
    /// Whether the code is a physics sub-archive
    pub fn is_physics(&self, code: &str) -> bool {
        self.physics.contains(code)
    }

    /// Classification name for a non-physics code
    pub fn named(&self, code: &str) -> Option<&str> {
        self.named.get(code).map(String::as_str)
    }

    /// All known codes, physics first, each group sorted
    pub fn codes(&self) -> Vec<&str> {
        self.physics
            .iter()
            .chain(self.named.keys())
            .map(String::as_str)
            .collect()
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// CSV path used when none is given on the command line
    pub default_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_path: "arxiv_data.csv".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// If the file doesn't exist, returns the default configuration.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::warn!(
                path = %path.display(),
                "Config file not found, using defaults"
            );
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        tracing::info!(
            path = %path.display(),
            "Configuration loaded successfully"
        );

        Ok(config)
    }

    /// Get the path for the log directory
    pub fn log_dir(&self) -> PathBuf {
        PathBuf::from(&self.logging.log_dir)
    }

    /// Get the default output path
    pub fn default_output(&self) -> PathBuf {
        PathBuf::from(&self.output.default_path)
    }
}

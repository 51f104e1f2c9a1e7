//! Client configuration
//!
//! # Environment variables
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | WINGS_API_URL | http://localhost:3000 | Base URL of the products/sales store |
//! | WINGS_TIMEOUT_SECS | 30 | Per-request timeout |
//! | WINGS_LOG_LEVEL | info | Default log level (`RUST_LOG` wins) |
//! | WINGS_LOG_JSON | false | Emit console logs as JSON lines |
//! | WINGS_LOG_DIR | unset | Directory for daily rolling log files |

/// Default store URL
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client configuration for the remote store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Server base URL (e.g., "https://cafe.example.com")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Log level used when `RUST_LOG` is not set
    pub log_level: String,

    /// JSON console output for log shippers
    pub log_json: bool,

    /// Optional directory for file logging
    pub log_dir: Option<String>,
}

impl ClientConfig {
    /// Create a configuration with defaults for everything but the URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT_SECS,
            log_level: "info".to_string(),
            log_json: false,
            log_dir: None,
        }
    }

    /// Load from the environment (call `dotenvy::dotenv()` first to pick up `.env`)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::new(
            lookup("WINGS_API_URL")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        );
        if let Some(timeout) = lookup("WINGS_TIMEOUT_SECS").and_then(|v| v.trim().parse().ok()) {
            config.timeout = timeout;
        }
        if let Some(level) = lookup("WINGS_LOG_LEVEL").filter(|v| !v.trim().is_empty()) {
            config.log_level = level;
        }
        config.log_json = lookup("WINGS_LOG_JSON").is_some_and(|v| is_truthy(&v));
        config.log_dir = lookup("WINGS_LOG_DIR").filter(|v| !v.trim().is_empty());
        config
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Set the default log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Switch console logs to JSON lines
    pub fn with_log_json(mut self, json: bool) -> Self {
        self.log_json = json;
        self
    }

    /// Enable file logging
    pub fn with_log_dir(mut self, dir: impl Into<String>) -> Self {
        self.log_dir = Some(dir.into());
        self
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

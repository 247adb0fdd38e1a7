//! Client configuration
//!
//! # Environment variables
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | HR_API_URL | http://localhost:3000/api | Backend base URL |
//! | HR_REQUEST_TIMEOUT_SECS | 30 | Request timeout (seconds) |
//! | HR_STATE_DIR | (unset, memory only) | Directory for persisted session/route state |
//! | HR_LOG_LEVEL | info | Default log level |
//! | HR_LOG_JSON | false | JSON console logs |
//! | HR_LOG_DIR | (unset) | Rolling log file directory |

use std::path::PathBuf;

/// Default backend URL
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";

const SESSION_FILE: &str = "session.json";
const ROUTE_FILE: &str = "route.json";

/// Client configuration for connecting to the HR backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL (e.g., "https://hr.example.com/api")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Directory holding `session.json` and `route.json`; memory only when unset
    pub state_dir: Option<PathBuf>,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: 30,
            state_dir: None,
        }
    }

    /// Load configuration from environment variables
    ///
    /// Unset or unparsable variables fall back to defaults.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("HR_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into()),
            timeout: std::env::var("HR_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            state_dir: std::env::var("HR_STATE_DIR").ok().map(PathBuf::from),
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Persist session and route memory under `dir`
    pub fn with_state_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.state_dir = Some(dir.into());
        self
    }

    /// Session store file, if persistence is enabled
    pub fn session_path(&self) -> Option<PathBuf> {
        self.state_dir.as_ref().map(|d| d.join(SESSION_FILE))
    }

    /// Route memory file, if persistence is enabled
    pub fn route_path(&self) -> Option<PathBuf> {
        self.state_dir.as_ref().map(|d| d.join(ROUTE_FILE))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Default level when `RUST_LOG` is unset
    pub level: String,
    /// JSON console output
    pub json: bool,
    /// Rolling log file directory
    pub dir: Option<PathBuf>,
}

impl LogConfig {
    pub fn from_env() -> Self {
        Self {
            level: std::env::var("HR_LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            json: std::env::var("HR_LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            dir: std::env::var("HR_LOG_DIR").ok().map(PathBuf::from),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            json: false,
            dir: None,
        }
    }
}

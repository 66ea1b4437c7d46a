// src/config/env.rs
// Environment-based configuration - single source of truth for all env vars

use tracing::{debug, warn};

use crate::error::{ForesightError, Result};

/// Default Gemini model used for outcome generation
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Default Gemini REST base (without the `/models/...` suffix)
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default bind host
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default listen port when PORT is unset or unparsable
pub const DEFAULT_PORT: u16 = 3000;

/// Service configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Model API key (API_KEY, or GEMINI_API_KEY)
    pub api_key: Option<String>,
    /// Gemini model identifier (GEMINI_MODEL)
    pub model: String,
    /// Gemini REST base URL (GEMINI_API_BASE)
    pub api_base: String,
    /// Bind host (HOST)
    pub host: String,
    /// Listen port (PORT)
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let api_key = read("API_KEY").or_else(|| read("GEMINI_API_KEY"));

        let port = match read("PORT") {
            Some(raw) => raw.parse::<u16>().unwrap_or_else(|_| {
                warn!(value = %raw, "Invalid PORT, using default {}", DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        let config = Self {
            api_key,
            model: read("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_base: read("GEMINI_API_BASE").unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            host: read("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
        };
        config.log_status();
        config
    }

    /// Address string suitable for `TcpListener::bind`
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Return the API key or a configuration error if it is missing
    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .ok_or_else(|| ForesightError::Config("API_KEY not set".to_string()))
    }

    /// Check that the server can reach Gemini and bind its listener
    pub fn validate(&self) -> ConfigValidation {
        let mut validation = ConfigValidation::default();

        if self.api_key.is_none() {
            validation.push(
                Severity::Error,
                "API_KEY",
                "not set (GEMINI_API_KEY is also accepted)",
            );
        }
        if self.model.contains('/') || self.model.contains(':') {
            validation.push(
                Severity::Error,
                "GEMINI_MODEL",
                format!("{:?} is not a bare model id", self.model),
            );
        }
        if !self.api_base.starts_with("http://") && !self.api_base.starts_with("https://") {
            validation.push(
                Severity::Error,
                "GEMINI_API_BASE",
                format!("must be an http(s) URL, got {}", self.api_base),
            );
        }
        if self.port == 0 {
            validation.push(
                Severity::Warning,
                "PORT",
                "is 0, the OS will pick an ephemeral port",
            );
        }

        validation
    }

    /// Log which settings are in effect (without exposing the key)
    fn log_status(&self) {
        debug!(
            model = %self.model,
            host = %self.host,
            port = self.port,
            api_key_set = self.api_key.is_some(),
            "Configuration loaded"
        );
    }
}

/// Whether a setting stops the server from starting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// A problem with one environment variable
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub variable: &'static str,
    pub message: String,
}

impl ConfigIssue {
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Findings from `Config::validate`, printed by `foresight check-config`
/// and checked by `serve` before binding.
#[derive(Debug, Default)]
pub struct ConfigValidation {
    issues: Vec<ConfigIssue>,
}

impl ConfigValidation {
    fn push(&mut self, severity: Severity, variable: &'static str, message: impl Into<String>) {
        self.issues.push(ConfigIssue {
            severity,
            variable,
            message: message.into(),
        });
    }

    /// False when any finding would keep the server from calling Gemini
    pub fn is_valid(&self) -> bool {
        !self.issues.iter().any(ConfigIssue::is_error)
    }

    pub fn issues(&self) -> &[ConfigIssue] {
        &self.issues
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ConfigIssue> {
        self.issues.iter().filter(|i| !i.is_error())
    }

    /// One `error:`/`warning:` line per variable, errors first
    pub fn report(&self) -> String {
        let mut issues: Vec<&ConfigIssue> = self.issues.iter().collect();
        issues.sort_by_key(|i| !i.is_error());

        issues
            .iter()
            .map(|i| {
                let label = match i.severity {
                    Severity::Error => "error",
                    Severity::Warning => "warning",
                };
                format!("{}: {} {}", label, i.variable, i.message)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

//! Schema lookup configuration.
//!
//! Every option the lookup layer recognizes is a named field here. The
//! struct is passed explicitly into [`build_source`](crate::build_source);
//! nothing reads ambient settings at call time. Each constructor validates
//! its result, so an invalid combination fails before any request is made.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::Url;

/// Default schema.org base URL.
pub const DEFAULT_BASE_URL: &str = "https://schema.org";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// How type definitions are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LookupStrategy {
    /// Fetch a machine-readable JSON definition.
    Structured,
    /// Fetch the human-readable type page and extract its property table.
    #[default]
    Scraped,
}

impl fmt::Display for LookupStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Structured => write!(f, "structured"),
            Self::Scraped => write!(f, "scraped"),
        }
    }
}

impl FromStr for LookupStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "structured" => Ok(Self::Structured),
            "scraped" => Ok(Self::Scraped),
            other => Err(ConfigError::UnknownStrategy(other.to_string())),
        }
    }
}

/// Configuration for resolving schema.org type definitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct SchemaOrgConfig {
    /// Base URL; definitions are fetched from `<base_url>/<TypeName>`.
    pub base_url: Url,
    /// Resolution strategy.
    pub strategy: LookupStrategy,
    /// Per-request timeout in seconds. Must be non-zero.
    pub timeout_secs: u64,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
}

impl Default for SchemaOrgConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("DEFAULT_BASE_URL is a valid URL"),
            strategy: LookupStrategy::default(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: default_user_agent(),
        }
    }
}

impl SchemaOrgConfig {
    /// Build a configuration for `base_url` with defaults elsewhere.
    pub fn new(base_url: &str, strategy: LookupStrategy) -> Result<Self, ConfigError> {
        let config = Self {
            base_url: parse_url("base_url", base_url)?,
            strategy,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `MDXLD_SCHEMA_ORG_URL` (default: `https://schema.org`)
    /// - `MDXLD_LOOKUP_STRATEGY` (`structured` | `scraped`, default: `scraped`)
    /// - `MDXLD_TIMEOUT_SECS` (default: 30)
    /// - `MDXLD_USER_AGENT` (default: `mdxld/<version>`)
    ///
    /// Unset variables fall back to defaults; set but invalid values are errors.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(raw) = env_var("MDXLD_SCHEMA_ORG_URL") {
            config.base_url = parse_url("MDXLD_SCHEMA_ORG_URL", &raw)?;
        }
        if let Some(raw) = env_var("MDXLD_LOOKUP_STRATEGY") {
            config.strategy = raw.parse()?;
        }
        if let Some(raw) = env_var("MDXLD_TIMEOUT_SECS") {
            config.timeout_secs = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                field: "MDXLD_TIMEOUT_SECS".into(),
                reason: format!("'{raw}' is not a whole number of seconds"),
            })?;
        }
        if let Some(raw) = env_var("MDXLD_USER_AGENT") {
            config.user_agent = raw;
        }
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file. Missing fields take defaults.
    pub fn from_yaml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let config: Self = serde_yaml::from_str(&content).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check field invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !matches!(self.base_url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidValue {
                field: "base_url".into(),
                reason: format!("scheme must be http or https, got '{}'", self.base_url.scheme()),
            });
        }
        if self.base_url.cannot_be_a_base() {
            return Err(ConfigError::InvalidValue {
                field: "base_url".into(),
                reason: "URL cannot be used as a base".into(),
            });
        }
        if self.base_url.query().is_some() || self.base_url.fragment().is_some() {
            return Err(ConfigError::InvalidValue {
                field: "base_url".into(),
                reason: "must not carry a query or fragment".into(),
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_secs".into(),
                reason: "must be greater than zero".into(),
            });
        }
        if self.user_agent.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "user_agent".into(),
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }

    /// URL of the definition for a local type name.
    pub fn definition_url(&self, type_name: &str) -> Result<Url, ConfigError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ConfigError::InvalidValue {
                field: "base_url".into(),
                reason: "URL cannot be used as a base".into(),
            })?
            .pop_if_empty()
            .push(type_name);
        Ok(url)
    }
}

fn default_user_agent() -> String {
    format!("mdxld/{}", env!("CARGO_PKG_VERSION"))
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parse_url(field: &str, raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw.trim()).map_err(|e| ConfigError::InvalidUrl(field.to_string(), e.to_string()))
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A URL setting did not parse. Holds the setting name and parser error.
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
    /// The lookup strategy is neither `structured` nor `scraped`.
    #[error("unknown lookup strategy '{0}' (expected 'structured' or 'scraped')")]
    UnknownStrategy(String),
    /// A setting parsed but violates a field invariant.
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    /// The configuration file could not be read or deserialized.
    #[error("failed to read configuration from {path}: {reason}")]
    Read { path: String, reason: String },
}

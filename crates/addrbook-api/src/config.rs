use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use addrbook_core::error::{AddrbookError, Result};

/// API server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub port: u16,
    pub cors_origin: String,
    pub database_url: Option<String>,
    pub environment: String,
    pub default_page_limit: usize,
    pub log: LogConfig,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Default filter directive; `RUST_LOG` takes precedence
    pub level: String,
    pub format: LogFormat,
    /// Directory for the daily-rolling log file; console only when unset
    pub dir: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Text,
            dir: None,
        }
    }
}

/// Output format for log events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = AddrbookError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(AddrbookError::ConfigInvalid {
                key: "LOG_FORMAT".to_string(),
                reason: format!("expected \"text\" or \"json\", got \"{}\"", other),
            }),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Text => f.write_str("text"),
            LogFormat::Json => f.write_str("json"),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            cors_origin: "http://localhost:3000".to_string(),
            database_url: None,
            environment: "development".to_string(),
            default_page_limit: 100,
            log: LogConfig::default(),
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup, falling back to
    /// defaults for absent keys
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match get("ADDRBOOK_PORT") {
            Some(raw) => parse_value("ADDRBOOK_PORT", &raw)?,
            None => defaults.port,
        };

        let default_page_limit = match get("DEFAULT_PAGE_LIMIT") {
            Some(raw) => parse_value("DEFAULT_PAGE_LIMIT", &raw)?,
            None => defaults.default_page_limit,
        };
        if default_page_limit == 0 {
            return Err(AddrbookError::ConfigInvalid {
                key: "DEFAULT_PAGE_LIMIT".to_string(),
                reason: "must be greater than 0".to_string(),
            });
        }

        let log = LogConfig {
            level: get("LOG_LEVEL").unwrap_or(defaults.log.level),
            format: get("LOG_FORMAT").map(|f| f.parse()).transpose()?.unwrap_or_default(),
            dir: get("LOG_DIR").map(PathBuf::from),
        };

        Ok(Self {
            port,
            cors_origin: get("ADDRBOOK_CORS_ORIGIN").unwrap_or(defaults.cors_origin),
            database_url: get("DATABASE_URL"),
            environment: get("ADDRBOOK_ENV").unwrap_or(defaults.environment),
            default_page_limit,
            log,
        })
    }

    /// Get the server bind address
    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }

    /// Check if PostgreSQL storage is configured
    pub fn uses_postgres(&self) -> bool {
        self.database_url.is_some()
    }
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| AddrbookError::ConfigInvalid {
        key: key.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ApiConfig::from_lookup(|_| None).unwrap();

        assert_eq!(config.port, 8000);
        assert_eq!(config.bind_address(), "0.0.0.0:8000");
        assert_eq!(config.cors_origin, "http://localhost:3000");
        assert!(!config.uses_postgres());
        assert_eq!(config.environment, "development");
        assert_eq!(config.default_page_limit, 100);
        assert_eq!(config.log.level, "info");
        assert_eq!(config.log.format, LogFormat::Text);
        assert!(config.log.dir.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = ApiConfig::from_lookup(lookup_from(&[
            ("ADDRBOOK_PORT", "9090"),
            ("DATABASE_URL", "postgres://localhost/addresses"),
            ("LOG_FORMAT", "JSON"),
            ("LOG_DIR", "/var/log/addrbook"),
            ("DEFAULT_PAGE_LIMIT", "25"),
            ("ADDRBOOK_ENV", "production"),
        ]))
        .unwrap();

        assert_eq!(config.port, 9090);
        assert!(config.uses_postgres());
        assert_eq!(config.log.format, LogFormat::Json);
        assert_eq!(config.log.dir, Some(PathBuf::from("/var/log/addrbook")));
        assert_eq!(config.default_page_limit, 25);
        assert_eq!(config.environment, "production");
    }

    #[test]
    fn test_blank_values_fall_back_to_defaults() {
        let config = ApiConfig::from_lookup(lookup_from(&[("DATABASE_URL", "  ")])).unwrap();
        assert!(!config.uses_postgres());
    }

    #[test]
    fn test_invalid_port() {
        let err = ApiConfig::from_lookup(lookup_from(&[("ADDRBOOK_PORT", "eighty")])).unwrap_err();
        match err {
            AddrbookError::ConfigInvalid { key, .. } => assert_eq!(key, "ADDRBOOK_PORT"),
            other => panic!("Expected ConfigInvalid, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_log_format() {
        let err = ApiConfig::from_lookup(lookup_from(&[("LOG_FORMAT", "xml")])).unwrap_err();
        assert!(matches!(err, AddrbookError::ConfigInvalid { ref key, .. } if key == "LOG_FORMAT"));
    }

    #[test]
    fn test_zero_page_limit_rejected() {
        assert!(ApiConfig::from_lookup(lookup_from(&[("DEFAULT_PAGE_LIMIT", "0")])).is_err());
    }
}

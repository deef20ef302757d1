//! Service configuration parsed from environment variables.

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("unknown APP_ENV: {0} (expected 'development' or 'production')")]
    UnknownEnvironment(String),
}

/// Deployment environment. Controls how much error detail reaches clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    Development,
    #[default]
    Production,
}

impl Environment {
    /// Whether internal error messages may be returned to clients.
    #[must_use]
    pub fn exposes_error_detail(self) -> bool {
        self == Self::Development
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    /// Catalog JSON document; the bundled catalog is used when absent.
    pub catalog_path: Option<PathBuf>,
    pub environment: Environment,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT, catalog_path: None, environment: Environment::default() }
    }
}

impl AppConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: listen port, default 3000
    /// - `CATALOG_PATH`: catalog JSON file
    /// - `APP_ENV`: `production` (default) or `development`
    ///
    /// # Errors
    ///
    /// Returns an error for an unparsable port or unknown environment name.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// See [`AppConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => DEFAULT_PORT,
        };
        let catalog_path = lookup("CATALOG_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);
        let environment = parse_environment(lookup("APP_ENV").as_deref())?;

        Ok(Self { port, catalog_path, environment })
    }
}

fn parse_environment(raw: Option<&str>) -> Result<Environment, ConfigError> {
    match raw.map(str::trim).unwrap_or("production") {
        "production" | "" => Ok(Environment::Production),
        "development" => Ok(Environment::Development),
        other => Err(ConfigError::UnknownEnvironment(other.to_owned())),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

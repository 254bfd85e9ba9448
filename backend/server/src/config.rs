use std::{env, fmt::Display, path::PathBuf, str::FromStr};

use thiserror::Error;
use tracing::{info, warn};

/// What listing and random picks answer when no catalog is loaded.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum UnavailablePolicy {
    /// 500 on data endpoints.
    #[default]
    Error,
    /// Empty list, and 404 for random picks.
    Empty,
}

impl FromStr for UnavailablePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "empty" => Ok(Self::Empty),
            other => Err(format!("expected `error` or `empty`, got `{other}`")),
        }
    }
}

#[derive(Error, Debug)]
#[error("Invalid {key} value `{value}`: {reason}")]
pub struct ConfigError {
    pub key: String,
    pub value: String,
    pub reason: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub catalog_path: PathBuf,
    pub templates_dir: PathBuf,
    pub unavailable_policy: UnavailablePolicy,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(var)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            host: try_load(&lookup, "RUST_HOST", "0.0.0.0")?,
            port: try_load(&lookup, "RUST_PORT", "8000")?,
            catalog_path: try_load(&lookup, "CATALOG_PATH", "static/data/Projets.json")?,
            templates_dir: try_load(&lookup, "TEMPLATES_DIR", "templates")?,
            unavailable_policy: try_load(&lookup, "CATALOG_UNAVAILABLE_POLICY", "error")?,
        })
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn var(key: &str) -> Option<String> {
    env::var(key)
        .map_err(|_| {
            warn!("Environment variable {key} not found, using default");
        })
        .ok()
}

fn try_load<T, F>(lookup: &F, key: &str, default: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    let value = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    value.parse().map_err(|e: T::Err| {
        warn!("Invalid {key} value: {e}");

        ConfigError {
            key: key.to_string(),
            value: value.clone(),
            reason: e.to_string(),
        }
    })
}

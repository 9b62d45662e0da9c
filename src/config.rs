use serde::Deserialize;
use std::{fs, io, path::Path};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0}")]
    IOError(#[from] io::Error),
    #[error("{0}")]
    TomlParseError(#[from] toml::de::Error),
    #[error("token_key must not be empty")]
    EmptyKey,
    #[error("token_ttl_minutes must be at least 1")]
    ZeroTtl
}

/// Signing key material and token lifetime. Read once at startup and
/// immutable thereafter; the key is never logged.
#[derive(Debug, Deserialize)]
pub struct Config {
    pub token_key: String,
    pub token_ttl_minutes: u64
}

impl Config {
    pub fn read(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
        let config = Config::parse(&fs::read_to_string(&path)?)?;
        info!("read configuration from {}", path.as_ref().display());
        Ok(config)
    }

    pub fn parse(toml_str: &str) -> Result<Config, ConfigError> {
        let config: Config = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.token_key.is_empty() {
            Err(ConfigError::EmptyKey)
        }
        else if self.token_ttl_minutes == 0 {
            Err(ConfigError::ZeroTtl)
        }
        else {
            Ok(())
        }
    }
}

use crate::error::{LolomoError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub artwork: ArtworkConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: 8080 }
    }
}

/// Settings for the artwork worker pool and the simulated downstream latency.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ArtworkConfig {
    /// Maximum number of artwork generations running at once
    pub workers: usize,
    /// Artificial delay applied before each generation
    pub delay_ms: u64,
    /// Optional bound on how long a caller waits before falling back
    pub timeout_ms: Option<u64>,
}

impl Default for ArtworkConfig {
    fn default() -> Self {
        Self {
            workers: 10,
            delay_ms: 200,
            timeout_ms: None,
        }
    }
}

impl ArtworkConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}

impl Config {
    /// Load from `path`, falling back to defaults when the file is absent.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let config_content = fs::read_to_string(path)?;
        Self::from_toml(&config_content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.artwork.workers == 0 {
            return Err(LolomoError::Config(
                "artwork.workers must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_when_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(dir.path().join("missing.toml")).unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.artwork.workers, 10);
        assert_eq!(config.artwork.delay(), Duration::from_millis(200));
        assert!(config.artwork.timeout().is_none());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[server]\nport = 9000\n\n[artwork]\nworkers = 4\ndelay_ms = 0\ntimeout_ms = 50"
        )
        .unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.artwork.workers, 4);
        assert_eq!(config.artwork.delay(), Duration::ZERO);
        assert_eq!(config.artwork.timeout(), Some(Duration::from_millis(50)));
    }

    #[test]
    fn test_partial_sections_keep_defaults() {
        let config = Config::from_toml("[artwork]\ndelay_ms = 5").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.artwork.workers, 10);
        assert_eq!(config.artwork.delay_ms, 5);
    }

    #[test]
    fn test_unreadable_path_is_io_error() {
        // A directory exists but cannot be read as a file
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_from(dir.path()).unwrap_err();
        assert!(matches!(err, LolomoError::Io(_)));
    }

    #[test]
    fn test_zero_workers_rejected() {
        let err = Config::from_toml("[artwork]\nworkers = 0").unwrap_err();
        assert!(matches!(err, LolomoError::Config(_)));
    }

    #[test]
    fn test_malformed_toml() {
        let err = Config::from_toml("[server\nport = ").unwrap_err();
        assert!(matches!(err, LolomoError::Toml(_)));
    }
}

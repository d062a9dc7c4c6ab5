//! Screen configuration, loaded from TOML.
//!
//! Every field has a default, so an absent file or a partial file is valid.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config value: {0}")]
    Invalid(String),
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CarouselConfig {
    /// Endpoint answering a JSON array of `{id, name}` records.
    pub endpoint: String,
    /// Title label above the list.
    pub title: String,
    /// Absent means the fetch waits indefinitely.
    pub request_timeout_secs: Option<u64>,
    pub layout: LayoutConfig,
    pub events: EventConfig,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8080".to_string(),
            title: "Savings Carousel Test".to_string(),
            request_timeout_secs: None,
            layout: LayoutConfig::default(),
            events: EventConfig::default(),
        }
    }
}

/// Row geometry in terminal columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    pub item_width: u16,
    pub item_gap: u16,
    /// Snap user scrolls to whole viewport pages.
    pub paging: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            item_width: 20,
            item_gap: 4,
            paging: true,
        }
    }
}

impl LayoutConfig {
    /// Distance between the left edges of adjacent rows.
    pub fn stride(&self) -> u16 {
        self.item_width.saturating_add(self.item_gap)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EventConfig {
    /// Input sampling interval; scroll events arrive at most this often.
    pub scroll_throttle_ms: u64,
}

impl Default for EventConfig {
    fn default() -> Self {
        Self {
            scroll_throttle_ms: 16,
        }
    }
}

impl CarouselConfig {
    /// Load from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        Self::from_toml(&content).map_err(|e| match e {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }

    /// Parse and validate a TOML document.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: PathBuf::new(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// `<config_dir>/carousel/config.toml`, or `./config.toml` without one.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .map(|dir| dir.join("carousel"))
            .unwrap_or_else(|| PathBuf::from("."))
            .join("config.toml")
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.endpoint.trim().is_empty() {
            return Err(ConfigError::Invalid("endpoint must not be empty".into()));
        }
        if self.layout.item_width == 0 {
            return Err(ConfigError::Invalid("layout.item_width must be at least 1".into()));
        }
        if self.events.scroll_throttle_ms == 0 {
            return Err(ConfigError::Invalid(
                "events.scroll_throttle_ms must be at least 1".into(),
            ));
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    pub fn scroll_throttle(&self) -> Duration {
        Duration::from_millis(self.events.scroll_throttle_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_local_endpoint() {
        let config = CarouselConfig::default();
        assert_eq!(config.endpoint, "http://localhost:8080");
        assert_eq!(config.events.scroll_throttle_ms, 16);
        assert_eq!(config.request_timeout(), None);
        assert_eq!(config.layout.stride(), 24);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let config = CarouselConfig::from_toml(
            r#"
            title = "Rates"
            [layout]
            item_width = 12
            "#,
        )
        .unwrap();
        assert_eq!(config.title, "Rates");
        assert_eq!(config.layout.item_width, 12);
        assert_eq!(config.layout.item_gap, 4);
        assert_eq!(config.endpoint, "http://localhost:8080");
    }

    #[test]
    fn zero_width_rejected() {
        let err = CarouselConfig::from_toml("[layout]\nitem_width = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn unknown_key_rejected() {
        let err = CarouselConfig::from_toml("endpiont = \"x\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn missing_file_returns_defaults() {
        let loaded = CarouselConfig::load(Path::new("/nonexistent/carousel/config.toml")).unwrap();
        assert_eq!(loaded, CarouselConfig::default());
    }

    #[test]
    fn load_reports_path_on_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not valid toml [[[").unwrap();
        match CarouselConfig::load(&path) {
            Err(ConfigError::Parse { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("Expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn load_reads_timeout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "request_timeout_secs = 5\n").unwrap();
        let config = CarouselConfig::load(&path).unwrap();
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(5)));
    }
}

// config.rs - Backdrop settings, loadable from TOML

use crate::clock::DEFAULT_TICK_INTERVAL;
use crate::grid::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::seed::DEFAULT_LIVE_PROBABILITY;
use crate::viewport::{DEFAULT_MIN_VIEWPORT_WIDTH, ViewportPolicy};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read { path: String, source: std::io::Error },
    #[error("invalid config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("{field} must be {expected}, got {value}")]
    Invalid { field: &'static str, expected: &'static str, value: String },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BackdropConfig {
    pub width: usize,               // Grid columns
    pub height: usize,              // Grid rows
    pub cell_size: u32,             // Logical units per cell side
    pub live_probability: f64,      // Seed density
    pub tick_interval_ms: u64,      // Time between generations
    pub min_viewport_width: f32,    // Hidden at or below this width
    pub opacity: f32,               // Applied by the host when compositing
}

impl Default for BackdropConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            cell_size: 10,
            live_probability: DEFAULT_LIVE_PROBABILITY,
            tick_interval_ms: DEFAULT_TICK_INTERVAL.as_millis() as u64,
            min_viewport_width: DEFAULT_MIN_VIEWPORT_WIDTH,
            opacity: 0.75,
        }
    }
}

impl BackdropConfig {
    /// Reads and validates a TOML file. Missing keys keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 {
            return Err(invalid("width", "at least 1", self.width));
        }
        if self.height == 0 {
            return Err(invalid("height", "at least 1", self.height));
        }
        if self.cell_size == 0 {
            return Err(invalid("cell_size", "at least 1", self.cell_size));
        }
        if !(0.0..=1.0).contains(&self.live_probability) {
            return Err(invalid("live_probability", "within [0, 1]", self.live_probability));
        }
        if self.tick_interval_ms == 0 {
            return Err(invalid("tick_interval_ms", "at least 1", self.tick_interval_ms));
        }
        if !self.min_viewport_width.is_finite() || self.min_viewport_width < 0.0 {
            return Err(invalid("min_viewport_width", "a non-negative number", self.min_viewport_width));
        }
        if !(0.0..=1.0).contains(&self.opacity) {
            return Err(invalid("opacity", "within [0, 1]", self.opacity));
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn viewport_policy(&self) -> ViewportPolicy {
        ViewportPolicy::new(self.min_viewport_width)
    }
}

fn invalid(field: &'static str, expected: &'static str, value: impl ToString) -> ConfigError {
    ConfigError::Invalid { field, expected, value: value.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_the_reference_backdrop() {
        let config = BackdropConfig::default();
        assert_eq!((config.width, config.height, config.cell_size), (25, 15, 10));
        assert_eq!(config.live_probability, 0.1);
        assert_eq!(config.tick_interval(), Duration::from_millis(600));
        assert!(!config.viewport_policy().allows(1024.0));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config = BackdropConfig::from_toml_str("width = 40\ntick_interval_ms = 250\n").unwrap();
        assert_eq!(config.width, 40);
        assert_eq!(config.height, 15);
        assert_eq!(config.tick_interval(), Duration::from_millis(250));
    }

    #[test]
    fn empty_toml_is_the_default() {
        assert_eq!(BackdropConfig::from_toml_str("").unwrap(), BackdropConfig::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = BackdropConfig::from_toml_str("colour = \"red\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        for (text, field) in [
            ("width = 0", "width"),
            ("cell_size = 0", "cell_size"),
            ("live_probability = 1.5", "live_probability"),
            ("tick_interval_ms = 0", "tick_interval_ms"),
            ("opacity = -0.1", "opacity"),
        ] {
            match BackdropConfig::from_toml_str(text) {
                Err(ConfigError::Invalid { field: f, .. }) => assert_eq!(f, field),
                other => panic!("{text}: expected invalid {field}, got {other:?}"),
            }
        }
    }

    #[test]
    fn load_reads_a_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "height = 20\nopacity = 1.0").unwrap();
        let config = BackdropConfig::load(file.path()).unwrap();
        assert_eq!(config.height, 20);
        assert_eq!(config.opacity, 1.0);
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = BackdropConfig::load(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}

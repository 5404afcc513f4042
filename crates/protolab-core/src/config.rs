//! Configuration loading and typed config structures for Protolab.
//!
//! The canonical configuration lives in `protolab-config.yaml` at the project
//! root. Every section and field is optional; missing values take the
//! defaults below, and a missing file yields the default configuration.

use std::path::{Path, PathBuf};

use protolab_sim::{SimConfig, SimError};
use serde::Deserialize;

/// Default configuration file name, resolved against the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "protolab-config.yaml";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// The `simulation` section is out of range.
    #[error("invalid simulation config: {0}")]
    Simulation(#[from] SimError),

    /// Some other field is out of range.
    #[error("invalid config field `{field}`: {reason}")]
    Invalid {
        /// Dotted path of the field.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level application configuration.
///
/// Mirrors the structure of `protolab-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AppConfig {
    /// HTTP listener.
    #[serde(default)]
    pub server: ServerConfig,

    /// Result store backend.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Simulator tunables.
    #[serde(default)]
    pub simulation: SimConfig,

    /// Frame loop timing.
    #[serde(default)]
    pub frame_loop: FrameLoopConfig,

    /// Initial viewport for the server-side simulator.
    #[serde(default)]
    pub viewport: ViewportConfig,

    /// Quiz content.
    #[serde(default)]
    pub quiz: QuizConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// Environment variables override YAML values:
    /// - `DRAGONFLY_URL` overrides `storage.dragonfly_url`
    /// - `PROTOLAB_RESULTS_FILE` overrides `storage.results_file`
    /// - `PROTOLAB_PORT` overrides `server.port`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes as unit, not as an empty map.
        let mut config: Self = if yaml.trim().is_empty() { Self::default() } else { serde_yml::from_str(yaml)? };
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load `path` if it exists, otherwise fall back to defaults.
    ///
    /// # Errors
    ///
    /// As [`AppConfig::from_file`] for files that exist but cannot be used.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            return Self::from_file(path);
        }
        tracing::warn!(path = %path.display(), "config file not found, using defaults");
        let mut config = Self::default();
        config.apply_env_overrides();
        Ok(config)
    }

    /// Override fields with environment variables when set.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("DRAGONFLY_URL") {
            self.storage.dragonfly_url = val;
        }
        if let Ok(val) = std::env::var("PROTOLAB_RESULTS_FILE") {
            self.storage.results_file = PathBuf::from(val);
        }
        if let Ok(val) = std::env::var("PROTOLAB_PORT") {
            match val.parse() {
                Ok(port) => self.server.port = port,
                Err(e) => tracing::warn!(value = %val, error = %e, "ignoring invalid PROTOLAB_PORT"),
            }
        }
    }

    /// Check ranges that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Simulation`] or [`ConfigError::Invalid`]
    /// naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.simulation.validate()?;
        if self.frame_loop.interval_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "frame_loop.interval_ms",
                reason: "must be at least 1".to_owned(),
            });
        }
        let viewport_ok = |v: f64| v.is_finite() && v >= 0.0;
        if !viewport_ok(self.viewport.width) || !viewport_ok(self.viewport.height) {
            return Err(ConfigError::Invalid {
                field: "viewport",
                reason: format!("{}x{} is not a valid size", self.viewport.width, self.viewport.height),
            });
        }
        Ok(())
    }
}

/// HTTP listener configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    /// Bind address.
    #[serde(default = "default_host")]
    pub host: String,

    /// Listen port.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port() }
    }
}

/// Which result store backend to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageBackend {
    /// In-process, lost on restart.
    Memory,
    /// Pretty-printed JSON array on disk.
    #[default]
    File,
    /// `Dragonfly` hash.
    Dragonfly,
}

/// Result store configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StorageConfig {
    /// Selected backend.
    #[serde(default)]
    pub backend: StorageBackend,

    /// Results file for the `file` backend.
    #[serde(default = "default_results_file")]
    pub results_file: PathBuf,

    /// Dragonfly (Redis-compatible) URL for the `dragonfly` backend.
    #[serde(default = "default_dragonfly_url")]
    pub dragonfly_url: String,

    /// Hash key for the `dragonfly` backend.
    #[serde(default = "default_results_key")]
    pub results_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            results_file: default_results_file(),
            dragonfly_url: default_dragonfly_url(),
            results_key: default_results_key(),
        }
    }
}

/// Frame loop timing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FrameLoopConfig {
    /// Run the server-side simulator at all.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Milliseconds between frames.
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,

    /// Stop after this many frames (0 = unlimited).
    #[serde(default)]
    pub max_frames: u64,
}

impl Default for FrameLoopConfig {
    fn default() -> Self {
        Self { enabled: true, interval_ms: default_interval_ms(), max_frames: 0 }
    }
}

/// Initial viewport size.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ViewportConfig {
    /// Width in viewport units.
    #[serde(default = "default_viewport_width")]
    pub width: f64,

    /// Height in viewport units.
    #[serde(default = "default_viewport_height")]
    pub height: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self { width: default_viewport_width(), height: default_viewport_height() }
    }
}

/// Quiz content configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct QuizConfig {
    /// YAML question bank replacing the stock questions.
    #[serde(default)]
    pub questions_file: Option<PathBuf>,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` takes precedence.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), format: LogFormat::default() }
    }
}

// ---------------------------------------------------------------------------
// Default value functions
// ---------------------------------------------------------------------------

fn default_host() -> String {
    "0.0.0.0".to_owned()
}

const fn default_port() -> u16 {
    8080
}

fn default_results_file() -> PathBuf {
    PathBuf::from("data/personality-results.json")
}

fn default_dragonfly_url() -> String {
    "redis://localhost:6379".to_owned()
}

fn default_results_key() -> String {
    "personality-results".to_owned()
}

const fn default_true() -> bool {
    true
}

const fn default_interval_ms() -> u64 {
    16
}

const fn default_viewport_width() -> f64 {
    1440.0
}

const fn default_viewport_height() -> f64 {
    900.0
}

fn default_log_level() -> String {
    "info".to_owned()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.storage.backend, StorageBackend::File);
        assert_eq!(config.frame_loop.interval_ms, 16);
        assert_eq!(config.simulation.agent_count, 32);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn parse_full_yaml() {
        let yaml = r#"
server:
  host: "127.0.0.1"
  port: 9090

storage:
  backend: dragonfly
  results_file: "/tmp/results.json"
  dragonfly_url: "redis://testhost:6379"
  results_key: "quiz"

simulation:
  agent_count: 8
  icon_size: 90
  seed: 7
  exclusion_zones:
    - { anchor: absolute, x: 10, y: 10, width: 100, height: 50 }

frame_loop:
  enabled: false
  interval_ms: 33
  max_frames: 600

viewport:
  width: 1024
  height: 768

quiz:
  questions_file: "questions.yaml"

logging:
  level: "debug"
  format: json
"#;

        let config = AppConfig::parse(yaml).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.storage.backend, StorageBackend::Dragonfly);
        assert_eq!(config.storage.results_key, "quiz");
        assert_eq!(config.simulation.agent_count, 8);
        assert_eq!(config.simulation.seed, Some(7));
        assert_eq!(config.simulation.exclusion_zones.len(), 1);
        assert!(!config.frame_loop.enabled);
        assert_eq!(config.frame_loop.max_frames, 600);
        assert!((config.viewport.width - 1024.0).abs() < f64::EPSILON);
        assert_eq!(config.quiz.questions_file, Some(PathBuf::from("questions.yaml")));
        assert_eq!(config.logging.format, LogFormat::Json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let config = AppConfig::parse("logging:\n  level: warn\n").unwrap();
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert_eq!(config.simulation, SimConfig::default());
    }

    #[test]
    fn empty_document_is_default() {
        let config = AppConfig::parse("").unwrap();
        assert_eq!(config.frame_loop, FrameLoopConfig::default());
    }

    #[test]
    fn invalid_yaml_is_an_error() {
        assert!(matches!(AppConfig::parse("server: [1, 2"), Err(ConfigError::Yaml { .. })));
    }

    #[test]
    fn validate_rejects_zero_interval_and_bad_simulation() {
        let mut config = AppConfig::default();
        config.frame_loop.interval_ms = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "frame_loop.interval_ms", .. })
        ));

        let mut config = AppConfig::default();
        config.simulation.collision_radius_ratio = 0.9;
        assert!(matches!(config.validate(), Err(ConfigError::Simulation(_))));
    }

    #[test]
    fn shipped_config_matches_defaults() {
        let config = AppConfig::parse(include_str!("../../../protolab-config.yaml")).unwrap();
        assert_eq!(config.simulation, SimConfig::default());
        assert_eq!(config.frame_loop, FrameLoopConfig::default());
        assert_eq!(config.viewport, ViewportConfig::default());
        assert_eq!(config.logging, LoggingConfig::default());
        assert_eq!(config.storage.backend, StorageBackend::File);
        config.validate().unwrap();
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = AppConfig::load_or_default(Path::new("/nonexistent/protolab-config.yaml")).unwrap();
        assert_eq!(config.viewport, ViewportConfig::default());
    }
}

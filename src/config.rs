//! Sender configuration and logging setup.
//!
//! Configuration comes from an optional YAML file, with command-line flags layered on
//! top by the binary. Every field has a default except the target, which must come from
//! one of the two.
//!
//! ```yaml
//! target: 192.168.1.50:40000
//! camera_id: 1
//! interval_ms: 5
//! pose:
//!   pitch: 90.0
//!   x: 100.0
//! logging:
//!   level: debug
//! ```

use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::driver::{DEFAULT_SOURCE_BACKOFF, DriverSettings};
use crate::types::CameraPose;
use crate::{FreedError, Result};

/// Transmitter configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SenderConfig {
    /// Receiver address and port.
    #[serde(default)]
    pub target: Option<SocketAddr>,

    /// Camera identifier; only the low 8 bits go on the wire.
    #[serde(default = "default_camera_id")]
    pub camera_id: u32,

    /// Milliseconds between frames.
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,

    /// Pose transmitted on every tick.
    #[serde(default = "default_pose")]
    pub pose: CameraPose,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_camera_id() -> u32 {
    0xFF
}

fn default_interval_ms() -> u64 {
    5
}

fn default_pose() -> CameraPose {
    CameraPose::REFERENCE
}

impl Default for SenderConfig {
    fn default() -> Self {
        Self {
            target: None,
            camera_id: default_camera_id(),
            interval_ms: default_interval_ms(),
            pose: default_pose(),
            logging: LoggingConfig::default(),
        }
    }
}

impl SenderConfig {
    /// Load and validate configuration from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|source| FreedError::config_file(path.to_path_buf(), source))?;

        serde_yaml_ng::from_str(&content)
            .map_err(|source| FreedError::config_parse(path.display().to_string(), source))
    }

    /// Parse configuration from a YAML string.
    pub fn parse(yaml: &str) -> Result<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|source| FreedError::config_parse("<inline>", source))
    }

    /// Check the configuration is usable for transmission.
    pub fn validate(&self) -> Result<()> {
        self.target()?;

        if self.interval_ms == 0 {
            return Err(FreedError::config("interval_ms must be greater than zero"));
        }

        Ok(())
    }

    /// The configured receiver, or an error if none was given.
    pub fn target(&self) -> Result<SocketAddr> {
        self.target.ok_or_else(|| FreedError::config("no target address configured"))
    }

    /// Pause between frames.
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// Send loop settings derived from this configuration.
    pub fn driver_settings(&self) -> DriverSettings {
        DriverSettings {
            camera_id: self.camera_id,
            interval: self.interval(),
            source_backoff: DEFAULT_SOURCE_BACKOFF,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter, overridden by `RUST_LOG`.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Colored output.
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_color() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), color: default_color() }
    }
}

/// Initialize the global tracing subscriber.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_ansi(config.color).with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| FreedError::Logging { reason: e.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_document_uses_reference_defaults() {
        let config = SenderConfig::parse("{}").expect("empty mapping should parse");

        assert_eq!(config, SenderConfig::default());
        assert_eq!(config.camera_id, 0xFF);
        assert_eq!(config.interval(), Duration::from_millis(5));
        assert_eq!(config.pose, CameraPose::REFERENCE);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn full_document_parses() {
        let yaml = r#"
target: 10.0.0.20:6301
camera_id: 3
interval_ms: 16
pose:
  pitch: -12.5
  yaw: 45.0
  z: 150.0
  zoom: 1200
logging:
  level: debug
  color: false
"#;
        let config = SenderConfig::parse(yaml).expect("config should parse");

        assert_eq!(config.target, Some("10.0.0.20:6301".parse().expect("valid address")));
        assert_eq!(config.camera_id, 3);
        assert_eq!(config.interval_ms, 16);
        assert_eq!(config.pose.pitch, -12.5);
        assert_eq!(config.pose.yaw, 45.0);
        assert_eq!(config.pose.x, 0.0);
        assert_eq!(config.pose.zoom, 1200);
        assert!(!config.logging.color);
        assert!(config.validate().is_ok());

        let settings = config.driver_settings();
        assert_eq!(settings.camera_id, 3);
        assert_eq!(settings.interval, Duration::from_millis(16));
    }

    #[test]
    fn missing_target_fails_validation() {
        let config = SenderConfig::default();
        let err = config.validate().expect_err("target is required");
        assert!(err.to_string().contains("no target"));
    }

    #[test]
    fn zero_interval_fails_validation() {
        let config = SenderConfig {
            target: Some("127.0.0.1:40000".parse().expect("valid address")),
            interval_ms: 0,
            ..SenderConfig::default()
        };
        let err = config.validate().expect_err("zero interval is rejected");
        assert!(err.to_string().contains("interval_ms"));
    }

    #[test]
    fn malformed_yaml_reports_parse_error() {
        let err = SenderConfig::parse("camera_id: [not, a, number]").expect_err("bad type");
        assert!(matches!(err, FreedError::ConfigParse { .. }));
    }

    #[test]
    fn load_reads_file_from_disk() {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        writeln!(file, "target: 127.0.0.1:40000\ncamera_id: 9").expect("write config");

        let config = SenderConfig::load(file.path()).expect("config should load");
        assert_eq!(config.camera_id, 9);
        assert_eq!(config.target().expect("target set").port(), 40000);
    }

    #[test]
    fn load_missing_file_reports_path() {
        let err = SenderConfig::load("/nonexistent/freed-send.yaml").expect_err("missing file");
        match err {
            FreedError::ConfigFile { path, .. } => {
                assert_eq!(path, Path::new("/nonexistent/freed-send.yaml"));
            }
            other => panic!("Expected ConfigFile error, got {other:?}"),
        }
    }
}

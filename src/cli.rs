//! Command-line interface for `freed-send`.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use clap::Parser;

use crate::{Result, SenderConfig};

/// Stream FreeD camera-tracking frames to a receiver over UDP
#[derive(Parser, Debug)]
#[command(
    name = "freed-send",
    version,
    about = "Stream FreeD camera-tracking frames to a receiver over UDP",
    long_about = r#"
Sends a fixed camera pose as FreeD D1 frames, one UDP datagram per frame,
until ENTER or Ctrl-C is pressed.

QUICK START:
  freed-send 192.168.1.50 40000
  freed-send --config freed-send.yaml --camera-id 2
"#
)]
pub struct Cli {
    /// Receiver IP address
    #[arg(requires = "port")]
    pub address: Option<IpAddr>,

    /// Receiver UDP port
    pub port: Option<u16>,

    /// Configuration file path (YAML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Camera identifier (low 8 bits are sent)
    #[arg(long)]
    pub camera_id: Option<u32>,

    /// Milliseconds between frames
    #[arg(long)]
    pub interval_ms: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Target given on the command line, if any.
    pub fn target(&self) -> Option<SocketAddr> {
        match (self.address, self.port) {
            (Some(address), Some(port)) => Some(SocketAddr::new(address, port)),
            _ => None,
        }
    }

    /// Load the config file (if any) and apply command-line overrides.
    pub fn resolve_config(&self) -> Result<SenderConfig> {
        let mut config = match &self.config {
            Some(path) => SenderConfig::load(path)?,
            None => SenderConfig::default(),
        };

        if let Some(target) = self.target() {
            config.target = Some(target);
        }
        if let Some(camera_id) = self.camera_id {
            config.camera_id = camera_id;
        }
        if let Some(interval_ms) = self.interval_ms {
            config.interval_ms = interval_ms;
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if self.no_color {
            config.logging.color = false;
        }

        Ok(config)
    }
}

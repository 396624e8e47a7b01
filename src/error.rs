//! Error types for the FreeD transmitter.
//!
//! The frame encoder itself never fails: every numeric input maps to bytes, and
//! out-of-range values wrap. Errors only come from the plumbing around it.
//!
//! ## Error Categories
//!
//! - **Configuration Errors**: unreadable, unparsable or inconsistent sender configuration
//! - **Transport Errors**: socket bind failures, datagram send failures, short sends
//! - **Source Errors**: a pose source could not produce the next pose
//!
//! ## Recovery and Retry
//!
//! The send loop uses [`FreedError::is_retryable`] to decide whether a failure is
//! reported and skipped or whether it stops transmission:
//!
//! ```rust
//! use freed::FreedError;
//!
//! let error = FreedError::source_failed("tracker feed stalled");
//! if error.is_retryable() {
//!     for suggestion in error.recovery_suggestions() {
//!         println!("  - {}", suggestion);
//!     }
//! }
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for FreeD operations.
pub type Result<T, E = FreedError> = std::result::Result<T, E>;

/// Main error type for FreeD transmission.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum FreedError {
    #[error("Invalid configuration: {reason}")]
    Config { reason: String },

    #[error("Failed to read config file: {path}")]
    ConfigFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {context}")]
    ConfigParse {
        context: String,
        #[source]
        source: serde_yaml_ng::Error,
    },

    #[error("Failed to bind UDP socket on {addr}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to send frame to {target}")]
    Send {
        target: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Partial datagram: sent {sent} of {expected} bytes")]
    PartialSend { sent: usize, expected: usize },

    #[error("Pose source failed: {reason}")]
    Source { reason: String },

    #[error("Failed to initialize logging: {reason}")]
    Logging { reason: String },
}

impl FreedError {
    /// Returns whether the send loop may carry on after this error.
    pub fn is_retryable(&self) -> bool {
        match self {
            FreedError::Send { .. } => true,
            FreedError::PartialSend { .. } => true,
            FreedError::Source { .. } => true,
            FreedError::Config { .. } => false,
            FreedError::ConfigFile { .. } => false,
            FreedError::ConfigParse { .. } => false,
            FreedError::Bind { .. } => false,
            FreedError::Logging { .. } => false,
        }
    }

    /// Returns suggested recovery actions for this error.
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            FreedError::Config { .. } => vec![
                "Supply a target as <ADDRESS> <PORT> or in the config file",
                "Check that interval_ms is greater than zero",
            ],
            FreedError::ConfigFile { .. } => vec![
                "Check the config file exists and is readable",
                "Check file permissions",
            ],
            FreedError::ConfigParse { .. } => vec![
                "Check the YAML syntax of the config file",
                "Compare against config/freed-send.example.yaml",
            ],
            FreedError::Bind { .. } => vec![
                "Check that the local network stack supports the target's address family",
                "Verify no firewall policy blocks outgoing UDP",
            ],
            FreedError::Send { .. } => vec![
                "Verify the receiver address is routable",
                "Check the network interface is up",
            ],
            FreedError::PartialSend { .. } => vec![
                "Check the path MTU towards the receiver",
                "Verify the socket is not being shared with another writer",
            ],
            FreedError::Source { .. } => vec![
                "Check the tracking data feed is running",
                "Verify the pose source configuration",
            ],
            FreedError::Logging { .. } => vec![
                "Check the log level filter syntax",
                "Ensure logging is only initialized once per process",
            ],
        }
    }

    /// Helper constructor for configuration errors.
    pub fn config(reason: impl Into<String>) -> Self {
        FreedError::Config { reason: reason.into() }
    }

    /// Helper constructor for config file read errors.
    pub fn config_file(path: PathBuf, source: std::io::Error) -> Self {
        FreedError::ConfigFile { path, source }
    }

    /// Helper constructor for config parse errors.
    pub fn config_parse(context: impl Into<String>, source: serde_yaml_ng::Error) -> Self {
        FreedError::ConfigParse { context: context.into(), source }
    }

    /// Helper constructor for datagram send failures.
    pub fn send_failed(target: SocketAddr, source: std::io::Error) -> Self {
        FreedError::Send { target, source }
    }

    /// Helper constructor for pose source failures.
    pub fn source_failed(reason: impl Into<String>) -> Self {
        FreedError::Source { reason: reason.into() }
    }
}

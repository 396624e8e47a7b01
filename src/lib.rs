//! FreeD camera-tracking transmitter.
//!
//! Packs a camera pose (pan/tilt/roll, position, zoom, focus) into the 29-byte FreeD D1
//! frame and streams it over UDP to a receiver at a fixed cadence.
//!
//! # Features
//!
//! - **Bit-exact encoding**: 24-bit big-endian fixed-point fields, independent of host byte order
//! - **Self-checking frames**: every [`Frame`] carries a checksum that sums the frame to zero
//! - **Fire-and-forget streaming**: one datagram per frame, failed sends are counted and skipped
//!
//! ## Example (encoding only)
//!
//! ```rust
//! use freed::{CameraPose, build_frame};
//!
//! let frame = build_frame(0xFF, &CameraPose::REFERENCE);
//! assert_eq!(frame.as_bytes().len(), 29);
//! assert!(frame.is_checksum_valid());
//! ```
//!
//! ## Example (streaming)
//!
//! ```rust,no_run
//! use freed::{FreeD, SenderConfig};
//!
//! #[tokio::main]
//! async fn main() -> freed::Result<()> {
//!     let config = SenderConfig::parse("target: 192.168.1.50:40000")?;
//!     let sender = FreeD::transmit(&config).await?;
//!
//!     tokio::time::sleep(std::time::Duration::from_secs(1)).await;
//!     sender.cancel();
//!     println!("{:?}", sender.join().await);
//!     Ok(())
//! }
//! ```

// Core types and error handling
pub mod codec;
mod error;
pub mod types;

// Send loop architecture
pub mod cli;
pub mod config;
pub mod console;
pub mod driver;
pub mod provider;
pub mod providers;
pub mod transport;

// Core exports
pub use codec::{build_frame, freed_checksum};
pub use error::*;
pub use types::*;

// Main API exports
pub use config::{LoggingConfig, SenderConfig};
pub use driver::{Driver, DriverSettings, SendStats, SenderHandle};
pub use provider::PoseSource;
pub use providers::StaticPose;
pub use transport::{Transport, UdpTransport};

/// Unified entry point for FreeD transmission.
pub struct FreeD;

impl FreeD {
    /// Start streaming the configured static pose to the configured target.
    ///
    /// Binds a UDP socket and spawns the send loop on the current Tokio runtime. The
    /// loop runs until the returned handle is cancelled or dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration has no target or a zero interval
    /// - The local UDP socket cannot be bound
    pub async fn transmit(config: &SenderConfig) -> Result<SenderHandle> {
        config.validate()?;
        let target = config.target()?;

        let transport = UdpTransport::bind(target).await?;
        let source = StaticPose::new(config.pose);

        tracing::info!("Transmitting FreeD frames to {}", target);
        Ok(Driver::spawn(source, transport, config.driver_settings()))
    }

    /// Stream poses from a custom source over an existing transport.
    pub fn transmit_with<S, T>(source: S, transport: T, settings: DriverSettings) -> SenderHandle
    where
        S: PoseSource,
        T: Transport,
    {
        Driver::spawn(source, transport, settings)
    }
}

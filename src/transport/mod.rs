//! Frame transport.
//!
//! FreeD is fire-and-forget: one frame per datagram, no acknowledgement, no retry.
//! Loss and reordering are accepted silently.

mod udp;

use std::net::SocketAddr;

use async_trait::async_trait;

use crate::Result;
use crate::types::Frame;

pub use udp::UdpTransport;

/// Sends finished frames to a single destination.
#[async_trait]
pub trait Transport: Send + Sync + 'static {
    /// Send one frame as a single transport unit.
    ///
    /// Returns the number of bytes handed to the network. A failure covers this frame
    /// only; the caller may keep sending.
    async fn send_frame(&self, frame: &Frame) -> Result<usize>;

    /// Destination endpoint.
    fn target(&self) -> SocketAddr;
}

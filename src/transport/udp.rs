//! UDP frame transport.

use std::net::SocketAddr;

use async_trait::async_trait;
use tokio::net::UdpSocket;
use tracing::{debug, trace};

use super::Transport;
use crate::types::{FRAME_LEN, Frame};
use crate::{FreedError, Result};

/// Unconnected UDP socket sending every frame to a fixed target.
pub struct UdpTransport {
    socket: UdpSocket,
    target: SocketAddr,
}

impl UdpTransport {
    /// Bind an ephemeral local port in the target's address family.
    pub async fn bind(target: SocketAddr) -> Result<Self> {
        let local = if target.is_ipv6() {
            SocketAddr::from(([0u16; 8], 0))
        } else {
            SocketAddr::from(([0u8; 4], 0))
        };

        let socket =
            UdpSocket::bind(local).await.map_err(|source| FreedError::Bind { addr: local, source })?;

        debug!(
            "UDP transport bound to {} targeting {}",
            socket.local_addr().map_or_else(|_| local.to_string(), |a| a.to_string()),
            target
        );

        Ok(Self { socket, target })
    }

    /// Local address of the underlying socket.
    pub fn local_addr(&self) -> Result<SocketAddr> {
        let fallback = self.target;
        self.socket.local_addr().map_err(|source| FreedError::Bind { addr: fallback, source })
    }
}

#[async_trait]
impl Transport for UdpTransport {
    async fn send_frame(&self, frame: &Frame) -> Result<usize> {
        let sent = self
            .socket
            .send_to(frame.as_bytes(), self.target)
            .await
            .map_err(|source| FreedError::send_failed(self.target, source))?;

        if sent != FRAME_LEN {
            return Err(FreedError::PartialSend { sent, expected: FRAME_LEN });
        }

        trace!("Sent {} bytes to {}", sent, self.target);
        Ok(sent)
    }

    fn target(&self) -> SocketAddr {
        self.target
    }
}

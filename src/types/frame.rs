//! FreeD frame type and wire layout

use std::fmt;

use crate::codec::freed_checksum;

/// Total length of a FreeD D1 frame in bytes
pub const FRAME_LEN: usize = 29;

/// Frame type marker for a camera position/orientation message
pub const FRAME_TYPE_D1: u8 = 0xD1;

/// Width of every encoded pose field
pub const FIELD_LEN: usize = 3;

/// Offset of the camera identifier byte
pub const CAMERA_ID_OFFSET: usize = 1;

/// Offset of the first pose field (pitch)
pub const POSE_OFFSET: usize = 2;

/// Offset of the two reserved bytes
pub const RESERVED_OFFSET: usize = 26;

/// Offset of the checksum byte
pub const CHECKSUM_OFFSET: usize = 28;

/// A complete, ready-to-send FreeD D1 frame.
///
/// Frames are only produced by [`build_frame`](crate::codec::build_frame), so every
/// instance carries a valid checksum. The bytes cannot be changed after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Frame([u8; FRAME_LEN]);

impl Frame {
    pub(crate) fn from_bytes(bytes: [u8; FRAME_LEN]) -> Self {
        Self(bytes)
    }

    /// Raw wire bytes
    pub fn as_bytes(&self) -> &[u8; FRAME_LEN] {
        &self.0
    }

    /// Camera identifier byte
    pub fn camera_id(&self) -> u8 {
        self.0[CAMERA_ID_OFFSET]
    }

    /// Trailing checksum byte
    pub fn checksum(&self) -> u8 {
        self.0[CHECKSUM_OFFSET]
    }

    /// Whether the checksum over all 29 bytes evaluates to zero
    pub fn is_checksum_valid(&self) -> bool {
        freed_checksum(&self.0) == 0
    }
}

impl AsRef<[u8]> for Frame {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{:02X}", byte)?;
        }
        Ok(())
    }
}

//! Core types for FreeD transmission.
//!
//! - [`CameraPose`] is the immutable per-tick input: rotation, position, zoom and focus
//! - [`Frame`] is the immutable 29-byte output, always carrying a valid checksum
//!
//! ## Wire layout
//!
//! ```text
//! ┌──────┬────────┬───────┬─────┬──────┬─────┬─────┬─────┬──────┬───────┬──────────┬──────────┐
//! │ 0xD1 │ Cam ID │ Pitch │ Yaw │ Roll │  X  │  Y  │  Z  │ Zoom │ Focus │ Reserved │ Checksum │
//! │  1   │   1    │   3   │  3  │  3   │  3  │  3  │  3  │  3   │   3   │    2     │    1     │
//! └──────┴────────┴───────┴─────┴──────┴─────┴─────┴─────┴──────┴───────┴──────────┴──────────┘
//! ```
//!
//! Every 3-byte field is big-endian two's complement.
//!
//! ## Usage Example
//!
//! ```rust
//! use freed::types::{CameraPose, FRAME_LEN};
//! use freed::codec::build_frame;
//!
//! let frame = build_frame(0xFF, &CameraPose::REFERENCE);
//! assert_eq!(frame.as_bytes().len(), FRAME_LEN);
//! assert!(frame.is_checksum_valid());
//! ```

mod frame;
mod pose;

pub use frame::{
    CAMERA_ID_OFFSET, CHECKSUM_OFFSET, FIELD_LEN, FRAME_LEN, FRAME_TYPE_D1, Frame, POSE_OFFSET,
    RESERVED_OFFSET,
};
pub use pose::CameraPose;

//! Frame builder

use super::checksum::freed_checksum;
use super::field::FieldValue;
use crate::types::{
    CAMERA_ID_OFFSET, CHECKSUM_OFFSET, CameraPose, FIELD_LEN, FRAME_LEN, FRAME_TYPE_D1, Frame,
    POSE_OFFSET,
};

/// Pose fields in wire order.
fn wire_fields(pose: &CameraPose) -> [FieldValue; 8] {
    [
        FieldValue::Rotation(pose.pitch),
        FieldValue::Rotation(pose.yaw),
        FieldValue::Rotation(pose.roll),
        FieldValue::Position(pose.x),
        FieldValue::Position(pose.y),
        FieldValue::Position(pose.z),
        FieldValue::Integer(pose.zoom),
        FieldValue::Integer(pose.focus),
    ]
}

/// Build a FreeD D1 frame for `camera_id` from `pose`.
///
/// The camera identifier keeps only its low 8 bits. Out-of-range pose values wrap per
/// field; nothing here can fail. The reserved bytes are always zero and the last byte
/// is the checksum of the preceding 28.
///
/// ```rust
/// use freed::codec::build_frame;
/// use freed::CameraPose;
///
/// let frame = build_frame(0xFF, &CameraPose::REFERENCE);
/// assert_eq!(frame.as_bytes()[0], 0xD1);
/// assert_eq!(frame.camera_id(), 0xFF);
/// assert!(frame.is_checksum_valid());
/// ```
pub fn build_frame(camera_id: u32, pose: &CameraPose) -> Frame {
    let mut bytes = [0u8; FRAME_LEN];
    bytes[0] = FRAME_TYPE_D1;
    bytes[CAMERA_ID_OFFSET] = camera_id as u8;

    for (slot, field) in bytes[POSE_OFFSET..].chunks_exact_mut(FIELD_LEN).zip(wire_fields(pose)) {
        slot.copy_from_slice(&field.encode());
    }

    bytes[CHECKSUM_OFFSET] = freed_checksum(&bytes[..CHECKSUM_OFFSET]);
    Frame::from_bytes(bytes)
}

//! 24-bit field encoding.
//!
//! Every FreeD pose field is a signed 24-bit quantity, written most significant byte
//! first. Rotations and positions are fixed point: the float is scaled, truncated toward
//! zero, and only the low 24 bits of the result are kept. Values outside the 24-bit
//! range wrap instead of saturating.
//!
//! Bytes are produced with shifts on an `i64`, so the output does not depend on the
//! host's byte order.

use crate::types::FIELD_LEN;

/// Fixed-point scale for rotations (1/32768 degree per count)
pub const ROTATION_SCALE: f64 = 32768.0;

/// Fixed-point scale for positions (1/64 unit per count)
pub const POSITION_SCALE: f64 = 64.0;

/// Low 24 bits of `value`, big-endian.
#[inline]
fn low_24_be(value: i64) -> [u8; FIELD_LEN] {
    [(value >> 16) as u8, (value >> 8) as u8, value as u8]
}

/// Scale, truncate toward zero and widen. NaN maps to 0, infinities saturate.
#[inline]
fn fixed_point(value: f64, scale: f64) -> i64 {
    (value * scale) as i64
}

/// Encode a rotation in degrees.
///
/// Scaling is done in `f64`; a port that multiplies in `f32` can truncate one count
/// differently near integer boundaries.
///
/// ```rust
/// use freed::codec::encode_rotation;
///
/// assert_eq!(encode_rotation(90.0), [0x2D, 0x00, 0x00]);
/// assert_eq!(encode_rotation(-90.0), [0xD3, 0x00, 0x00]);
/// ```
#[inline]
pub fn encode_rotation(degrees: f64) -> [u8; FIELD_LEN] {
    low_24_be(fixed_point(degrees, ROTATION_SCALE))
}

/// Encode a position in linear units.
///
/// Scaling is done in `f64`, as for [`encode_rotation`].
///
/// ```rust
/// use freed::codec::encode_position;
///
/// assert_eq!(encode_position(100.0), [0x00, 0x19, 0x00]);
/// ```
#[inline]
pub fn encode_position(distance: f64) -> [u8; FIELD_LEN] {
    low_24_be(fixed_point(distance, POSITION_SCALE))
}

/// Encode a plain integer such as a zoom or focus count.
#[inline]
pub fn encode_integer(value: i32) -> [u8; FIELD_LEN] {
    low_24_be(i64::from(value))
}

/// A pose value tagged with how it is scaled on the wire.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue {
    /// Angle in degrees, scaled by [`ROTATION_SCALE`]
    Rotation(f64),
    /// Distance in linear units, scaled by [`POSITION_SCALE`]
    Position(f64),
    /// Raw integer, no scaling
    Integer(i32),
}

impl FieldValue {
    /// Encode into exactly [`FIELD_LEN`] bytes.
    pub fn encode(self) -> [u8; FIELD_LEN] {
        match self {
            FieldValue::Rotation(degrees) => encode_rotation(degrees),
            FieldValue::Position(distance) => encode_position(distance),
            FieldValue::Integer(value) => encode_integer(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Reference encoding built from modular arithmetic rather than shifts.
    fn expected_24(scaled: i64) -> [u8; 3] {
        let wrapped = scaled.rem_euclid(1 << 24) as u32;
        let be = wrapped.to_be_bytes();
        [be[1], be[2], be[3]]
    }

    proptest! {
        #[test]
        fn rotation_matches_truncated_modular_value(r in -1.0e6f64..1.0e6f64) {
            let scaled = (r * 32768.0).trunc() as i64;
            prop_assert_eq!(encode_rotation(r), expected_24(scaled));
        }

        #[test]
        fn position_matches_truncated_modular_value(p in -1.0e9f64..1.0e9f64) {
            let scaled = (p * 64.0).trunc() as i64;
            prop_assert_eq!(encode_position(p), expected_24(scaled));
        }

        #[test]
        fn integer_keeps_low_24_bits(v in any::<i32>()) {
            let be = (v as u32).to_be_bytes();
            prop_assert_eq!(encode_integer(v), [be[1], be[2], be[3]]);
        }

        #[test]
        fn field_value_dispatches_to_matching_encoder(x in -1.0e4f64..1.0e4f64, v in any::<i32>()) {
            prop_assert_eq!(FieldValue::Rotation(x).encode(), encode_rotation(x));
            prop_assert_eq!(FieldValue::Position(x).encode(), encode_position(x));
            prop_assert_eq!(FieldValue::Integer(v).encode(), encode_integer(v));
        }
    }

    #[test]
    fn rotation_known_values() {
        assert_eq!(encode_rotation(0.0), [0x00, 0x00, 0x00]);
        assert_eq!(encode_rotation(90.0), [0x2D, 0x00, 0x00]);
        assert_eq!(encode_rotation(-90.0), [0xD3, 0x00, 0x00]);
        assert_eq!(encode_rotation(1.0), [0x00, 0x80, 0x00]);
    }

    #[test]
    fn rotation_truncates_toward_zero() {
        // 0.32768 and -0.65536 both truncate to 0, flooring would give -1 for the second
        assert_eq!(encode_rotation(0.00001), [0x00, 0x00, 0x00]);
        assert_eq!(encode_rotation(-0.00002), [0x00, 0x00, 0x00]);
        // -1.5 counts truncates to -1
        assert_eq!(encode_rotation(-1.5 / 32768.0), [0xFF, 0xFF, 0xFF]);
    }

    #[test]
    fn rotation_wraps_instead_of_clamping() {
        // 256 degrees is exactly 2^23 counts, one past the positive maximum
        assert_eq!(encode_rotation(256.0), [0x80, 0x00, 0x00]);
        // 300 degrees = 9_830_400 = 0x960000
        assert_eq!(encode_rotation(300.0), [0x96, 0x00, 0x00]);
        // 512 degrees = 2^24 counts wraps all the way to zero
        assert_eq!(encode_rotation(512.0), [0x00, 0x00, 0x00]);
    }

    #[test]
    fn position_known_values() {
        assert_eq!(encode_position(100.0), [0x00, 0x19, 0x00]);
        assert_eq!(encode_position(200.0), [0x00, 0x32, 0x00]);
        assert_eq!(encode_position(300.0), [0x00, 0x4B, 0x00]);
        assert_eq!(encode_position(1.999), [0x00, 0x00, 0x7F]);
        assert_eq!(encode_position(-1.5), [0xFF, 0xFF, 0xA0]);
    }

    #[test]
    fn integer_known_values() {
        assert_eq!(encode_integer(0), [0x00, 0x00, 0x00]);
        assert_eq!(encode_integer(-1), [0xFF, 0xFF, 0xFF]);
        assert_eq!(encode_integer(0x12345678), [0x34, 0x56, 0x78]);
        assert_eq!(encode_integer(0x0080_0000), [0x80, 0x00, 0x00]);
        assert_eq!(encode_integer(i32::MIN), [0x00, 0x00, 0x00]);
        assert_eq!(encode_integer(i32::MAX), [0xFF, 0xFF, 0xFF]);
    }

    #[test]
    fn non_finite_inputs_do_not_panic() {
        assert_eq!(encode_rotation(f64::NAN), [0x00, 0x00, 0x00]);
        // saturates to i64::MAX / i64::MIN before the low 24 bits are taken
        assert_eq!(encode_rotation(f64::INFINITY), [0xFF, 0xFF, 0xFF]);
        assert_eq!(encode_position(f64::NEG_INFINITY), [0x00, 0x00, 0x00]);
    }
}

//! FreeD checksum.
//!
//! Start at 64 and subtract every byte, read as a signed 8-bit value; the checksum is
//! the result modulo 256. Appending that byte to the frame makes the same computation
//! over the whole frame come out to zero, which is what a receiver checks.

/// Initial accumulator value
pub const CHECKSUM_SEED: i32 = 64;

/// Compute the FreeD checksum over `bytes`.
///
/// Pass the first 28 bytes of a frame to obtain its checksum byte, or all 29 bytes to
/// verify a finished frame (a valid frame yields 0).
///
/// ```rust
/// use freed::codec::freed_checksum;
///
/// assert_eq!(freed_checksum(&[]), 64);
/// assert_eq!(freed_checksum(&[0x40]), 0);
/// ```
pub fn freed_checksum(bytes: &[u8]) -> u8 {
    // only the value mod 256 matters, so wrapping keeps long inputs exact
    let sum =
        bytes.iter().fold(CHECKSUM_SEED, |acc, &byte| acc.wrapping_sub(i32::from(byte as i8)));
    sum.rem_euclid(256) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn appending_checksum_zeroes_the_sum(body in prop::collection::vec(any::<u8>(), 0..64)) {
            let mut framed = body.clone();
            framed.push(freed_checksum(&body));
            prop_assert_eq!(freed_checksum(&framed), 0);
        }

        #[test]
        fn single_byte_corruption_is_detected(
            body in prop::collection::vec(any::<u8>(), 1..64),
            index in any::<prop::sample::Index>(),
            delta in 1u8..=255u8
        ) {
            let mut framed = body.clone();
            framed.push(freed_checksum(&body));

            let i = index.index(framed.len());
            framed[i] = framed[i].wrapping_add(delta);
            prop_assert_ne!(freed_checksum(&framed), 0);
        }
    }

    #[test]
    fn bytes_are_subtracted_as_signed() {
        // 0xFF is -1, so the sum goes up
        assert_eq!(freed_checksum(&[0xFF]), 65);
        // 0x80 is -128: 64 + 128 = 192
        assert_eq!(freed_checksum(&[0x80]), 192);
        // 64 - 127 = -63 -> 193
        assert_eq!(freed_checksum(&[0x7F]), 193);
    }

    #[test]
    fn long_inputs_do_not_overflow() {
        let mut body = vec![0x7F; 17_000_000];
        // 64 - 127 * 17_000_000 = -2_158_999_936, -2_158_999_936 mod 256 = 128
        let checksum = freed_checksum(&body);
        assert_eq!(checksum, 128);

        body.push(checksum);
        assert_eq!(freed_checksum(&body), 0);
    }

    #[test]
    fn negative_sums_wrap_into_byte_range() {
        let bytes = [0x7F; 10];
        // 64 - 1270 = -1206, -1206 mod 256 = 74
        assert_eq!(freed_checksum(&bytes), 74);
    }
}

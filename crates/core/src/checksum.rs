//! CRC16 accumulator for store transactions
//!
//! The checksum is folded one call at a time into a caller-owned `u16`, so a
//! transaction spanning many `write_data`/`read_data` calls yields the same
//! value as a single pass over the concatenated bytes.

use crc::{Crc, CRC_16_XMODEM};

/// CRC16 algorithm (XMODEM: polynomial 0x1021, MSB-first, no final XOR)
const CRC16: Crc<u16> = Crc::<u16>::new(&CRC_16_XMODEM);

/// Fold `data` into the running checksum `crc`
///
/// The running value is used as the initial register, so the caller decides
/// the seed (normally 0) and may split the input across any number of calls.
///
/// # Example
///
/// ```
/// use persistent_store_core::checksum::crc16;
///
/// let mut whole = 0u16;
/// crc16(&mut whole, b"123456789");
///
/// let mut split = 0u16;
/// crc16(&mut split, b"1234");
/// crc16(&mut split, b"56789");
///
/// assert_eq!(whole, 0x31C3);
/// assert_eq!(whole, split);
/// ```
pub fn crc16(crc: &mut u16, data: &[u8]) {
    let mut digest = CRC16.digest_with_initial(*crc);
    digest.update(data);
    *crc = digest.finalize();
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Bitwise reference of the accumulator the settings layer was built against
    fn reference_crc16(crc: &mut u16, data: &[u8]) {
        for &byte in data {
            *crc ^= (byte as u16) << 8;
            for _ in 0..8 {
                *crc = if *crc & 0x8000 != 0 {
                    (*crc << 1) ^ 0x1021
                } else {
                    *crc << 1
                };
            }
        }
    }

    #[test]
    fn test_crc16_known_values() {
        let test_cases = [
            (b"" as &[u8], 0x0000u16),
            (b"A", 0x58E5),
            (b"123456789", 0x31C3),
        ];

        for (data, expected) in test_cases {
            let mut crc = 0;
            crc16(&mut crc, data);
            assert_eq!(crc, expected, "CRC mismatch for {:?}", data);
        }
    }

    #[test]
    fn test_crc16_matches_bitwise_reference() {
        let data = [0x00, 0x01, 0x7F, 0x80, 0xFE, 0xFF, 0x55, 0xAA];
        for seed in [0x0000u16, 0xFFFF, 0x1234] {
            let mut expected = seed;
            reference_crc16(&mut expected, &data);

            let mut crc = seed;
            crc16(&mut crc, &data);
            assert_eq!(crc, expected, "seed 0x{:04X}", seed);
        }
    }

    #[test]
    fn test_crc16_split_matches_whole() {
        let data = b"persistent store transaction";

        let mut whole = 0;
        crc16(&mut whole, data);

        for split in 0..=data.len() {
            let mut crc = 0;
            crc16(&mut crc, &data[..split]);
            crc16(&mut crc, &data[split..]);
            assert_eq!(crc, whole, "split at {}", split);
        }
    }

    #[test]
    fn test_crc16_byte_at_a_time() {
        let data = b"\x01\x02\x03\x04";

        let mut whole = 0;
        crc16(&mut whole, data);

        let mut crc = 0;
        for byte in data {
            crc16(&mut crc, core::slice::from_ref(byte));
        }
        assert_eq!(crc, whole);
    }

    #[test]
    fn test_crc16_empty_leaves_value() {
        let mut crc = 0xBEEF;
        crc16(&mut crc, &[]);
        assert_eq!(crc, 0xBEEF);
    }
}

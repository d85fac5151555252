//! CRC-32 computation over the Ethernet generator polynomial.
//!
//! Bits are processed most-significant first with no input or output
//! reflection (the variant also known as CRC-32/BZIP2). This is NOT the
//! reflected `0xEDB88320` CRC-32 used by zlib/PNG; the two give different
//! results for the same input.
//!
//! Two strategies are provided and must always agree:
//! - [`compute_bitwise`]: direct polynomial division, 8 rounds per byte
//! - [`compute_table`]: one lookup in [`CRC_TABLE`] per byte

/// Ethernet / IEEE 802.3 generator polynomial (normal form).
pub const POLYNOMIAL: u32 = 0x04C11DB7;

/// Register state before any byte is processed.
pub const INIT: u32 = 0xFFFFFFFF;

/// Applied once after the last byte.
pub const FINAL_XOR: u32 = 0xFFFFFFFF;

/// Pre-computed lookup table, generated at compile time.
pub const CRC_TABLE: [u32; 256] = generate_table();

/// Top bit of the 32-bit register.
const MSB: u32 = 0x8000_0000;

/// Computation strategy. Affects speed only, never the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Byte-wise table lookup.
    #[default]
    Table,
    /// Bit-by-bit polynomial division.
    Bitwise,
}

impl Strategy {
    /// Map the `use_table` flag onto a strategy.
    pub fn from_use_table(use_table: bool) -> Self {
        if use_table {
            Strategy::Table
        } else {
            Strategy::Bitwise
        }
    }
}

/// One step of MSB-first polynomial division.
#[inline]
const fn shift_round(crc: u32) -> u32 {
    if crc & MSB != 0 {
        (crc << 1) ^ POLYNOMIAL
    } else {
        crc << 1
    }
}

/// Generate the 256-entry lookup table.
///
/// Entry `i` is the remainder of `i << 24` after eight division steps.
/// `u32` shifts discard overflow, which is the 32-bit mask.
pub const fn generate_table() -> [u32; 256] {
    let mut table = [0u32; 256];
    let mut i = 0u32;
    while i < 256 {
        let mut crc = i << 24;
        let mut j = 0;
        while j < 8 {
            crc = shift_round(crc);
            j += 1;
        }
        table[i as usize] = crc;
        i += 1;
    }
    table
}

/// Compute CRC-32 bit by bit.
pub fn compute_bitwise(data: &[u8]) -> u32 {
    let mut crc = INIT;
    for &byte in data {
        crc ^= (byte as u32) << 24;
        for _ in 0..8 {
            crc = shift_round(crc);
        }
    }
    crc ^ FINAL_XOR
}

/// Compute CRC-32 with the lookup table.
#[inline]
pub fn compute_table(data: &[u8]) -> u32 {
    let mut crc = INIT;
    for &byte in data {
        let index = ((crc >> 24) ^ byte as u32) as usize;
        crc = (crc << 8) ^ CRC_TABLE[index];
    }
    crc ^ FINAL_XOR
}

/// Compute CRC-32 with an explicit strategy.
#[inline]
pub fn compute_with(data: &[u8], strategy: Strategy) -> u32 {
    match strategy {
        Strategy::Table => compute_table(data),
        Strategy::Bitwise => compute_bitwise(data),
    }
}

/// Compute CRC-32, selecting the table path when `use_table` is set.
#[inline]
pub fn compute_crc(data: &[u8], use_table: bool) -> u32 {
    compute_with(data, Strategy::from_use_table(use_table))
}

/// Compute CRC-32 with the default (table) strategy.
#[inline]
pub fn compute(data: &[u8]) -> u32 {
    compute_table(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic filler longer than the table.
    fn long_buffer(len: usize) -> Vec<u8> {
        (0..len)
            .map(|i| (i.wrapping_mul(31) ^ (i >> 3)) as u8)
            .collect()
    }

    #[test]
    fn crc_known_vectors() {
        assert_eq!(compute(b"123456789"), 0xFC891918);
        assert_eq!(compute(b"HELLO"), 0x73283245);
        assert_eq!(compute(b"Hello World"), 0x065C89DA);
    }

    #[test]
    fn crc_is_not_reflected_variant() {
        // zlib's CRC-32 of "123456789" is 0xCBF43926
        assert_ne!(compute(b"123456789"), 0xCBF43926);
    }

    #[test]
    fn crc_empty() {
        assert_eq!(compute_table(&[]), 0x00000000);
        assert_eq!(compute_bitwise(&[]), 0x00000000);
        assert_eq!(compute_crc(b"", true), 0x00000000);
        assert_eq!(compute_crc(b"", false), 0x00000000);
    }

    #[test]
    fn crc_single_byte() {
        assert_eq!(compute(b"a"), 0x19939B6B);
        assert_eq!(compute(&[0x00]), 0xB1F7404B);
        assert_eq!(compute(&[0xFF]), 0x000000FF);
    }

    #[test]
    fn crc_table_first_entries() {
        assert_eq!(CRC_TABLE[0], 0x00000000);
        assert_eq!(CRC_TABLE[1], POLYNOMIAL);
        assert_eq!(CRC_TABLE[2], 0x09823B6E);
        assert_eq!(CRC_TABLE[128], 0x690CE0EE);
        assert_eq!(CRC_TABLE[255], 0xB1F740B4);
    }

    #[test]
    fn table_matches_bitwise_division() {
        for i in 0u32..256 {
            let mut crc = i << 24;
            for _ in 0..8 {
                crc = shift_round(crc);
            }
            assert_eq!(CRC_TABLE[i as usize], crc, "entry {i}");
        }
    }

    #[test]
    fn runtime_table_equals_const_table() {
        assert_eq!(generate_table(), CRC_TABLE);
    }

    #[test]
    fn strategies_agree_on_every_single_byte() {
        for b in 0u8..=255 {
            assert_eq!(compute_table(&[b]), compute_bitwise(&[b]), "byte {b:#04x}");
        }
    }

    #[test]
    fn strategies_agree_on_long_buffers() {
        for len in [2, 255, 256, 257, 1000, 4096] {
            let data = long_buffer(len);
            assert_eq!(
                compute_crc(&data, true),
                compute_crc(&data, false),
                "length {len}"
            );
        }
    }

    #[test]
    fn strategy_selection() {
        assert_eq!(Strategy::default(), Strategy::Table);
        assert_eq!(Strategy::from_use_table(true), Strategy::Table);
        assert_eq!(Strategy::from_use_table(false), Strategy::Bitwise);
        assert_eq!(
            compute_with(b"HELLO", Strategy::Bitwise),
            compute_with(b"HELLO", Strategy::Table)
        );
    }

    #[test]
    fn crc_deterministic() {
        let data = b"deterministic test";
        assert_eq!(compute(data), compute(data));
        assert_eq!(compute_bitwise(data), compute_bitwise(data));
    }

    #[test]
    fn crc_detects_single_bit_flip() {
        let data = long_buffer(64);
        let crc = compute(&data);
        for bit in 0..data.len() * 8 {
            let mut corrupted = data.clone();
            corrupted[bit / 8] ^= 1 << (bit % 8);
            assert_ne!(compute(&corrupted), crc, "bit {bit}");
        }
    }
}

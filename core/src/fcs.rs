//! Frame Check Sequence derivation and frame validation.
//!
//! The FCS is the one's complement of the CRC-32. A receiver recomputes
//! the FCS over the data it got and compares it with the one transmitted.

use crate::crc;

/// Mask used to complement a CRC into an FCS.
pub const FCS_MASK: u32 = 0xFFFFFFFF;

/// Complement a CRC into its FCS (and back).
#[inline]
pub const fn fcs_from_crc(crc: u32) -> u32 {
    crc ^ FCS_MASK
}

/// Compute `(crc, fcs)` for `data`.
pub fn compute_fcs(data: &[u8]) -> (u32, u32) {
    let crc = crc::compute(data);
    (crc, fcs_from_crc(crc))
}

/// Outcome of checking a received frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validation {
    /// Whether the received FCS matches the calculated one.
    pub is_valid: bool,
    /// CRC-32 recomputed over the received data.
    pub calculated_crc: u32,
    /// FCS recomputed over the received data.
    pub calculated_fcs: u32,
}

impl From<Validation> for (bool, u32, u32) {
    fn from(v: Validation) -> Self {
        (v.is_valid, v.calculated_crc, v.calculated_fcs)
    }
}

/// Validate `data` against the FCS that arrived with it.
///
/// Always returns the recomputed values, whatever the verdict.
pub fn validate_frame(data: &[u8], received_fcs: u32) -> Validation {
    let (calculated_crc, calculated_fcs) = compute_fcs(data);
    Validation {
        is_valid: calculated_fcs == received_fcs,
        calculated_crc,
        calculated_fcs,
    }
}

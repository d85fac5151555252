//! FCS Core - CRC-32 and Frame Check Sequence computation.
//!
//! This library provides:
//! - The 256-entry CRC lookup table for polynomial `0x04C11DB7`
//! - CRC-32 computation, bit-wise and table-driven
//! - FCS derivation (one's complement of the CRC)
//! - Received-frame validation
//!
//! # Constraints
//!
//! This library intentionally does NOT:
//! - Perform any I/O
//! - Parse or format text
//! - Hold mutable state (the table is a compile-time constant)
//! - Support other polynomials, widths or reflected variants
//!
//! # Example
//!
//! ```
//! use fcs_core::{compute_crc, compute_fcs, validate_frame};
//!
//! let data = b"HELLO";
//! assert_eq!(compute_crc(data, true), compute_crc(data, false));
//!
//! let (crc, fcs) = compute_fcs(data);
//! assert_eq!(crc ^ fcs, 0xFFFFFFFF);
//!
//! // Receiver side
//! assert!(validate_frame(data, fcs).is_valid);
//! assert!(!validate_frame(data, fcs ^ 1).is_valid);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod crc;
pub mod fcs;

pub use crc::{
    compute, compute_bitwise, compute_crc, compute_table, compute_with, generate_table, Strategy,
    CRC_TABLE, FINAL_XOR, INIT, POLYNOMIAL,
};
pub use fcs::{compute_fcs, fcs_from_crc, validate_frame, Validation, FCS_MASK};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

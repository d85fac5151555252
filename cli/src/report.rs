//! Result reports printed by the shell.
//!
//! Each report renders as text through [`fmt::Display`] and as JSON through
//! `serde`. CRC and FCS values are shown as zero-padded 8-digit uppercase
//! hex plus decimal.

use fcs_core::Validation;
use serde::Serialize;
use std::fmt;

/// Heavy separator line.
pub const RULE: &str = "============================================================";

/// Light separator line.
pub const THIN_RULE: &str = "------------------------------------------------------------";

/// Format a 32-bit value as `0xXXXXXXXX`.
pub fn hex32(value: u32) -> String {
    format!("0x{value:08X}")
}

/// Render bytes as text, one char per byte, non-ASCII as U+FFFD.
pub fn ascii_lossy(data: &[u8]) -> String {
    data.iter()
        .map(|&b| if b.is_ascii() { char::from(b) } else { '\u{FFFD}' })
        .collect()
}

/// Outcome of a CRC/FCS computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrcReport {
    /// Data as uppercase hex.
    pub data_hex: String,
    /// Data as ASCII.
    pub data_ascii: String,
    /// Data length in bytes.
    pub length: usize,
    /// Computed CRC-32.
    pub crc: u32,
    /// Computed FCS.
    pub fcs: u32,
}

impl CrcReport {
    /// Build a report for `data` with its already computed CRC and FCS.
    pub fn new(data: &[u8], crc: u32, fcs: u32) -> Self {
        Self {
            data_hex: hex::encode_upper(data),
            data_ascii: ascii_lossy(data),
            length: data.len(),
            crc,
            fcs,
        }
    }
}

impl fmt::Display for CrcReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "CRC-32 RESULT")?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "Data (hex):                {}", self.data_hex)?;
        writeln!(f, "Data (ASCII):              {}", self.data_ascii)?;
        writeln!(f, "Data length:               {} bytes", self.length)?;
        writeln!(f)?;
        writeln!(f, "{THIN_RULE}")?;
        writeln!(f, "CRC-32:                    {}", hex32(self.crc))?;
        writeln!(f, "CRC-32 (dec):              {}", self.crc)?;
        writeln!(f)?;
        writeln!(f, "{THIN_RULE}")?;
        writeln!(f, "FCS (complement):          {}", hex32(self.fcs))?;
        writeln!(f, "FCS (complement, dec):     {}", self.fcs)?;
        writeln!(f, "{RULE}")
    }
}

/// Outcome of validating a received frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Received data as uppercase hex.
    pub data_hex: String,
    /// Received data length in bytes.
    pub length: usize,
    /// FCS that arrived with the data.
    pub received_fcs: u32,
    /// FCS recomputed over the data.
    pub calculated_fcs: u32,
    /// CRC-32 recomputed over the data.
    pub calculated_crc: u32,
    /// Whether the frame is intact.
    pub is_valid: bool,
}

impl ValidationReport {
    /// Build a report from a core validation result.
    pub fn new(data: &[u8], received_fcs: u32, validation: Validation) -> Self {
        Self {
            data_hex: hex::encode_upper(data),
            length: data.len(),
            received_fcs,
            calculated_fcs: validation.calculated_fcs,
            calculated_crc: validation.calculated_crc,
            is_valid: validation.is_valid,
        }
    }

    /// One-line verdict.
    pub fn verdict(&self) -> &'static str {
        if self.is_valid {
            "VALID FRAME - no transmission errors detected"
        } else {
            "CORRUPTED FRAME - transmission error detected"
        }
    }

    /// Short four-line form used by the demonstration.
    pub fn summary(&self) -> String {
        let result = if self.is_valid { "VALID" } else { "INVALID" };
        format!(
            "Data (hex):      {}\nFCS received:    {}\nFCS calculated:  {}\nResult:          {result}\n",
            self.data_hex,
            hex32(self.received_fcs),
            hex32(self.calculated_fcs),
        )
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "{THIN_RULE}")?;
        writeln!(f, "VALIDATION RESULT")?;
        writeln!(f, "{THIN_RULE}")?;
        writeln!(f, "Received data (hex):       {}", self.data_hex)?;
        writeln!(f, "Data length:               {} bytes", self.length)?;
        writeln!(f)?;
        writeln!(f, "Received FCS:              {}", hex32(self.received_fcs))?;
        writeln!(f, "Calculated FCS:            {}", hex32(self.calculated_fcs))?;
        writeln!(f, "Calculated CRC-32:         {}", hex32(self.calculated_crc))?;
        writeln!(f)?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "{}", self.verdict())?;
        writeln!(f, "{RULE}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex32_is_zero_padded_uppercase() {
        assert_eq!(hex32(0), "0x00000000");
        assert_eq!(hex32(0x8cd7cdba), "0x8CD7CDBA");
        assert_eq!(hex32(0xFF), "0x000000FF");
    }

    #[test]
    fn ascii_lossy_replaces_high_bytes() {
        assert_eq!(ascii_lossy(b"HI"), "HI");
        assert_eq!(ascii_lossy(&[0x41, 0xC3, 0x42]), "A\u{FFFD}B");
    }

    #[test]
    fn crc_report_text() {
        let report = CrcReport::new(b"HELLO", 0x73283245, 0x8CD7CDBA);
        let text = report.to_string();
        assert!(text.contains("Data (hex):                48454C4C4F"));
        assert!(text.contains("Data (ASCII):              HELLO"));
        assert!(text.contains("Data length:               5 bytes"));
        assert!(text.contains("CRC-32:                    0x73283245"));
        assert!(text.contains("CRC-32 (dec):              1932014149"));
        assert!(text.contains("FCS (complement):          0x8CD7CDBA"));
        assert!(text.contains("FCS (complement, dec):     2362953146"));
    }

    #[test]
    fn crc_report_json() {
        let report = CrcReport::new(b"", 0, 0xFFFFFFFF);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["data_hex"], "");
        assert_eq!(json["length"], 0);
        assert_eq!(json["crc"], 0);
        assert_eq!(json["fcs"], 4294967295u64);
    }

    #[test]
    fn validation_report_verdicts() {
        let ok = Validation {
            is_valid: true,
            calculated_crc: 0x73283245,
            calculated_fcs: 0x8CD7CDBA,
        };
        let report = ValidationReport::new(b"HELLO", 0x8CD7CDBA, ok);
        let text = report.to_string();
        assert!(text.contains("Received FCS:              0x8CD7CDBA"));
        assert!(text.contains("Calculated CRC-32:         0x73283245"));
        assert!(text.contains("VALID FRAME"));

        let bad = Validation {
            is_valid: false,
            ..ok
        };
        let report = ValidationReport::new(b"HELLO", 0x8CD7CDBB, bad);
        assert!(report.to_string().contains("CORRUPTED FRAME"));
        assert!(report.to_string().contains("Received FCS:              0x8CD7CDBB"));
    }

    #[test]
    fn validation_summary_lines() {
        let bad = Validation {
            is_valid: false,
            calculated_crc: 0x73283245,
            calculated_fcs: 0x8CD7CDBA,
        };
        let report = ValidationReport::new(b"HELLO", 0x8CD7CDBB, bad);
        assert_eq!(
            report.summary(),
            "Data (hex):      48454C4C4F\n\
             FCS received:    0x8CD7CDBB\n\
             FCS calculated:  0x8CD7CDBA\n\
             Result:          INVALID\n"
        );

        let ok = ValidationReport::new(b"HELLO", 0x8CD7CDBA, Validation { is_valid: true, ..bad });
        assert!(ok.summary().ends_with("Result:          VALID\n"));
    }
}

//! Conversion of user-typed text into frame bytes and FCS values.

use crate::error::EncodingError;

/// How the user chose to enter data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Pairs of hex digits, e.g. `48656C6C6F`.
    Hex,
    /// 7-bit ASCII text, taken byte for byte.
    Ascii,
}

impl InputMode {
    /// Map a menu answer (`"1"` or `"2"`) to a mode.
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(InputMode::Hex),
            "2" => Some(InputMode::Ascii),
            _ => None,
        }
    }

    /// Decode `text` according to this mode.
    pub fn decode(self, text: &str) -> Result<Vec<u8>, EncodingError> {
        match self {
            InputMode::Hex => parse_hex(text),
            InputMode::Ascii => parse_ascii(text),
        }
    }
}

/// Decode hex text into bytes.
///
/// ASCII whitespace anywhere in the input is ignored, so `48 65 6C` and
/// `48656C` are equivalent. Empty input decodes to no bytes.
pub fn parse_hex(text: &str) -> Result<Vec<u8>, EncodingError> {
    let digits: String = text.chars().filter(|c| !c.is_ascii_whitespace()).collect();

    if let Some((position, found)) = digits
        .chars()
        .enumerate()
        .find(|(_, c)| !c.is_ascii_hexdigit())
    {
        return Err(EncodingError::InvalidHexDigit { found, position });
    }

    // Digits are ASCII from here on, so the hex crate's byte indices are
    // character positions and it only has odd length left to report
    hex::decode(&digits).map_err(|e| match e {
        hex::FromHexError::InvalidHexCharacter { c, index } => EncodingError::InvalidHexDigit {
            found: c,
            position: index,
        },
        hex::FromHexError::OddLength | hex::FromHexError::InvalidStringLength => {
            EncodingError::OddHexLength {
                digits: digits.len(),
            }
        }
    })
}

/// Encode ASCII text as bytes.
///
/// The line is taken verbatim (no trimming), matching what was typed.
pub fn parse_ascii(text: &str) -> Result<Vec<u8>, EncodingError> {
    if let Some((position, found)) = text.chars().enumerate().find(|(_, c)| !c.is_ascii()) {
        return Err(EncodingError::NonAscii { found, position });
    }
    Ok(text.as_bytes().to_vec())
}

/// Parse a received FCS written in hex.
///
/// Accepts what a hex integer literal allows: an optional `+` sign, an
/// optional `0x`/`0X` prefix, leading zeros and single `_` separators
/// between digits. The value must fit in 32 bits.
pub fn parse_fcs(text: &str) -> Result<u32, EncodingError> {
    let trimmed = text.trim();
    let invalid = || EncodingError::InvalidFcs {
        input: trimmed.to_string(),
    };

    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let body = match unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
    {
        // A separator may directly follow the prefix
        Some(rest) => rest.strip_prefix('_').unwrap_or(rest),
        None => unsigned,
    };

    if body.is_empty() || body.starts_with('_') || body.ends_with('_') || body.contains("__") {
        return Err(invalid());
    }

    let digits: String = body.chars().filter(|&c| c != '_').collect();
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let significant = digits.trim_start_matches('0');
    if significant.is_empty() {
        return Ok(0);
    }
    u32::from_str_radix(significant, 16).map_err(|_| invalid())
}

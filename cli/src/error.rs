//! Error types for the FCS shell.
//!
//! The core never fails; everything here comes from parsing user input or
//! from the terminal itself. Only [`ShellError::Io`] is fatal to the loop.

use thiserror::Error;

/// Result type alias for shell operations.
pub type Result<T> = std::result::Result<T, ShellError>;

/// Malformed hex, ASCII or FCS text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    /// Hex data must contain whole bytes.
    #[error("odd number of hex digits: {digits}")]
    OddHexLength {
        /// Number of hex digits supplied.
        digits: usize,
    },

    /// A character that is not a hex digit.
    #[error("invalid hex character {found:?} at position {position}")]
    InvalidHexDigit {
        /// Offending character.
        found: char,
        /// Index among the non-whitespace characters.
        position: usize,
    },

    /// Text mode accepts 7-bit ASCII only.
    #[error("non-ASCII character {found:?} at position {position}")]
    NonAscii {
        /// Offending character.
        found: char,
        /// Character index in the input.
        position: usize,
    },

    /// Received FCS is not a 32-bit hex value.
    #[error("invalid FCS {input:?}: expected a 32-bit hex value")]
    InvalidFcs {
        /// The text as entered (trimmed).
        input: String,
    },
}

/// Errors surfaced by the interactive shell.
#[derive(Debug, Error)]
pub enum ShellError {
    /// User input could not be decoded.
    #[error("invalid encoding: {0}")]
    InvalidEncoding(#[from] EncodingError),

    /// Data buffer exceeds the configured limit.
    #[error("input too large: {size} bytes exceeds maximum {max}")]
    InputTooLarge {
        /// Decoded size in bytes.
        size: usize,
        /// Configured maximum.
        max: usize,
    },

    /// Menu or input-mode selection not recognised.
    #[error("invalid choice: {0:?}")]
    InvalidChoice(String),

    /// Terminal I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ShellError {
    /// Whether the shell can report this error and keep running.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, ShellError::Io(_))
    }
}

//! Configuration for the FCS shell.
//!
//! All configuration is loaded from environment variables (optionally via
//! a `.env` file). Unparseable values fall back to defaults.

use fcs_core::Strategy;

/// Default maximum data buffer accepted from the user (64 KiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 64 * 1024;

/// How reports are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable boxed layout.
    #[default]
    Text,
    /// One JSON object per report.
    Json,
}

impl OutputFormat {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

fn parse_strategy(value: &str) -> Option<Strategy> {
    match value.trim().to_ascii_lowercase().as_str() {
        "table" => Some(Strategy::Table),
        "bitwise" | "direct" => Some(Strategy::Bitwise),
        _ => None,
    }
}

/// Shell configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// CRC computation strategy (default: table)
    pub strategy: Strategy,

    /// Report output format (default: text)
    pub output_format: OutputFormat,

    /// Maximum decoded data size in bytes (default: 64KB)
    pub max_input_bytes: usize,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            strategy: lookup("CRC_STRATEGY")
                .and_then(|s| parse_strategy(&s))
                .unwrap_or_default(),
            output_format: lookup("OUTPUT_FORMAT")
                .and_then(|s| OutputFormat::parse(&s))
                .unwrap_or_default(),
            max_input_bytes: lookup("MAX_INPUT_BYTES")
                .and_then(|s| s.trim().parse().ok())
                .filter(|&n: &usize| n > 0)
                .unwrap_or(DEFAULT_MAX_INPUT_BYTES),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strategy: Strategy::Table,
            output_format: OutputFormat::Text,
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
        }
    }
}

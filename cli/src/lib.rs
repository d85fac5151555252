//! # FCS CLI
//!
//! Interactive shell around `fcs-core`: reads frame data as hex or ASCII,
//! prints CRC-32 / FCS reports and validates received frames.
//!
//! ## Menu
//!
//! | Option | Action |
//! |--------|--------|
//! | `1` | Compute CRC-32 and FCS of hex or ASCII data |
//! | `2` | Validate received hex data against a received FCS |
//! | `3` | Run the built-in demonstration |
//! | `4` | Exit |
//!
//! ## Configuration
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `CRC_STRATEGY` | `table` | `table` or `bitwise` |
//! | `OUTPUT_FORMAT` | `text` | `text` or `json` |
//! | `MAX_INPUT_BYTES` | `65536` | Largest accepted data buffer |
//! | `RUST_LOG` | `fcs_cli=warn` | Log filter (logs go to stderr) |

pub mod config;
pub mod error;
pub mod input;
pub mod report;
pub mod shell;

pub use config::{Config, OutputFormat};
pub use error::{EncodingError, Result, ShellError};
pub use input::InputMode;
pub use report::{CrcReport, ValidationReport};
pub use shell::{MenuChoice, Shell};

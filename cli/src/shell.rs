//! Interactive menu loop.
//!
//! The shell reads one answer per line from any `BufRead` and writes to any
//! `Write`, so it runs the same on a terminal and over in-memory buffers.
//! End of input behaves like choosing "Exit".

use crate::config::{Config, OutputFormat};
use crate::error::{Result, ShellError};
use crate::input::{self, InputMode};
use crate::report::{CrcReport, ValidationReport, RULE};
use serde::Serialize;
use std::fmt::Display;
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

/// Demonstration payload entered as hex ("Hello World").
pub const DEMO_HEX: &str = "48656C6C6F20576F726C64";

/// Demonstration payload entered as ASCII.
pub const DEMO_TEXT: &[u8] = b"HELLO";

/// Top-level menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Compute CRC-32 and FCS of user data.
    Compute,
    /// Validate a received frame.
    Validate,
    /// Run the canned examples.
    Demo,
    /// Leave the shell.
    Exit,
}

impl MenuChoice {
    /// Parse a menu answer.
    pub fn parse(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(MenuChoice::Compute),
            "2" => Some(MenuChoice::Validate),
            "3" => Some(MenuChoice::Demo),
            "4" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Whether the loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Interactive FCS calculator.
pub struct Shell<R, W> {
    input: R,
    output: W,
    config: Config,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Create a shell over the given streams.
    pub fn new(input: R, output: W, config: Config) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    /// Consume the shell and return its output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the menu loop until "Exit" or end of input.
    ///
    /// Input errors are reported and the loop continues; only I/O
    /// failures are returned.
    pub fn run(&mut self) -> Result<()> {
        info!(strategy = ?self.config.strategy, "Shell started");

        loop {
            self.print_menu()?;
            let Some(choice) = self.prompt("Choose an option (1-4): ")? else {
                break;
            };

            let result = match MenuChoice::parse(&choice) {
                Some(MenuChoice::Compute) => self.compute_interactive(),
                Some(MenuChoice::Validate) => self.validate_interactive(),
                Some(MenuChoice::Demo) => self.demo().map(|()| Flow::Continue),
                Some(MenuChoice::Exit) => {
                    writeln!(self.output, "\nProgram finished. Goodbye!")?;
                    break;
                }
                None => Err(ShellError::InvalidChoice(choice.trim().to_string())),
            };

            if self.recover(result)? == Flow::Quit {
                break;
            }
        }

        self.output.flush()?;
        info!("Shell finished");
        Ok(())
    }

    /// Report recoverable errors, propagate fatal ones.
    fn recover(&mut self, result: Result<Flow>) -> Result<Flow> {
        match result {
            Ok(flow) => Ok(flow),
            Err(e) if e.is_recoverable() => {
                warn!(error = %e, "Operation aborted");
                writeln!(self.output, "Error: {e}")?;
                Ok(Flow::Continue)
            }
            Err(e) => Err(e),
        }
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output, "\n{RULE}")?;
        writeln!(self.output, "CRC-32 CALCULATOR FOR ETHERNET FRAMES")?;
        writeln!(self.output, "{RULE}")?;
        writeln!(self.output, "1. Compute CRC-32 and FCS")?;
        writeln!(self.output, "2. Validate received frame")?;
        writeln!(self.output, "3. Demonstration")?;
        writeln!(self.output, "4. Exit")?;
        writeln!(self.output, "{RULE}")?;
        Ok(())
    }

    /// Print `text`, then read one line without its line terminator.
    /// Returns `None` at end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    fn check_size(&self, data: &[u8]) -> Result<()> {
        if data.len() > self.config.max_input_bytes {
            return Err(ShellError::InputTooLarge {
                size: data.len(),
                max: self.config.max_input_bytes,
            });
        }
        Ok(())
    }

    fn emit<T: Serialize + Display>(&mut self, report: &T) -> Result<()> {
        match self.config.output_format {
            OutputFormat::Text => write!(self.output, "{report}")?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.output, report).map_err(std::io::Error::from)?;
                writeln!(self.output)?;
            }
        }
        Ok(())
    }

    /// Text-mode only heading.
    fn heading(&mut self, title: &str) -> Result<()> {
        if self.config.output_format == OutputFormat::Text {
            writeln!(self.output, "\n{RULE}")?;
            writeln!(self.output, "{title}")?;
            writeln!(self.output, "{RULE}")?;
        }
        Ok(())
    }

    /// Compute and print the CRC report for `data`.
    fn report_crc(&mut self, data: &[u8]) -> Result<()> {
        let crc = fcs_core::compute_with(data, self.config.strategy);
        let fcs = fcs_core::fcs_from_crc(crc);
        debug!(len = data.len(), crc = %format_args!("{crc:#010x}"), "Computed CRC");
        self.emit(&CrcReport::new(data, crc, fcs))
    }

    /// Validate `data` against `received_fcs` and print the report.
    fn report_validation(&mut self, data: &[u8], received_fcs: u32) -> Result<()> {
        let validation = fcs_core::validate_frame(data, received_fcs);
        debug!(
            len = data.len(),
            received_fcs = %format_args!("{received_fcs:#010x}"),
            is_valid = validation.is_valid,
            "Validated frame"
        );
        self.emit(&ValidationReport::new(data, received_fcs, validation))
    }

    /// Validate and print the short demo block (full report in JSON mode).
    fn summarize_validation(&mut self, data: &[u8], received_fcs: u32) -> Result<()> {
        let report = ValidationReport::new(
            data,
            received_fcs,
            fcs_core::validate_frame(data, received_fcs),
        );
        match self.config.output_format {
            OutputFormat::Text => write!(self.output, "{}", report.summary())?,
            OutputFormat::Json => self.emit(&report)?,
        }
        Ok(())
    }

    fn compute_interactive(&mut self) -> Result<Flow> {
        writeln!(self.output, "\n{RULE}")?;
        writeln!(self.output, "DATA INPUT")?;
        writeln!(self.output, "{RULE}")?;
        writeln!(self.output, "1. Enter data as hexadecimal")?;
        writeln!(self.output, "2. Enter data as ASCII text")?;

        let Some(choice) = self.prompt("\nChoose (1 or 2): ")? else {
            return Ok(Flow::Quit);
        };
        let mode = InputMode::from_choice(&choice)
            .ok_or_else(|| ShellError::InvalidChoice(choice.trim().to_string()))?;

        let text = match mode {
            InputMode::Hex => self.prompt("Enter data in hexadecimal (e.g. 48656C6C6F): ")?,
            InputMode::Ascii => self.prompt("Enter data as ASCII text: ")?,
        };
        let Some(text) = text else {
            return Ok(Flow::Quit);
        };

        let data = mode.decode(&text)?;
        self.check_size(&data)?;
        writeln!(self.output, "Data converted: {} bytes", data.len())?;

        self.report_crc(&data)?;
        Ok(Flow::Continue)
    }

    fn validate_interactive(&mut self) -> Result<Flow> {
        writeln!(self.output, "\n{RULE}")?;
        writeln!(self.output, "INTEGRITY CHECK (RECEIVER)")?;
        writeln!(self.output, "{RULE}")?;

        let Some(text) = self.prompt("Enter received data in hexadecimal: ")? else {
            return Ok(Flow::Quit);
        };
        let data = input::parse_hex(&text)?;
        self.check_size(&data)?;

        let Some(text) = self.prompt("Enter received FCS in hexadecimal (e.g. ABCD1234): ")?
        else {
            return Ok(Flow::Quit);
        };
        let received_fcs = input::parse_fcs(&text)?;

        self.report_validation(&data, received_fcs)?;
        Ok(Flow::Continue)
    }

    /// Run the four canned examples.
    pub fn demo(&mut self) -> Result<()> {
        self.heading("DEMONSTRATION")?;

        self.heading("Example 1: message 'HELLO'")?;
        self.report_crc(DEMO_TEXT)?;

        let hello_world = input::parse_hex(DEMO_HEX)?;
        self.heading("Example 2: message 'Hello World' (hex input)")?;
        self.report_crc(&hello_world)?;

        let (_, fcs) = fcs_core::compute_fcs(DEMO_TEXT);

        self.heading("Example 3: validating an intact frame")?;
        self.summarize_validation(DEMO_TEXT, fcs)?;

        // Single-bit transmission error in the FCS
        self.heading("Example 4: validating a corrupted frame")?;
        self.summarize_validation(DEMO_TEXT, fcs ^ 0x00000001)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(input: &str, config: Config) -> String {
        let mut shell = Shell::new(Cursor::new(input.to_string()), Vec::new(), config);
        shell.run().unwrap();
        String::from_utf8(shell.into_output()).unwrap()
    }

    #[test]
    fn menu_choice_parse() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Compute));
        assert_eq!(MenuChoice::parse(" 4\t"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("5"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }

    #[test]
    fn exit_choice_ends_loop() {
        let out = run("4\n1\n", Config::default());
        assert!(out.contains("Goodbye!"));
        assert_eq!(out.matches("CRC-32 CALCULATOR").count(), 1);
    }

    #[test]
    fn eof_ends_loop() {
        let out = run("", Config::default());
        assert!(out.contains("Choose an option (1-4): "));
        assert!(!out.contains("Goodbye!"));
    }

    #[test]
    fn eof_mid_operation_ends_loop() {
        let out = run("1\n1\n", Config::default());
        assert!(out.contains("Enter data in hexadecimal"));
        assert!(!out.contains("CRC-32 RESULT"));
    }

    #[test]
    fn prompt_strips_only_line_terminator() {
        let out = run("1\n2\n HI \r\n4\n", Config::default());
        assert!(out.contains("Data (hex):                20484920"));
    }

    #[test]
    fn bitwise_strategy_gives_same_report() {
        let table = run("1\n2\nHELLO\n4\n", Config::default());
        let bitwise = run(
            "1\n2\nHELLO\n4\n",
            Config {
                strategy: fcs_core::Strategy::Bitwise,
                ..Config::default()
            },
        );
        assert_eq!(table, bitwise);
        assert!(table.contains("0x73283245"));
    }
}

//! Console output for events and the final value

use std::io::Write;

use abacus_core::{format_number, number, CommandEvent};

use crate::error::CliResult;

/// How results are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `Add: 100` lines followed by a blank line and `Value: 76`
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Writes events and values in the selected format
pub struct Printer<W: Write> {
    out: W,
    format: OutputFormat,
}

impl<W: Write> Printer<W> {
    /// Create a printer over `out`
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    /// Write one event
    pub fn event(&mut self, event: &CommandEvent) -> CliResult<()> {
        match self.format {
            OutputFormat::Text => writeln!(self.out, "{}", event)?,
            OutputFormat::Json => writeln!(self.out, "{}", event.to_json()?)?,
        }
        Ok(())
    }

    /// Write the accumulator value
    pub fn value(&mut self, value: f64) -> CliResult<()> {
        match self.format {
            OutputFormat::Text => writeln!(self.out, "\nValue: {}", format_number(value))?,
            OutputFormat::Json => writeln!(
                self.out,
                "{}",
                serde_json::json!({ "value": number::to_json_value(value) })
            )?,
        }
        self.out.flush()?;
        Ok(())
    }

    /// Consume the printer, returning the writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

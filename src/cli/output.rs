//! Output formatting utilities
//!
//! Prints reports as text or JSON and proxied response bodies verbatim.

use crate::cli::args::OutputFormat;
use crate::domain::{format_rulesets, RulesetDetails};
use serde::Serialize;
use std::io::{self, Write};

/// Write output in the selected format to any writer
pub fn write_output<W: Write, T: Serialize + TableDisplay>(
    out: &mut W,
    data: &T,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => {
            write!(out, "{}", data.to_table())?;
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(data).map_err(io::Error::other)?;
            writeln!(out, "{}", json)?;
        }
    }

    out.flush()
}

/// Print a proxied response body followed by a newline
pub fn print_response(body: &[u8]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_response(&mut handle, body)
}

/// Write raw body bytes followed by a newline
pub fn write_response<W: Write>(out: &mut W, body: &[u8]) -> io::Result<()> {
    out.write_all(body)?;
    out.write_all(b"\n")?;
    out.flush()
}

/// Trait for types that can be displayed as a plain-text report
pub trait TableDisplay {
    /// Format as a report string
    fn to_table(&self) -> String;
}

/// Traffic filter report for display
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct RulesetReport {
    pub rulesets: Vec<RulesetDetails>,
}

impl TableDisplay for RulesetReport {
    fn to_table(&self) -> String {
        format_rulesets(&self.rulesets)
    }
}

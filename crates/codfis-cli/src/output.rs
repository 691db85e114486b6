//! # Output Rendering
//!
//! Text output prints the greeting line followed by the code; JSON output
//! prints a single object for scripting.

use std::io::Write;

use anyhow::Result;
use serde::Serialize;

use codfis_core::{PersonalData, TaxCode};

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Greeting line, then the code.
    #[default]
    Text,
    /// One JSON object per result.
    Json,
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    name: &'a str,
    surname: &'a str,
    tax_code: &'a TaxCode,
}

/// Write the computed code for `data` in the requested format.
pub fn emit(
    out: &mut impl Write,
    data: &PersonalData,
    code: &TaxCode,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "{}", data.salutation())?;
            writeln!(out, "{code}")?;
        }
        OutputFormat::Json => {
            let report = Report {
                name: data.name(),
                surname: data.surname(),
                tax_code: code,
            };
            serde_json::to_writer(&mut *out, &report)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

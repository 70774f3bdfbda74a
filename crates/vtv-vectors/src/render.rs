//! Textual renderings of vector documents.
//!
//! Only the byte content and the row wrapping are contractual; the
//! surrounding markup is presentation.

use std::fmt;
use std::str::FromStr;

use vtv_core::{ErrorInfo, VtvError};
use vtv_crypto::ZeroPadding;

use crate::json::document_to_json;
use crate::record::{VectorDocument, VectorKind, VectorRecord};

/// Output formats supported by [`render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// `align*` blocks for inclusion in the protocol documentation.
    #[default]
    Latex,
    /// Plain labeled blocks.
    Text,
    /// Pretty printed [`VectorDocument`].
    Json,
}

impl FromStr for Format {
    type Err = VtvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "latex" | "tex" => Ok(Format::Latex),
            "text" | "txt" => Ok(Format::Text),
            "json" => Ok(Format::Json),
            other => Err(VtvError::Serde(
                ErrorInfo::new("unknown-format", "unrecognised output format")
                    .with_context("value", other)
                    .with_hint("expected latex, text or json"),
            )),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Format::Latex => "latex",
            Format::Text => "text",
            Format::Json => "json",
        })
    }
}

/// Renders `document` in the requested format.
pub fn render(document: &VectorDocument, format: Format) -> Result<String, VtvError> {
    match format {
        Format::Latex => render_latex(document),
        Format::Text => render_text(document),
        Format::Json => document_to_json(document),
    }
}

/// Section headings of a record: header line, input label, output label.
fn headings(record: &VectorRecord, padding: ZeroPadding) -> (String, String, String) {
    let input_len = record.input.len();
    let output_len = record.output.len();
    match (record.kind, record.output_bits) {
        (VectorKind::RandomOracle, Some(bits)) => {
            let side = match padding {
                ZeroPadding::TrailingLsb => "first",
                ZeroPadding::LeadingMsb => "last",
            };
            (
                format!("RandomOracle(Hashfunction(\"{}\"),{bits})", record.hash),
                format!("Input ({input_len} bytes):"),
                format!("Output ({output_len} bytes of which the {side} {bits} bits may be non-zero):"),
            )
        }
        _ => (
            format!("PRG(Hashfunction(\"{}\"))", record.hash),
            format!("Seed ({input_len} bytes):"),
            format!("Expansion ({output_len} bytes):"),
        ),
    }
}

fn render_latex(document: &VectorDocument) -> Result<String, VtvError> {
    let width = document.plan.row_width;
    let mut out = String::new();
    for record in &document.records {
        let (_, input_label, output_label) = headings(record, document.plan.padding);
        let header = match (record.kind, record.output_bits) {
            (VectorKind::RandomOracle, Some(bits)) => format!(
                "&\\RandomOracle(\\Hashfunction(\\leaf{{\\code{{\"{}\"}}}}),{bits})\\\\",
                record.hash
            ),
            _ => format!(
                "&\\PRG(\\Hashfunction(\\leaf{{\\code{{\"{}\"}}}}))\\\\",
                record.hash
            ),
        };
        out.push_str("\\begin{align*}\n");
        out.push_str(&header);
        out.push('\n');
        out.push_str(&format!("&\\textrm{{{input_label}}}\\\\\n"));
        latex_rows(&mut out, &record.input, width, false)?;
        out.push_str(&format!("&\\textrm{{{output_label}}}\\\\\n"));
        latex_rows(&mut out, &record.output, width, true)?;
        out.push_str("\\end{align*}\n");
    }
    Ok(out)
}

/// Appends `&\hex{..}\\` rows; the closing row of a block drops its `\\`.
fn latex_rows(out: &mut String, bytes: &[u8], width: usize, last: bool) -> Result<(), VtvError> {
    let rows = vtv_hex::render(bytes, width)?;
    let count = rows.len();
    for (index, row) in rows.enumerate() {
        if last && index + 1 == count {
            out.push_str(&format!("&\\hex{{{row}}}\n"));
        } else {
            out.push_str(&format!("&\\hex{{{row}}}\\\\\n"));
        }
    }
    Ok(())
}

fn render_text(document: &VectorDocument) -> Result<String, VtvError> {
    let width = document.plan.row_width;
    let mut blocks = Vec::with_capacity(document.records.len());
    for record in &document.records {
        let (header, input_label, output_label) = headings(record, document.plan.padding);
        let mut block = format!("{header}\n{input_label}\n");
        for row in vtv_hex::render(&record.input, width)? {
            block.push_str(&format!("    {row}\n"));
        }
        block.push_str(&format!("{output_label}\n"));
        for row in vtv_hex::render(&record.output, width)? {
            block.push_str(&format!("    {row}\n"));
        }
        blocks.push(block);
    }
    Ok(blocks.join("\n"))
}

#![deny(missing_docs)]
//! Fixed-width hexadecimal rendering.
//!
//! Rows are produced lazily and in original byte order; every row except
//! possibly the last covers exactly `row_width` bytes.

use std::iter::FusedIterator;
use std::slice::Chunks;

use vtv_core::{ErrorInfo, VtvError};

/// Row width used by the published vector documents.
pub const DEFAULT_ROW_WIDTH: usize = 32;

/// Lazy iterator over the hex rows of a byte slice.
///
/// Cloning the iterator restarts rendering from the current position, so a
/// fresh clone taken before iteration replays every row.
#[derive(Debug, Clone)]
pub struct HexRows<'a> {
    chunks: Chunks<'a, u8>,
}

impl Iterator for HexRows<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.chunks.next().map(hex::encode)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl ExactSizeIterator for HexRows<'_> {}

impl FusedIterator for HexRows<'_> {}

/// Splits `bytes` into rows of `row_width` bytes rendered as lowercase hex.
pub fn render(bytes: &[u8], row_width: usize) -> Result<HexRows<'_>, VtvError> {
    if row_width == 0 {
        return Err(VtvError::zero_length("row width"));
    }
    Ok(HexRows {
        chunks: bytes.chunks(row_width),
    })
}

/// Encodes `bytes` as a single lowercase hex string.
pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Decodes a hex string; odd digit counts and non-hex characters are errors.
pub fn from_hex(text: &str) -> Result<Vec<u8>, VtvError> {
    hex::decode(text.trim()).map_err(|err| {
        VtvError::Encoding(
            ErrorInfo::new("hex-decode", err.to_string())
                .with_context("length", text.trim().len().to_string()),
        )
    })
}

/// Reassembles the bytes behind a sequence of rendered rows.
pub fn from_rows<I, S>(rows: I) -> Result<Vec<u8>, VtvError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut bytes = Vec::new();
    for (index, row) in rows.into_iter().enumerate() {
        let decoded = from_hex(row.as_ref()).map_err(|err| match err {
            VtvError::Encoding(info) => {
                VtvError::Encoding(info.with_context("row", index.to_string()))
            }
            other => other,
        })?;
        bytes.extend_from_slice(&decoded);
    }
    Ok(bytes)
}

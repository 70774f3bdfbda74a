//! Structured error types shared across the test-vector crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`VtvError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (lengths, identifiers, paths).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for PRG, random oracle and vector operations.
///
/// Every failure is detected synchronously, before any output is produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum VtvError {
    /// Seed shorter than the minimum accepted by the generator.
    #[error("invalid seed length: {0}")]
    InvalidSeedLength(ErrorInfo),
    /// Zero output length, zero bit length or zero row width.
    #[error("invalid output length: {0}")]
    InvalidOutputLength(ErrorInfo),
    /// Hash function identifier not present in the registry.
    #[error("unsupported hash function: {0}")]
    UnsupportedHashFunction(ErrorInfo),
    /// Malformed hexadecimal input.
    #[error("encoding error: {0}")]
    Encoding(ErrorInfo),
    /// Serialization and schema errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
    /// Filesystem errors.
    #[error("io error: {0}")]
    Io(ErrorInfo),
    /// Regenerated vectors disagree with a reference document.
    #[error("vector mismatch: {0}")]
    Mismatch(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl VtvError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            VtvError::InvalidSeedLength(info)
            | VtvError::InvalidOutputLength(info)
            | VtvError::UnsupportedHashFunction(info)
            | VtvError::Encoding(info)
            | VtvError::Serde(info)
            | VtvError::Io(info)
            | VtvError::Mismatch(info) => info,
        }
    }

    /// Builds the error raised when a seed is shorter than `minimum` bytes.
    pub fn seed_too_short(minimum: usize, actual: usize) -> Self {
        VtvError::InvalidSeedLength(
            ErrorInfo::new("seed-too-short", "seed is shorter than one digest")
                .with_context("minimum", minimum.to_string())
                .with_context("actual", actual.to_string()),
        )
    }

    /// Builds the error raised for an empty output request.
    pub fn zero_length(what: &str) -> Self {
        VtvError::InvalidOutputLength(
            ErrorInfo::new("zero-length", format!("{what} must be positive"))
                .with_context("parameter", what),
        )
    }
}

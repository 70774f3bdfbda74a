//! JSON persistence and canonical hashing for vector documents.

use std::fmt::Display;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use sha2::{Digest, Sha256};
use vtv_core::{ErrorInfo, VtvError};

use crate::record::VectorDocument;

pub(crate) fn serde_error(code: &str, err: impl Display) -> VtvError {
    VtvError::Serde(ErrorInfo::new(code, err.to_string()))
}

pub(crate) fn io_error(code: &str, err: std::io::Error, path: &Path) -> VtvError {
    VtvError::Io(
        ErrorInfo::new(code, err.to_string()).with_context("path", path.display().to_string()),
    )
}

/// Encodes `value` as compact JSON with object keys in sorted order.
pub fn to_canonical_json_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, VtvError> {
    let tree = serde_json::to_value(value).map_err(|err| serde_error("json-canonical", err))?;
    serde_json::to_vec(&tree).map_err(|err| serde_error("json-canonical", err))
}

/// Lowercase hex SHA-256 of the canonical JSON encoding of `value`.
pub fn stable_hash_string<T: Serialize>(value: &T) -> Result<String, VtvError> {
    let bytes = to_canonical_json_bytes(value)?;
    Ok(vtv_hex::to_hex(&Sha256::digest(bytes)))
}

/// Decodes a JSON payload.
pub fn from_json_slice<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, VtvError> {
    serde_json::from_slice(bytes).map_err(|err| serde_error("json-deserialize", err))
}

/// Serialises a document into indented JSON.
pub fn document_to_json(document: &VectorDocument) -> Result<String, VtvError> {
    serde_json::to_string_pretty(document).map_err(|err| serde_error("document-serialize", err))
}

/// Restores a document from JSON text.
pub fn document_from_json(json: &str) -> Result<VectorDocument, VtvError> {
    serde_json::from_str(json).map_err(|err| serde_error("document-deserialize", err))
}

/// Reads a document from disk.
pub fn read_document(path: &Path) -> Result<VectorDocument, VtvError> {
    let json = std::fs::read_to_string(path).map_err(|err| io_error("document-read", err, path))?;
    document_from_json(&json)
}

/// Writes a document to disk as indented JSON.
pub fn write_document(path: &Path, document: &VectorDocument) -> Result<(), VtvError> {
    let json = document_to_json(document)?;
    std::fs::write(path, json).map_err(|err| io_error("document-write", err, path))
}

/// Serde adapter storing byte vectors as lowercase hex strings.
pub(crate) mod hex_bytes {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&vtv_hex::to_hex(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let text = String::deserialize(deserializer)?;
        vtv_hex::from_hex(&text).map_err(serde::de::Error::custom)
    }
}

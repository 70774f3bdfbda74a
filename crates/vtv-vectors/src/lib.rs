#![deny(missing_docs)]
//! Deterministic test-vector generation and verification for the hash-based
//! PRG and the random oracle.

mod harness;
mod json;
mod plan;
mod record;
pub mod render;
mod scenario;
pub mod verify;

pub use harness::{generate, run_scenario, DOCUMENT_SCHEMA};
pub use json::{
    document_from_json, document_to_json, from_json_slice, read_document, stable_hash_string,
    to_canonical_json_bytes, write_document,
};
pub use plan::VectorPlan;
pub use record::{VectorDocument, VectorKind, VectorRecord};
pub use render::{render, Format};
pub use scenario::{counting_bytes, Scenario, DEFAULT_EXPANSION_BYTES, DEFAULT_INPUT_BYTES};
pub use verify::{verify, verify_against_plan, Mismatch, VerifyReport};

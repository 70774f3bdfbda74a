//! Records and documents produced by the harness.

use serde::{Deserialize, Serialize};
use vtv_core::{HashAlgorithm, VectorProvenance};

use crate::json::hex_bytes;
use crate::plan::VectorPlan;

/// Primitive a record was produced by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VectorKind {
    /// Seed expansion; `input` holds the seed.
    Prg,
    /// Oracle evaluation; `input` holds the oracle input.
    RandomOracle,
}

/// Inputs and outputs of one executed scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VectorRecord {
    /// Scenario label, e.g. `PRG(SHA-256)`.
    pub label: String,
    /// Primitive that produced the record.
    pub kind: VectorKind,
    /// Hash function the primitive was built on.
    pub hash: HashAlgorithm,
    /// Requested oracle bit length; absent for PRG records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_bits: Option<u32>,
    /// Seed or oracle input.
    #[serde(with = "hex_bytes")]
    pub input: Vec<u8>,
    /// PRG expansion or oracle output.
    #[serde(with = "hex_bytes")]
    pub output: Vec<u8>,
}

/// Every record generated from a plan, in plan order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VectorDocument {
    /// Schema version, generator and plan hash.
    pub provenance: VectorProvenance,
    /// Plan the records were generated from.
    pub plan: VectorPlan,
    /// One record per scenario.
    pub records: Vec<VectorRecord>,
}

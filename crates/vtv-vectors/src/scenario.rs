//! Fixed vector cases and the counting input pattern.

use serde::{Deserialize, Serialize};
use vtv_core::HashAlgorithm;

/// Expansion length used by the published PRG vectors (four 32-byte rows).
pub const DEFAULT_EXPANSION_BYTES: usize = 128;

/// Input length used by the published random-oracle vectors.
pub const DEFAULT_INPUT_BYTES: usize = 32;

fn default_expansion_bytes() -> usize {
    DEFAULT_EXPANSION_BYTES
}

fn default_input_bytes() -> usize {
    DEFAULT_INPUT_BYTES
}

/// A single fixed vector case.
///
/// Every input byte is derived from the counting pattern, so the scenario
/// parameters alone determine the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Scenario {
    /// Expand a counting seed of one digest length.
    Prg {
        /// Hash function of the generator.
        hash: HashAlgorithm,
        /// Number of bytes drawn from the generator.
        #[serde(default = "default_expansion_bytes")]
        expansion_bytes: usize,
    },
    /// Evaluate the oracle on a counting input.
    RandomOracle {
        /// Hash function of the oracle.
        hash: HashAlgorithm,
        /// Requested output length in bits.
        output_bits: u32,
        /// Length of the counting input.
        #[serde(default = "default_input_bytes")]
        input_bytes: usize,
    },
}

impl Scenario {
    /// PRG scenario with the default expansion length.
    pub fn prg(hash: HashAlgorithm) -> Self {
        Scenario::Prg {
            hash,
            expansion_bytes: DEFAULT_EXPANSION_BYTES,
        }
    }

    /// Oracle scenario with the default input length.
    pub fn random_oracle(hash: HashAlgorithm, output_bits: u32) -> Self {
        Scenario::RandomOracle {
            hash,
            output_bits,
            input_bytes: DEFAULT_INPUT_BYTES,
        }
    }

    /// Hash function exercised by the scenario.
    pub fn hash(&self) -> HashAlgorithm {
        match self {
            Scenario::Prg { hash, .. } | Scenario::RandomOracle { hash, .. } => *hash,
        }
    }

    /// Identifying label, e.g. `PRG(SHA-256)` or `RandomOracle(SHA-256,65)`.
    pub fn label(&self) -> String {
        match self {
            Scenario::Prg { hash, .. } => format!("PRG({hash})"),
            Scenario::RandomOracle {
                hash, output_bits, ..
            } => format!("RandomOracle({hash},{output_bits})"),
        }
    }
}

/// Returns `len` bytes where byte `i` equals `i mod 256`.
pub fn counting_bytes(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 256) as u8).collect()
}

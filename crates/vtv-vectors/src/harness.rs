//! Drives scenarios through the PRG and the random oracle.

use tracing::{debug, info};
use vtv_core::{Hashfunction, Prg, SchemaVersion, VectorProvenance, VtvError};
use vtv_crypto::{HashPrg, RandomOracle, ZeroPadding};

use crate::json::stable_hash_string;
use crate::plan::VectorPlan;
use crate::record::{VectorDocument, VectorKind, VectorRecord};
use crate::scenario::{counting_bytes, Scenario};

/// Schema written into every generated document.
pub const DOCUMENT_SCHEMA: SchemaVersion = SchemaVersion::new(1, 0, 0);

/// Executes one scenario on freshly constructed primitives.
pub fn run_scenario(scenario: &Scenario, padding: ZeroPadding) -> Result<VectorRecord, VtvError> {
    let label = scenario.label();
    let record = match *scenario {
        Scenario::Prg {
            hash,
            expansion_bytes,
        } => {
            let seed = counting_bytes(hash.digest_len());
            let mut prg = HashPrg::new(hash, &seed)?;
            let output = prg.get_bytes(expansion_bytes)?;
            VectorRecord {
                label,
                kind: VectorKind::Prg,
                hash,
                output_bits: None,
                input: seed,
                output,
            }
        }
        Scenario::RandomOracle {
            hash,
            output_bits,
            input_bytes,
        } => {
            let oracle = RandomOracle::with_padding(hash, output_bits, padding)?;
            let input = counting_bytes(input_bytes);
            let output = oracle.hash(&input);
            VectorRecord {
                label,
                kind: VectorKind::RandomOracle,
                hash,
                output_bits: Some(output_bits),
                input,
                output,
            }
        }
    };
    debug!(
        label = %record.label,
        input_bytes = record.input.len(),
        output_bytes = record.output.len(),
        "scenario complete"
    );
    Ok(record)
}

/// Generates the document for `plan`.
///
/// Fails before producing any record if the plan is invalid, and returns no
/// partial document if a scenario fails.
pub fn generate(plan: &VectorPlan) -> Result<VectorDocument, VtvError> {
    plan.validate()?;
    let records = plan
        .scenarios
        .iter()
        .map(|scenario| run_scenario(scenario, plan.padding))
        .collect::<Result<Vec<_>, _>>()?;
    let provenance = VectorProvenance {
        schema_version: DOCUMENT_SCHEMA,
        generator: format!("vtv-vectors {}", env!("CARGO_PKG_VERSION")),
        plan_hash: stable_hash_string(plan)?,
    };
    info!(plan = %plan.name, records = records.len(), "generated vector document");
    Ok(VectorDocument {
        provenance,
        plan: plan.clone(),
        records,
    })
}

//! YAML vector plans.

use std::path::Path;

use serde::{Deserialize, Serialize};
use vtv_core::{HashAlgorithm, VtvError};
use vtv_crypto::ZeroPadding;
use vtv_hex::DEFAULT_ROW_WIDTH;

use crate::json::{io_error, serde_error};
use crate::scenario::Scenario;

fn default_row_width() -> usize {
    DEFAULT_ROW_WIDTH
}

/// YAML-configurable set of scenarios rendered into one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VectorPlan {
    /// Name recorded in the generated document.
    pub name: String,
    /// Bytes per rendered hex row.
    #[serde(default = "default_row_width")]
    pub row_width: usize,
    /// Padding convention used by every oracle scenario in the plan.
    #[serde(default)]
    pub padding: ZeroPadding,
    /// Scenarios in output order.
    #[serde(default)]
    pub scenarios: Vec<Scenario>,
}

impl VectorPlan {
    /// The standard vector set under the trailing-lsb convention: PRG
    /// expansions for each SHA-2 variant, then
    /// oracle outputs just below and just above one digest length.
    pub fn standard() -> Self {
        let oracles = [
            (HashAlgorithm::Sha256, 65),
            (HashAlgorithm::Sha256, 256 + 5),
            (HashAlgorithm::Sha384, 93),
            (HashAlgorithm::Sha384, 384 + 27),
            (HashAlgorithm::Sha512, 111),
            (HashAlgorithm::Sha512, 512 + 67),
        ];
        let mut scenarios: Vec<Scenario> =
            HashAlgorithm::ALL.into_iter().map(Scenario::prg).collect();
        scenarios.extend(
            oracles
                .into_iter()
                .map(|(hash, bits)| Scenario::random_oracle(hash, bits)),
        );
        Self {
            name: "standard".into(),
            row_width: DEFAULT_ROW_WIDTH,
            padding: ZeroPadding::default(),
            scenarios,
        }
    }

    /// Parses a plan from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, VtvError> {
        let plan: VectorPlan =
            serde_yaml::from_str(yaml).map_err(|err| serde_error("plan-yaml", err))?;
        plan.validate()?;
        Ok(plan)
    }

    /// Reads and parses a YAML plan file.
    pub fn load(path: &Path) -> Result<Self, VtvError> {
        let yaml = std::fs::read_to_string(path).map_err(|err| io_error("plan-read", err, path))?;
        Self::from_yaml_str(&yaml)
    }

    /// Serializes the plan back to YAML.
    pub fn to_yaml_string(&self) -> Result<String, VtvError> {
        serde_yaml::to_string(self).map_err(|err| serde_error("plan-yaml", err))
    }

    /// Checks the parameters that would otherwise fail mid-generation.
    pub fn validate(&self) -> Result<(), VtvError> {
        if self.row_width == 0 {
            return Err(VtvError::zero_length("row width"));
        }
        for scenario in &self.scenarios {
            match scenario {
                Scenario::Prg {
                    expansion_bytes: 0, ..
                } => return Err(VtvError::zero_length("expansion bytes")),
                Scenario::RandomOracle { output_bits: 0, .. } => {
                    return Err(VtvError::zero_length("output bits"))
                }
                _ => {}
            }
        }
        Ok(())
    }
}

impl Default for VectorPlan {
    fn default() -> Self {
        Self::standard()
    }
}

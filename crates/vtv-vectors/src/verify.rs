//! Comparison of regenerated vectors against a reference document.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use vtv_core::{ErrorInfo, VtvError};

use crate::harness::generate;
use crate::record::{VectorDocument, VectorRecord};

/// One disagreement between the reference and the regenerated document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mismatch {
    /// Position of the record in the document.
    pub index: usize,
    /// Label of the reference record, or of the extra record.
    pub label: String,
    /// Field that differs: `record`, `label`, `kind`, `hash`, `output_bits`,
    /// `input`, `output`, or for document-level differences `schema_version`
    /// and `plan_hash`.
    pub field: String,
    /// Reference value, hex for byte fields.
    pub expected: String,
    /// Regenerated value.
    pub actual: String,
}

/// Outcome of a verification pass.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VerifyReport {
    /// Number of record positions compared.
    pub checked: usize,
    /// Every difference found, in record order.
    pub mismatches: Vec<Mismatch>,
}

impl VerifyReport {
    /// True when every compared record agreed.
    pub fn is_match(&self) -> bool {
        self.mismatches.is_empty()
    }

    /// Converts a failing report into a [`VtvError::Mismatch`].
    pub fn into_result(self) -> Result<Self, VtvError> {
        match self.mismatches.first() {
            None => Ok(self),
            Some(first) => Err(VtvError::Mismatch(
                ErrorInfo::new("vector-mismatch", "regenerated vectors differ from reference")
                    .with_context("mismatches", self.mismatches.len().to_string())
                    .with_context("first_label", first.label.clone())
                    .with_context("first_field", first.field.clone()),
            )),
        }
    }
}

fn describe(record: Option<&VectorRecord>) -> String {
    record.map_or_else(|| "<absent>".to_string(), |r| r.label.clone())
}

fn compare_records(index: usize, expected: &VectorRecord, actual: &VectorRecord) -> Vec<Mismatch> {
    let mut fields = Vec::new();
    if expected.label != actual.label {
        fields.push(("label", expected.label.clone(), actual.label.clone()));
    }
    if expected.kind != actual.kind {
        fields.push((
            "kind",
            format!("{:?}", expected.kind),
            format!("{:?}", actual.kind),
        ));
    }
    if expected.hash != actual.hash {
        fields.push(("hash", expected.hash.to_string(), actual.hash.to_string()));
    }
    if expected.output_bits != actual.output_bits {
        fields.push((
            "output_bits",
            format!("{:?}", expected.output_bits),
            format!("{:?}", actual.output_bits),
        ));
    }
    if expected.input != actual.input {
        fields.push((
            "input",
            vtv_hex::to_hex(&expected.input),
            vtv_hex::to_hex(&actual.input),
        ));
    }
    if expected.output != actual.output {
        fields.push((
            "output",
            vtv_hex::to_hex(&expected.output),
            vtv_hex::to_hex(&actual.output),
        ));
    }
    fields
        .into_iter()
        .map(|(field, expected_value, actual_value)| Mismatch {
            index,
            label: expected.label.clone(),
            field: field.to_string(),
            expected: expected_value,
            actual: actual_value,
        })
        .collect()
}

/// Document-level differences; reported at index 0 under the `provenance`
/// label. The generator string is informational and not compared.
fn compare_provenance(expected: &VectorDocument, actual: &VectorDocument) -> Vec<Mismatch> {
    let (lhs, rhs) = (&expected.provenance, &actual.provenance);
    let mut fields = Vec::new();
    if lhs.schema_version != rhs.schema_version {
        fields.push((
            "schema_version",
            format!("{:?}", lhs.schema_version),
            format!("{:?}", rhs.schema_version),
        ));
    }
    if lhs.plan_hash != rhs.plan_hash {
        fields.push(("plan_hash", lhs.plan_hash.clone(), rhs.plan_hash.clone()));
    }
    fields
        .into_iter()
        .map(|(field, expected_value, actual_value)| Mismatch {
            index: 0,
            label: "provenance".into(),
            field: field.to_string(),
            expected: expected_value,
            actual: actual_value,
        })
        .collect()
}

/// Compares two documents record by record and reports every difference,
/// including a stale plan hash or schema version.
pub fn verify(expected: &VectorDocument, actual: &VectorDocument) -> VerifyReport {
    let positions = expected.records.len().max(actual.records.len());
    let mut report = VerifyReport {
        checked: positions,
        mismatches: compare_provenance(expected, actual),
    };
    for index in 0..positions {
        match (expected.records.get(index), actual.records.get(index)) {
            (Some(lhs), Some(rhs)) => report.mismatches.extend(compare_records(index, lhs, rhs)),
            (lhs, rhs) => report.mismatches.push(Mismatch {
                index,
                label: describe(lhs.or(rhs)),
                field: "record".into(),
                expected: describe(lhs),
                actual: describe(rhs),
            }),
        }
    }
    for mismatch in &report.mismatches {
        warn!(
            index = mismatch.index,
            label = %mismatch.label,
            field = %mismatch.field,
            "vector mismatch"
        );
    }
    report
}

/// Regenerates the golden document's own plan and compares the result.
pub fn verify_against_plan(golden: &VectorDocument) -> Result<VerifyReport, VtvError> {
    let regenerated = generate(&golden.plan)?;
    let report = verify(golden, &regenerated);
    info!(
        plan = %golden.plan.name,
        checked = report.checked,
        mismatches = report.mismatches.len(),
        "verification finished"
    );
    Ok(report)
}

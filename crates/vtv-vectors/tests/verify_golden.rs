use vtv_core::VtvError;
use vtv_vectors::{
    generate, read_document, verify, verify_against_plan, write_document, Scenario, VectorKind,
    VectorPlan,
};

#[test]
fn regenerated_document_verifies() {
    let golden = generate(&VectorPlan::standard()).unwrap();
    let report = verify_against_plan(&golden).unwrap();
    assert!(report.is_match());
    assert_eq!(report.checked, 9);
    assert!(report.into_result().is_ok());
}

#[test]
fn flipped_output_bit_is_reported() {
    let mut golden = generate(&VectorPlan::standard()).unwrap();
    golden.records[4].output[0] ^= 0x01;
    let report = verify_against_plan(&golden).unwrap();
    assert_eq!(report.mismatches.len(), 1);
    let mismatch = &report.mismatches[0];
    assert_eq!(mismatch.index, 4);
    assert_eq!(mismatch.field, "output");
    assert_eq!(mismatch.label, "RandomOracle(SHA-256,261)");

    let err = report.into_result().unwrap_err();
    assert!(matches!(err, VtvError::Mismatch(_)));
    assert_eq!(err.info().context.get("mismatches").map(String::as_str), Some("1"));
}

#[test]
fn missing_records_are_reported() {
    let full = generate(&VectorPlan::standard()).unwrap();
    let mut short = full.clone();
    short.records.pop();
    let report = verify(&full, &short);
    assert_eq!(report.checked, 9);
    assert_eq!(report.mismatches.len(), 1);
    assert_eq!(report.mismatches[0].field, "record");
    assert_eq!(report.mismatches[0].actual, "<absent>");
}

#[test]
fn golden_file_round_trips_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("golden.json");
    let golden = generate(&VectorPlan::standard()).unwrap();
    write_document(&path, &golden).unwrap();
    let restored = read_document(&path).unwrap();
    assert_eq!(restored, golden);
    assert!(verify_against_plan(&restored).unwrap().is_match());
}

#[test]
fn corrupt_hex_in_golden_file_is_a_serde_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("golden.json");
    let golden = generate(&VectorPlan::standard()).unwrap();
    write_document(&path, &golden).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    let broken = text.replacen("\"output\": \"70f4", "\"output\": \"x0f4", 1);
    std::fs::write(&path, broken).unwrap();
    assert!(matches!(read_document(&path), Err(VtvError::Serde(_))));
}

#[test]
fn edited_plan_with_stale_hash_is_reported() {
    let mut golden = generate(&VectorPlan::standard()).unwrap();
    golden.plan.scenarios.truncate(3);
    golden.records.truncate(3);
    let report = verify_against_plan(&golden).unwrap();
    assert_eq!(report.checked, 3);
    assert_eq!(report.mismatches.len(), 1);
    assert_eq!(report.mismatches[0].label, "provenance");
    assert_eq!(report.mismatches[0].field, "plan_hash");
}

#[test]
fn schema_version_change_is_reported() {
    let golden = generate(&VectorPlan::standard()).unwrap();
    let mut other = golden.clone();
    other.provenance.schema_version.major += 1;
    let report = verify(&golden, &other);
    let fields: Vec<&str> = report.mismatches.iter().map(|m| m.field.as_str()).collect();
    assert_eq!(fields, vec!["schema_version"]);
}

#[test]
fn record_kind_is_compared() {
    let plan = VectorPlan {
        scenarios: vec![Scenario::prg(vtv_core::HashAlgorithm::Sha256)],
        ..VectorPlan::standard()
    };
    let golden = generate(&plan).unwrap();
    let mut relabeled = golden.clone();
    relabeled.records[0].kind = VectorKind::RandomOracle;
    let report = verify(&golden, &relabeled);
    assert_eq!(report.mismatches.len(), 1);
    assert_eq!(report.mismatches[0].field, "kind");
    assert_eq!(report.mismatches[0].index, 0);
}

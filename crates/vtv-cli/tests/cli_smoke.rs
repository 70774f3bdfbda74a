use std::fs;
use std::process::Command;

use serde_json::Value;

fn vtv() -> Command {
    Command::new(env!("CARGO_BIN_EXE_vtv"))
}

#[test]
fn generate_latex_prints_standard_blocks() {
    let output = vtv().args(["generate"]).output().expect("run vtv generate");
    assert!(output.status.success());
    let body = String::from_utf8(output.stdout).expect("utf8");
    assert_eq!(body.matches("\\begin{align*}").count(), 9);
    assert!(body.contains("&\\hex{ea1a8d6b6f65899b80}"));
}

#[test]
fn generated_json_verifies_and_tampering_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let golden = dir.path().join("golden.json");
    let status = vtv()
        .args(["generate", "--format", "json", "--out"])
        .arg(&golden)
        .status()
        .expect("run vtv generate");
    assert!(status.success());

    let output = vtv().arg("verify").arg("--golden").arg(&golden).output().expect("verify");
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("9 vectors verified successfully"));

    let mut document: Value = serde_json::from_str(&fs::read_to_string(&golden).unwrap()).unwrap();
    document["records"][3]["output"] = Value::String("ea1a8d6b6f65899b00".into());
    fs::write(&golden, serde_json::to_string_pretty(&document).unwrap()).unwrap();
    let output = vtv().arg("verify").arg("--golden").arg(&golden).output().expect("verify");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("RandomOracle(SHA-256,65) [output]"));
}

#[test]
fn prg_command_expands_seed() {
    let seed: String = (0u8..32).map(|b| format!("{b:02x}")).collect();
    let output = vtv()
        .args(["prg", "--hash", "sha256", "--len", "40", "--seed", &seed])
        .output()
        .expect("run vtv prg");
    assert!(output.status.success());
    let body = String::from_utf8(output.stdout).unwrap();
    let rows: Vec<&str> = body.lines().collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0], "70f4003d52b6eb03da852e93256b5986b5d4883098bb7973bc5318cc66637a84");
    assert_eq!(rows[1].len(), 16);
}

#[test]
fn prg_command_rejects_short_seed() {
    let output = vtv()
        .args(["prg", "--len", "8", "--seed", "0011"])
        .output()
        .expect("run vtv prg");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid seed length"));
}

#[test]
fn oracle_command_honours_padding() {
    let input: String = (0u8..32).map(|b| format!("{b:02x}")).collect();
    let run = |padding: &str| {
        let output = vtv()
            .args(["oracle", "--bits", "65", "--padding", padding, "--input", &input])
            .output()
            .expect("run vtv oracle");
        assert!(output.status.success());
        String::from_utf8(output.stdout).unwrap().trim().to_string()
    };
    assert_eq!(run("trailing-lsb"), "ea1a8d6b6f65899b80");
    assert_eq!(run("leading-msb"), "001a8d6b6f65899ba5");
}

#[test]
fn unknown_hash_is_rejected_by_argument_parsing() {
    let output = vtv()
        .args(["oracle", "--hash", "MD5", "--bits", "8"])
        .output()
        .expect("run vtv oracle");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unsupported hash function"));
}

#[test]
fn version_long_lists_registry() {
    let output = vtv().args(["version", "--long"]).output().expect("run vtv version");
    assert!(output.status.success());
    let info: Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(info["hash_functions"][0], "SHA-256");
    assert_eq!(info["document_schema"], "1.0.0");
}

#[test]
fn default_log_filter_keeps_library_events_on_stderr() {
    let output = vtv()
        .env_remove("RUST_LOG")
        .args(["generate", "--format", "text"])
        .output()
        .expect("run vtv generate");
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("generated vector document"));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("generated vector document"));
}

use serde_json::Value;
use std::fs;
use std::process::Command;

#[test]
fn encode_decode_cli() {
    let exe = env!("CARGO_BIN_EXE_deperiod");

    let encode = Command::new(exe)
        .args(["encode", "11111111111111111111", "--p", "14"])
        .output()
        .expect("failed to run encode");
    assert!(encode.status.success());
    let word = String::from_utf8(encode.stdout).unwrap();
    assert_eq!(word.trim(), "110000000000001100000");

    let decode = Command::new(exe)
        .args(["decode", word.trim(), "--p", "14"])
        .output()
        .expect("failed to run decode");
    assert!(decode.status.success());
    assert_eq!(
        String::from_utf8(decode.stdout).unwrap().trim(),
        "11111111111111111111"
    );
}

#[test]
fn encode_json_from_file() {
    let exe = env!("CARGO_BIN_EXE_deperiod");
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.txt");
    fs::write(&input, "0000 0000 0000 0000 0000\n").unwrap();

    let output = Command::new(exe)
        .args(["encode", "--input", input.to_str().unwrap(), "--json"])
        .output()
        .expect("failed to run encode");
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["n"].as_u64().unwrap(), 20);
    assert_eq!(json["l"].as_u64().unwrap(), 20);
    assert_eq!(json["output"].as_str().unwrap(), "010000000000001100000");
    assert_eq!(json["corrections"].as_array().unwrap().len(), 2);
    assert_eq!(json["corrections"][0]["index"].as_u64().unwrap(), 0);
}

#[test]
fn short_window_is_rejected() {
    let exe = env!("CARGO_BIN_EXE_deperiod");
    let output = Command::new(exe)
        .args(["encode", "0101", "--p", "2", "--l", "3"])
        .output()
        .expect("failed to run encode");
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("window length 3 is below"));
}

#[test]
fn invalid_bits_are_rejected() {
    let exe = env!("CARGO_BIN_EXE_deperiod");
    let output = Command::new(exe)
        .args(["encode", "01x1"])
        .output()
        .expect("failed to run encode");
    assert!(!output.status.success());
}

#[test]
fn verify_cli_writes_histogram() {
    let exe = env!("CARGO_BIN_EXE_deperiod-verify");
    let dir = tempfile::tempdir().unwrap();
    let csv = dir.path().join("hist.csv");

    let output = Command::new(exe)
        .args([
            "--n",
            "10",
            "--p",
            "3",
            "--quiet",
            "--json",
            "--csv",
            csv.to_str().unwrap(),
        ])
        .output()
        .expect("failed to run verifier");
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["config"]["l"].as_u64().unwrap(), 8);
    assert_eq!(json["report"]["inputs"].as_u64().unwrap(), 1024);

    let text = fs::read_to_string(&csv).unwrap();
    assert!(text.starts_with("corrections,inputs\n0,"));
}

#[test]
fn verify_cli_samples() {
    let exe = env!("CARGO_BIN_EXE_deperiod-verify");
    let output = Command::new(exe)
        .args(["--samples", "200", "--seed", "7", "--quiet"])
        .output()
        .expect("failed to run verifier");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Verified 200 inputs"));
}

//! The binary's stdout, stderr and exit codes.
//!
//! `HOME` points at a fresh temporary directory so the user's own
//! `~/.txfield/config.toml` never leaks in.

#![allow(clippy::expect_used)]

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use crate::common::{load_fixture, temp_data_dir};

fn txfield(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_txfield"))
        .args(args)
        .env("HOME", home)
        .env_remove("RUST_LOG")
        .output()
        .expect("run txfield")
}

fn txfield_with_env(home: &Path, args: &[&str], rust_log: &str) -> Output {
    Command::new(env!("CARGO_BIN_EXE_txfield"))
        .args(args)
        .env("HOME", home)
        .env("RUST_LOG", rust_log)
        .output()
        .expect("run txfield")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("utf-8 stdout")
}

#[test]
fn test_address_success() {
    let home = temp_data_dir();
    let output = txfield(
        home.path(),
        &["address", "0x52908400098527886E0F7030069857D2E4169EE7"],
    );
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "0x52908400098527886e0f7030069857d2e4169ee7\n"
    );
    assert!(output.stderr.is_empty());
}

#[test]
fn test_address_wrong_length_exits_1() {
    let home = temp_data_dir();
    let output = txfield(home.path(), &["address", "0xdeadbeef"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid address"));
}

#[test]
fn test_quantity_json_override() {
    let home = temp_data_dir();
    let output = txfield(home.path(), &["quantity", "256", "--format", "json"]);
    assert_eq!(output.status.code(), Some(0));

    let doc: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("json");
    assert_eq!(doc["hex"], "0x100");
    assert_eq!(doc["bytes"], "0x0100");
    assert_eq!(doc["length"], 2);
}

#[test]
fn test_negative_quantity_exits_1() {
    let home = temp_data_dir();
    let output = txfield(home.path(), &["quantity", "-1"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_encode_from_stdin() {
    let home = temp_data_dir();
    let fixture = load_fixture("legacy/eip155_transfer.json").expect("fixture");

    let mut child = Command::new(env!("CARGO_BIN_EXE_txfield"))
        .args(["encode", "-"])
        .env("HOME", home.path())
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn txfield");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(fixture["tx"].to_string().as_bytes())
        .expect("write stdin");
    let output = child.wait_with_output().expect("wait");

    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    let mut lines = out.lines();
    assert_eq!(lines.next(), fixture["rlp"].as_str());
    assert!(lines.next().expect("hash line").starts_with("0x"));
}

#[test]
fn test_decode_hex_lines() {
    let home = temp_data_dir();
    let fixture = load_fixture("legacy/eip155_transfer.json").expect("fixture");
    let rlp = fixture["rlp"].as_str().expect("rlp");

    let output = txfield(home.path(), &["decode", rlp]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).starts_with("nonce    0x9\n"));
}

#[test]
fn test_decode_garbage_exits_1() {
    let home = temp_data_dir();
    let output = txfield(home.path(), &["decode", "0xc0"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_config_init_and_format_from_file() {
    let home = temp_data_dir();

    let output = txfield(home.path(), &["config", "init"]);
    assert_eq!(output.status.code(), Some(0));
    let config_path = home.path().join(".txfield").join("config.toml");
    assert!(config_path.exists());

    let output = txfield(home.path(), &["config", "init"]);
    assert_eq!(output.status.code(), Some(2));

    let toml = std::fs::read_to_string(&config_path)
        .expect("read")
        .replace("format = \"hex\"", "format = \"json\"");
    std::fs::write(&config_path, toml).expect("write");

    let output = txfield(home.path(), &["quantity", "1"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).trim_start().starts_with('{'));
}

#[test]
fn test_missing_explicit_config_exits_2() {
    let home = temp_data_dir();
    let output = txfield(
        home.path(),
        &["-c", "/nonexistent/txfield.toml", "address", "0x"],
    );
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_encode_file_with_log_file() {
    let home = temp_data_dir();
    let log = home.path().join("logs").join("txfield.log");
    let input_dir = temp_data_dir();
    let tx_file = input_dir.path().join("tx.json");
    let fixture = load_fixture("legacy/contract_creation.json").expect("fixture");
    std::fs::write(&tx_file, fixture["input"].to_string()).expect("write");

    let output = txfield(
        home.path(),
        &[
            "-v",
            "--log-file",
            log.to_str().expect("utf-8 path"),
            "encode",
            "--unsigned",
            tx_file.to_str().expect("utf-8 path"),
        ],
    );
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output).lines().next(),
        fixture["rlp"].as_str()
    );

    let logged = std::fs::read_to_string(&log).expect("log file written");
    assert!(logged.contains("encoded legacy transaction"));
}

#[test]
fn test_rust_log_enables_logging_without_verbose_flag() {
    let home = temp_data_dir();
    let input_dir = temp_data_dir();
    let tx_file = input_dir.path().join("tx.json");
    let fixture = load_fixture("legacy/contract_creation.json").expect("fixture");
    std::fs::write(&tx_file, fixture["input"].to_string()).expect("write");
    let tx_path = tx_file.to_str().expect("utf-8 path");

    let output = txfield_with_env(home.path(), &["encode", "--unsigned", tx_path], "info");
    assert_eq!(output.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("encoded legacy transaction"), "{stderr}");

    let output = txfield_with_env(home.path(), &["encode", "--unsigned", tx_path], "error");
    assert_eq!(output.status.code(), Some(0));
    assert!(output.stderr.is_empty());
}

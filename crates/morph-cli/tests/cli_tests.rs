//! Integration tests for the morph CLI
//!
//! These tests exercise the actual compiled binary using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const CONFIG: &str = r#"
[openai]
api_key = "empty"
base_url = "http://localhost:8000/v1"

[openai.chat.completions]
model = "llama"
max_tokens = 4096

[[rows]]
id = "1"
v = "x"

[[rows]]
id = "2"
v = "y"
"#;

fn morph() -> Command {
    let mut cmd = Command::cargo_bin("morph").expect("Failed to find morph binary");
    cmd.env_remove("MORPH_CONFIG").env_remove("RUST_LOG");
    cmd
}

fn write_config(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, CONFIG).unwrap();
    path
}

#[test]
fn test_help() {
    morph()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("get"))
        .stdout(predicate::str::contains("bind"));
}

#[test]
fn test_get_predicate() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir);

    morph()
        .args(["get", "-f"])
        .arg(&config)
        .arg("rows[id=2].v")
        .assert()
        .success()
        .stdout("\"y\"\n");
}

#[test]
fn test_get_from_env_config() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir);

    morph()
        .env("MORPH_CONFIG", &config)
        .args(["get", "openai.chat.completions.max_tokens"])
        .assert()
        .success()
        .stdout("4096\n");
}

#[test]
fn test_get_yaml_output() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir);

    morph()
        .args(["get", "-f"])
        .arg(&config)
        .args(["openai.chat.completions", "--output", "yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("model: llama"));
}

#[test]
fn test_get_missing_key_fails() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir);

    morph()
        .args(["get", "-f"])
        .arg(&config)
        .arg("openai.organization")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Key 'organization' not found at $.openai"));
}

#[test]
fn test_get_index_out_of_range_fails() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir);

    morph()
        .args(["get", "-f"])
        .arg(&config)
        .arg("rows[5]")
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn test_tokens() {
    morph()
        .args(["tokens", "hosts[name=db.local].port"])
        .assert()
        .success()
        .stdout("hosts\n[name=db.local]\nport\n");
}

#[test]
fn test_tokens_empty_path_fails() {
    morph()
        .args(["tokens", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid path"));
}

#[test]
fn test_bind_start_from() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir);

    let output = morph()
        .args(["bind", "-f"])
        .arg(&config)
        .args(["-s", "OpenAI", "-p", "api_key", "-p", "timeout=600"])
        .args(["--start-from", "openai"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let bound: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(bound, serde_json::json!({"api_key": "empty"}));
}

#[test]
fn test_bind_all_params() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir);

    let output = morph()
        .args(["bind", "-f"])
        .arg(&config)
        .args(["-p", "model", "-p", "temperature=1.0", "-p", "user"])
        .args(["--start-from", "openai.chat.completions", "--all-params"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let bound: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        bound,
        serde_json::json!({"model": "llama", "temperature": 1.0, "user": null})
    );
}

#[test]
fn test_bind_deny_extra_fails() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir);

    morph()
        .args(["bind", "-f"])
        .arg(&config)
        .args(["-p", "model", "--start-from", "openai.chat.completions", "--deny-extra"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("max_tokens"));
}

#[test]
fn test_unsupported_format_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.ini");
    fs::write(&path, "a=1").unwrap();

    morph()
        .args(["get", "-f"])
        .arg(&path)
        .arg("a")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported config format: ini"));
}

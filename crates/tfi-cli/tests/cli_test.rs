//! CLI integration tests using assert_cmd
//!
//! These tests verify the output modes work correctly end-to-end.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};
use std::fs;
use tempfile::TempDir;

const STATE: &str = r#"{
    "version": 3,
    "modules": [{
        "path": ["root"],
        "outputs": { "env": "staging" },
        "resources": {
            "aws_instance.web.0": {
                "type": "aws_instance",
                "primary": {
                    "id": "i-123",
                    "attributes": {
                        "id": "i-123",
                        "public_ip": "1.2.3.4",
                        "tags.#": "1",
                        "tags.role": "app"
                    }
                }
            }
        }
    }]
}"#;

const OTHER_STATE: &str = r#"{
    "version": 3,
    "modules": [{
        "path": ["root"],
        "outputs": { "env": "production" },
        "resources": {
            "aws_instance.db": {
                "type": "aws_instance",
                "primary": { "id": "i-456", "attributes": { "id": "i-456", "private_ip": "10.0.0.5" } }
            }
        }
    }]
}"#;

/// Get a command instance for the terraform-inventory binary
fn tfi_cmd() -> Command {
    let mut cmd = Command::cargo_bin("terraform-inventory").expect("Failed to find binary");
    cmd.env_remove("TF_STATE")
        .env_remove("TI_TFSTATE")
        .env_remove("TF_KEY_NAME")
        .env_remove("RUST_LOG");
    cmd
}

fn fixture() -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(temp_dir.path().join("terraform.tfstate"), STATE).expect("Failed to write state");
    temp_dir
}

fn stdout_json(cmd: &mut Command) -> Value {
    let output = cmd.output().expect("Failed to run command");
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}

#[test]
fn test_help_command() {
    tfi_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Ansible dynamic inventory from Terraform state files",
        ));
}

#[test]
fn test_version_command() {
    tfi_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("terraform-inventory"));
}

#[test]
fn test_list_with_path() {
    let dir = fixture();
    let json = stdout_json(
        tfi_cmd()
            .arg("--list")
            .arg(dir.path().join("terraform.tfstate")),
    );

    assert_eq!(json["web"], json!({ "hosts": ["i-123"] }));
    assert_eq!(json["role_app"], json!({ "hosts": ["i-123"] }));
    assert_eq!(json["all"], json!({ "env": "staging" }));
    assert_eq!(json["_meta"]["hostvars"]["i-123"]["public_ip"], "1.2.3.4");
}

#[test]
fn test_list_from_env() {
    let dir = fixture();
    let json = stdout_json(
        tfi_cmd()
            .env("TF_STATE", dir.path().join("terraform.tfstate"))
            .arg("--list"),
    );
    assert_eq!(json["type_aws_instance"], json!({ "hosts": ["i-123"] }));
}

#[test]
fn test_list_from_legacy_env() {
    let dir = fixture();
    let json = stdout_json(
        tfi_cmd()
            .env("TI_TFSTATE", dir.path().join("terraform.tfstate"))
            .arg("--list"),
    );
    assert_eq!(json["web"], json!({ "hosts": ["i-123"] }));
}

#[test]
fn test_list_discovers_state_files() {
    let dir = fixture();
    fs::write(dir.path().join("z.tfstate"), OTHER_STATE).expect("Failed to write state");

    let json = stdout_json(tfi_cmd().current_dir(dir.path()).arg("--list"));
    assert_eq!(json["all"], json!({ "env": "production" }));
    assert_eq!(json["db"], json!({ "hosts": ["i-456"] }));
    assert_eq!(json["web"], json!({ "hosts": ["i-123"] }));
}

#[test]
fn test_list_pretty() {
    let dir = fixture();
    tfi_cmd()
        .current_dir(dir.path())
        .args(["--list", "--pretty"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\n  \"_meta\": {"));
}

#[test]
fn test_inventory_mode() {
    let dir = fixture();
    tfi_cmd()
        .current_dir(dir.path())
        .arg("--inventory")
        .assert()
        .success()
        .stdout(predicate::str::contains("[web]\ni-123\n"))
        .stdout(predicate::str::contains("[all]\nstaging\n"))
        .stdout(predicate::str::contains("_meta").not());
}

#[test]
fn test_host_mode() {
    let dir = fixture();
    let json = stdout_json(tfi_cmd().current_dir(dir.path()).args(["--host", "i-123"]));
    assert_eq!(json["id"], "i-123");
    assert_eq!(json["tags.role"], "app");
}

#[test]
fn test_host_not_found() {
    let dir = fixture();
    tfi_cmd()
        .current_dir(dir.path())
        .args(["--host", "i-999"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("No such host: i-999"));
}

#[test]
fn test_mode_required() {
    let dir = fixture();
    tfi_cmd()
        .current_dir(dir.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Either --host or --list must be specified",
        ));
}

#[test]
fn test_no_state_files() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    tfi_cmd()
        .current_dir(dir.path())
        .arg("--list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No state files found"));
}

#[test]
fn test_invalid_state_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("broken.tfstate");
    fs::write(&path, "{ not json").expect("Failed to write state");

    tfi_cmd()
        .arg("--list")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error reading tfstate file"));
}

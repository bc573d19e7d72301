#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn phonebook_cmd(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("phonebook").unwrap();
    cmd.env("PHONEBOOK_DATA_DIR", data_dir.path().as_os_str());
    cmd
}

fn provider_file(data_dir: &TempDir, file_name: &str) -> String {
    fs::read_to_string(data_dir.path().join("data").join(file_name)).unwrap_or_default()
}

#[test]
fn test_menu_session_add_and_transfer() {
    let temp = TempDir::new().unwrap();

    phonebook_cmd(&temp)
        .write_stdin("1\n1\nAmy\n111\n1\nBo\n222\n6\n4\n1\n2\n111\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Contact and Service Provider Management System ==="))
        .stdout(predicate::str::contains("Contact added successfully!"))
        .stdout(predicate::str::contains("Contact transferred successfully."))
        .stdout(predicate::str::ends_with("Exiting... Have a great day!\n"));

    assert_eq!(provider_file(&temp, "airtel_contacts.txt"), "Bo 222\n");
    assert_eq!(provider_file(&temp, "jio_contacts.txt"), "Amy 111\n");
}

#[test]
fn test_menu_ends_on_closed_input() {
    let temp = TempDir::new().unwrap();

    phonebook_cmd(&temp)
        .write_stdin("3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Manage Contacts (VI) ==="));
}

#[test]
fn test_list_prints_table() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("data")).unwrap();
    fs::write(temp.path().join("data").join("vi_contacts.txt"), "Amy 111\nBo 2x2\n").unwrap();

    phonebook_cmd(&temp)
        .args(["list", "vi"])
        .assert()
        .success()
        .stdout(predicate::str::contains("VI contacts"))
        .stdout(predicate::str::contains("Amy"))
        .stdout(predicate::str::contains("Total: 2 contacts"));
}

#[test]
fn test_list_rejects_unknown_provider() {
    let temp = TempDir::new().unwrap();

    phonebook_cmd(&temp)
        .args(["list", "bsnl"])
        .assert()
        .failure();
}

#[test]
fn test_audit_records_menu_changes() {
    let temp = TempDir::new().unwrap();

    phonebook_cmd(&temp)
        .write_stdin("2\n1 Amy 111\n5 111\n6\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact deleted successfully."));

    phonebook_cmd(&temp)
        .args(["audit", "--limit", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE jio:111"))
        .stdout(predicate::str::contains("DELETE jio:111"));
}

#[test]
fn test_config_shows_paths() {
    let temp = TempDir::new().unwrap();

    phonebook_cmd(&temp)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("airtel_contacts.txt"))
        .stdout(predicate::str::contains("Audit logging:"));
}

#[test]
fn test_data_dir_flag_overrides_env() {
    let env_dir = TempDir::new().unwrap();
    let flag_dir = TempDir::new().unwrap();

    phonebook_cmd(&env_dir)
        .arg("--data-dir")
        .arg(flag_dir.path())
        .write_stdin("1\n1 Amy 111\n6\n5\n")
        .assert()
        .success();

    assert_eq!(provider_file(&flag_dir, "airtel_contacts.txt"), "Amy 111\n");
    assert_eq!(provider_file(&env_dir, "airtel_contacts.txt"), "");
}

#[test]
fn test_first_run_writes_default_settings() {
    let temp = TempDir::new().unwrap();
    let settings_path = temp.path().join("config.json");
    assert!(!settings_path.exists());

    phonebook_cmd(&temp).arg("config").assert().success();

    let contents = fs::read_to_string(&settings_path).unwrap();
    assert!(contents.contains("\"audit_enabled\": true"));
    assert!(contents.contains("\"max_name_len\": 49"));
}

#[test]
fn test_existing_settings_are_kept() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("config.json"), r#"{"audit_enabled": false}"#).unwrap();

    phonebook_cmd(&temp)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Audit logging:           false"));

    assert_eq!(
        fs::read_to_string(temp.path().join("config.json")).unwrap(),
        r#"{"audit_enabled": false}"#
    );
}

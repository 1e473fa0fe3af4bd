//! Integration tests for CLI commands.

use std::io::Write;
use std::process::{Command, Stdio};
use tempfile::NamedTempFile;

fn run_cli(args: &[&str]) -> (bool, String, String) {
    run_cli_with_stdin(args, None)
}

fn run_cli_with_stdin(args: &[&str], stdin: Option<&str>) -> (bool, String, String) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_adpath"))
        .args(args)
        .env_remove("ADPATH_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute CLI");

    {
        let mut handle = child.stdin.take().unwrap();
        if let Some(text) = stdin {
            handle.write_all(text.as_bytes()).unwrap();
        }
    }

    let output = child.wait_with_output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    (output.status.success(), stdout, stderr)
}

fn json_lines(stdout: &str) -> Vec<serde_json::Value> {
    stdout
        .lines()
        .filter(|l| !l.is_empty())
        .map(|l| serde_json::from_str(l).expect("Invalid JSON"))
        .collect()
}

#[test]
fn test_parent_table_output() {
    let (success, stdout, _) = run_cli(&[
        "parent",
        "CN=Jane Doe,OU=Corp-Staff,OU=Users,DC=example,DC=com",
    ]);
    assert!(success);
    assert!(stdout.contains("CANONICAL_PATH"));
    assert!(stdout.contains("example.com/Users/Corp-Staff"));
    assert!(stdout.contains("Organizational Unit"));
}

#[test]
fn test_parent_json_output() {
    let (success, stdout, _) = run_cli(&["parent", "--json", "CN=Bob,CN=Users,DC=corp,DC=local"]);
    assert!(success);
    let records = json_lines(&stdout);
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record["ok"], true);
    assert_eq!(record["parent"]["container_type"], "generic_container");
    assert_eq!(record["parent"]["canonical_path"], "corp.local/Users");
    assert_eq!(record["ldap_uri"], "LDAP://CN=Users,DC=corp,DC=local");
    assert_eq!(record["drive_path"], r"AD:\CN=Users,DC=corp,DC=local");
}

#[test]
fn test_parent_batch_continues_after_failure() {
    let (success, stdout, stderr) = run_cli(&[
        "parent",
        "CN=Solo",
        "CN=Alice,DC=corp,DC=local",
    ]);
    assert!(success, "non-strict batch should succeed");
    assert!(stdout.contains("corp.local"));
    assert!(stderr.contains("Error resolving CN=Solo"));
}

#[test]
fn test_parent_strict_fails_on_malformed() {
    let (success, stdout, stderr) = run_cli(&[
        "parent",
        "--json",
        "--strict",
        "CN=Bob,Users,DC=corp",
        "CN=Bob,CN=Users,DC=corp",
    ]);
    assert!(!success);
    let records = json_lines(&stdout);
    assert_eq!(records.len(), 2, "every item is still reported");
    assert_eq!(records[0]["ok"], false);
    assert!(records[0]["error"].as_str().unwrap().contains("delimiter"));
    assert_eq!(records[1]["ok"], true);
    assert!(stderr.contains("1 of 2"));
}

#[test]
fn test_parent_reads_input_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "# exported users").unwrap();
    writeln!(file, "CN=Jane Doe,OU=Corp-Staff,OU=Users,DC=example,DC=com").unwrap();
    writeln!(file).unwrap();
    writeln!(file, "CN=Bob,CN=Users,DC=corp,DC=local").unwrap();
    let path = file.path().to_string_lossy().to_string();

    let (success, stdout, _) = run_cli(&["parent", "--json", "--input", &path]);
    assert!(success);
    let records = json_lines(&stdout);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["parent"]["leaf_container_name"], "Corp-Staff");
    assert_eq!(records[1]["parent"]["leaf_container_name"], "Users");
}

#[test]
fn test_parent_reads_stdin() {
    let (success, stdout, _) = run_cli_with_stdin(
        &["parent", "--json"],
        Some("CN=Alice,DC=corp,DC=local\n"),
    );
    assert!(success);
    let records = json_lines(&stdout);
    assert_eq!(records[0]["parent"]["canonical_path"], "corp.local");
}

#[test]
fn test_parent_without_input_fails() {
    let (success, _, stderr) = run_cli_with_stdin(&["parent"], Some(""));
    assert!(!success);
    assert!(stderr.contains("no distinguished names"));
}

#[test]
fn test_parent_missing_input_file() {
    let (success, _, stderr) = run_cli(&["parent", "--input", "/nonexistent/names.txt"]);
    assert!(!success);
    assert!(stderr.contains("Error"));
}

#[test]
fn test_canonical_name_command() {
    let (success, stdout, _) = run_cli(&[
        "canonical-name",
        "CN=Jane Doe,OU=Corp-Staff,OU=Users,DC=example,DC=com",
    ]);
    assert!(success);
    assert_eq!(stdout.trim(), "example.com/Users/Corp-Staff/Jane Doe");
}

#[test]
fn test_canonical_name_rejects_malformed() {
    let (success, _, stderr) = run_cli(&["canonical-name", "CN=a,,DC=b"]);
    assert!(!success);
    assert!(stderr.contains("Invalid distinguished name"));
}

#[test]
fn test_domain_dn_command() {
    let (success, stdout, _) = run_cli(&["domain-dn", "corp.example.com"]);
    assert!(success);
    assert_eq!(stdout.trim(), "DC=corp,DC=example,DC=com");

    let (success, _, stderr) = run_cli(&["domain-dn", "bad..domain"]);
    assert!(!success);
    assert!(stderr.contains("Invalid domain"));
}

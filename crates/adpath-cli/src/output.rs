//! Output formatting utilities.

use adpath_canonical::{MalformedNameError, ParentContainerDescriptor};
use serde::Serialize;

/// One line of `parent --json` output.
#[derive(Debug, Serialize)]
pub struct ParentRecord<'a> {
    input: &'a str,
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    parent: Option<&'a ParentContainerDescriptor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ldap_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    drive_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<'a> ParentRecord<'a> {
    pub fn resolved(input: &'a str, parent: &'a ParentContainerDescriptor) -> Self {
        Self {
            input,
            ok: true,
            parent: Some(parent),
            ldap_uri: Some(parent.ldap_uri()),
            drive_path: Some(parent.drive_path()),
            error: None,
        }
    }

    pub fn failed(input: &'a str, error: &MalformedNameError) -> Self {
        Self {
            input,
            ok: false,
            parent: None,
            ldap_uri: None,
            drive_path: None,
            error: Some(error.to_string()),
        }
    }
}

/// Formats a resolved parent as a simple table row.
pub fn format_table_row(parent: &ParentContainerDescriptor) -> String {
    format!(
        "{:<40} {:<20} {:<24} {}",
        truncate(&parent.canonical_path, 40),
        parent.container_type.to_string(),
        truncate(&parent.leaf_container_name, 24),
        parent.distinguished_name
    )
}

/// Prints table header.
#[allow(clippy::print_literal)]
pub fn print_table_header() {
    println!(
        "{:<40} {:<20} {:<24} {}",
        "CANONICAL_PATH", "TYPE", "CONTAINER", "DISTINGUISHED_NAME"
    );
    println!("{}", "-".repeat(110));
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

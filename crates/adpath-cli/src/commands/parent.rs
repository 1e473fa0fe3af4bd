//! Parent command implementation.

use crate::input;
use crate::output::{self, ParentRecord};
use adpath_canonical::parse_parent;
use tracing::{info, warn};

pub fn run(
    dns: Vec<String>,
    input: Option<String>,
    json: bool,
    strict: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let names = input::collect(dns, input.as_deref())?;
    if names.is_empty() {
        return Err("no distinguished names supplied".into());
    }

    if !json {
        output::print_table_header();
    }

    // A malformed name is reported and the batch moves on.
    let mut failed = 0usize;
    for name in &names {
        match parse_parent(name) {
            Ok(parent) => {
                if json {
                    println!("{}", serde_json::to_string(&ParentRecord::resolved(name, &parent))?);
                } else {
                    println!("{}", output::format_table_row(&parent));
                }
            }
            Err(e) => {
                failed += 1;
                warn!(dn = %name, error = %e, "could not resolve parent container");
                if json {
                    println!("{}", serde_json::to_string(&ParentRecord::failed(name, &e))?);
                } else {
                    eprintln!("Error resolving {}: {}", name, e);
                }
            }
        }
    }

    info!(total = names.len(), failed, "parent resolution finished");

    if strict && failed > 0 {
        return Err(format!("{} of {} names could not be resolved", failed, names.len()).into());
    }

    Ok(())
}

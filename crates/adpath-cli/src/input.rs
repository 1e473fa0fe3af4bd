//! Collecting distinguished names from arguments, a file, or stdin.

use std::io::{self, Read};
use thiserror::Error;

/// Errors while gathering input names.
#[derive(Debug, Error)]
pub enum InputError {
    /// The input file could not be read.
    #[error("failed to read {path}: {source}")]
    File {
        /// Path given on the command line.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// Stdin could not be read.
    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),
}

/// Returns the names to process, in input order.
///
/// Positional names win; otherwise `file` is read, otherwise stdin.
pub fn collect(args: Vec<String>, file: Option<&str>) -> Result<Vec<String>, InputError> {
    if !args.is_empty() {
        return Ok(args);
    }

    let text = match file {
        Some(path) => std::fs::read_to_string(path).map_err(|source| InputError::File {
            path: path.to_string(),
            source,
        })?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(InputError::Stdin)?;
            buffer
        }
    };
    Ok(parse_lines(&text))
}

/// One name per line; blank lines and `#` comments are skipped.
pub fn parse_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.is_empty() && !trimmed.starts_with('#')
        })
        .map(str::to_string)
        .collect()
}

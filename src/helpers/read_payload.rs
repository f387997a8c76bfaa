use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};

/// Reads one JSON payload from `path`, or from stdin when no path is given.
pub fn read_payload(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Couldn't read payload from {}", path.display())),
        None => {
            let mut payload = String::new();
            io::stdin()
                .read_to_string(&mut payload)
                .context("Couldn't read payload from stdin")?;
            Ok(payload)
        }
    }
}

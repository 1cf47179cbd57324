//! CLI interface for namespace scanning

use std::path::{Path, PathBuf};

use serde::Serialize;

use nbtpalette::prelude::*;

/// JSON report emitted by `scan --json`.
#[derive(Serialize)]
struct ScanReport {
    namespace: String,
    files_loaded: usize,
    failures: Vec<ScanFailure>,
    names: Vec<String>,
}

#[derive(Serialize)]
struct ScanFailure {
    path: PathBuf,
    message: String,
}

pub fn execute(source: &Path, namespace: &str, json: bool) -> anyhow::Result<()> {
    // Reject a blank namespace before touching the file system.
    anyhow::ensure!(!namespace.trim().is_empty(), "namespace must not be empty");

    let outcome = load_structures(source)?;
    let names = scan_namespace(outcome.structures.values(), namespace)?;

    if json {
        let report = ScanReport {
            namespace: namespace.trim().to_owned(),
            files_loaded: outcome.loaded_count(),
            failures: outcome
                .failures
                .iter()
                .map(|f| ScanFailure {
                    path: f.path.clone(),
                    message: f.message.clone(),
                })
                .collect(),
            names,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for name in &names {
        println!("{name}");
    }
    println!(
        "Found {} unique '{}' blocks across {} files",
        names.len(),
        namespace.trim(),
        outcome.loaded_count()
    );
    if !outcome.failures.is_empty() {
        println!("{} files failed to parse (see log)", outcome.failures.len());
    }

    Ok(())
}

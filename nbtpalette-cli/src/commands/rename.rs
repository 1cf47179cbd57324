//! CLI interface for the batch rename transaction

use std::path::Path;

use anyhow::Context;
use indexmap::IndexMap;

use nbtpalette::prelude::*;

pub fn execute(
    source: &Path,
    output: Option<&Path>,
    map_file: Option<&Path>,
    inline_sets: &[String],
) -> anyhow::Result<()> {
    let pairs = collect_pairs(map_file, inline_sets)?;
    let edits = EditSet::from_pairs(pairs);
    if edits.is_empty() {
        tracing::warn!("Edit set is empty; output files will be unchanged copies");
    }

    let mut outcome = load_structures(source)?;
    if outcome.structures.is_empty() {
        anyhow::bail!(
            "all {} structure files in {:?} failed to parse",
            outcome.failures.len(),
            source
        );
    }

    // Warn about mapping keys that no loaded palette contains; a miss is a
    // no-op per file, but it usually means a typo in the mapping.
    for (original, _) in edits.iter() {
        let present = outcome
            .structures
            .values()
            .any(|doc| doc.palette_names().any(|name| name == original));
        if !present {
            tracing::warn!("'{}' does not appear in any loaded palette", original);
        }
    }

    let output = output.map_or_else(|| default_output_dir(source), Path::to_path_buf);
    let result = apply_renames(&mut outcome.structures, &edits, &output)?;

    println!(
        "✓ Wrote {} files to {} ({} palette entries renamed)",
        result.files_written,
        output.display(),
        result.entries_renamed
    );
    if !outcome.failures.is_empty() {
        println!(
            "{} input files failed to parse and produced no output",
            outcome.failures.len()
        );
    }

    Ok(())
}

/// Merge the `--map` file (first) and repeated `--set` pairs (second, so
/// they override the file on duplicate originals).
fn collect_pairs(
    map_file: Option<&Path>,
    inline_sets: &[String],
) -> anyhow::Result<Vec<(String, String)>> {
    let mut pairs = Vec::new();

    if let Some(path) = map_file {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read mapping file {}", path.display()))?;
        let mapping: IndexMap<String, String> = serde_json::from_str(&content)
            .with_context(|| format!("invalid mapping file {}", path.display()))?;
        pairs.extend(mapping);
    }

    for pair in inline_sets {
        let (original, replacement) = pair
            .split_once('=')
            .with_context(|| format!("invalid --set '{pair}', expected ORIGINAL=REPLACEMENT"))?;
        pairs.push((original.to_owned(), replacement.to_owned()));
    }

    Ok(pairs)
}

//! The batch rename transaction
//!
//! Applies an edit set to every loaded structure file in memory, then
//! serializes each document to the output directory. The first write
//! failure aborts the whole transaction; outputs already written stay on
//! disk, and re-running with the same inputs reproduces them.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::edit::EditSet;
use crate::error::{Error, Result};
use crate::structure::StructureFile;

/// Summary of a completed rename transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenameOutcome {
    /// Number of output files written (equals the number of loaded files).
    pub files_written: usize,
    /// Total palette entries rewritten across all files.
    pub entries_renamed: usize,
}

/// The default output directory for a source directory: a sibling named
/// `<source>_modified`.
pub fn default_output_dir<P: AsRef<Path>>(source_dir: P) -> PathBuf {
    let source_dir = source_dir.as_ref();
    let mut name = source_dir
        .file_name()
        .map_or_else(|| OsString::from("output"), ToOwned::to_owned);
    name.push("_modified");
    source_dir.with_file_name(name)
}

/// Apply `edits` to every loaded document and write the results into
/// `output_dir`, one output file per input, same base filename.
///
/// Entry mutation is in-memory only; the single durable write per document
/// is the final serialize, so a document is either written with all its
/// mutations applied or not written at all. Documents the edit set does not
/// touch are written as unchanged copies.
///
/// # Errors
/// Returns [`Error::StructureWrite`] on the first file that fails to
/// serialize — no further files are written and there is no rollback.
pub fn apply_renames(
    structures: &mut BTreeMap<PathBuf, StructureFile>,
    edits: &EditSet,
    output_dir: &Path,
) -> Result<RenameOutcome> {
    std::fs::create_dir_all(output_dir)?;

    let mut files_written = 0;
    let mut entries_renamed = 0;
    for (path, doc) in structures.iter_mut() {
        entries_renamed += doc.apply_edits(edits);

        let file_name = path
            .file_name()
            .ok_or_else(|| Error::InvalidPath(path.display().to_string()))?;
        doc.save_to(&output_dir.join(file_name))?;
        files_written += 1;
    }

    tracing::info!(
        "Wrote {} files to {:?} ({} palette entries renamed)",
        files_written,
        output_dir,
        entries_renamed
    );
    Ok(RenameOutcome {
        files_written,
        entries_renamed,
    })
}

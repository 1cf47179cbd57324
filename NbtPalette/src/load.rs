//! Batch structure file loading
//!
//! Enumerates `.nbt` files in a source directory and parses each one.
//! A corrupt file is recorded and skipped; it never aborts the batch.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::structure::StructureFile;

/// A file that matched the structure extension but failed to parse.
#[derive(Debug, Clone)]
pub struct LoadFailure {
    /// The file that failed.
    pub path: PathBuf,
    /// The parse error message.
    pub message: String,
}

/// Result of loading a source directory.
#[derive(Debug, Clone, Default)]
pub struct LoadOutcome {
    /// Successfully parsed files, keyed by source path.
    pub structures: BTreeMap<PathBuf, StructureFile>,
    /// Files that matched the extension but could not be parsed.
    pub failures: Vec<LoadFailure>,
}

impl LoadOutcome {
    /// Number of successfully loaded files.
    pub fn loaded_count(&self) -> usize {
        self.structures.len()
    }
}

/// Find all `.nbt` files directly inside `dir` (case-insensitive extension).
///
/// # Returns
/// A sorted list of matching file paths.
pub fn find_structure_files<P: AsRef<Path>>(dir: P) -> Vec<PathBuf> {
    let mut files: Vec<_> = WalkDir::new(dir)
        .follow_links(true)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|e| {
            e.path().is_file()
                && e.path()
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("nbt"))
        })
        .map(|e| e.path().to_path_buf())
        .collect();

    files.sort();
    files
}

/// Load every structure file in `source_dir`.
///
/// Parse failures are logged, collected into [`LoadOutcome::failures`], and
/// excluded from further processing.
///
/// # Errors
/// Returns [`Error::NoStructureFiles`] if `source_dir` contains no `.nbt`
/// files at all.
pub fn load_structures<P: AsRef<Path>>(source_dir: P) -> Result<LoadOutcome> {
    let source_dir = source_dir.as_ref();
    let files = find_structure_files(source_dir);
    if files.is_empty() {
        return Err(Error::NoStructureFiles {
            dir: source_dir.to_path_buf(),
        });
    }

    let mut outcome = LoadOutcome::default();
    for path in files {
        match StructureFile::load(&path) {
            Ok(doc) => {
                outcome.structures.insert(path, doc);
            }
            Err(e) => {
                tracing::warn!("Skipping {:?}: {}", path, e);
                outcome.failures.push(LoadFailure {
                    path,
                    message: e.to_string(),
                });
            }
        }
    }

    tracing::info!(
        "Loaded {} structure files from {:?} ({} failed)",
        outcome.loaded_count(),
        source_dir,
        outcome.failures.len()
    );
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quartz_nbt::io::{write_nbt, Flavor};
    use quartz_nbt::{NbtCompound, NbtList, NbtTag};
    use std::fs;
    use tempfile::TempDir;

    fn write_structure(path: &Path, names: &[&str]) {
        let mut root = NbtCompound::new();
        let entries: Vec<NbtTag> = names
            .iter()
            .map(|name| {
                let mut entry = NbtCompound::new();
                entry.insert("Name", *name);
                NbtTag::Compound(entry)
            })
            .collect();
        root.insert("palette", NbtTag::List(NbtList::from(entries)));

        let mut file = fs::File::create(path).unwrap();
        write_nbt(&mut file, Some(""), &root, Flavor::GzCompressed).unwrap();
    }

    #[test]
    fn loads_matching_files_and_collects_failures() {
        let temp = TempDir::new().unwrap();
        write_structure(&temp.path().join("a.nbt"), &["modid:stone"]);
        fs::write(temp.path().join("corrupt.nbt"), b"not nbt at all").unwrap();
        fs::write(temp.path().join("notes.txt"), b"ignored").unwrap();

        let outcome = load_structures(temp.path()).unwrap();

        assert_eq!(outcome.loaded_count(), 1);
        assert!(outcome.structures.contains_key(&temp.path().join("a.nbt")));
        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(outcome.failures[0].path, temp.path().join("corrupt.nbt"));
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        let temp = TempDir::new().unwrap();
        write_structure(&temp.path().join("UPPER.NBT"), &["modid:stone"]);

        let outcome = load_structures(temp.path()).unwrap();
        assert_eq!(outcome.loaded_count(), 1);
    }

    #[test]
    fn empty_directory_is_an_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("readme.md"), b"no structures here").unwrap();

        let err = load_structures(temp.path()).unwrap_err();
        assert!(matches!(err, Error::NoStructureFiles { .. }));
    }

    #[test]
    fn subdirectories_are_not_descended() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("nested");
        fs::create_dir(&nested).unwrap();
        write_structure(&nested.join("deep.nbt"), &["modid:stone"]);
        write_structure(&temp.path().join("top.nbt"), &["modid:stone"]);

        let outcome = load_structures(temp.path()).unwrap();
        assert_eq!(outcome.loaded_count(), 1);
        assert!(outcome.structures.contains_key(&temp.path().join("top.nbt")));
    }
}

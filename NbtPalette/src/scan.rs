//! Namespace scanning
//!
//! Collects the distinct block names under a mod namespace across a set of
//! loaded structure files.

use std::collections::BTreeSet;

use crate::error::{Error, Result};
use crate::structure::StructureFile;

/// Collect every palette `Name` under `namespace` across `docs`.
///
/// Matching is an exact, case-sensitive prefix match on `"<namespace>:"`.
/// Documents without a palette contribute nothing. The result is
/// deduplicated and sorted lexicographically.
///
/// # Errors
/// Returns [`Error::EmptyNamespace`] if `namespace` is empty or blank.
pub fn scan_namespace<'a, I>(docs: I, namespace: &str) -> Result<Vec<String>>
where
    I: IntoIterator<Item = &'a StructureFile>,
{
    let namespace = namespace.trim();
    if namespace.is_empty() {
        return Err(Error::EmptyNamespace);
    }

    let prefix = format!("{namespace}:");
    let mut names = BTreeSet::new();
    for doc in docs {
        for name in doc.palette_names() {
            if name.starts_with(&prefix) {
                names.insert(name.to_owned());
            }
        }
    }

    tracing::info!("Found {} unique '{}' blocks", names.len(), namespace);
    Ok(names.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use quartz_nbt::{NbtCompound, NbtList, NbtTag};

    fn doc(path: &str, names: &[&str]) -> StructureFile {
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
        StructureFile::from_parts(path, "", root)
    }

    #[test]
    fn dedupes_and_sorts_across_documents() {
        let docs = [
            doc("a.nbt", &["modid:stone", "modid:dirt", "other:grass"]),
            doc("b.nbt", &["modid:stone"]),
        ];

        let names = scan_namespace(&docs, "modid").unwrap();
        assert_eq!(names, vec!["modid:dirt", "modid:stone"]);
    }

    #[test]
    fn prefix_match_is_exact() {
        let docs = [doc("a.nbt", &["modid:stone", "modid2:stone", "mod:stone"])];

        let names = scan_namespace(&docs, "modid").unwrap();
        assert_eq!(names, vec!["modid:stone"]);
    }

    #[test]
    fn blank_namespace_is_rejected() {
        let docs = [doc("a.nbt", &["modid:stone"])];
        assert!(matches!(
            scan_namespace(&docs, "   "),
            Err(Error::EmptyNamespace)
        ));
        assert!(matches!(
            scan_namespace(&docs, ""),
            Err(Error::EmptyNamespace)
        ));
    }

    #[test]
    fn documents_without_palette_are_skipped() {
        let docs = [
            StructureFile::from_parts("empty.nbt", "", NbtCompound::new()),
            doc("a.nbt", &["modid:stone"]),
        ];

        let names = scan_namespace(&docs, "modid").unwrap();
        assert_eq!(names, vec!["modid:stone"]);
    }
}

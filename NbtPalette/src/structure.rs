//! Structure file document wrapper
//!
//! Wraps one parsed NBT structure file. The codec itself is `quartz_nbt`;
//! this module only selects the compression flavor, exposes the block
//! palette, and rewrites `Name` fields in place.

use std::fs::File;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use quartz_nbt::io::{read_nbt, write_nbt, Flavor};
use quartz_nbt::{NbtCompound, NbtTag};

use crate::edit::EditSet;
use crate::error::{Error, Result};

/// Compression scheme a structure file was stored with.
///
/// Vanilla structure files are gzip. The codec does the actual
/// (de)compression; this enum only picks the flavor and is preserved
/// across a load/save round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Compression {
    Gzip,
    Zlib,
    Uncompressed,
}

impl Compression {
    /// Sniff the compression from the leading bytes of a file.
    ///
    /// An uncompressed NBT file starts with the `TAG_Compound` id (0x0a);
    /// anything unrecognized is treated as uncompressed and left for the
    /// codec to reject.
    fn sniff(bytes: &[u8]) -> Self {
        match bytes {
            [0x1f, 0x8b, ..] => Self::Gzip,
            [0x78, ..] => Self::Zlib,
            _ => Self::Uncompressed,
        }
    }

    fn flavor(self) -> Flavor {
        match self {
            Self::Gzip => Flavor::GzCompressed,
            Self::Zlib => Flavor::ZlibCompressed,
            Self::Uncompressed => Flavor::Uncompressed,
        }
    }
}

/// One parsed structure file.
///
/// Created by [`StructureFile::load`] (or [`StructureFile::from_parts`] for
/// programmatically built documents), mutated in memory by
/// [`StructureFile::apply_edits`], and written back out with
/// [`StructureFile::save_to`].
#[derive(Debug, Clone, PartialEq)]
pub struct StructureFile {
    source: PathBuf,
    root_name: String,
    root: NbtCompound,
    compression: Compression,
}

impl StructureFile {
    /// Read and decode a structure file.
    ///
    /// # Errors
    /// Returns [`Error::StructureParse`] if the file cannot be read or is
    /// not valid NBT.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| Error::StructureParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let compression = Compression::sniff(&bytes);
        let mut cursor = Cursor::new(bytes);
        let (root, root_name) =
            read_nbt(&mut cursor, compression.flavor()).map_err(|e| Error::StructureParse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        tracing::debug!("Parsed {:?} ({:?})", path, compression);

        Ok(Self {
            source: path.to_path_buf(),
            root_name,
            root,
            compression,
        })
    }

    /// Build a document from an already-parsed root compound.
    ///
    /// The document is written gzip-compressed, matching vanilla
    /// structure files.
    pub fn from_parts<P: AsRef<Path>>(source: P, root_name: impl Into<String>, root: NbtCompound) -> Self {
        Self {
            source: source.as_ref().to_path_buf(),
            root_name: root_name.into(),
            root,
            compression: Compression::Gzip,
        }
    }

    /// Serialize the document to `dest`, reusing the compression the file
    /// was loaded with.
    ///
    /// # Errors
    /// Returns [`Error::StructureWrite`] with the destination path on any
    /// create or encode failure.
    pub fn save_to(&self, dest: &Path) -> Result<()> {
        let mut file = File::create(dest).map_err(|e| Error::StructureWrite {
            path: dest.to_path_buf(),
            message: e.to_string(),
        })?;

        write_nbt(&mut file, Some(&self.root_name), &self.root, self.compression.flavor())
            .map_err(|e| Error::StructureWrite {
                path: dest.to_path_buf(),
                message: e.to_string(),
            })
    }

    /// The path the document was loaded from.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// The parsed root compound.
    pub fn root(&self) -> &NbtCompound {
        &self.root
    }

    /// The `Name` of every palette entry, in palette order.
    ///
    /// A missing `palette` list, non-compound entries, and entries without
    /// a string `Name` are skipped. Many structure files legitimately have
    /// no palette at all.
    pub fn palette_names(&self) -> impl Iterator<Item = &str> {
        self.palette()
            .into_iter()
            .flatten()
            .filter_map(|tag| match tag {
                NbtTag::Compound(entry) => match entry.inner().get("Name") {
                    Some(NbtTag::String(name)) => Some(name.as_str()),
                    _ => None,
                },
                _ => None,
            })
    }

    /// Rewrite every palette `Name` that is a key in `edits`, in memory.
    ///
    /// Entries whose name is not in the edit set are left untouched;
    /// documents without a palette are a no-op. Returns the number of
    /// entries rewritten.
    pub fn apply_edits(&mut self, edits: &EditSet) -> usize {
        let Some(NbtTag::List(palette)) = self.root.inner_mut().get_mut("palette") else {
            return 0;
        };

        let mut renamed = 0;
        for tag in palette.inner_mut() {
            let NbtTag::Compound(entry) = tag else { continue };
            let Some(NbtTag::String(name)) = entry.inner_mut().get_mut("Name") else {
                continue;
            };
            if let Some(replacement) = edits.replacement(name) {
                tracing::debug!("{:?}: {} -> {}", self.source, name, replacement);
                *name = replacement.to_owned();
                renamed += 1;
            }
        }
        renamed
    }

    fn palette(&self) -> Option<&[NbtTag]> {
        match self.root.inner().get("palette") {
            Some(NbtTag::List(list)) => Some(list.as_ref()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quartz_nbt::NbtList;

    fn palette_doc(names: &[&str]) -> StructureFile {
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
        StructureFile::from_parts("test.nbt", "", root)
    }

    #[test]
    fn palette_names_in_order() {
        let doc = palette_doc(&["modid:stone", "other:grass", "modid:dirt"]);
        let names: Vec<_> = doc.palette_names().collect();
        assert_eq!(names, vec!["modid:stone", "other:grass", "modid:dirt"]);
    }

    #[test]
    fn missing_palette_yields_no_names() {
        let doc = StructureFile::from_parts("empty.nbt", "", NbtCompound::new());
        assert_eq!(doc.palette_names().count(), 0);
    }

    #[test]
    fn entries_without_name_are_skipped() {
        let mut root = NbtCompound::new();
        let mut named = NbtCompound::new();
        named.insert("Name", "modid:stone");
        let entries = vec![
            NbtTag::Compound(NbtCompound::new()),
            NbtTag::Int(7),
            NbtTag::Compound(named),
        ];
        root.insert("palette", NbtTag::List(NbtList::from(entries)));

        let doc = StructureFile::from_parts("partial.nbt", "", root);
        let names: Vec<_> = doc.palette_names().collect();
        assert_eq!(names, vec!["modid:stone"]);
    }

    #[test]
    fn apply_edits_rewrites_matching_entries() {
        let mut doc = palette_doc(&["modid:stone", "modid:dirt", "modid:stone"]);
        let edits = EditSet::from_pairs([("modid:stone", "modid:cobblestone")]);

        let renamed = doc.apply_edits(&edits);

        assert_eq!(renamed, 2);
        let names: Vec<_> = doc.palette_names().collect();
        assert_eq!(
            names,
            vec!["modid:cobblestone", "modid:dirt", "modid:cobblestone"]
        );
    }

    #[test]
    fn apply_edits_without_palette_is_noop() {
        let mut doc = StructureFile::from_parts("empty.nbt", "", NbtCompound::new());
        let edits = EditSet::from_pairs([("modid:stone", "modid:cobblestone")]);
        assert_eq!(doc.apply_edits(&edits), 0);
    }

    #[test]
    fn sniff_recognizes_gzip_magic() {
        assert_eq!(Compression::sniff(&[0x1f, 0x8b, 0x08]), Compression::Gzip);
        assert_eq!(Compression::sniff(&[0x0a, 0x00]), Compression::Uncompressed);
        assert_eq!(Compression::sniff(&[0x78, 0x9c]), Compression::Zlib);
        assert_eq!(Compression::sniff(&[]), Compression::Uncompressed);
    }
}

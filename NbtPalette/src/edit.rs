//! Edit set construction
//!
//! The finalized mapping of original block names to replacement names,
//! with no-op pairs filtered out before the mapping is built.

use indexmap::IndexMap;

/// A mapping from original block name to replacement name.
///
/// Never contains a pair whose replacement equals its original; such pairs
/// are dropped during construction. An empty edit set is valid — the rename
/// transaction then writes unchanged copies.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EditSet {
    renames: IndexMap<String, String>,
}

impl EditSet {
    /// Build an edit set from `(original, proposed)` pairs.
    ///
    /// Proposed replacements are trimmed of surrounding whitespace. A pair
    /// whose trimmed replacement equals its original is a no-op and is
    /// dropped. Duplicate originals should not occur (one row per distinct
    /// discovered name); if a caller supplies them anyway, the last write
    /// wins.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let mut renames = IndexMap::new();
        for (original, proposed) in pairs {
            let original = original.into();
            let proposed = proposed.as_ref().trim();
            if proposed == original {
                continue;
            }
            renames.insert(original, proposed.to_owned());
        }
        Self { renames }
    }

    /// Look up the replacement for `name`, if one was requested.
    pub fn replacement(&self, name: &str) -> Option<&str> {
        self.renames.get(name).map(String::as_str)
    }

    /// The `(original, replacement)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.renames
            .iter()
            .map(|(original, replacement)| (original.as_str(), replacement.as_str()))
    }

    /// Number of requested renames.
    pub fn len(&self) -> usize {
        self.renames.len()
    }

    /// Whether no renames were requested.
    pub fn is_empty(&self) -> bool {
        self.renames.is_empty()
    }
}

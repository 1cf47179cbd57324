//! # NbtPalette
//!
//! A library for batch-editing block identifiers inside Minecraft structure
//! files (`.nbt`).
//!
//! The pipeline is load → scan → edit → apply:
//!
//! 1. [`load::load_structures`] parses every `.nbt` file in a folder,
//!    skipping corrupt files without aborting the batch.
//! 2. [`scan::scan_namespace`] collects the distinct block names under a mod
//!    namespace across all loaded palettes.
//! 3. [`edit::EditSet::from_pairs`] turns user-chosen `(original, new)`
//!    pairs into a rename mapping, dropping no-ops.
//! 4. [`rename::apply_renames`] rewrites every matching palette `Name` and
//!    serializes each document into the output folder, failing fast on the
//!    first write error.
//!
//! ## Quick Start
//!
//! ```no_run
//! use nbtpalette::prelude::*;
//!
//! let mut outcome = load_structures("structures/")?;
//! let names = scan_namespace(outcome.structures.values(), "modid")?;
//! println!("{} unique blocks", names.len());
//!
//! let edits = EditSet::from_pairs([("modid:stone", "modid:cobblestone")]);
//! let result = apply_renames(&mut outcome.structures, &edits, "structures_modified".as_ref())?;
//! println!("{} files written", result.files_written);
//! # Ok::<(), nbtpalette::Error>(())
//! ```
//!
//! The NBT codec itself is `quartz_nbt`; this crate never decodes tag
//! bytes on its own.

pub mod edit;
pub mod error;
pub mod load;
pub mod rename;
pub mod scan;
pub mod structure;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::edit::EditSet;
    pub use crate::error::{Error, Result};
    pub use crate::load::{load_structures, LoadFailure, LoadOutcome};
    pub use crate::rename::{apply_renames, default_output_dir, RenameOutcome};
    pub use crate::scan::scan_namespace;
    pub use crate::structure::StructureFile;
}

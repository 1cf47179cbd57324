//! Error types for `nbtpalette`

use std::path::PathBuf;

use thiserror::Error;

/// The error type for `nbtpalette` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ==================== Configuration Errors ====================
    /// The namespace to scan for is empty or blank.
    #[error("namespace must not be empty")]
    EmptyNamespace,

    /// Invalid file path.
    #[error("invalid path: {0}")]
    InvalidPath(String),

    // ==================== Load Stage Errors ====================
    /// The source directory contains no structure files.
    #[error("no .nbt structure files found in {dir:?}")]
    NoStructureFiles {
        /// The directory that was searched.
        dir: PathBuf,
    },

    /// A structure file could not be read or decoded.
    ///
    /// Recovered per file during the load stage; a single corrupt file
    /// never aborts the batch.
    #[error("failed to parse structure file {path:?}: {message}")]
    StructureParse {
        /// The file that failed to parse.
        path: PathBuf,
        /// The decode error message.
        message: String,
    },

    // ==================== Rename Transaction Errors ====================
    /// Writing an output structure file failed.
    ///
    /// Fatal to the whole transaction: no further files are written and
    /// already-written outputs are left on disk.
    #[error("failed to write structure file {path:?}: {message}")]
    StructureWrite {
        /// The destination that could not be written.
        path: PathBuf,
        /// The write error message.
        message: String,
    },
}

/// A specialized Result type for `nbtpalette` operations.
pub type Result<T> = std::result::Result<T, Error>;

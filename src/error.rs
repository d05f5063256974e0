//! Error types for safecp.
//!
//! This module provides the [`Error`] enum containing all possible errors
//! that can occur during a copy, and the [`Result`] type alias.
//!
//! Every fatal condition has its own variant so callers (and tests) can
//! tell the failure site apart without parsing messages. Descriptor close
//! failures after a completed transfer are deliberately *not* represented
//! here: they are non-fatal and are reported through
//! [`CopyOptions::warn_handler`](crate::CopyOptions) instead.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for safecp operations.
///
/// This is a type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during a copy operation.
///
/// All errors include the relevant path and, where one exists, the
/// underlying OS-level cause.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Destination already exists (pre-check hit, or the exclusive create
    /// lost the race to another process)
    #[error("Destination already exists: {0}")]
    AlreadyExists(PathBuf),

    /// Destination metadata query failed for a reason other than not-found
    #[error("Failed to stat destination {path}: {source}")]
    DestinationStat {
        /// Destination path
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// Source metadata query failed (including non-existence)
    #[error("Failed to stat source {path}: {source}")]
    SourceStat {
        /// Source path
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// Source is a directory
    #[error("Source is a directory: {0}")]
    IsADirectory(PathBuf),

    /// Failed to open the source for reading
    #[error("Failed to open source {path}: {source}")]
    OpenSource {
        /// Source path
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// Failed to create the destination for writing
    #[error("Failed to create destination {path}: {source}")]
    CreateDestination {
        /// Destination path
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// Failed to acquire the anonymous transfer buffer
    #[error("Failed to allocate transfer buffer: {0}")]
    AllocateBuffer(#[source] io::Error),

    /// A read from the source failed mid-transfer
    #[error("Failed to read from {path}: {source}")]
    Read {
        /// Source path
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// A write to the destination failed mid-transfer
    #[error("Failed to write to {path}: {source}")]
    Write {
        /// Destination path
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// A write transferred fewer bytes than requested without reporting
    /// an error of its own
    #[error("Short write to {path}: wrote {written} of {requested} bytes")]
    ShortWrite {
        /// Destination path
        path: PathBuf,
        /// Bytes handed to the write call
        requested: usize,
        /// Bytes the write call actually accepted
        written: usize,
    },

    /// Failed to release the transfer buffer after the transfer
    #[error("Failed to release transfer buffer: {0}")]
    ReleaseBuffer(#[source] io::Error),
}

//! The single-file copy operation.
//!
//! This module implements the whole pipeline: precondition checks, open
//! phase, transfer loop over the fixed buffer, and teardown.
//!
//! The destination must not exist. The existence pre-check alone would be
//! racy (another process could create the path between the check and the
//! create), so the destination is created with `create_new`, which fails
//! atomically if the path appeared in that window.

use crate::buffer::TransferBuffer;
use crate::error::{Error, Result};
use crate::options::CopyOptions;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::Path;

/// Outcome of a successful copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CopyStats {
    /// Bytes actually transferred to the destination.
    pub bytes_copied: u64,
    /// Source length captured before the transfer started.
    ///
    /// `bytes_copied` can fall short of this if the source shrank while
    /// the copy was running; that is a successful, truncated-at-EOF copy,
    /// not an error.
    pub source_len: u64,
}

/// Copy a single file, refusing to overwrite an existing destination.
///
/// Validates both paths, creates the destination fresh with the source's
/// permission bits (filtered through the process umask), then streams the
/// source through a fixed 2 MiB anonymous buffer until end-of-file.
///
/// # Arguments
///
/// * `src` - Source file path
/// * `dst` - Destination file path; must not exist in any form
/// * `options` - Copy options
///
/// # Errors
///
/// Returns an error if:
/// - Destination exists, as a file, directory, or symlink ([`Error::AlreadyExists`])
/// - Source cannot be statted ([`Error::SourceStat`]) or is a directory ([`Error::IsADirectory`])
/// - Either file cannot be opened ([`Error::OpenSource`], [`Error::CreateDestination`])
/// - The transfer buffer cannot be mapped or unmapped ([`Error::AllocateBuffer`], [`Error::ReleaseBuffer`])
/// - A read or write fails mid-transfer ([`Error::Read`], [`Error::Write`], [`Error::ShortWrite`])
///
/// A failed transfer leaves the destination in a partially-written state;
/// no cleanup is attempted. Descriptor close failures after a complete
/// transfer are reported through the warning callback and do not fail the
/// operation.
pub fn copy_file(src: &Path, dst: &Path, options: &CopyOptions) -> Result<CopyStats> {
    // Destination pre-check. symlink_metadata so that a dangling symlink
    // still counts as an existing path.
    match fs::symlink_metadata(dst) {
        Ok(_) => return Err(Error::AlreadyExists(dst.to_path_buf())),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(source) => {
            return Err(Error::DestinationStat {
                path: dst.to_path_buf(),
                source,
            });
        }
    }

    // Source pre-check - single stat call captures length and mode bits
    // for the rest of the run.
    let src_meta = fs::metadata(src).map_err(|source| Error::SourceStat {
        path: src.to_path_buf(),
        source,
    })?;
    if src_meta.is_dir() {
        return Err(Error::IsADirectory(src.to_path_buf()));
    }
    let source_len = src_meta.len();

    let mut src_file = File::open(src).map_err(|source| Error::OpenSource {
        path: src.to_path_buf(),
        source,
    })?;

    // create_new closes the pre-check window: if another process created
    // the path since the stat above, this fails instead of clobbering.
    let mut open_options = OpenOptions::new();
    open_options.write(true).create_new(true);
    #[cfg(unix)]
    if options.preserve_permissions {
        use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};
        open_options.mode(src_meta.permissions().mode() & 0o7777);
    }
    let mut dst_file = match open_options.open(dst) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            return Err(Error::AlreadyExists(dst.to_path_buf()));
        }
        Err(source) => {
            return Err(Error::CreateDestination {
                path: dst.to_path_buf(),
                source,
            });
        }
    };

    #[cfg(not(unix))]
    if options.preserve_permissions {
        // No creation-mode support off Unix; best effort after the fact.
        let _ = fs::set_permissions(dst, src_meta.permissions());
    }

    options.notice(&format!("'{}' --> '{}'", src.display(), dst.display()));

    let mut buf = TransferBuffer::acquire().map_err(Error::AllocateBuffer)?;

    // Every read requests a full buffer regardless of how few bytes
    // remain; the stream returning short (or zero at EOF) is what stops
    // the loop. A zero read before `remaining` runs out means the source
    // shrank under us - still a successful copy of what was left.
    let mut remaining = source_len;
    let mut bytes_copied: u64 = 0;
    while remaining > 0 {
        let nr = src_file
            .read(buf.as_mut_slice())
            .map_err(|source| Error::Read {
                path: src.to_path_buf(),
                source,
            })?;
        if nr == 0 {
            break;
        }
        let nw = dst_file
            .write(&buf.as_mut_slice()[..nr])
            .map_err(|source| Error::Write {
                path: dst.to_path_buf(),
                source,
            })?;
        if nw != nr {
            return Err(Error::ShortWrite {
                path: dst.to_path_buf(),
                requested: nr,
                written: nw,
            });
        }
        bytes_copied += nr as u64;
        remaining = remaining.saturating_sub(nr as u64);
    }

    // The copy is logically complete; close failures are warnings only.
    if let Err(e) = close_file(src_file) {
        options.warn(&format!("failed to close source '{}': {}", src.display(), e));
    }
    if let Err(e) = close_file(dst_file) {
        options.warn(&format!(
            "failed to close destination '{}': {}",
            dst.display(),
            e
        ));
    }

    buf.release().map_err(Error::ReleaseBuffer)?;

    Ok(CopyStats {
        bytes_copied,
        source_len,
    })
}

/// Close a file, making the result observable.
///
/// Rust drops files with the close result discarded; going through the
/// raw fd lets teardown report close failures.
#[cfg(unix)]
fn close_file(file: File) -> io::Result<()> {
    use std::os::unix::io::IntoRawFd;

    let fd = file.into_raw_fd();
    // SAFETY: into_raw_fd transferred ownership of fd out of the File,
    // so this is the only close of it.
    if unsafe { libc::close(fd) } == -1 {
        return Err(io::Error::last_os_error());
    }
    Ok(())
}

#[cfg(not(unix))]
fn close_file(file: File) -> io::Result<()> {
    drop(file);
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

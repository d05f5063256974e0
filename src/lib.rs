//! # safecp
//!
//! Clobber-free single-file copying with a fixed transfer buffer.
//!
//! ## Core Features
//!
//! - **No-clobber**: refuses to run if the destination exists in any form
//!   (file, directory, symlink), and creates it with an atomic
//!   create-exclusive open so the check cannot be raced
//! - **Fixed 2 MiB staging buffer**: one anonymous mapping reused for
//!   every chunk, released on every exit path
//! - **Permission preserving**: the destination is created with the
//!   source's mode bits, filtered through the process umask
//! - **Fail-fast**: every fatal condition is a distinct [`Error`] variant
//!   carrying the OS-level cause; there is no retry logic anywhere
//!
//! ## Quick Start
//!
//! ```no_run
//! use safecp::{copy_file, CopyOptions};
//! use std::path::Path;
//!
//! let options = CopyOptions::default()
//!     .with_notice_handler(|line| println!("{line}"));
//!
//! let stats = copy_file(Path::new("a.bin"), Path::new("b.bin"), &options)?;
//! println!("copied {} bytes", stats.bytes_copied);
//! # Ok::<(), safecp::Error>(())
//! ```
//!
//! ## Failure Behavior
//!
//! The library never cleans up after a mid-transfer failure: a failed
//! read or write leaves the destination partially written and truncated.
//! Descriptor close failures after a completed transfer are reported
//! through [`CopyOptions::warn_handler`] and do not fail the call.
//!
//! ## Optional Features
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `tracing` | Route notices and warnings through the tracing crate when no handler is installed |

mod buffer;
mod copy;
mod error;
mod options;

pub use buffer::TRANSFER_BUF_LEN;
pub use copy::{CopyStats, copy_file};
pub use error::{Error, Result};
pub use options::CopyOptions;
